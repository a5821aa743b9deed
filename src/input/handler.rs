use crate::app::AppState;
use crate::domain::{Field, TextColor, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Editing(_) => handle_editing_mode(app, key),
    }
}

/// Handle a bracketed paste. The text goes to the field being edited as a
/// whole, so pasted newlines and letters never act as commands.
pub fn handle_paste(app: &mut AppState, text: &str) {
    app.paste(text);
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Start editing a field
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.start_editing(Field::Idea);
            Ok(false)
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.start_editing(Field::Tags);
            Ok(false)
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.start_editing(Field::Combination);
            Ok(false)
        }
        KeyCode::Tab => {
            app.edit_next_field();
            Ok(false)
        }

        // Combine
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('C') => {
            app.combine();
            Ok(false)
        }

        // Copy combination
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.copy_combination();
            Ok(false)
        }

        // Settings
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.toggle_language();
            Ok(false)
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.toggle_mode();
            Ok(false)
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.cycle_size();
            Ok(false)
        }

        // Color swatches 1-5
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(color) = TextColor::from_swatch_key(c) {
                app.pick_color(color);
            }
            Ok(false)
        }

        // Clear drafts
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.clear();
            Ok(false)
        }

        // Reset everything (uppercase only)
        KeyCode::Char('R') => {
            app.reset();
            Ok(false)
        }

        // Scroll history
        KeyCode::Up => {
            app.scroll_history_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.scroll_history_down();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while editing a text field
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Back to normal mode
        KeyCode::Esc => {
            app.stop_editing();
            Ok(false)
        }

        // Next field
        KeyCode::Tab => {
            app.edit_next_field();
            Ok(false)
        }

        KeyCode::Enter => {
            app.input_enter();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }

        // Add character (without Ctrl modifier)
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}
