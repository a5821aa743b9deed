pub mod compose_pane;
pub mod history_pane;
pub mod keybindings;
pub mod layout;
pub mod settings_pane;
pub mod styles;
pub mod swatch_pane;

use crate::app::AppState;
use compose_pane::{render_actions, render_compose_pane, render_footer};
use history_pane::render_history_pane;
use keybindings::{render_keybindings, render_status};
use layout::create_layout;
use ratatui::{widgets::Block, Frame};
use settings_pane::{render_settings_pane, render_title};
use styles::base_style;
use swatch_pane::render_swatch_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Paint the mode background across the whole frame
    let p = app.composer.presentation();
    f.render_widget(Block::default().style(base_style(&p)), size);

    render_title(f, app, layout.title_area);
    render_settings_pane(f, app, layout.settings_area);

    render_compose_pane(
        f,
        app,
        layout.idea_area,
        layout.tags_area,
        layout.combination_area,
    );
    render_actions(f, app, layout.actions_area);

    render_swatch_pane(f, app, layout.swatch_area);
    render_history_pane(f, app, layout.history_area);

    render_footer(f, app, layout.footer_area);
    render_keybindings(f, app, layout.keybindings_area);
    render_status(f, app, layout.status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::domain::{DisplayMode, IdeaComposer, Language};
    use crate::ui::styles::background_color;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render_to_buffer(app: &AppState) -> Buffer {
        render_sized(app, 120, 40)
    }

    fn render_sized(app: &AppState, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        let area = buffer.area;
        (area.left()..area.right())
            .map(|x| buffer.get(x, y).symbol())
            .collect()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn create_test_app() -> AppState {
        AppState::new(IdeaComposer::new(), Box::new(RecordingClipboard::default()))
    }

    #[test]
    fn test_render_spanish_defaults() {
        let app = create_test_app();
        let text = buffer_text(&render_to_buffer(&app));

        assert!(text.contains("IdeaGramer"));
        assert!(text.contains("Modo Claro"));
        assert!(text.contains("Etiquetas (una por línea)"));
        assert!(text.contains("Historial de Ideas (0)"));
        assert!(text.contains("Combinar"));
        assert!(text.contains("Restablecer"));
    }

    #[test]
    fn test_render_combined_history_in_english() {
        let mut app = create_test_app();
        app.composer.set_language(Language::En);
        app.composer.set_idea_draft("Launch rocket");
        app.composer.set_tags_draft("space\n#mars");
        app.combine();

        let text = buffer_text(&render_to_buffer(&app));
        assert!(text.contains("Idea History (1)"));
        assert!(text.contains("Launch rocket"));
        assert!(text.contains("#space"));
        assert!(text.contains("#mars"));
        assert!(text.contains("Idea combined"));
    }

    #[test]
    fn test_render_paints_mode_background() {
        let mut app = create_test_app();
        app.composer.set_mode(DisplayMode::Dark);
        let buffer = render_to_buffer(&app);

        let p = app.composer.presentation();
        assert_eq!(buffer.get(0, 0).bg, background_color(p.background));
    }

    #[test]
    fn test_render_fits_80_by_24() {
        let app = create_test_app();
        let buffer = render_sized(&app, 80, 24);
        let text = buffer_text(&buffer);

        // Every selector option is visible
        for option in ["English", "Español", "Modo Claro", "Modo Oscuro", "Pocket", "Normal", "Grande"] {
            assert!(text.contains(option), "missing {:?} in\n{}", option, text);
        }

        // Buttons are whole, with Clear/Reset on the footer row
        assert!(text.contains(" Combinar "));
        assert!(text.contains(" Copiar "));
        let footer = row_text(&buffer, 21);
        assert!(footer.contains(" Limpiar "), "footer: {:?}", footer);
        assert!(footer.contains(" Restablecer "), "footer: {:?}", footer);
    }
}
