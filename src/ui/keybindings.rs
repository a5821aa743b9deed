use crate::app::AppState;
use crate::domain::UiMode;
use crate::i18n::{translate, Label};
use crate::ui::styles::{error_style, hint_style, notice_style};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let p = app.composer.presentation();
    let tr = |label: Label| translate(label, app.composer.language());

    let hints = match app.ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(format!(" i/t/o {}   ", tr(Label::EditHint))),
            Span::raw(format!("c {}   ", tr(Label::CombineButton))),
            Span::raw(format!("y {}   ", tr(Label::CopyButton))),
            Span::raw(format!("l {}   ", tr(Label::LanguageSelector))),
            Span::raw(format!("m {}   ", tr(Label::ModeSelector))),
            Span::raw(format!("s {}   ", tr(Label::SizeSelector))),
            Span::raw(format!("1-5 {}   ", tr(Label::ColorsHeader))),
            Span::raw(format!("x {}   ", tr(Label::ClearButton))),
            Span::raw(format!("R {}   ", tr(Label::ResetButton))),
            Span::raw(format!("↑/↓ {}   ", tr(Label::ScrollHint))),
            Span::raw(format!("q {}", tr(Label::QuitHint))),
        ]),
        UiMode::Editing(_) => Line::from(vec![
            Span::raw(" Tab ⇥   "),
            Span::raw("Enter ⏎   "),
            Span::raw("Backspace ⌫   "),
            Span::raw("Esc ✓"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style(&p));
    f.render_widget(paragraph, area);
}

/// Render the transient status notice
pub fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let p = app.composer.presentation();

    let line = match (app.notice.as_ref(), app.notice_text()) {
        (Some(notice), Some(text)) => {
            let style = if notice.is_error {
                error_style(&p)
            } else {
                notice_style(&p)
            };
            Line::from(Span::styled(format!(" {}", text), style))
        }
        _ => Line::raw(""),
    };

    f.render_widget(Paragraph::new(line).style(hint_style(&p)), area);
}
