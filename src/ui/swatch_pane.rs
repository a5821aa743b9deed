use crate::app::AppState;
use crate::domain::TextColor;
use crate::i18n::{translate, Label};
use crate::ui::styles::{base_style, border_style, hint_style, swatch_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the five color swatches; the active color is bracketed
pub fn render_swatch_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let p = app.composer.presentation();
    let language = app.composer.language();
    let current = app.composer.text_color();

    let mut spans = Vec::new();
    for (idx, color) in TextColor::all().iter().enumerate() {
        let (open, close) = if *color == current { ("[", "]") } else { (" ", " ") };
        spans.push(Span::styled(format!("{}{}", open, idx + 1), hint_style(&p)));
        spans.push(Span::styled("██", swatch_style(*color)));
        spans.push(Span::styled(format!("{} ", close), hint_style(&p)));
    }

    let mut title = format!(" {} ", translate(Label::ColorsHeader, language));
    if !app.composer.is_color_overridden() {
        title.push_str(&format!("({}) ", translate(Label::AutoColor, language)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(&p))
        .padding(Padding::horizontal(p.scale.padding()))
        .title(Span::styled(title, title_style(&p)));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .style(base_style(&p));
    f.render_widget(paragraph, area);
}
