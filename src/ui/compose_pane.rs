use crate::app::AppState;
use crate::domain::{Field, Presentation};
use crate::i18n::{translate, Label};
use crate::ui::styles::{
    base_style, border_style, clear_button_style, combine_button_style, copy_button_style,
    editing_border_style, hint_style, placeholder_style, reset_button_style, title_style,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Lines for a draft, with a cursor at the end while editing.
///
/// Splits on `\n` so a trailing newline shows up as an empty last line.
fn draft_lines<'a>(text: &'a str, p: &Presentation, editing: bool) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = text
        .split('\n')
        .map(|line| Line::from(Span::styled(line, base_style(p))))
        .collect();

    if editing {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("█", base_style(p)));
        }
    }
    lines
}

/// Render one text field
fn render_field(f: &mut Frame, app: &AppState, field: Field, key: char, area: Rect) {
    let p = app.composer.presentation();
    let language = app.composer.language();
    let editing = app.editing_field() == Some(field);

    let text = app.composer.draft(field);
    let placeholder = translate(field.placeholder(), language);

    let (title, border) = if editing {
        (
            format!(" {} ({}) ", placeholder, translate(Label::Editing, language)),
            editing_border_style(&p),
        )
    } else {
        (format!(" [{}] {} ", key, placeholder), border_style(&p))
    };

    let lines = if text.is_empty() && !editing {
        vec![Line::from(Span::styled(placeholder, placeholder_style(&p)))]
    } else {
        draft_lines(text, &p, editing)
    };

    // Keep the end of long drafts in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(inner_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .padding(Padding::horizontal(p.scale.padding()))
        .title(Span::styled(title, title_style(&p)));

    let paragraph = Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
        .block(block)
        .style(base_style(&p))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Render the idea, tags and combination fields
pub fn render_compose_pane(f: &mut Frame, app: &AppState, idea: Rect, tags: Rect, combination: Rect) {
    render_field(f, app, Field::Idea, 'i', idea);
    render_field(f, app, Field::Tags, 't', tags);
    render_field(f, app, Field::Combination, 'o', combination);
}

fn button(label: &'static str, key: &str, style: Style, p: &Presentation) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!(" {} ", label), style),
        Span::styled(format!(" {}  ", key), hint_style(p)),
    ]
}

/// Render the action buttons under the fields: Combine, Copy
pub fn render_actions(f: &mut Frame, app: &AppState, area: Rect) {
    let p = app.composer.presentation();
    let tr = |label: Label| translate(label, app.composer.language());

    let mut spans = Vec::new();
    spans.extend(button(tr(Label::CombineButton), "c", combine_button_style(), &p));
    spans.extend(button(tr(Label::CopyButton), "y", copy_button_style(), &p));

    let paragraph = Paragraph::new(Line::from(spans)).style(base_style(&p));
    f.render_widget(paragraph, area);
}

/// Render the full-width footer row: Clear, Reset
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let p = app.composer.presentation();
    let tr = |label: Label| translate(label, app.composer.language());

    let mut spans = Vec::new();
    spans.extend(button(tr(Label::ClearButton), "x", clear_button_style(), &p));
    spans.extend(button(tr(Label::ResetButton), "R", reset_button_style(), &p));

    let paragraph = Paragraph::new(Line::from(spans)).style(base_style(&p));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayMode, TextColor, TextSize};

    fn presentation() -> Presentation {
        Presentation::derive(DisplayMode::Light, TextSize::Normal, TextColor::Black)
    }

    #[test]
    fn test_draft_lines_keeps_trailing_newline() {
        let lines = draft_lines("space\n", &presentation(), false);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].width(), 0);
    }

    #[test]
    fn test_draft_lines_cursor_only_while_editing() {
        let p = presentation();
        assert_eq!(draft_lines("ab", &p, false)[0].width(), 2);
        assert_eq!(draft_lines("ab", &p, true)[0].width(), 3);
        assert_eq!(draft_lines("", &p, true)[0].width(), 1);
    }
}
