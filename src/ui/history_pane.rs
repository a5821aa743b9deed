use crate::app::AppState;
use crate::domain::{HistoryEntry, Language, Presentation};
use crate::i18n::{translate, Label};
use crate::ui::styles::{
    base_style, border_style, placeholder_style, timestamp_style, title_style,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Format a history timestamp the way each locale writes dates
pub fn format_timestamp(timestamp: DateTime<Local>, language: Language) -> String {
    match language {
        Language::En => timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        Language::Es => timestamp.format("%-d/%-m/%Y, %-H:%M:%S").to_string(),
    }
}

/// Create the list item for one history entry: content, tags, timestamp
fn create_history_item<'a>(
    entry: &'a HistoryEntry,
    language: Language,
    p: &Presentation,
) -> ListItem<'a> {
    let mut lines = vec![Line::from(Span::styled(entry.content(), title_style(p)))];
    lines.extend(
        entry
            .tags()
            .split('\n')
            .map(|tag| Line::from(Span::styled(tag, base_style(p)))),
    );
    lines.push(Line::from(Span::styled(
        format_timestamp(entry.timestamp(), language),
        timestamp_style(p),
    )));
    if p.scale.spaced() {
        lines.push(Line::raw(""));
    }
    ListItem::new(lines)
}

/// Render the history listing, oldest first, honoring the scroll offset
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let p = app.composer.presentation();
    let language = app.composer.language();
    let history = app.composer.history();

    let header = translate(Label::HistoryHeader, language);
    let title = if app.history_scroll_offset > 0 {
        format!(" {} ({}) [+{}] ", header, history.len(), app.history_scroll_offset)
    } else {
        format!(" {} ({}) ", header, history.len())
    };

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            translate(Label::HistoryEmpty, language),
            placeholder_style(&p),
        )))]
    } else {
        history
            .iter()
            .skip(app.history_scroll_offset)
            .map(|entry| create_history_item(entry, language, &p))
            .collect()
    };

    let list = List::new(items).style(base_style(&p)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(&p))
            .padding(Padding::horizontal(p.scale.padding()))
            .title(Span::styled(title, title_style(&p))),
    );

    f.render_widget(list, area);
}
