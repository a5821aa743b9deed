use crate::app::AppState;
use crate::domain::{DisplayMode, Language, Presentation, TextSize};
use crate::i18n::{translate, Label};
use crate::ui::styles::{base_style, border_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the centered app title
pub fn render_title(f: &mut Frame, app: &AppState, area: Rect) {
    let p = app.composer.presentation();
    let title = translate(Label::AppTitle, app.composer.language());
    let paragraph = Paragraph::new(Line::styled(title, title_style(&p))).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Spans for one single-choice selector: key hint, label, then every option
/// with the current one highlighted
fn selector_spans<T: PartialEq + Copy>(
    p: &Presentation,
    key: char,
    label: &'static str,
    options: &[T],
    current: T,
    name: impl Fn(T) -> &'static str,
) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled(format!("[{}] ", key), hint_style(p)),
        Span::styled(format!("{}: ", label), title_style(p)),
    ];
    for option in options {
        let style = if *option == current {
            selected_style(p)
        } else {
            base_style(p)
        };
        spans.push(Span::styled(format!(" {} ", name(*option)), style));
        spans.push(Span::styled(" ", base_style(p)));
    }
    spans
}

/// Render the language, mode and size selectors, one per row
pub fn render_settings_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let p = app.composer.presentation();
    let language = app.composer.language();
    let tr = |label: Label| translate(label, language);

    let lines = vec![
        Line::from(selector_spans(
            &p,
            'l',
            tr(Label::LanguageSelector),
            Language::all(),
            language,
            |l: Language| tr(l.label()),
        )),
        Line::from(selector_spans(
            &p,
            'm',
            tr(Label::ModeSelector),
            DisplayMode::all(),
            app.composer.mode(),
            |m: DisplayMode| tr(m.label()),
        )),
        Line::from(selector_spans(
            &p,
            's',
            tr(Label::SizeSelector),
            TextSize::all(),
            app.composer.size(),
            |s: TextSize| tr(s.label()),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(&p))
        .padding(Padding::horizontal(p.scale.padding()))
        .title(Span::styled(
            format!(" {} ", tr(Label::SettingsHeader)),
            title_style(&p),
        ));

    let paragraph = Paragraph::new(lines).block(block).style(base_style(&p));
    f.render_widget(paragraph, area);
}
