use crate::domain::{Background, Presentation, TextColor};
use ratatui::style::{Color, Modifier, Style};

/// Light background (white)
const LIGHT_BG: Color = Color::Rgb(255, 255, 255);
/// Dark background (gray-900)
const DARK_BG: Color = Color::Rgb(17, 24, 39);
/// Silver pane borders
const SILVER: Color = Color::Rgb(192, 192, 192);

/// Terminal color for a text color choice
pub fn text_color(color: TextColor) -> Color {
    match color {
        TextColor::Black => Color::Rgb(0, 0, 0),
        TextColor::White => Color::Rgb(255, 255, 255),
        TextColor::Green => Color::Rgb(0, 128, 0),
        TextColor::Blue => Color::Rgb(0, 0, 255),
        TextColor::Violet => Color::Rgb(238, 130, 238),
    }
}

/// Terminal color for the background tone
pub fn background_color(background: Background) -> Color {
    match background {
        Background::Light => LIGHT_BG,
        Background::Dark => DARK_BG,
    }
}

/// Default text style for every text element
pub fn base_style(p: &Presentation) -> Style {
    let style = Style::default()
        .fg(text_color(p.text_color))
        .bg(background_color(p.background));
    if p.scale.emphasized() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Pane border style
pub fn border_style(p: &Presentation) -> Style {
    Style::default().fg(SILVER).bg(background_color(p.background))
}

/// Border of the field being edited
pub fn editing_border_style(p: &Presentation) -> Style {
    border_style(p).fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style(p: &Presentation) -> Style {
    base_style(p).add_modifier(Modifier::BOLD)
}

/// Currently selected option in a selector
pub fn selected_style(p: &Presentation) -> Style {
    base_style(p).add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

/// Placeholder text in an empty field
pub fn placeholder_style(p: &Presentation) -> Style {
    base_style(p)
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC)
}

/// Keybinding hint style
pub fn hint_style(p: &Presentation) -> Style {
    Style::default().fg(Color::DarkGray).bg(background_color(p.background))
}

/// Action button with a colored face and white text
pub fn button_style(face: Color) -> Style {
    Style::default()
        .fg(Color::White)
        .bg(face)
        .add_modifier(Modifier::BOLD)
}

pub fn combine_button_style() -> Style {
    button_style(Color::Rgb(59, 130, 246))
}

pub fn copy_button_style() -> Style {
    button_style(Color::Rgb(34, 197, 94))
}

pub fn clear_button_style() -> Style {
    button_style(Color::Rgb(234, 179, 8))
}

pub fn reset_button_style() -> Style {
    button_style(Color::Rgb(239, 68, 68))
}

/// Color swatch cell
pub fn swatch_style(color: TextColor) -> Style {
    Style::default().bg(text_color(color)).fg(text_color(color))
}

/// Status notice style
pub fn notice_style(p: &Presentation) -> Style {
    Style::default()
        .fg(Color::Green)
        .bg(background_color(p.background))
        .add_modifier(Modifier::BOLD)
}

/// Error notice style
pub fn error_style(p: &Presentation) -> Style {
    Style::default()
        .fg(Color::Red)
        .bg(background_color(p.background))
        .add_modifier(Modifier::BOLD)
}

/// History timestamp style
pub fn timestamp_style(p: &Presentation) -> Style {
    hint_style(p)
}
