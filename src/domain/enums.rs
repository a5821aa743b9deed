use crate::i18n::{I18nError, Label};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Es,
}

impl Language {
    /// Short code used on the command line and in config
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Label naming this language in the selector
    pub fn label(&self) -> Label {
        match self {
            Self::En => Label::LanguageEnglish,
            Self::Es => Label::LanguageSpanish,
        }
    }

    /// The other language
    pub fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Es]
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "español" | "espanol" | "spanish" => Ok(Self::Es),
            _ => Err(I18nError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Light or dark display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn label(&self) -> Label {
        match self {
            Self::Light => Label::LightMode,
            Self::Dark => Label::DarkMode,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Text color chosen automatically when entering this mode
    pub fn auto_text_color(&self) -> TextColor {
        match self {
            Self::Light => TextColor::Black,
            Self::Dark => TextColor::White,
        }
    }

    pub fn all() -> &'static [DisplayMode] {
        &[DisplayMode::Light, DisplayMode::Dark]
    }
}

/// Text size preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Pocket,
    #[default]
    Normal,
    Large,
}

impl TextSize {
    pub fn label(&self) -> Label {
        match self {
            Self::Pocket => Label::PocketSize,
            Self::Normal => Label::NormalSize,
            Self::Large => Label::LargeSize,
        }
    }

    /// Next size in selector order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Pocket => Self::Normal,
            Self::Normal => Self::Large,
            Self::Large => Self::Pocket,
        }
    }

    pub fn all() -> &'static [TextSize] {
        &[TextSize::Pocket, TextSize::Normal, TextSize::Large]
    }
}

/// Text color offered by the swatch row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Black,
    White,
    Green,
    Blue,
    Violet,
}

impl TextColor {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Violet => "violet",
        }
    }

    /// Swatch for a 1-based key position, as shown in the swatch row
    pub fn from_swatch_key(key: char) -> Option<Self> {
        let idx = key.to_digit(10)? as usize;
        Self::all().get(idx.checked_sub(1)?).copied()
    }

    /// Swatches in display order
    pub fn all() -> &'static [TextColor] {
        &[
            TextColor::Black,
            TextColor::White,
            TextColor::Green,
            TextColor::Blue,
            TextColor::Violet,
        ]
    }
}

/// Editable text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Idea,
    Tags,
    Combination,
}

impl Field {
    /// Next field in tab order
    pub fn next(&self) -> Self {
        match self {
            Self::Idea => Self::Tags,
            Self::Tags => Self::Combination,
            Self::Combination => Self::Idea,
        }
    }

    /// Placeholder label shown in the field's title
    pub fn placeholder(&self) -> Label {
        match self {
            Self::Idea => Label::IdeaPlaceholder,
            Self::Tags => Label::TagsPlaceholder,
            Self::Combination => Label::CombinationPlaceholder,
        }
    }

    /// Whether Enter inserts a newline
    pub fn is_multiline(&self) -> bool {
        !matches!(self, Self::Idea)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Editing(Field),
}
