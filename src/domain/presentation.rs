use crate::domain::enums::{DisplayMode, TextColor, TextSize};

/// Text scale derived from the size preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Small,
    Medium,
    Large,
}

impl Scale {
    /// Horizontal padding inside panes, in cells
    pub fn padding(&self) -> u16 {
        match self {
            Scale::Small => 0,
            Scale::Medium => 1,
            Scale::Large => 2,
        }
    }

    /// Whether blank spacer lines separate blocks of text
    pub fn spaced(&self) -> bool {
        !matches!(self, Scale::Small)
    }

    pub fn emphasized(&self) -> bool {
        matches!(self, Scale::Large)
    }
}

/// Background tone derived from the display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Light,
    Dark,
}

/// Display attributes for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub scale: Scale,
    pub background: Background,
    pub text_color: TextColor,
}

impl Presentation {
    /// Derive display attributes from mode, size and text color alone
    pub fn derive(mode: DisplayMode, size: TextSize, text_color: TextColor) -> Self {
        let scale = match size {
            TextSize::Pocket => Scale::Small,
            TextSize::Normal => Scale::Medium,
            TextSize::Large => Scale::Large,
        };
        let background = match mode {
            DisplayMode::Light => Background::Light,
            DisplayMode::Dark => Background::Dark,
        };

        Self {
            scale,
            background,
            text_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_to_scale() {
        let scale = |size| Presentation::derive(DisplayMode::Light, size, TextColor::Black).scale;
        assert_eq!(scale(TextSize::Pocket), Scale::Small);
        assert_eq!(scale(TextSize::Normal), Scale::Medium);
        assert_eq!(scale(TextSize::Large), Scale::Large);
    }

    #[test]
    fn test_mode_to_background() {
        let light = Presentation::derive(DisplayMode::Light, TextSize::Normal, TextColor::Black);
        let dark = Presentation::derive(DisplayMode::Dark, TextSize::Normal, TextColor::White);
        assert_eq!(light.background, Background::Light);
        assert_eq!(dark.background, Background::Dark);
    }

    #[test]
    fn test_text_color_passes_through() {
        for color in TextColor::all() {
            let p = Presentation::derive(DisplayMode::Dark, TextSize::Large, *color);
            assert_eq!(p.text_color, *color);
        }
    }

    #[test]
    fn test_derive_is_deterministic() {
        for mode in DisplayMode::all() {
            for size in TextSize::all() {
                let a = Presentation::derive(*mode, *size, TextColor::Blue);
                let b = Presentation::derive(*mode, *size, TextColor::Blue);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_scale_density() {
        assert_eq!(Scale::Small.padding(), 0);
        assert!(!Scale::Small.spaced());
        assert_eq!(Scale::Large.padding(), 2);
        assert!(Scale::Large.emphasized());
        assert!(!Scale::Medium.emphasized());
    }
}
