//! Label translations for the two supported languages.
//!
//! Labels are a closed enum so the compiler checks that both locales cover
//! every label. Each label also has a kebab-case string key
//! (`"combine-button"`) that parses back into it.

use crate::domain::Language;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    #[error("unknown label key: {0}")]
    UnknownKey(String),
    #[error("unsupported language: {0} (expected 'en' or 'es')")]
    UnsupportedLanguage(String),
}

/// Every user-facing label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    AppTitle,
    LanguageEnglish,
    LanguageSpanish,
    LightMode,
    DarkMode,
    PocketSize,
    NormalSize,
    LargeSize,
    IdeaPlaceholder,
    TagsPlaceholder,
    CombinationPlaceholder,
    CombineButton,
    CopyButton,
    ClearButton,
    ResetButton,
    HistoryHeader,
    HistoryEmpty,
    SettingsHeader,
    LanguageSelector,
    ModeSelector,
    SizeSelector,
    ColorsHeader,
    AutoColor,
    Editing,
    EditHint,
    QuitHint,
    ScrollHint,
    Combined,
    Copied,
    CopyFailed,
    Cleared,
    ResetDone,
}

impl Label {
    pub fn all() -> &'static [Label] {
        use Label::*;
        &[
            AppTitle,
            LanguageEnglish,
            LanguageSpanish,
            LightMode,
            DarkMode,
            PocketSize,
            NormalSize,
            LargeSize,
            IdeaPlaceholder,
            TagsPlaceholder,
            CombinationPlaceholder,
            CombineButton,
            CopyButton,
            ClearButton,
            ResetButton,
            HistoryHeader,
            HistoryEmpty,
            SettingsHeader,
            LanguageSelector,
            ModeSelector,
            SizeSelector,
            ColorsHeader,
            AutoColor,
            Editing,
            EditHint,
            QuitHint,
            ScrollHint,
            Combined,
            Copied,
            CopyFailed,
            Cleared,
            ResetDone,
        ]
    }

    /// Kebab-case key for this label
    pub fn key(&self) -> &'static str {
        use Label::*;
        match self {
            AppTitle => "app-title",
            LanguageEnglish => "language-english",
            LanguageSpanish => "language-spanish",
            LightMode => "light-mode",
            DarkMode => "dark-mode",
            PocketSize => "pocket-size",
            NormalSize => "normal-size",
            LargeSize => "large-size",
            IdeaPlaceholder => "idea-placeholder",
            TagsPlaceholder => "tags-placeholder",
            CombinationPlaceholder => "combination-placeholder",
            CombineButton => "combine-button",
            CopyButton => "copy-button",
            ClearButton => "clear-button",
            ResetButton => "reset-button",
            HistoryHeader => "history-header",
            HistoryEmpty => "history-empty",
            SettingsHeader => "settings-header",
            LanguageSelector => "language-selector",
            ModeSelector => "mode-selector",
            SizeSelector => "size-selector",
            ColorsHeader => "colors-header",
            AutoColor => "auto-color",
            Editing => "editing",
            EditHint => "edit-hint",
            QuitHint => "quit-hint",
            ScrollHint => "scroll-hint",
            Combined => "combined-notice",
            Copied => "copied-notice",
            CopyFailed => "copy-failed-notice",
            Cleared => "cleared-notice",
            ResetDone => "reset-notice",
        }
    }
}

impl FromStr for Label {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::all()
            .iter()
            .copied()
            .find(|label| label.key() == s)
            .ok_or_else(|| I18nError::UnknownKey(s.to_string()))
    }
}

/// Display string for a label in the given language
pub fn translate(label: Label, language: Language) -> &'static str {
    use Label::*;
    match language {
        Language::En => match label {
            AppTitle => "IdeaGramer",
            LanguageEnglish => "English",
            LanguageSpanish => "Español",
            LightMode => "Light Mode",
            DarkMode => "Dark Mode",
            PocketSize => "Pocket",
            NormalSize => "Normal",
            LargeSize => "Large",
            IdeaPlaceholder => "Idea",
            TagsPlaceholder => "Tags (one per line)",
            CombinationPlaceholder => "Idea Combination",
            CombineButton => "Combine",
            CopyButton => "Copy",
            ClearButton => "Clear",
            ResetButton => "Reset",
            HistoryHeader => "Idea History",
            HistoryEmpty => "No combinations yet",
            SettingsHeader => "Settings",
            LanguageSelector => "Language",
            ModeSelector => "Mode",
            SizeSelector => "Size",
            ColorsHeader => "Text Color",
            AutoColor => "auto",
            Editing => "editing",
            EditHint => "edit",
            QuitHint => "quit",
            ScrollHint => "scroll",
            Combined => "Idea combined",
            Copied => "Copied to clipboard",
            CopyFailed => "Could not copy to clipboard",
            Cleared => "Fields cleared",
            ResetDone => "Everything reset",
        },
        Language::Es => match label {
            AppTitle => "IdeaGramer",
            LanguageEnglish => "English",
            LanguageSpanish => "Español",
            LightMode => "Modo Claro",
            DarkMode => "Modo Oscuro",
            PocketSize => "Pocket",
            NormalSize => "Normal",
            LargeSize => "Grande",
            IdeaPlaceholder => "Idea",
            TagsPlaceholder => "Etiquetas (una por línea)",
            CombinationPlaceholder => "Combinación de Ideas",
            CombineButton => "Combinar",
            CopyButton => "Copiar",
            ClearButton => "Limpiar",
            ResetButton => "Restablecer",
            HistoryHeader => "Historial de Ideas",
            HistoryEmpty => "Aún no hay combinaciones",
            SettingsHeader => "Ajustes",
            LanguageSelector => "Idioma",
            ModeSelector => "Modo",
            SizeSelector => "Tamaño",
            ColorsHeader => "Color del Texto",
            AutoColor => "automático",
            Editing => "editando",
            EditHint => "editar",
            QuitHint => "salir",
            ScrollHint => "desplazar",
            Combined => "Idea combinada",
            Copied => "Copiado al portapapeles",
            CopyFailed => "No se pudo copiar al portapapeles",
            Cleared => "Campos limpiados",
            ResetDone => "Todo restablecido",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_label_translated_in_both_languages() {
        for label in Label::all() {
            for language in Language::all() {
                assert!(
                    !translate(*label, *language).is_empty(),
                    "{:?} missing in {:?}",
                    label,
                    language
                );
            }
        }
    }

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        let keys: HashSet<_> = Label::all().iter().map(|l| l.key()).collect();
        assert_eq!(keys.len(), Label::all().len());
        for label in Label::all() {
            assert_eq!(label.key().parse::<Label>().unwrap(), *label);
        }
    }

    #[test]
    fn test_known_translations() {
        assert_eq!(translate(Label::CombineButton, Language::En), "Combine");
        assert_eq!(translate(Label::CombineButton, Language::Es), "Combinar");
        assert_eq!(translate(Label::LightMode, Language::Es), "Modo Claro");
        assert_eq!(translate(Label::LargeSize, Language::Es), "Grande");
        assert_eq!(translate(Label::HistoryHeader, Language::En), "Idea History");
        assert_eq!(
            translate(Label::TagsPlaceholder, Language::Es),
            "Etiquetas (una por línea)"
        );
    }

    #[test]
    fn test_string_keys_translate() {
        let label: Label = "combine-button".parse().unwrap();
        assert_eq!(translate(label, Language::En), "Combine");
        let label: Label = "light-mode".parse().unwrap();
        assert_eq!(translate(label, Language::Es), "Modo Claro");
        assert_eq!(
            "no-such-label".parse::<Label>(),
            Err(I18nError::UnknownKey("no-such-label".to_string()))
        );
    }
}
