use crate::domain::enums::{DisplayMode, Field, Language, TextColor, TextSize};
use crate::domain::presentation::Presentation;
use crate::domain::tags::{combine_text, format_tags};
use chrono::{DateTime, Local};
use tracing::{debug, info};

/// Snapshot of one combination, recorded by [`IdeaComposer::combine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    content: String,
    tags: String,
    timestamp: DateTime<Local>,
}

impl HistoryEntry {
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Formatted tags, one per line
    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Session state for the idea composer.
///
/// Everything the user can change lives here and is only changed through
/// the setters below. The combination draft is free text after a combine;
/// editing it never touches the recorded history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaComposer {
    language: Language,
    mode: DisplayMode,
    size: TextSize,
    text_color: TextColor,
    color_overridden: bool,
    idea_draft: String,
    tags_draft: String,
    combination_draft: String,
    history: Vec<HistoryEntry>,
}

impl Default for IdeaComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeaComposer {
    /// Fresh session with the built-in defaults (es, light, normal, black)
    pub fn new() -> Self {
        Self {
            language: Language::default(),
            mode: DisplayMode::default(),
            size: TextSize::default(),
            text_color: DisplayMode::default().auto_text_color(),
            color_overridden: false,
            idea_draft: String::new(),
            tags_draft: String::new(),
            combination_draft: String::new(),
            history: Vec::new(),
        }
    }

    /// Session starting from the given preferences; text color follows the mode
    pub fn with_preferences(language: Language, mode: DisplayMode, size: TextSize) -> Self {
        let mut composer = Self::new();
        composer.set_language(language);
        composer.set_mode(mode);
        composer.set_size(size);
        composer
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn size(&self) -> TextSize {
        self.size
    }

    pub fn text_color(&self) -> TextColor {
        self.text_color
    }

    /// True while a swatch pick is overriding the automatic color
    pub fn is_color_overridden(&self) -> bool {
        self.color_overridden
    }

    pub fn idea_draft(&self) -> &str {
        &self.idea_draft
    }

    pub fn tags_draft(&self) -> &str {
        &self.tags_draft
    }

    pub fn combination_draft(&self) -> &str {
        &self.combination_draft
    }

    /// Draft text of one field
    pub fn draft(&self, field: Field) -> &str {
        match field {
            Field::Idea => self.idea_draft(),
            Field::Tags => self.tags_draft(),
            Field::Combination => self.combination_draft(),
        }
    }

    /// Recorded combinations, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Display attributes for the current state
    pub fn presentation(&self) -> Presentation {
        Presentation::derive(self.mode, self.size, self.text_color)
    }

    pub fn set_language(&mut self, language: Language) {
        debug!(language = language.code(), "language changed");
        self.language = language;
    }

    /// Set the display mode.
    ///
    /// A mode change forces the text color to the mode's automatic color and
    /// drops any swatch override. Re-selecting the current mode keeps the
    /// color as it is.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.text_color = mode.auto_text_color();
        self.color_overridden = false;
        debug!(?mode, text_color = self.text_color.name(), "mode changed");
    }

    pub fn set_size(&mut self, size: TextSize) {
        debug!(?size, "size changed");
        self.size = size;
    }

    /// Explicit swatch pick; holds until the mode changes again
    pub fn set_text_color(&mut self, color: TextColor) {
        debug!(text_color = color.name(), "text color picked");
        self.text_color = color;
        self.color_overridden = true;
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggled());
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn cycle_size(&mut self) {
        self.set_size(self.size.next());
    }

    pub fn set_idea_draft(&mut self, text: impl Into<String>) {
        self.idea_draft = text.into();
    }

    pub fn set_tags_draft(&mut self, text: impl Into<String>) {
        self.tags_draft = text.into();
    }

    pub fn set_combination_draft(&mut self, text: impl Into<String>) {
        self.combination_draft = text.into();
    }

    /// Replace the draft of one field
    pub fn set_draft(&mut self, field: Field, text: impl Into<String>) {
        match field {
            Field::Idea => self.set_idea_draft(text),
            Field::Tags => self.set_tags_draft(text),
            Field::Combination => self.set_combination_draft(text),
        }
    }

    /// Mutable access to a draft, for in-place keystroke editing
    pub(crate) fn draft_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Idea => &mut self.idea_draft,
            Field::Tags => &mut self.tags_draft,
            Field::Combination => &mut self.combination_draft,
        }
    }

    /// Combine idea and formatted tags into the combination draft and
    /// record the result in history
    pub fn combine(&mut self) -> &HistoryEntry {
        self.combine_at(Local::now())
    }

    /// [`combine`](Self::combine) with an explicit timestamp
    pub fn combine_at(&mut self, timestamp: DateTime<Local>) -> &HistoryEntry {
        let formatted = format_tags(&self.tags_draft);
        self.combination_draft = combine_text(&self.idea_draft, &formatted);

        self.history.push(HistoryEntry {
            content: self.idea_draft.clone(),
            tags: formatted,
            timestamp,
        });
        info!(entries = self.history.len(), "combined idea");

        &self.history[self.history.len() - 1]
    }

    /// Empty the three drafts; preferences and history are untouched
    pub fn clear(&mut self) {
        self.idea_draft.clear();
        self.tags_draft.clear();
        self.combination_draft.clear();
        info!("drafts cleared");
    }

    /// Return every field to its built-in default and drop the history
    pub fn reset(&mut self) {
        self.language = Language::Es;
        self.mode = DisplayMode::Light;
        self.size = TextSize::Normal;
        self.text_color = TextColor::Black;
        self.color_overridden = false;
        self.clear();
        self.history.clear();
        info!("session reset");
    }
}
