use crate::clipboard::ClipboardSink;
use crate::domain::{Field, IdeaComposer, TextColor, UiMode};
use crate::i18n::{translate, Label};
use crate::ticker::notice_lifetime;
use std::time::Instant;
use tracing::warn;

/// Transient status line message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub label: Label,
    pub is_error: bool,
    pub shown_at: Instant,
}

/// Main application state
pub struct AppState {
    pub composer: IdeaComposer,
    pub ui_mode: UiMode,
    pub notice: Option<Notice>,
    pub history_scroll_offset: usize,
    clipboard: Box<dyn ClipboardSink>,
}

impl AppState {
    pub fn new(composer: IdeaComposer, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            composer,
            ui_mode: UiMode::Normal,
            notice: None,
            history_scroll_offset: 0,
            clipboard,
        }
    }

    /// Field currently being edited, if any
    pub fn editing_field(&self) -> Option<Field> {
        match self.ui_mode {
            UiMode::Editing(field) => Some(field),
            UiMode::Normal => None,
        }
    }

    /// Start editing a text field
    pub fn start_editing(&mut self, field: Field) {
        self.ui_mode = UiMode::Editing(field);
    }

    /// Leave editing mode
    pub fn stop_editing(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Move editing to the next field (idea -> tags -> combination)
    pub fn edit_next_field(&mut self) {
        let next = self.editing_field().map_or(Field::Idea, |f| f.next());
        self.ui_mode = UiMode::Editing(next);
    }

    /// Append a character to the field being edited
    pub fn input_add_char(&mut self, c: char) {
        if let Some(field) = self.editing_field() {
            self.composer.draft_mut(field).push(c);
        }
    }

    /// Remove the last character of the field being edited
    pub fn input_backspace(&mut self) {
        if let Some(field) = self.editing_field() {
            self.composer.draft_mut(field).pop();
        }
    }

    /// Enter: newline in multi-line fields, leave the single-line idea field
    pub fn input_enter(&mut self) {
        match self.editing_field() {
            Some(field) if field.is_multiline() => self.input_add_char('\n'),
            Some(_) => self.stop_editing(),
            None => {}
        }
    }

    /// Append pasted text to the field being edited.
    ///
    /// Line breaks are normalized to `\n`; the single-line idea field gets
    /// spaces instead. Ignored outside editing mode.
    pub fn paste(&mut self, text: &str) {
        let Some(field) = self.editing_field() else {
            return;
        };
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let text = if field.is_multiline() {
            text
        } else {
            text.replace('\n', " ")
        };

        let draft = format!("{}{}", self.composer.draft(field), text);
        self.composer.set_draft(field, draft);
    }

    /// Combine the drafts and record the result
    pub fn combine(&mut self) {
        self.composer.combine();
        self.history_scroll_offset = 0;
        self.show_notice(Label::Combined, false);
    }

    /// Copy the combination draft to the clipboard.
    ///
    /// A failed write never blocks: it is logged and shown as a notice.
    pub fn copy_combination(&mut self) {
        let content = self.composer.combination_draft().to_string();
        match self.clipboard.write_text(&content) {
            Ok(()) => self.show_notice(Label::Copied, false),
            Err(e) => {
                warn!("clipboard write failed: {:#}", e);
                self.show_notice(Label::CopyFailed, true);
            }
        }
    }

    /// Clear the drafts
    pub fn clear(&mut self) {
        self.composer.clear();
        self.ui_mode = UiMode::Normal;
        self.show_notice(Label::Cleared, false);
    }

    /// Return everything to the defaults
    pub fn reset(&mut self) {
        self.composer.reset();
        self.ui_mode = UiMode::Normal;
        self.history_scroll_offset = 0;
        self.show_notice(Label::ResetDone, false);
    }

    pub fn pick_color(&mut self, color: TextColor) {
        self.composer.set_text_color(color);
    }

    pub fn toggle_language(&mut self) {
        self.composer.toggle_language();
    }

    pub fn toggle_mode(&mut self) {
        self.composer.toggle_mode();
    }

    pub fn cycle_size(&mut self) {
        self.composer.cycle_size();
    }

    /// Scroll history toward older entries
    pub fn scroll_history_up(&mut self) {
        if self.history_scroll_offset > 0 {
            self.history_scroll_offset -= 1;
        }
    }

    /// Scroll history toward newer entries
    pub fn scroll_history_down(&mut self) {
        let max_offset = self.composer.history().len().saturating_sub(1);
        if self.history_scroll_offset < max_offset {
            self.history_scroll_offset += 1;
        }
    }

    fn show_notice(&mut self, label: Label, is_error: bool) {
        self.notice = Some(Notice {
            label,
            is_error,
            shown_at: Instant::now(),
        });
    }

    /// Text of the current notice in the current language
    pub fn notice_text(&self) -> Option<&'static str> {
        self.notice
            .as_ref()
            .map(|n| translate(n.label, self.composer.language()))
    }

    /// Expire the notice once it has been shown long enough
    pub fn tick(&mut self) {
        self.expire_notice(Instant::now());
    }

    fn expire_notice(&mut self, now: Instant) {
        if let Some(notice) = &self.notice {
            if now.duration_since(notice.shown_at) >= notice_lifetime() {
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::domain::{DisplayMode, Language, TextSize};
    use pretty_assertions::assert_eq;

    fn create_test_app() -> (AppState, RecordingClipboard) {
        let clipboard = RecordingClipboard::default();
        let app = AppState::new(IdeaComposer::new(), Box::new(clipboard.clone()));
        (app, clipboard)
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                app.input_enter();
            } else {
                app.input_add_char(c);
            }
        }
    }

    #[test]
    fn test_app_state_new() {
        let (app, _) = create_test_app();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.notice.is_none());
        assert_eq!(app.history_scroll_offset, 0);
        assert!(app.composer.history().is_empty());
    }

    #[test]
    fn test_typing_into_fields() {
        let (mut app, _) = create_test_app();

        app.start_editing(Field::Idea);
        type_text(&mut app, "Launch rocket");
        app.edit_next_field();
        type_text(&mut app, "space\n#mars");

        assert_eq!(app.composer.idea_draft(), "Launch rocket");
        assert_eq!(app.composer.tags_draft(), "space\n#mars");
        assert_eq!(app.ui_mode, UiMode::Editing(Field::Tags));
    }

    #[test]
    fn test_enter_leaves_idea_field() {
        let (mut app, _) = create_test_app();
        app.start_editing(Field::Idea);
        type_text(&mut app, "one\n");

        assert_eq!(app.composer.idea_draft(), "one");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_backspace() {
        let (mut app, _) = create_test_app();
        app.start_editing(Field::Tags);
        type_text(&mut app, "ab");
        app.input_backspace();
        app.input_backspace();
        app.input_backspace();
        assert_eq!(app.composer.tags_draft(), "");
    }

    #[test]
    fn test_typing_ignored_in_normal_mode() {
        let (mut app, _) = create_test_app();
        app.input_add_char('x');
        app.input_backspace();
        assert_eq!(app.composer.idea_draft(), "");
    }

    #[test]
    fn test_combine_and_copy() {
        let (mut app, clipboard) = create_test_app();
        app.composer.set_idea_draft("Launch rocket");
        app.composer.set_tags_draft("space\n#mars");

        app.combine();
        assert_eq!(app.notice_text(), Some("Idea combinada"));

        app.copy_combination();
        assert_eq!(clipboard.written(), vec!["Launch rocket\n#space\n#mars".to_string()]);
        assert_eq!(app.notice.as_ref().map(|n| n.label), Some(Label::Copied));
    }

    #[test]
    fn test_copy_copies_edited_combination() {
        let (mut app, clipboard) = create_test_app();
        app.composer.set_idea_draft("idea");
        app.combine();

        app.start_editing(Field::Combination);
        type_text(&mut app, " edited");
        app.copy_combination();

        assert_eq!(clipboard.written(), vec!["idea\n# edited".to_string()]);
        assert_eq!(app.composer.history()[0].tags(), "#");
    }

    #[test]
    fn test_copy_failure_is_a_notice() {
        let mut app = AppState::new(
            IdeaComposer::new(),
            Box::new(RecordingClipboard::failing()),
        );
        app.copy_combination();

        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.label, Label::CopyFailed);
        assert!(notice.is_error);
    }

    #[test]
    fn test_notice_follows_language() {
        let (mut app, _) = create_test_app();
        app.clear();
        assert_eq!(app.notice_text(), Some("Campos limpiados"));
        app.toggle_language();
        assert_eq!(app.notice_text(), Some("Fields cleared"));
    }

    #[test]
    fn test_notice_expires() {
        let (mut app, _) = create_test_app();
        app.combine();
        let shown_at = app.notice.as_ref().unwrap().shown_at;

        app.expire_notice(shown_at);
        assert!(app.notice.is_some());

        app.expire_notice(shown_at + notice_lifetime());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_clear_leaves_editing_mode() {
        let (mut app, _) = create_test_app();
        app.start_editing(Field::Idea);
        type_text(&mut app, "draft");
        app.clear();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.composer.idea_draft(), "");
    }

    #[test]
    fn test_reset() {
        let (mut app, _) = create_test_app();
        app.toggle_language();
        app.toggle_mode();
        app.cycle_size();
        app.pick_color(TextColor::Blue);
        for _ in 0..3 {
            app.combine();
        }
        app.scroll_history_down();

        app.reset();

        assert_eq!(app.composer.language(), Language::Es);
        assert_eq!(app.composer.mode(), DisplayMode::Light);
        assert_eq!(app.composer.size(), TextSize::Normal);
        assert_eq!(app.composer.text_color(), TextColor::Black);
        assert!(app.composer.history().is_empty());
        assert_eq!(app.history_scroll_offset, 0);
    }

    #[test]
    fn test_history_scroll_bounds() {
        let (mut app, _) = create_test_app();
        app.scroll_history_down();
        assert_eq!(app.history_scroll_offset, 0);

        app.combine();
        app.combine();
        app.scroll_history_down();
        app.scroll_history_down();
        assert_eq!(app.history_scroll_offset, 1);

        app.scroll_history_up();
        app.scroll_history_up();
        assert_eq!(app.history_scroll_offset, 0);
    }

    #[test]
    fn test_paste_into_idea_stays_on_one_line() {
        let (mut app, _) = create_test_app();
        app.start_editing(Field::Idea);
        type_text(&mut app, "Launch ");
        app.paste("foo\nR\r\nbar");

        assert_eq!(app.composer.idea_draft(), "Launch foo R bar");
        assert_eq!(app.ui_mode, UiMode::Editing(Field::Idea));
        assert!(app.composer.history().is_empty());
    }

    #[test]
    fn test_paste_keeps_lines_in_multiline_fields() {
        let (mut app, _) = create_test_app();
        app.start_editing(Field::Tags);
        app.paste("space\r\nmars\n");
        assert_eq!(app.composer.tags_draft(), "space\nmars\n");

        app.start_editing(Field::Combination);
        app.paste("free\rtext");
        assert_eq!(app.composer.combination_draft(), "free\ntext");
    }

    #[test]
    fn test_paste_ignored_outside_editing() {
        let (mut app, _) = create_test_app();
        app.paste("R");
        assert_eq!(app.composer, IdeaComposer::new());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }
}
