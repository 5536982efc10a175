//! Single-line text entry widget.
//!
//! # Example
//!
//! ```
//! use armature_core::init_global_registry;
//! use armature::widget::widgets::LineEdit;
//!
//! init_global_registry();
//!
//! let mut edit = LineEdit::new();
//! edit.text_changed.connect(|text| {
//!     println!("Text: {}", text);
//! });
//! edit.return_pressed.connect(|_| {
//!     println!("Submitted");
//! });
//!
//! edit.insert("0.5");
//! edit.submit();
//! ```

use armature_core::{Object, ObjectId, Signal};
use unicode_segmentation::UnicodeSegmentation;

use crate::widget::{SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase};

/// A single-line text entry widget.
///
/// The host feeds keystrokes through [`insert`](Self::insert),
/// [`backspace`](Self::backspace), [`delete`](Self::delete) and the cursor
/// movement methods; Enter maps to [`submit`](Self::submit). Cursor
/// positions are byte offsets that always sit on grapheme boundaries.
///
/// # Signals
///
/// - `text_changed(String)`: Emitted when the text content changes
/// - `return_pressed(())`: Emitted when Enter is pressed
/// - `editing_finished(())`: Emitted when editing is finished (Enter or focus lost)
pub struct LineEdit {
    /// Widget base.
    base: WidgetBase,

    /// Current text content.
    text: String,

    /// Placeholder shown while the text is empty.
    placeholder: String,

    /// Whether edits are rejected.
    read_only: bool,

    /// Maximum text length in graphemes, if limited.
    max_length: Option<usize>,

    /// Cursor position as a byte offset into `text`.
    cursor_pos: usize,

    /// Signal emitted when the text content changes.
    pub text_changed: Signal<String>,

    /// Signal emitted when Enter is pressed.
    pub return_pressed: Signal<()>,

    /// Signal emitted when editing is finished.
    pub editing_finished: Signal<()>,
}

impl LineEdit {
    /// Create an empty line edit.
    pub fn new() -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);
        base.set_size_policy(SizePolicyPair::new(SizePolicy::Expanding, SizePolicy::Fixed));

        Self {
            base,
            text: String::new(),
            placeholder: String::new(),
            read_only: false,
            max_length: None,
            cursor_pos: 0,
            text_changed: Signal::new(),
            return_pressed: Signal::new(),
            editing_finished: Signal::new(),
        }
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text content.
    ///
    /// Moves the cursor to the end and emits `text_changed` if the text
    /// actually changed. The text is truncated to `max_length` graphemes
    /// when a limit is set.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let mut new_text = text.into();
        if let Some(limit) = self.max_length {
            new_text = Self::truncated(&new_text, limit);
        }
        if self.text != new_text {
            self.text = new_text;
            self.cursor_pos = self.text.len();
            self.base.update();
            self.text_changed.emit(self.text.clone());
        }
    }

    /// Set text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Get the text length in graphemes.
    pub fn text_length(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn truncated(text: &str, limit: usize) -> String {
        text.graphemes(true).take(limit).collect()
    }

    // =========================================================================
    // Placeholder / Read-only / Max length
    // =========================================================================

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text shown while empty.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.base.update();
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Check if the line edit is read-only.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Set whether the line edit is read-only.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Set read-only using builder pattern.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Get the maximum length in graphemes, if limited.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Limit the text length in graphemes.
    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.max_length = max_length;
        if let Some(limit) = max_length {
            let truncated = Self::truncated(&self.text, limit);
            if truncated != self.text {
                self.set_text(truncated);
            }
        }
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// Get the cursor position as a byte offset.
    pub fn cursor_position(&self) -> usize {
        self.cursor_pos
    }

    /// Move the cursor to the start of the text.
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move the cursor to the end of the text.
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.text.len();
    }

    /// Move the cursor one grapheme to the left.
    pub fn move_cursor_left(&mut self) {
        if let Some((offset, _)) = self.grapheme_before_cursor() {
            self.cursor_pos = offset;
        }
    }

    /// Move the cursor one grapheme to the right.
    pub fn move_cursor_right(&mut self) {
        if let Some((offset, grapheme)) = self.grapheme_at_cursor() {
            self.cursor_pos = offset + grapheme.len();
        }
    }

    fn grapheme_before_cursor(&self) -> Option<(usize, &str)> {
        self.text[..self.cursor_pos]
            .grapheme_indices(true)
            .next_back()
    }

    fn grapheme_at_cursor(&self) -> Option<(usize, &str)> {
        self.text[self.cursor_pos..]
            .grapheme_indices(true)
            .next()
            .map(|(offset, grapheme)| (self.cursor_pos + offset, grapheme))
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert text at the cursor.
    ///
    /// Rejected silently in read-only mode or when the insertion would
    /// exceed `max_length`.
    pub fn insert(&mut self, text: &str) {
        if self.read_only || text.is_empty() {
            return;
        }
        if let Some(limit) = self.max_length {
            let inserted = text.graphemes(true).count();
            if self.text_length() + inserted > limit {
                return;
            }
        }
        self.text.insert_str(self.cursor_pos, text);
        self.cursor_pos += text.len();
        self.base.update();
        self.text_changed.emit(self.text.clone());
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.read_only {
            return;
        }
        if let Some((offset, grapheme)) = self.grapheme_before_cursor() {
            let len = grapheme.len();
            self.text.replace_range(offset..offset + len, "");
            self.cursor_pos = offset;
            self.base.update();
            self.text_changed.emit(self.text.clone());
        }
    }

    /// Delete the grapheme after the cursor.
    pub fn delete(&mut self) {
        if self.read_only {
            return;
        }
        if let Some((offset, grapheme)) = self.grapheme_at_cursor() {
            let len = grapheme.len();
            self.text.replace_range(offset..offset + len, "");
            self.base.update();
            self.text_changed.emit(self.text.clone());
        }
    }

    /// Submit the current text (Enter pressed).
    ///
    /// Emits `return_pressed` followed by `editing_finished`. The text is
    /// not validated here; interested parties parse it from the signal
    /// handler or by re-querying [`text`](Self::text).
    pub fn submit(&mut self) {
        self.return_pressed.emit(());
        self.editing_finished.emit(());
    }

    /// Notify the widget that it lost focus.
    ///
    /// Emits `editing_finished`.
    pub fn focus_out(&mut self) {
        self.base.set_focused(false);
        self.editing_finished.emit(());
    }
}

impl Default for LineEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for LineEdit {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for LineEdit {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::from_dimensions(120.0, 24.0).with_minimum_dimensions(40.0, 24.0)
    }
}

static_assertions::assert_impl_all!(LineEdit: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use armature_core::init_global_registry;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_set_text_and_signal() {
        setup();
        let mut edit = LineEdit::new();
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        edit.text_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        edit.set_text("hello");
        assert_eq!(edit.text(), "hello");
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Setting the same text does not re-emit
        edit.set_text("hello");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_insert_and_cursor() {
        setup();
        let mut edit = LineEdit::new();
        edit.insert("ac");
        edit.move_cursor_left();
        edit.insert("b");
        assert_eq!(edit.text(), "abc");
        edit.move_cursor_end();
        assert_eq!(edit.cursor_position(), 3);
    }

    #[test]
    fn test_backspace_and_delete() {
        setup();
        let mut edit = LineEdit::new().with_text("abc");
        edit.backspace();
        assert_eq!(edit.text(), "ab");

        edit.move_cursor_home();
        edit.delete();
        assert_eq!(edit.text(), "b");

        // Backspace at the start is a no-op
        edit.move_cursor_home();
        edit.backspace();
        assert_eq!(edit.text(), "b");
    }

    #[test]
    fn test_grapheme_aware_editing() {
        setup();
        let mut edit = LineEdit::new().with_text("aé日");
        assert_eq!(edit.text_length(), 3);
        edit.backspace();
        assert_eq!(edit.text(), "aé");
        edit.backspace();
        assert_eq!(edit.text(), "a");
    }

    #[test]
    fn test_read_only_rejects_edits() {
        setup();
        let mut edit = LineEdit::new().with_text("locked").with_read_only(true);
        edit.insert("x");
        edit.backspace();
        assert_eq!(edit.text(), "locked");
    }

    #[test]
    fn test_max_length() {
        setup();
        let mut edit = LineEdit::new();
        edit.set_max_length(Some(3));
        edit.insert("abcd");
        assert_eq!(edit.text(), "");
        edit.insert("abc");
        assert_eq!(edit.text(), "abc");
        edit.insert("d");
        assert_eq!(edit.text(), "abc");
    }

    #[test]
    fn test_submit_signals() {
        setup();
        let mut edit = LineEdit::new().with_text("42");
        let returns = Arc::new(AtomicU32::new(0));
        let finishes = Arc::new(AtomicU32::new(0));

        let returns_clone = returns.clone();
        edit.return_pressed.connect(move |_| {
            returns_clone.fetch_add(1, Ordering::SeqCst);
        });
        let finishes_clone = finishes.clone();
        edit.editing_finished.connect(move |_| {
            finishes_clone.fetch_add(1, Ordering::SeqCst);
        });

        edit.submit();
        assert_eq!(returns.load(Ordering::SeqCst), 1);
        assert_eq!(finishes.load(Ordering::SeqCst), 1);

        edit.focus_out();
        assert_eq!(returns.load(Ordering::SeqCst), 1);
        assert_eq!(finishes.load(Ordering::SeqCst), 2);
    }
}
