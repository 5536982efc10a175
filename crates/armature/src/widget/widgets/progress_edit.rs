//! Progress bar + text entry + stepper buttons.

use armature_core::{Object, ObjectId, Signal};

use crate::widget::layout::{BoxLayout, ContentMargins};
use crate::widget::{Rect, SizeHint, Widget, WidgetBase};

use super::line_edit::LineEdit;
use super::progress_bar::ProgressBar;
use super::push_button::PushButton;

/// Stretch factors for the bar : minus : field : plus row.
const ROW_STRETCHES: [u32; 4] = [10, 2, 3, 2];

/// A progress-style readout with a synchronized text field and steppers.
///
/// The same commit machinery as
/// [`EditSlider`](super::EditSlider) with a progress bar (`"%v/%m"`
/// format) in place of the slider: Enter in the field, a stepper press,
/// or programmatic [`set_value`](Self::set_value) validates one candidate
/// against the bounds, rejects it silently when invalid, and otherwise
/// updates the bar and field together and fires `value_changed` exactly
/// once. There is no drag channel — progress bars are not draggable.
///
/// # Signals
///
/// - `value_changed(())`: Emitted exactly once per committed value change.
pub struct ProgressEdit {
    /// Widget base.
    base: WidgetBase,

    /// The progress-style readout.
    progress_bar: ProgressBar,

    /// Decrement stepper ("-").
    decrement_button: PushButton,

    /// The free-text entry mirroring the value.
    line_edit: LineEdit,

    /// Increment stepper ("+").
    increment_button: PushButton,

    /// Row layout.
    layout: BoxLayout,

    /// Lower bound.
    minimum: i32,

    /// Upper bound.
    maximum: i32,

    /// The authoritative value.
    current: i32,

    /// Signal emitted once per committed value change.
    pub value_changed: Signal<()>,
}

impl ProgressEdit {
    /// Create a progress edit over `[minimum, maximum]` starting at `start`.
    ///
    /// Reversed bounds are normalized; `start` is clamped into the range.
    pub fn new(minimum: i32, maximum: i32, start: i32) -> Self {
        let (minimum, maximum) = if minimum <= maximum {
            (minimum, maximum)
        } else {
            (maximum, minimum)
        };
        let current = start.clamp(minimum, maximum);

        let base = WidgetBase::new::<Self>();
        let progress_bar = ProgressBar::new()
            .with_range(minimum, maximum)
            .with_value(current)
            .with_format("%v/%m");

        let line_edit = LineEdit::new().with_text(current.to_string());
        let decrement_button = PushButton::new("-");
        let increment_button = PushButton::new("+");

        let mut layout = BoxLayout::horizontal();
        layout.set_content_margins(ContentMargins::default());
        layout.add_widget_with_stretch(progress_bar.object_id(), ROW_STRETCHES[0]);
        layout.add_widget_with_stretch(decrement_button.object_id(), ROW_STRETCHES[1]);
        layout.add_widget_with_stretch(line_edit.object_id(), ROW_STRETCHES[2]);
        layout.add_widget_with_stretch(increment_button.object_id(), ROW_STRETCHES[3]);

        for id in [
            progress_bar.object_id(),
            decrement_button.object_id(),
            line_edit.object_id(),
            increment_button.object_id(),
        ] {
            let _ = armature_core::global_registry()
                .and_then(|r| r.set_parent(id, Some(base.object_id())));
        }

        Self {
            base,
            progress_bar,
            decrement_button,
            line_edit,
            increment_button,
            layout,
            minimum,
            maximum,
            current,
            value_changed: Signal::new(),
        }
    }

    /// Get the authoritative value.
    pub fn value(&self) -> i32 {
        self.current
    }

    /// Get the lower bound.
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Get the upper bound.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Access the progress bar.
    pub fn progress_bar(&self) -> &ProgressBar {
        &self.progress_bar
    }

    /// Access the text field.
    pub fn line_edit(&self) -> &LineEdit {
        &self.line_edit
    }

    /// Access the text field mutably, for feeding keystrokes.
    pub fn line_edit_mut(&mut self) -> &mut LineEdit {
        &mut self.line_edit
    }

    /// Set the value programmatically.
    ///
    /// Out-of-range values are rejected silently.
    pub fn set_value(&mut self, value: i32) {
        self.commit(value);
    }

    /// Increment by one step. A no-op at the upper bound.
    pub fn increment(&mut self) {
        if !self.base.is_effectively_enabled() {
            return;
        }
        self.increment_button.click();
        self.commit(self.current.saturating_add(1));
    }

    /// Decrement by one step. A no-op at the lower bound.
    pub fn decrement(&mut self) {
        if !self.base.is_effectively_enabled() {
            return;
        }
        self.decrement_button.click();
        self.commit(self.current.saturating_sub(1));
    }

    /// Commit whatever is in the text field (Enter pressed).
    pub fn submit_text(&mut self) {
        self.line_edit.submit();
        match self.line_edit.text().trim().parse::<i32>() {
            Ok(candidate) => {
                self.commit(candidate);
            }
            Err(_) => {
                tracing::trace!(
                    target: "armature::widget::progress_edit",
                    text = self.line_edit.text(),
                    "discarding unparsable field text"
                );
            }
        }
    }

    fn commit(&mut self, candidate: i32) -> bool {
        if candidate < self.minimum || candidate > self.maximum {
            tracing::trace!(
                target: "armature::widget::progress_edit",
                candidate,
                minimum = self.minimum,
                maximum = self.maximum,
                "rejecting out-of-range commit"
            );
            return false;
        }
        if candidate == self.current {
            self.sync_views();
            return false;
        }
        self.current = candidate;
        self.sync_views();
        self.base.update();
        self.value_changed.emit(());
        true
    }

    fn sync_views(&mut self) {
        self.progress_bar.set_value(self.current);
        self.line_edit.set_text(self.current.to_string());
    }

    fn relayout(&mut self) {
        for (id, rect) in self.layout.distribute(self.base.rect()) {
            if id == self.progress_bar.object_id() {
                self.progress_bar.set_geometry(rect);
            } else if id == self.decrement_button.object_id() {
                self.decrement_button.set_geometry(rect);
            } else if id == self.line_edit.object_id() {
                self.line_edit.set_geometry(rect);
            } else if id == self.increment_button.object_id() {
                self.increment_button.set_geometry(rect);
            }
        }
    }
}

impl Object for ProgressEdit {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for ProgressEdit {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let parts = [
            self.progress_bar.size_hint(),
            self.decrement_button.size_hint(),
            self.line_edit.size_hint(),
            self.increment_button.size_hint(),
        ];
        let width: f32 = parts.iter().map(|h| h.preferred.width).sum::<f32>()
            + self.layout.spacing() * (parts.len() - 1) as f32;
        let height = parts
            .iter()
            .map(|h| h.preferred.height)
            .fold(0.0f32, f32::max);
        SizeHint::from_dimensions(width, height)
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        self.relayout();
    }
}

static_assertions::assert_impl_all!(ProgressEdit: Send, Sync);

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
    fn test_initial_state() {
        setup();
        let edit = ProgressEdit::new(0, 100, 30);
        assert_eq!(edit.value(), 30);
        assert_eq!(edit.progress_bar().value(), 30);
        assert_eq!(edit.progress_bar().text(), "30/100");
        assert_eq!(edit.line_edit().text(), "30");
    }

    #[test]
    fn test_commit_updates_bar_and_field() {
        setup();
        let mut edit = ProgressEdit::new(0, 100, 30);
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        edit.value_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        edit.line_edit_mut().set_text("55");
        edit.submit_text();

        assert_eq!(edit.value(), 55);
        assert_eq!(edit.progress_bar().text(), "55/100");
        assert_eq!(edit.line_edit().text(), "55");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_steppers_and_bounds() {
        setup();
        let mut edit = ProgressEdit::new(0, 2, 2);
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        edit.value_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        edit.increment(); // at max: no-op
        assert_eq!(edit.value(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        edit.decrement();
        assert_eq!(edit.value(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unparsable_text_is_discarded() {
        setup();
        let mut edit = ProgressEdit::new(0, 100, 30);
        edit.line_edit_mut().set_text("3o");
        edit.submit_text();
        assert_eq!(edit.value(), 30);
        assert_eq!(edit.line_edit().text(), "3o");
    }
}
