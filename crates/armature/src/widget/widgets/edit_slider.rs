//! Slider + text entry + stepper buttons, kept mutually consistent.
//!
//! [`EditSlider`] and [`EditFloatSlider`] present three views of one
//! bounded value: a slider, a free-text field, and a pair of stepper
//! buttons. The views must never disagree and must never feed back into
//! each other, which is achieved by routing every update through one of
//! two distinct channels:
//!
//! - the **display channel** rewrites the field text while the slider is
//!   being dragged, giving live numeric feedback without touching the
//!   authoritative value and without notifying anyone;
//! - the **commit channel** — drag release, Enter in the field, a stepper
//!   press, or programmatic `set_value` — validates one candidate value
//!   and, only if it is inside the bounds and actually different, updates
//!   every view and fires the `value_changed` notification exactly once.
//!
//! A candidate outside the bounds is rejected outright: nothing moves, no
//! notification fires, and the field keeps whatever the user typed so
//! they can correct it. Unparsable text is discarded the same way.

use armature_core::{Object, ObjectId, Signal};

use crate::widget::layout::{BoxLayout, ContentMargins};
use crate::widget::{Orientation, Rect, SizeHint, Widget, WidgetBase};

use super::float_slider::FloatSlider;
use super::line_edit::LineEdit;
use super::push_button::PushButton;
use super::slider::Slider;

/// Stretch factors for the slider : minus : field : plus row.
const ROW_STRETCHES: [u32; 4] = [10, 2, 3, 2];

/// An integer slider with a synchronized text field and steppers.
///
/// # Signals
///
/// - `value_changed(())`: Emitted exactly once per committed value change.
///   Carries no payload; re-query with [`value`](Self::value).
pub struct EditSlider {
    /// Widget base.
    base: WidgetBase,

    /// The range control.
    slider: Slider,

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

impl EditSlider {
    /// Create an edit slider over `[minimum, maximum]` starting at `start`.
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
        let mut slider = Slider::new(Orientation::Horizontal);
        slider.set_range(minimum, maximum);
        slider.set_value(current);

        let line_edit = LineEdit::new().with_text(current.to_string());
        let decrement_button = PushButton::new("-");
        let increment_button = PushButton::new("+");

        let mut layout = BoxLayout::horizontal();
        layout.set_content_margins(ContentMargins::default());
        layout.add_widget_with_stretch(slider.object_id(), ROW_STRETCHES[0]);
        layout.add_widget_with_stretch(decrement_button.object_id(), ROW_STRETCHES[1]);
        layout.add_widget_with_stretch(line_edit.object_id(), ROW_STRETCHES[2]);
        layout.add_widget_with_stretch(increment_button.object_id(), ROW_STRETCHES[3]);

        for id in [
            slider.object_id(),
            decrement_button.object_id(),
            line_edit.object_id(),
            increment_button.object_id(),
        ] {
            let _ = armature_core::global_registry()
                .and_then(|r| r.set_parent(id, Some(base.object_id())));
        }

        Self {
            base,
            slider,
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

    // =========================================================================
    // State Accessors
    // =========================================================================

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

    /// Access the range control.
    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    /// Access the text field.
    pub fn line_edit(&self) -> &LineEdit {
        &self.line_edit
    }

    /// Access the text field mutably, for feeding keystrokes.
    ///
    /// Typing edits only the displayed text; nothing is committed until
    /// [`submit_text`](Self::submit_text).
    pub fn line_edit_mut(&mut self) -> &mut LineEdit {
        &mut self.line_edit
    }

    /// Access the increment stepper.
    pub fn increment_button(&self) -> &PushButton {
        &self.increment_button
    }

    /// Access the decrement stepper.
    pub fn decrement_button(&self) -> &PushButton {
        &self.decrement_button
    }

    // =========================================================================
    // Commit Channel
    // =========================================================================

    /// Set the value programmatically.
    ///
    /// Out-of-range values are rejected silently: prior state is retained
    /// and no notification fires. Callers pre-validate range endpoints
    /// themselves.
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
    ///
    /// Unparsable text is discarded without touching any view; the stale
    /// text stays in the field for the user to correct.
    pub fn submit_text(&mut self) {
        self.line_edit.submit();
        match self.line_edit.text().trim().parse::<i32>() {
            Ok(candidate) => {
                self.commit(candidate);
            }
            Err(_) => {
                tracing::trace!(
                    target: "armature::widget::edit_slider",
                    text = self.line_edit.text(),
                    "discarding unparsable field text"
                );
            }
        }
    }

    /// Validate and apply one candidate value.
    ///
    /// Returns `true` when the value was accepted and the notification
    /// fired. Equal-to-current candidates re-canonicalize the displayed
    /// text but emit nothing.
    fn commit(&mut self, candidate: i32) -> bool {
        if candidate < self.minimum || candidate > self.maximum {
            tracing::trace!(
                target: "armature::widget::edit_slider",
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

    /// Bring the slider and field in line with the authoritative value.
    fn sync_views(&mut self) {
        self.slider.set_value(self.current);
        self.line_edit.set_text(self.current.to_string());
    }

    // =========================================================================
    // Display Channel (drag)
    // =========================================================================

    /// Begin a drag gesture on the slider.
    pub fn begin_slider_drag(&mut self) {
        if !self.base.is_effectively_enabled() {
            return;
        }
        self.slider.begin_drag();
    }

    /// Move the active drag.
    ///
    /// The field text follows every intermediate position, but the
    /// authoritative value does not move and no notification fires until
    /// the release.
    pub fn drag_slider_to(&mut self, value: i32) {
        if !self.slider.is_dragging() {
            return;
        }
        self.slider.drag_to(value);
        self.line_edit.set_text(self.slider.value().to_string());
    }

    /// Release the drag and commit the settled position.
    pub fn release_slider(&mut self) {
        if !self.slider.is_dragging() {
            return;
        }
        self.slider.end_drag();
        if let Ok(candidate) = self.line_edit.text().trim().parse::<i32>() {
            self.commit(candidate);
        }
    }

    fn relayout(&mut self) {
        for (id, rect) in self.layout.distribute(self.base.rect()) {
            if id == self.slider.object_id() {
                self.slider.set_geometry(rect);
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

impl Object for EditSlider {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for EditSlider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let parts = [
            self.slider.size_hint(),
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

static_assertions::assert_impl_all!(EditSlider: Send, Sync);

/// A float slider with a synchronized text field and steppers.
///
/// The float counterpart of [`EditSlider`]: candidates are quantized to
/// `digits` decimal places before validation, and the step size is
/// `10^-digits`.
///
/// # Signals
///
/// - `value_changed(())`: Emitted exactly once per committed value change.
pub struct EditFloatSlider {
    /// Widget base.
    base: WidgetBase,

    /// The scaled range control.
    slider: FloatSlider,

    /// Decrement stepper ("-").
    decrement_button: PushButton,

    /// The free-text entry mirroring the value.
    line_edit: LineEdit,

    /// Increment stepper ("+").
    increment_button: PushButton,

    /// Row layout.
    layout: BoxLayout,

    /// Lower bound.
    minimum: f64,

    /// Upper bound.
    maximum: f64,

    /// The authoritative value, always on the `10^-digits` grid.
    current: f64,

    /// Signal emitted once per committed value change.
    pub value_changed: Signal<()>,
}

impl EditFloatSlider {
    /// Create an edit slider over `[minimum, maximum]` starting at `start`,
    /// with `digits` decimal places of precision.
    ///
    /// Reversed bounds are normalized; `start` is quantized to the
    /// precision grid and clamped into the range.
    pub fn new(minimum: f64, maximum: f64, start: f64, digits: u32) -> Self {
        let (minimum, maximum) = if minimum <= maximum {
            (minimum, maximum)
        } else {
            (maximum, minimum)
        };

        let base = WidgetBase::new::<Self>();
        let mut slider = FloatSlider::new(digits);
        slider.set_range(minimum, maximum);

        let scale = slider.scale();
        let current = ((start * scale).round() / scale).clamp(minimum, maximum);
        slider.set_value(current);

        let line_edit =
            LineEdit::new().with_text(format!("{:.*}", digits as usize, current));
        let decrement_button = PushButton::new("-");
        let increment_button = PushButton::new("+");

        let mut layout = BoxLayout::horizontal();
        layout.set_content_margins(ContentMargins::default());
        layout.add_widget_with_stretch(slider.object_id(), ROW_STRETCHES[0]);
        layout.add_widget_with_stretch(decrement_button.object_id(), ROW_STRETCHES[1]);
        layout.add_widget_with_stretch(line_edit.object_id(), ROW_STRETCHES[2]);
        layout.add_widget_with_stretch(increment_button.object_id(), ROW_STRETCHES[3]);

        for id in [
            slider.object_id(),
            decrement_button.object_id(),
            line_edit.object_id(),
            increment_button.object_id(),
        ] {
            let _ = armature_core::global_registry()
                .and_then(|r| r.set_parent(id, Some(base.object_id())));
        }

        Self {
            base,
            slider,
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

    // =========================================================================
    // State Accessors
    // =========================================================================

    /// Get the authoritative value.
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Get the lower bound.
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Get the upper bound.
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Get the step size `10^-digits`.
    pub fn step(&self) -> f64 {
        1.0 / self.slider.scale()
    }

    /// Get the decimal precision.
    pub fn digits(&self) -> u32 {
        self.slider.digits()
    }

    /// Access the scaled range control.
    pub fn slider(&self) -> &FloatSlider {
        &self.slider
    }

    /// Access the text field.
    pub fn line_edit(&self) -> &LineEdit {
        &self.line_edit
    }

    /// Access the text field mutably, for feeding keystrokes.
    pub fn line_edit_mut(&mut self) -> &mut LineEdit {
        &mut self.line_edit
    }

    /// Access the increment stepper.
    pub fn increment_button(&self) -> &PushButton {
        &self.increment_button
    }

    /// Access the decrement stepper.
    pub fn decrement_button(&self) -> &PushButton {
        &self.decrement_button
    }

    fn quantize(&self, value: f64) -> f64 {
        let scale = self.slider.scale();
        (value * scale).round() / scale
    }

    fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.slider.digits() as usize, value)
    }

    // =========================================================================
    // Commit Channel
    // =========================================================================

    /// Set the value programmatically.
    ///
    /// The value is quantized to the precision grid first; out-of-range
    /// values are rejected silently.
    pub fn set_value(&mut self, value: f64) {
        self.commit(value);
    }

    /// Increment by one step. A no-op at the upper bound.
    pub fn increment(&mut self) {
        if !self.base.is_effectively_enabled() {
            return;
        }
        self.increment_button.click();
        self.commit(self.current + self.step());
    }

    /// Decrement by one step. A no-op at the lower bound.
    pub fn decrement(&mut self) {
        if !self.base.is_effectively_enabled() {
            return;
        }
        self.decrement_button.click();
        self.commit(self.current - self.step());
    }

    /// Commit whatever is in the text field (Enter pressed).
    ///
    /// Unparsable text is discarded without touching any view; the stale
    /// text stays in the field for the user to correct.
    pub fn submit_text(&mut self) {
        self.line_edit.submit();
        match self.line_edit.text().trim().parse::<f64>() {
            Ok(candidate) => {
                self.commit(candidate);
            }
            Err(_) => {
                tracing::trace!(
                    target: "armature::widget::edit_slider",
                    text = self.line_edit.text(),
                    "discarding unparsable field text"
                );
            }
        }
    }

    fn commit(&mut self, candidate: f64) -> bool {
        if !candidate.is_finite() {
            return false;
        }
        let quantized = self.quantize(candidate);
        if quantized < self.minimum || quantized > self.maximum {
            tracing::trace!(
                target: "armature::widget::edit_slider",
                candidate = quantized,
                minimum = self.minimum,
                maximum = self.maximum,
                "rejecting out-of-range commit"
            );
            return false;
        }
        if quantized == self.current {
            self.sync_views();
            return false;
        }
        self.current = quantized;
        self.sync_views();
        self.base.update();
        self.value_changed.emit(());
        true
    }

    fn sync_views(&mut self) {
        self.slider.set_value(self.current);
        let text = self.format_value(self.current);
        self.line_edit.set_text(text);
    }

    // =========================================================================
    // Display Channel (drag)
    // =========================================================================

    /// Begin a drag gesture on the slider.
    pub fn begin_slider_drag(&mut self) {
        if !self.base.is_effectively_enabled() {
            return;
        }
        self.slider.begin_drag();
    }

    /// Move the active drag; the field text follows, the value does not.
    pub fn drag_slider_to(&mut self, value: f64) {
        if !self.slider.is_dragging() {
            return;
        }
        self.slider.drag_to(value);
        let text = self.format_value(self.slider.value());
        self.line_edit.set_text(text);
    }

    /// Release the drag and commit the settled position.
    pub fn release_slider(&mut self) {
        if !self.slider.is_dragging() {
            return;
        }
        self.slider.end_drag();
        if let Ok(candidate) = self.line_edit.text().trim().parse::<f64>() {
            self.commit(candidate);
        }
    }

    fn relayout(&mut self) {
        for (id, rect) in self.layout.distribute(self.base.rect()) {
            if id == self.slider.object_id() {
                self.slider.set_geometry(rect);
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

impl Object for EditFloatSlider {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for EditFloatSlider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let parts = [
            self.slider.size_hint(),
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

static_assertions::assert_impl_all!(EditFloatSlider: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use armature_core::init_global_registry;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn setup() {
        init_global_registry();
    }

    fn count_notifications(signal: &Signal<()>) -> Arc<AtomicU32> {
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_initial_state_consistent() {
        setup();
        let slider = EditSlider::new(0, 100, 40);
        assert_eq!(slider.value(), 40);
        assert_eq!(slider.slider().value(), 40);
        assert_eq!(slider.line_edit().text(), "40");
    }

    #[test]
    fn test_start_outside_bounds_clamped() {
        setup();
        let slider = EditSlider::new(0, 10, 99);
        assert_eq!(slider.value(), 10);
        assert_eq!(slider.line_edit().text(), "10");
    }

    #[test]
    fn test_commit_updates_all_views_once() {
        setup();
        let mut slider = EditSlider::new(0, 100, 40);
        let count = count_notifications(&slider.value_changed);

        slider.set_value(60);
        assert_eq!(slider.value(), 60);
        assert_eq!(slider.slider().value(), 60);
        assert_eq!(slider.line_edit().text(), "60");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_out_of_range_set_value_is_silent_noop() {
        setup();
        let mut slider = EditSlider::new(0, 100, 40);
        let count = count_notifications(&slider.value_changed);

        slider.set_value(101);
        slider.set_value(-1);
        assert_eq!(slider.value(), 40);
        assert_eq!(slider.line_edit().text(), "40");
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_value_idempotent() {
        setup();
        let mut slider = EditSlider::new(0, 100, 40);
        let count = count_notifications(&slider.value_changed);

        slider.set_value(55);
        slider.set_value(55);
        assert_eq!(slider.value(), 55);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_steppers_respect_bounds() {
        setup();
        let mut slider = EditSlider::new(0, 2, 1);
        let count = count_notifications(&slider.value_changed);

        slider.increment();
        assert_eq!(slider.value(), 2);
        slider.increment(); // at max: rejected, no notification
        assert_eq!(slider.value(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        slider.decrement();
        slider.decrement();
        assert_eq!(slider.value(), 0);
        slider.decrement(); // at min: rejected
        assert_eq!(slider.value(), 0);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_drag_updates_display_only() {
        setup();
        let mut slider = EditSlider::new(0, 100, 40);
        let count = count_notifications(&slider.value_changed);

        slider.begin_slider_drag();
        slider.drag_slider_to(70);
        // Live feedback in the field, but no commit yet.
        assert_eq!(slider.line_edit().text(), "70");
        assert_eq!(slider.value(), 40);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        slider.drag_slider_to(80);
        assert_eq!(slider.line_edit().text(), "80");
        assert_eq!(count.load(Ordering::SeqCst), 0);

        slider.release_slider();
        assert_eq!(slider.value(), 80);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_submit_parsable_text_commits() {
        setup();
        let mut slider = EditSlider::new(0, 100, 40);
        let count = count_notifications(&slider.value_changed);

        slider.line_edit_mut().set_text("72");
        slider.submit_text();
        assert_eq!(slider.value(), 72);
        assert_eq!(slider.slider().value(), 72);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_submit_unparsable_text_leaves_field() {
        setup();
        let mut slider = EditSlider::new(0, 100, 40);
        let count = count_notifications(&slider.value_changed);

        slider.line_edit_mut().set_text("abc");
        slider.submit_text();
        assert_eq!(slider.value(), 40);
        assert_eq!(slider.line_edit().text(), "abc"); // left for correction
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_submit_out_of_range_leaves_field() {
        setup();
        let mut slider = EditSlider::new(0, 100, 40);
        let count = count_notifications(&slider.value_changed);

        slider.line_edit_mut().set_text("250");
        slider.submit_text();
        assert_eq!(slider.value(), 40);
        assert_eq!(slider.slider().value(), 40);
        assert_eq!(slider.line_edit().text(), "250");
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_float_clamped_step_accumulation() {
        setup();
        // min=0, max=1, current=0.5, one decimal digit: three increments
        // land exactly on 0.8 with three notifications.
        let mut slider = EditFloatSlider::new(0.0, 1.0, 0.5, 1);
        let count = count_notifications(&slider.value_changed);

        slider.increment();
        slider.increment();
        slider.increment();

        assert_eq!(slider.value(), 0.8);
        assert_eq!(slider.line_edit().text(), "0.8");
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_float_typed_out_of_range_rejected() {
        setup();
        let mut slider = EditFloatSlider::new(0.0, 1.0, 0.5, 1);
        let count = count_notifications(&slider.value_changed);

        slider.line_edit_mut().set_text("2.0");
        slider.submit_text();

        assert_eq!(slider.value(), 0.5);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_float_increment_at_max_is_noop() {
        setup();
        let mut slider = EditFloatSlider::new(0.0, 1.0, 1.0, 1);
        let count = count_notifications(&slider.value_changed);

        slider.increment();
        assert_eq!(slider.value(), 1.0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_float_commit_quantizes() {
        setup();
        let mut slider = EditFloatSlider::new(0.0, 1.0, 0.5, 1);

        slider.line_edit_mut().set_text("0.67");
        slider.submit_text();
        assert_eq!(slider.value(), 0.7);
        assert_eq!(slider.line_edit().text(), "0.7");
    }

    #[test]
    fn test_float_equal_commit_recanonicalizes_text() {
        setup();
        let mut slider = EditFloatSlider::new(0.0, 1.0, 0.5, 1);
        let count = count_notifications(&slider.value_changed);

        slider.line_edit_mut().set_text("0.50");
        slider.submit_text();

        assert_eq!(slider.value(), 0.5);
        assert_eq!(slider.line_edit().text(), "0.5"); // canonical form restored
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_float_drag_display_then_commit() {
        setup();
        let mut slider = EditFloatSlider::new(0.0, 1.0, 0.5, 1);
        let count = count_notifications(&slider.value_changed);

        slider.begin_slider_drag();
        slider.drag_slider_to(0.3);
        assert_eq!(slider.line_edit().text(), "0.3");
        assert_eq!(slider.value(), 0.5);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        slider.release_slider();
        assert_eq!(slider.value(), 0.3);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_composite_drops_gestures() {
        setup();
        let mut slider = EditSlider::new(0, 100, 40);
        slider.set_enabled(false);
        let count = count_notifications(&slider.value_changed);

        slider.increment();
        slider.begin_slider_drag();
        slider.drag_slider_to(70);
        slider.release_slider();

        assert_eq!(slider.value(), 40);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
