//! Sliders with an attached value readout.
//!
//! [`LabelSlider`] and [`FloatLabelSlider`] pair a range control with a
//! read-only label that always shows the current value. The label's width
//! is pinned from the range maximum so the row never visibly resizes as
//! the value changes.

use armature_core::{Object, ObjectId, Signal};

use crate::widget::layout::{BoxLayout, ContentMargins};
use crate::widget::{Orientation, Rect, SizeHint, Widget, WidgetBase};

use super::float_slider::FloatSlider;
use super::label::{Label, CHAR_WIDTH};
use super::slider::Slider;

/// Padding added to the computed label width.
const LABEL_PADDING: f32 = 10.0;

/// Stretch factors for the slider : label row.
const SLIDER_STRETCH: u32 = 10;
const LABEL_STRETCH: u32 = 1;

fn integer_digit_count(value: i64) -> usize {
    value.to_string().len()
}

/// An integer slider with a value readout.
///
/// Every value change — programmatic or via the drag protocol — refreshes
/// the label text. [`set_maximum`](Self::set_maximum) additionally pins
/// the label width from the digit count of the new maximum, synchronously,
/// so the readout is already wide enough before any value reaches it.
///
/// # Signals
///
/// - `slider_released(())`: Emitted when a drag ends; the conventional
///   hook for callers that act on settled values
pub struct LabelSlider {
    /// Widget base.
    base: WidgetBase,

    /// The range control.
    slider: Slider,

    /// The value readout.
    label: Label,

    /// Row layout (slider stretch 10, label stretch 1).
    layout: BoxLayout,

    /// Signal emitted when a drag ends.
    pub slider_released: Signal<()>,
}

impl LabelSlider {
    /// Create a labeled slider over the default 0..=100 range.
    pub fn new() -> Self {
        let base = WidgetBase::new::<Self>();
        let slider = Slider::new(Orientation::Horizontal);
        let label = Label::new("0");

        let mut layout = BoxLayout::horizontal();
        layout.set_content_margins(ContentMargins::default());
        layout.add_widget_with_stretch(slider.object_id(), SLIDER_STRETCH);
        layout.add_widget_with_stretch(label.object_id(), LABEL_STRETCH);

        let _ = slider.widget_base().set_parent(Some(base.object_id()));
        let _ = label.widget_base().set_parent(Some(base.object_id()));

        let mut this = Self {
            base,
            slider,
            label,
            layout,
            slider_released: Signal::new(),
        };
        this.set_maximum(this.slider.maximum());
        this.refresh_label();
        this
    }

    /// Access the range control.
    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    /// Access the value readout.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Get the minimum value.
    pub fn minimum(&self) -> i32 {
        self.slider.minimum()
    }

    /// Set the minimum value.
    pub fn set_minimum(&mut self, minimum: i32) {
        self.slider.set_minimum(minimum);
        self.refresh_label();
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> i32 {
        self.slider.maximum()
    }

    /// Set the maximum value.
    ///
    /// Also pins the label width from the digit count of the new maximum.
    /// The recompute happens here, not in a value-change handler, so it
    /// takes effect even while notifications are blocked.
    pub fn set_maximum(&mut self, maximum: i32) {
        self.slider.set_maximum(maximum);
        let digits = integer_digit_count(self.slider.maximum() as i64);
        self.label
            .set_fixed_width(Some(LABEL_PADDING + digits as f32 * CHAR_WIDTH));
        self.refresh_label();
    }

    /// Set maximum using builder pattern.
    pub fn with_maximum(mut self, maximum: i32) -> Self {
        self.set_maximum(maximum);
        self
    }

    /// Get the current value.
    pub fn value(&self) -> i32 {
        self.slider.value()
    }

    /// Set the current value (clamped to the range).
    pub fn set_value(&mut self, value: i32) {
        self.slider.set_value(value);
        self.refresh_label();
    }

    /// Set value using builder pattern.
    pub fn with_value(mut self, value: i32) -> Self {
        self.set_value(value);
        self
    }

    /// Set the tick interval.
    pub fn set_tick_interval(&mut self, interval: i32) {
        self.slider.set_tick_interval(interval);
    }

    // =========================================================================
    // Drag Protocol
    // =========================================================================

    /// Begin a drag gesture on the slider.
    pub fn begin_drag(&mut self) {
        self.slider.begin_drag();
    }

    /// Move the active drag; the readout follows every intermediate value.
    pub fn drag_to(&mut self, value: i32) {
        self.slider.drag_to(value);
        self.refresh_label();
    }

    /// End the active drag gesture.
    pub fn end_drag(&mut self) {
        if self.slider.is_dragging() {
            self.slider.end_drag();
            self.slider_released.emit(());
        }
    }

    fn refresh_label(&mut self) {
        self.label.set_text(self.slider.value().to_string());
    }

    fn relayout(&mut self) {
        for (id, rect) in self.layout.distribute(self.base.rect()) {
            if id == self.slider.object_id() {
                self.slider.set_geometry(rect);
            } else if id == self.label.object_id() {
                self.label.set_geometry(rect);
            }
        }
    }
}

impl Default for LabelSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for LabelSlider {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for LabelSlider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let slider_hint = self.slider.size_hint();
        let label_hint = self.label.size_hint();
        SizeHint::from_dimensions(
            slider_hint.preferred.width + self.layout.spacing() + label_hint.preferred.width,
            slider_hint.preferred.height.max(label_hint.preferred.height),
        )
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        self.relayout();
    }
}

static_assertions::assert_impl_all!(LabelSlider: Send, Sync);

/// A float slider with a value readout.
///
/// Same contract as [`LabelSlider`], in the float domain: the label width
/// allows for the integer digits of the maximum plus a fixed allowance of
/// decimal digits, and the readout shows the value at the slider's
/// precision.
pub struct FloatLabelSlider {
    /// Widget base.
    base: WidgetBase,

    /// The scaled range control.
    slider: FloatSlider,

    /// The value readout.
    label: Label,

    /// Decimal digits reserved in the label width.
    decimal_allowance: usize,

    /// Row layout (slider stretch 10, label stretch 1).
    layout: BoxLayout,

    /// Signal emitted when a drag ends.
    pub slider_released: Signal<()>,
}

impl FloatLabelSlider {
    /// Create a labeled float slider with the given decimal precision.
    pub fn new(digits: u32) -> Self {
        let base = WidgetBase::new::<Self>();
        let slider = FloatSlider::new(digits);
        let label = Label::new("0");

        let mut layout = BoxLayout::horizontal();
        layout.set_content_margins(ContentMargins::default());
        layout.add_widget_with_stretch(slider.object_id(), SLIDER_STRETCH);
        layout.add_widget_with_stretch(label.object_id(), LABEL_STRETCH);

        let _ = slider.widget_base().set_parent(Some(base.object_id()));
        let _ = label.widget_base().set_parent(Some(base.object_id()));

        let mut this = Self {
            base,
            slider,
            label,
            decimal_allowance: 2,
            layout,
            slider_released: Signal::new(),
        };
        this.set_maximum(this.slider.maximum());
        this.refresh_label();
        this
    }

    /// Access the scaled range control.
    pub fn slider(&self) -> &FloatSlider {
        &self.slider
    }

    /// Access the value readout.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Get the minimum value.
    pub fn minimum(&self) -> f64 {
        self.slider.minimum()
    }

    /// Set the minimum value.
    pub fn set_minimum(&mut self, minimum: f64) {
        self.slider.set_minimum(minimum);
        self.refresh_label();
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> f64 {
        self.slider.maximum()
    }

    /// Set the maximum value.
    ///
    /// Pins the label width from the integer digit count of the new
    /// maximum plus the decimal allowance, synchronously.
    pub fn set_maximum(&mut self, maximum: f64) {
        self.slider.set_maximum(maximum);
        let digits =
            integer_digit_count(self.slider.maximum().trunc() as i64) + self.decimal_allowance;
        self.label
            .set_fixed_width(Some(LABEL_PADDING + digits as f32 * CHAR_WIDTH));
        self.refresh_label();
    }

    /// Set maximum using builder pattern.
    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.set_maximum(maximum);
        self
    }

    /// Get the current value.
    pub fn value(&self) -> f64 {
        self.slider.value()
    }

    /// Set the current value (rounded to the precision, clamped to the range).
    pub fn set_value(&mut self, value: f64) {
        self.slider.set_value(value);
        self.refresh_label();
    }

    /// Set value using builder pattern.
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    /// Set the tick interval.
    pub fn set_tick_interval(&mut self, interval: f64) {
        self.slider.set_tick_interval(interval);
    }

    // =========================================================================
    // Drag Protocol
    // =========================================================================

    /// Begin a drag gesture on the slider.
    pub fn begin_drag(&mut self) {
        self.slider.begin_drag();
    }

    /// Move the active drag; the readout follows every intermediate value.
    pub fn drag_to(&mut self, value: f64) {
        self.slider.drag_to(value);
        self.refresh_label();
    }

    /// End the active drag gesture.
    pub fn end_drag(&mut self) {
        if self.slider.is_dragging() {
            self.slider.end_drag();
            self.slider_released.emit(());
        }
    }

    fn refresh_label(&mut self) {
        let text = format!("{:.*}", self.slider.digits() as usize, self.slider.value());
        self.label.set_text(text);
    }

    fn relayout(&mut self) {
        for (id, rect) in self.layout.distribute(self.base.rect()) {
            if id == self.slider.object_id() {
                self.slider.set_geometry(rect);
            } else if id == self.label.object_id() {
                self.label.set_geometry(rect);
            }
        }
    }
}

impl Object for FloatLabelSlider {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for FloatLabelSlider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let slider_hint = self.slider.size_hint();
        let label_hint = self.label.size_hint();
        SizeHint::from_dimensions(
            slider_hint.preferred.width + self.layout.spacing() + label_hint.preferred.width,
            slider_hint.preferred.height.max(label_hint.preferred.height),
        )
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        self.relayout();
    }
}

static_assertions::assert_impl_all!(FloatLabelSlider: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use armature_core::init_global_registry;

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_label_mirrors_value() {
        setup();
        let mut slider = LabelSlider::new().with_maximum(100).with_value(42);
        assert_eq!(slider.label().text(), "42");

        slider.set_value(7);
        assert_eq!(slider.label().text(), "7");
    }

    #[test]
    fn test_label_follows_drag() {
        setup();
        let mut slider = LabelSlider::new().with_maximum(100);
        slider.begin_drag();
        slider.drag_to(33);
        assert_eq!(slider.label().text(), "33");
        slider.drag_to(66);
        assert_eq!(slider.label().text(), "66");
        slider.end_drag();
    }

    #[test]
    fn test_set_maximum_pins_label_width() {
        setup();
        let mut slider = LabelSlider::new();

        slider.set_maximum(9);
        assert_eq!(slider.label().fixed_width(), Some(20.0)); // 10 + 1*10

        slider.set_maximum(1000);
        assert_eq!(slider.label().fixed_width(), Some(50.0)); // 10 + 4*10
    }

    #[test]
    fn test_label_width_stable_across_values() {
        setup();
        let mut slider = LabelSlider::new().with_maximum(1000);
        let width = slider.label().size_hint().preferred.width;
        for v in [0, 5, 999, 1000] {
            slider.set_value(v);
            assert_eq!(slider.label().size_hint().preferred.width, width);
        }
    }

    #[test]
    fn test_float_label_formatting() {
        setup();
        let mut slider = FloatLabelSlider::new(1).with_maximum(1.0).with_value(0.5);
        assert_eq!(slider.label().text(), "0.5");

        slider.set_value(0.75); // rounds to 0.8 at one decimal
        assert_eq!(slider.label().text(), "0.8");
    }

    #[test]
    fn test_float_label_width_includes_decimal_allowance() {
        setup();
        let mut slider = FloatLabelSlider::new(2);
        slider.set_maximum(50.0);
        // 2 integer digits + 2 decimal allowance -> 10 + 4*10
        assert_eq!(slider.label().fixed_width(), Some(50.0));
    }

    #[test]
    fn test_released_signal_once_per_drag() {
        setup();
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::sync::Arc;

        let mut slider = LabelSlider::new().with_maximum(10);
        let releases = Arc::new(AtomicU32::new(0));
        let releases_clone = releases.clone();
        slider.slider_released.connect(move |_| {
            releases_clone.fetch_add(1, Ordering::SeqCst);
        });

        slider.begin_drag();
        slider.drag_to(3);
        slider.end_drag();
        slider.end_drag(); // no active drag: no second emission

        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}
