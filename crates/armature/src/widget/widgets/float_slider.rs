//! Float-valued slider backed by an integer range control.

use armature_core::{Object, ObjectId, Signal};

use crate::widget::{Orientation, SizeHint, Widget, WidgetBase};

use super::slider::Slider;

/// A slider that handles floating point values.
///
/// Native range controls communicate in integers; `FloatSlider` maps a
/// float value/range onto one through a fixed decimal-digit scale factor:
/// every setter rounds its argument to `digits` decimal places, multiplies
/// by `10^digits`, and forwards the integer; [`value`](Self::value)
/// divides the stored integer back. The digit count is fixed for the
/// widget's lifetime.
///
/// Two inputs that round to the same integer are indistinguishable after
/// storage. That is accepted lossy behavior, not a defect: the control's
/// precision *is* `10^-digits`. Out-of-range values pass through to the
/// integer slider's own clamping.
///
/// # Signals
///
/// - `value_changed(f64)`: Emitted when the value changes (including during drag)
/// - `slider_released(())`: Emitted when a drag ends
pub struct FloatSlider {
    /// The underlying integer range control.
    slider: Slider,

    /// Decimal digits of precision, fixed at construction.
    digits: u32,

    /// `10^digits`.
    scale: f64,

    /// Signal emitted when the value changes, in the float domain.
    pub value_changed: Signal<f64>,

    /// Signal emitted when a drag ends.
    pub slider_released: Signal<()>,
}

impl FloatSlider {
    /// Create a horizontal float slider with the given decimal precision.
    pub fn new(digits: u32) -> Self {
        Self::with_orientation(Orientation::Horizontal, digits)
    }

    /// Create a float slider with the given orientation and precision.
    pub fn with_orientation(orientation: Orientation, digits: u32) -> Self {
        Self {
            slider: Slider::new(orientation),
            digits,
            scale: 10f64.powi(digits as i32),
            value_changed: Signal::new(),
            slider_released: Signal::new(),
        }
    }

    /// Get the decimal precision.
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Get the scale factor `10^digits`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Access the underlying integer slider.
    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    fn to_raw(&self, value: f64) -> i32 {
        (value * self.scale).round() as i32
    }

    fn from_raw(&self, raw: i32) -> f64 {
        raw as f64 / self.scale
    }

    // =========================================================================
    // Value and Range
    // =========================================================================

    /// Get the minimum value.
    pub fn minimum(&self) -> f64 {
        self.from_raw(self.slider.minimum())
    }

    /// Set the minimum value.
    pub fn set_minimum(&mut self, minimum: f64) {
        let raw = self.to_raw(minimum);
        self.forward(|slider| slider.set_minimum(raw));
    }

    /// Set minimum using builder pattern.
    pub fn with_minimum(mut self, minimum: f64) -> Self {
        self.set_minimum(minimum);
        self
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> f64 {
        self.from_raw(self.slider.maximum())
    }

    /// Set the maximum value.
    pub fn set_maximum(&mut self, maximum: f64) {
        let raw = self.to_raw(maximum);
        self.forward(|slider| slider.set_maximum(raw));
    }

    /// Set maximum using builder pattern.
    pub fn with_maximum(mut self, maximum: f64) -> Self {
        self.set_maximum(maximum);
        self
    }

    /// Set the value range.
    pub fn set_range(&mut self, minimum: f64, maximum: f64) {
        let (raw_min, raw_max) = (self.to_raw(minimum), self.to_raw(maximum));
        self.forward(|slider| slider.set_range(raw_min, raw_max));
    }

    /// Set range using builder pattern.
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.set_range(minimum, maximum);
        self
    }

    /// Get the current value.
    pub fn value(&self) -> f64 {
        self.from_raw(self.slider.value())
    }

    /// Set the current value.
    ///
    /// The value is rounded to `digits` decimal places and clamped to the
    /// range by the underlying control.
    pub fn set_value(&mut self, value: f64) {
        let raw = self.to_raw(value);
        self.forward(|slider| slider.set_value(raw));
    }

    /// Set value using builder pattern.
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    /// Set the tick interval.
    pub fn set_tick_interval(&mut self, interval: f64) {
        let raw = self.to_raw(interval);
        self.slider.set_tick_interval(raw);
    }

    /// Set tick interval using builder pattern.
    pub fn with_tick_interval(mut self, interval: f64) -> Self {
        self.set_tick_interval(interval);
        self
    }

    // =========================================================================
    // Drag Protocol
    // =========================================================================

    /// Check if the thumb is currently being dragged.
    pub fn is_dragging(&self) -> bool {
        self.slider.is_dragging()
    }

    /// Begin a drag gesture.
    pub fn begin_drag(&mut self) {
        self.slider.begin_drag();
    }

    /// Move the active drag to a value in the float domain.
    pub fn drag_to(&mut self, value: f64) {
        let raw = self.to_raw(value);
        self.forward(|slider| slider.drag_to(raw));
    }

    /// End the active drag gesture.
    pub fn end_drag(&mut self) {
        if self.slider.is_dragging() {
            self.slider.end_drag();
            self.slider_released.emit(());
        }
    }

    /// Run a mutation on the integer slider and re-emit any value change
    /// in the float domain.
    fn forward(&mut self, mutate: impl FnOnce(&mut Slider)) {
        let before = self.slider.value();
        mutate(&mut self.slider);
        if self.slider.value() != before {
            self.value_changed.emit(self.value());
        }
    }
}

impl Object for FloatSlider {
    fn object_id(&self) -> ObjectId {
        self.slider.object_id()
    }
}

impl Widget for FloatSlider {
    fn widget_base(&self) -> &WidgetBase {
        self.slider.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.slider.widget_base_mut()
    }

    fn size_hint(&self) -> SizeHint {
        self.slider.size_hint()
    }
}

static_assertions::assert_impl_all!(FloatSlider: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use armature_core::init_global_registry;
    use std::sync::Arc;

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_scaling_round_trip() {
        setup();
        let mut slider = FloatSlider::new(2).with_range(0.0, 1.0);
        slider.set_value(0.25);
        assert_eq!(slider.value(), 0.25);
        assert_eq!(slider.slider().value(), 25);
    }

    #[test]
    fn test_rounding_to_digits() {
        setup();
        let mut slider = FloatSlider::new(1).with_range(0.0, 10.0);

        slider.set_value(0.25);
        assert_eq!(slider.value(), 0.3); // rounded at one decimal

        slider.set_value(1.04);
        assert_eq!(slider.value(), 1.0);
    }

    #[test]
    fn test_rounding_collisions_are_lossy() {
        setup();
        let mut slider = FloatSlider::new(1).with_range(0.0, 10.0);
        slider.set_value(1.01);
        let first = slider.value();
        slider.set_value(1.04);
        assert_eq!(slider.value(), first); // both round to 1.0
    }

    #[test]
    fn test_out_of_range_clamped_by_native_control() {
        setup();
        let mut slider = FloatSlider::new(2).with_range(0.0, 1.0);
        slider.set_value(2.5);
        assert_eq!(slider.value(), 1.0);
        slider.set_value(-0.5);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn test_value_changed_in_float_domain() {
        setup();
        let mut slider = FloatSlider::new(1).with_range(0.0, 1.0);
        let last = Arc::new(parking_lot::Mutex::new(None));
        let last_clone = last.clone();
        slider.value_changed.connect(move |&v| {
            *last_clone.lock() = Some(v);
        });

        slider.set_value(0.5);
        assert_eq!(*last.lock(), Some(0.5));

        // Same stored value: no emission
        *last.lock() = None;
        slider.set_value(0.52);
        assert_eq!(*last.lock(), None);
    }

    #[test]
    fn test_drag_in_float_domain() {
        setup();
        let mut slider = FloatSlider::new(1).with_range(0.0, 1.0);
        let moves = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let moves_clone = moves.clone();
        slider.value_changed.connect(move |&v| {
            moves_clone.lock().push(v);
        });

        slider.begin_drag();
        slider.drag_to(0.3);
        slider.drag_to(0.7);
        slider.end_drag();

        assert_eq!(*moves.lock(), vec![0.3, 0.7]);
        assert_eq!(slider.value(), 0.7);
    }

    #[test]
    fn test_digit_grid_precision() {
        setup();
        // For a spread of digit counts and inputs, value() equals the
        // input rounded at that precision, within one grid step.
        for digits in 0..=3u32 {
            let step = 10f64.powi(-(digits as i32));
            let mut slider = FloatSlider::new(digits).with_range(0.0, 100.0);
            for &v in &[0.0, 0.1, 0.25, 1.049, 7.777, 42.5, 99.949] {
                slider.set_value(v);
                assert!(
                    (slider.value() - v).abs() <= step / 2.0 + 1e-9,
                    "digits={digits} v={v} got={}",
                    slider.value()
                );
            }
        }
    }
}
