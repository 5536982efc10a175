//! Slider widget implementation.
//!
//! This module provides [`Slider`], a widget for selecting a value from a
//! range by dragging a thumb along a track.
//!
//! # Example
//!
//! ```
//! use armature_core::init_global_registry;
//! use armature::widget::Orientation;
//! use armature::widget::widgets::Slider;
//!
//! init_global_registry();
//!
//! // Create a horizontal slider
//! let mut slider = Slider::new(Orientation::Horizontal)
//!     .with_range(0, 100)
//!     .with_value(50);
//!
//! // Connect to value changes
//! slider.value_changed.connect(|&value| {
//!     println!("Value: {}", value);
//! });
//! ```

use armature_core::{Object, ObjectId, Signal};

use crate::widget::{
    Orientation, SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase,
};

/// A slider widget for selecting a value from a range.
///
/// Slider represents one scalar value with native integer precision. It
/// supports both horizontal and vertical orientations, tick marks, and a
/// drag protocol driven by the host's pointer dispatch: the host maps
/// pointer positions to values and feeds them through
/// [`begin_drag`](Self::begin_drag) / [`drag_to`](Self::drag_to) /
/// [`end_drag`](Self::end_drag).
///
/// # Signals
///
/// - `value_changed(i32)`: Emitted when the value changes (including during drag)
/// - `slider_pressed(())`: Emitted when a drag starts
/// - `slider_moved(i32)`: Emitted while the slider is being dragged
/// - `slider_released(())`: Emitted when a drag ends
/// - `range_changed((i32, i32))`: Emitted when the range changes
pub struct Slider {
    /// Widget base.
    base: WidgetBase,

    /// Slider orientation.
    orientation: Orientation,

    /// Minimum value.
    minimum: i32,

    /// Maximum value.
    maximum: i32,

    /// Current value.
    value: i32,

    /// Single step size (for steppers and arrow keys).
    single_step: i32,

    /// Page step size (for Page Up/Down and track clicks).
    page_step: i32,

    /// Tick interval (0 = use single_step).
    tick_interval: i32,

    /// Whether the thumb is currently being dragged.
    dragging: bool,

    /// Signal emitted when value changes.
    pub value_changed: Signal<i32>,

    /// Signal emitted when a drag starts.
    pub slider_pressed: Signal<()>,

    /// Signal emitted while the slider is being dragged.
    pub slider_moved: Signal<i32>,

    /// Signal emitted when a drag ends.
    pub slider_released: Signal<()>,

    /// Signal emitted when the range changes.
    pub range_changed: Signal<(i32, i32)>,
}

impl Slider {
    /// Create a new slider with the given orientation.
    pub fn new(orientation: Orientation) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_focusable(true);
        base.set_size_policy(Self::policy_for(orientation));

        Self {
            base,
            orientation,
            minimum: 0,
            maximum: 100,
            value: 0,
            single_step: 1,
            page_step: 10,
            tick_interval: 0,
            dragging: false,
            value_changed: Signal::new(),
            slider_pressed: Signal::new(),
            slider_moved: Signal::new(),
            slider_released: Signal::new(),
            range_changed: Signal::new(),
        }
    }

    fn policy_for(orientation: Orientation) -> SizePolicyPair {
        match orientation {
            Orientation::Horizontal => {
                SizePolicyPair::new(SizePolicy::Expanding, SizePolicy::Fixed)
            }
            Orientation::Vertical => SizePolicyPair::new(SizePolicy::Fixed, SizePolicy::Expanding),
        }
    }

    // =========================================================================
    // Orientation
    // =========================================================================

    /// Get the orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.base.set_size_policy(Self::policy_for(orientation));
            self.base.update();
        }
    }

    // =========================================================================
    // Value and Range
    // =========================================================================

    /// Get the minimum value.
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Set the minimum value.
    pub fn set_minimum(&mut self, minimum: i32) {
        self.set_range(minimum, self.maximum);
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Set the maximum value.
    pub fn set_maximum(&mut self, maximum: i32) {
        self.set_range(self.minimum, maximum);
    }

    /// Get the current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the current value.
    ///
    /// The value is clamped to the valid range [minimum, maximum].
    pub fn set_value(&mut self, value: i32) {
        let clamped = value.clamp(self.minimum, self.maximum);
        if self.value != clamped {
            self.value = clamped;
            self.base.update();
            self.value_changed.emit(clamped);
        }
    }

    /// Set value using builder pattern.
    pub fn with_value(mut self, value: i32) -> Self {
        self.set_value(value);
        self
    }

    /// Set the value range.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) {
        let (min, max) = if minimum <= maximum {
            (minimum, maximum)
        } else {
            (maximum, minimum)
        };

        if self.minimum != min || self.maximum != max {
            self.minimum = min;
            self.maximum = max;
            // Clamp current value to new range
            let new_value = self.value.clamp(min, max);
            let value_changed = self.value != new_value;
            self.value = new_value;
            self.base.update();
            self.range_changed.emit((min, max));
            if value_changed {
                self.value_changed.emit(new_value);
            }
        }
    }

    /// Set range using builder pattern.
    pub fn with_range(mut self, minimum: i32, maximum: i32) -> Self {
        self.set_range(minimum, maximum);
        self
    }

    // =========================================================================
    // Step Sizes and Ticks
    // =========================================================================

    /// Get the single step size.
    pub fn single_step(&self) -> i32 {
        self.single_step
    }

    /// Set the single step size.
    pub fn set_single_step(&mut self, step: i32) {
        self.single_step = step.max(1);
    }

    /// Set single step using builder pattern.
    pub fn with_single_step(mut self, step: i32) -> Self {
        self.set_single_step(step);
        self
    }

    /// Get the page step size.
    pub fn page_step(&self) -> i32 {
        self.page_step
    }

    /// Set the page step size.
    pub fn set_page_step(&mut self, step: i32) {
        self.page_step = step.max(1);
    }

    /// Get the tick interval.
    pub fn tick_interval(&self) -> i32 {
        self.tick_interval
    }

    /// Set the tick interval.
    ///
    /// If set to 0, the single_step value is used.
    pub fn set_tick_interval(&mut self, interval: i32) {
        let new_interval = interval.max(0);
        if self.tick_interval != new_interval {
            self.tick_interval = new_interval;
            self.base.update();
        }
    }

    /// Set tick interval using builder pattern.
    pub fn with_tick_interval(mut self, interval: i32) -> Self {
        self.set_tick_interval(interval);
        self
    }

    /// Get the effective tick interval.
    pub fn effective_tick_interval(&self) -> i32 {
        if self.tick_interval > 0 {
            self.tick_interval
        } else {
            self.single_step
        }
    }

    // =========================================================================
    // Stepping
    // =========================================================================

    /// Increase the value by one single step.
    pub fn step_up(&mut self) {
        self.set_value(self.value.saturating_add(self.single_step));
    }

    /// Decrease the value by one single step.
    pub fn step_down(&mut self) {
        self.set_value(self.value.saturating_sub(self.single_step));
    }

    /// Increase the value by one page step.
    pub fn page_up(&mut self) {
        self.set_value(self.value.saturating_add(self.page_step));
    }

    /// Decrease the value by one page step.
    pub fn page_down(&mut self) {
        self.set_value(self.value.saturating_sub(self.page_step));
    }

    // =========================================================================
    // Drag Protocol
    // =========================================================================

    /// Check if the thumb is currently being dragged.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Begin a drag gesture.
    ///
    /// Emits `slider_pressed`. No-op if a drag is already active or the
    /// slider is disabled.
    pub fn begin_drag(&mut self) {
        if self.dragging || !self.base.is_effectively_enabled() {
            return;
        }
        self.dragging = true;
        self.slider_pressed.emit(());
        self.base.update();
    }

    /// Move the active drag to a value.
    ///
    /// The value is clamped to the range. Emits `value_changed` and
    /// `slider_moved` when the value actually changes. No-op when no drag
    /// is active.
    pub fn drag_to(&mut self, value: i32) {
        if !self.dragging {
            return;
        }
        let clamped = value.clamp(self.minimum, self.maximum);
        if clamped != self.value {
            self.value = clamped;
            self.base.update();
            self.value_changed.emit(clamped);
            self.slider_moved.emit(clamped);
        }
    }

    /// End the active drag gesture.
    ///
    /// Emits `slider_released`. No-op when no drag is active.
    pub fn end_drag(&mut self) {
        if self.dragging {
            self.dragging = false;
            self.slider_released.emit(());
            self.base.update();
        }
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(Orientation::Horizontal)
    }
}

impl Object for Slider {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for Slider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        match self.orientation {
            Orientation::Horizontal => {
                SizeHint::from_dimensions(100.0, 18.0).with_minimum_dimensions(40.0, 18.0)
            }
            Orientation::Vertical => {
                SizeHint::from_dimensions(18.0, 100.0).with_minimum_dimensions(18.0, 40.0)
            }
        }
    }
}

// Ensure Slider is Send + Sync
static_assertions::assert_impl_all!(Slider: Send, Sync);
