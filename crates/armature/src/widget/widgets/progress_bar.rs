//! Progress bar widget implementation.

use armature_core::{Object, ObjectId, Signal};

use crate::widget::{Orientation, SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase};

/// A bounded progress display.
///
/// The progress text is rendered from a format string with placeholders:
///
/// - `%v` - current value
/// - `%m` - maximum value
/// - `%p` - percentage
///
/// Default format is `"%p%"` which displays "50%" for half completion; the
/// edit composites use `"%v/%m"` for a "7/100" style readout.
///
/// # Signals
///
/// - `value_changed(i32)`: Emitted when the value changes
pub struct ProgressBar {
    /// Widget base.
    base: WidgetBase,

    /// Minimum value.
    minimum: i32,

    /// Maximum value.
    maximum: i32,

    /// Current value.
    value: i32,

    /// Format string for progress text.
    format: String,

    /// Whether the progress text is shown.
    text_visible: bool,

    /// Bar orientation.
    orientation: Orientation,

    /// Signal emitted when the value changes.
    pub value_changed: Signal<i32>,
}

impl ProgressBar {
    /// Create a progress bar over 0..=100 with the `"%p%"` format.
    pub fn new() -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_size_policy(SizePolicyPair::new(SizePolicy::Expanding, SizePolicy::Fixed));

        Self {
            base,
            minimum: 0,
            maximum: 100,
            value: 0,
            format: "%p%".to_string(),
            text_visible: true,
            orientation: Orientation::Horizontal,
            value_changed: Signal::new(),
        }
    }

    /// Get the minimum value.
    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Get the current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the current value.
    ///
    /// The value is clamped to the valid range.
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
            let new_value = self.value.clamp(min, max);
            let value_changed = self.value != new_value;
            self.value = new_value;
            self.base.update();
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

    /// Reset the value to the minimum.
    pub fn reset(&mut self) {
        self.set_value(self.minimum);
    }

    /// Get the completion ratio in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        let range = self.maximum - self.minimum;
        if range <= 0 {
            return 0.0;
        }
        (self.value - self.minimum) as f32 / range as f32
    }

    /// Get the orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.base.update();
        }
    }

    /// Check if the progress text is shown.
    pub fn text_visible(&self) -> bool {
        self.text_visible
    }

    /// Set whether the progress text is shown.
    pub fn set_text_visible(&mut self, visible: bool) {
        if self.text_visible != visible {
            self.text_visible = visible;
            self.base.update();
        }
    }

    /// Get the format string.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Set the format string for progress text.
    pub fn set_format(&mut self, format: impl Into<String>) {
        let new_format = format.into();
        if self.format != new_format {
            self.format = new_format;
            self.base.update();
        }
    }

    /// Set format using builder pattern.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Get the formatted progress text.
    pub fn text(&self) -> String {
        let percent = (self.progress() * 100.0).round() as i32;
        self.format
            .replace("%v", &self.value.to_string())
            .replace("%m", &self.maximum.to_string())
            .replace("%p", &percent.to_string())
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for ProgressBar {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for ProgressBar {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        match self.orientation {
            Orientation::Horizontal => {
                SizeHint::from_dimensions(120.0, 24.0).with_minimum_dimensions(40.0, 24.0)
            }
            Orientation::Vertical => {
                SizeHint::from_dimensions(24.0, 120.0).with_minimum_dimensions(24.0, 40.0)
            }
        }
    }
}

static_assertions::assert_impl_all!(ProgressBar: Send, Sync);
