//! Convenient re-exports for typical usage.
//!
//! ```
//! use armature::prelude::*;
//!
//! init_global_registry();
//! let slider = EditSlider::new(0, 100, 50);
//! assert_eq!(slider.value(), 50);
//! ```

pub use armature_core::{
    init_global_registry, ConnectionGuard, ConnectionId, Object, ObjectId, Signal,
};

pub use crate::error::{Result, WidgetError};
pub use crate::style::{Color, IconSource, StatusColorSet, StatusIconSet};
pub use crate::widget::layout::{BoxLayout, ContentMargins};
pub use crate::widget::widgets::{
    CollapsibleGroupBox, EditFloatSlider, EditSlider, FloatLabelSlider, FloatSlider,
    IconDecoration, Label, LabelSlider, LineEdit, ProgressBar, ProgressEdit, PushButton, Slider,
};
pub use crate::widget::{
    Orientation, Point, Rect, Size, SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase,
};
