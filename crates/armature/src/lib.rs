//! Armature — composite input controls for panel UIs.
//!
//! Armature provides the handful of input controls a panel layout actually
//! needs but no native toolkit ships as one unit: controls that compose
//! several interacting widgets into a single synchronized value.
//!
//! - [`FloatSlider`](widget::widgets::FloatSlider): a float-valued facade
//!   over an integer range control, scaled by a fixed decimal precision
//! - [`LabelSlider`](widget::widgets::LabelSlider) /
//!   [`FloatLabelSlider`](widget::widgets::FloatLabelSlider): a range
//!   control with a width-stable value readout
//! - [`EditSlider`](widget::widgets::EditSlider) /
//!   [`EditFloatSlider`](widget::widgets::EditFloatSlider): slider,
//!   free-text entry, and stepper buttons kept mutually consistent with a
//!   commit/display split that cannot feed back on itself
//! - [`ProgressEdit`](widget::widgets::ProgressEdit): the same commit
//!   machinery with a progress-style readout
//! - [`CollapsibleGroupBox`](widget::widgets::CollapsibleGroupBox): a
//!   checkable titled container that shows/hides its children
//! - [`IconDecoration`](widget::widgets::IconDecoration): a transparent
//!   wrapper that adds a status icon to any widget
//!
//! Rendering, event routing, and top-level layout belong to the host
//! toolkit. Armature widgets model state, geometry, and interaction
//! semantics; user gestures enter through explicit methods (`drag_to`,
//! `submit`, `click`, ...) invoked from the host's event dispatch, and
//! state changes leave through [`armature_core::Signal`]s.
//!
//! # Example
//!
//! ```
//! use armature_core::init_global_registry;
//! use armature::widget::widgets::EditFloatSlider;
//!
//! init_global_registry();
//!
//! let mut opacity = EditFloatSlider::new(0.0, 1.0, 0.5, 1);
//! opacity.value_changed.connect(|_| println!("opacity changed"));
//!
//! opacity.increment();
//! assert_eq!(opacity.value(), 0.6);
//! ```

pub mod error;
pub mod prelude;
pub mod style;
pub mod widget;

pub use error::{Result, WidgetError};
pub use style::{Color, IconSource, StatusColorSet, StatusIconSet};
