//! Controls and composites for Armature.
//!
//! The simple controls mirror their native-toolkit counterparts:
//!
//! - [`Slider`]: integer range control
//! - [`LineEdit`]: single-line text entry
//! - [`Label`]: read-only text display
//! - [`PushButton`]: clickable button
//! - [`ProgressBar`]: bounded progress display
//!
//! The composites are the reason this crate exists — several controls
//! kept synchronized as one value:
//!
//! - [`FloatSlider`]: digit-scaled float facade over [`Slider`]
//! - [`LabelSlider`] / [`FloatLabelSlider`]: slider with a value readout
//! - [`EditSlider`] / [`EditFloatSlider`]: slider + text entry + steppers
//! - [`ProgressEdit`]: progress bar + text entry + steppers
//! - [`CollapsibleGroupBox`]: checkable container with child show/hide
//! - [`IconDecoration`]: transparent status-icon wrapper

mod collapsible_group_box;
mod edit_slider;
mod float_slider;
mod icon_decoration;
mod label;
mod label_slider;
mod line_edit;
mod progress_bar;
mod progress_edit;
mod push_button;
mod slider;

pub use collapsible_group_box::{CollapsibleGroupBox, IndicatorState};
pub use edit_slider::{EditFloatSlider, EditSlider};
pub use float_slider::FloatSlider;
pub use icon_decoration::{IconBadge, IconDecoration};
pub use label::{HorizontalAlign, Label};
pub use label_slider::{FloatLabelSlider, LabelSlider};
pub use line_edit::LineEdit;
pub use progress_bar::ProgressBar;
pub use progress_edit::ProgressEdit;
pub use push_button::PushButton;
pub use slider::Slider;
