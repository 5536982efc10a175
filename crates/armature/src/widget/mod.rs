//! Widget system for Armature.
//!
//! The module splits into:
//!
//! - [`base`] / [`traits`]: the [`WidgetBase`] struct and [`Widget`] trait
//! - [`geometry`]: plain-data geometry and size-hint types
//! - [`layout`]: child arrangement with stretch hints
//! - [`widgets`]: the concrete controls and composites

pub mod base;
pub mod geometry;
pub mod layout;
pub mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use geometry::{Point, Rect, Size, SizeHint, SizePolicy, SizePolicyPair};
pub use traits::{widget_id, Widget};

/// Orientation of a widget or layout axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Lay out along the horizontal axis.
    #[default]
    Horizontal,
    /// Lay out along the vertical axis.
    Vertical,
}
