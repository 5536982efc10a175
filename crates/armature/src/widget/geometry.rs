//! Geometry primitives and layout size hints.
//!
//! This module provides the plain-data geometry types widgets describe
//! themselves with. Coordinates are logical pixels; the host toolkit maps
//! them to device pixels.

/// A point in 2D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Size {
    /// A zero size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a new rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Get the rectangle's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Get the rectangle's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check whether a point lies inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.size.height
    }
}

/// A widget's preferred size plus optional minimum and maximum bounds.
///
/// Layout code treats `preferred` as the natural size; `minimum` and
/// `maximum` bound how far the widget may be squeezed or stretched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeHint {
    /// The size the widget would like to have.
    pub preferred: Size,
    /// The smallest acceptable size, if constrained.
    pub minimum: Option<Size>,
    /// The largest acceptable size, if constrained.
    pub maximum: Option<Size>,
}

impl SizeHint {
    /// Create a hint with only a preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a hint from preferred dimensions.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size (builder pattern).
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the minimum size from dimensions (builder pattern).
    pub fn with_minimum_dimensions(self, width: f32, height: f32) -> Self {
        self.with_minimum(Size::new(width, height))
    }

    /// Set the maximum size (builder pattern).
    pub fn with_maximum(mut self, maximum: Size) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// The effective minimum: the explicit minimum, or the preferred size.
    pub fn effective_minimum(&self) -> Size {
        self.minimum.unwrap_or(self.preferred)
    }
}

/// How a widget wants to grow or shrink along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizePolicy {
    /// The size hint is the only acceptable size.
    Fixed,
    /// The hint is a minimum; the widget can grow.
    Minimum,
    /// The hint is preferred but the widget can grow and shrink.
    #[default]
    Preferred,
    /// The widget wants as much space as possible.
    Expanding,
}

/// Horizontal and vertical size policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizePolicyPair {
    /// Policy along the horizontal axis.
    pub horizontal: SizePolicy,
    /// Policy along the vertical axis.
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    /// Create a new policy pair.
    pub const fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}
