//! Colors, icon resources, and status lookup maps.
//!
//! The decoration widgets render icons by *name*: an [`IconSource`] is a
//! key into whatever icon theme the host application ships, and a
//! [`Color`] is the tint applied to it. [`StatusIconSet`] and
//! [`StatusColorSet`] map application-defined status keys ("ok", "warn",
//! "error", ...) to icon/color pairs, with fallback entries so a missing
//! key is never fatal.

use std::collections::HashMap;

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::from_rgba(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from float components.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }
}

/// A named icon resource resolved by the host's icon theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconSource {
    name: String,
}

impl IconSource {
    /// Create an icon source with the given theme name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The neutral "no status" icon.
    pub fn none() -> Self {
        Self::new("none")
    }

    /// Get the icon's theme name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Maps status keys to icon resources, with a fallback for unknown keys.
///
/// The map is built once by the application and shared read-only between
/// all decoration widgets that use it.
#[derive(Clone, Debug)]
pub struct StatusIconSet {
    icons: HashMap<String, IconSource>,
    fallback: IconSource,
}

impl Default for StatusIconSet {
    fn default() -> Self {
        Self {
            icons: HashMap::new(),
            fallback: IconSource::none(),
        }
    }
}

impl StatusIconSet {
    /// Create an empty set with the "none" fallback icon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an icon for a status key (builder pattern).
    pub fn with_icon(mut self, status: impl Into<String>, icon: IconSource) -> Self {
        self.icons.insert(status.into(), icon);
        self
    }

    /// Replace the fallback icon (builder pattern).
    pub fn with_fallback(mut self, icon: IconSource) -> Self {
        self.fallback = icon;
        self
    }

    /// Look up the icon for a status key.
    ///
    /// `None` (no status) and unknown keys both resolve to the fallback.
    pub fn get(&self, status: Option<&str>) -> &IconSource {
        status
            .and_then(|key| self.icons.get(key))
            .unwrap_or(&self.fallback)
    }
}

/// Maps status keys to colors, with a fallback for unknown keys.
#[derive(Clone, Debug)]
pub struct StatusColorSet {
    colors: HashMap<String, Color>,
    fallback: Color,
}

impl Default for StatusColorSet {
    fn default() -> Self {
        Self {
            colors: HashMap::new(),
            fallback: Color::BLACK,
        }
    }
}

impl StatusColorSet {
    /// Create an empty set with a black fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a color for a status key (builder pattern).
    pub fn with_color(mut self, status: impl Into<String>, color: Color) -> Self {
        self.colors.insert(status.into(), color);
        self
    }

    /// Replace the fallback color (builder pattern).
    pub fn with_fallback(mut self, color: Color) -> Self {
        self.fallback = color;
        self
    }

    /// Look up the color for a status key.
    ///
    /// `None` (no status) and unknown keys both resolve to the fallback.
    pub fn get(&self, status: Option<&str>) -> Color {
        status
            .and_then(|key| self.colors.get(key))
            .copied()
            .unwrap_or(self.fallback)
    }
}
