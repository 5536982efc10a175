//! Stretch-factor box layout.

use armature_core::ObjectId;

use super::ContentMargins;
use crate::widget::geometry::Rect;
use crate::widget::Orientation;

/// One entry in a [`BoxLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutItem {
    /// The widget occupying this slot.
    pub widget: ObjectId,
    /// Stretch factor relative to the other items (0 counts as 1).
    pub stretch: u32,
}

/// Arranges child widgets in a row or column by stretch factor.
///
/// Each item receives a share of the content area proportional to its
/// stretch factor, the same contract as Qt's `QBoxLayout::addWidget(w,
/// stretch)` that panel code composes against. The layout holds widget IDs
/// only; the owning composite matches IDs back to its fields when applying
/// the computed rectangles.
pub struct BoxLayout {
    orientation: Orientation,
    spacing: f32,
    margins: ContentMargins,
    items: Vec<LayoutItem>,
}

impl BoxLayout {
    /// Create a horizontal layout with no margins.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Create a vertical layout with no margins.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Create a layout with the given orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            spacing: 4.0,
            margins: ContentMargins::default(),
            items: Vec::new(),
        }
    }

    /// Get the layout orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the spacing between items.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Set the spacing between items.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing.max(0.0);
    }

    /// Get the content margins.
    pub fn content_margins(&self) -> ContentMargins {
        self.margins
    }

    /// Set the content margins.
    pub fn set_content_margins(&mut self, margins: ContentMargins) {
        self.margins = margins;
    }

    /// Add a widget with stretch factor 1.
    pub fn add_widget(&mut self, widget: ObjectId) {
        self.add_widget_with_stretch(widget, 1);
    }

    /// Add a widget with an explicit stretch factor.
    pub fn add_widget_with_stretch(&mut self, widget: ObjectId, stretch: u32) {
        self.items.push(LayoutItem { widget, stretch });
    }

    /// Insert a widget at the given index (clamped to the item count).
    pub fn insert_widget(&mut self, index: usize, widget: ObjectId, stretch: u32) -> usize {
        let index = index.min(self.items.len());
        self.items.insert(index, LayoutItem { widget, stretch });
        index
    }

    /// Remove the item at the given index.
    pub fn remove_item(&mut self, index: usize) -> Option<LayoutItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove the item holding the given widget.
    ///
    /// Returns `true` if the widget was found and removed.
    pub fn remove_widget(&mut self, widget: ObjectId) -> bool {
        if let Some(index) = self.items.iter().position(|item| item.widget == widget) {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Get the items.
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Split `rect` between the items proportionally to their stretch
    /// factors.
    ///
    /// Returns one `(widget, rect)` pair per item, in item order. Rects
    /// are in the same coordinate space as `rect`.
    pub fn distribute(&self, rect: Rect) -> Vec<(ObjectId, Rect)> {
        if self.items.is_empty() {
            return Vec::new();
        }

        let content = Rect::new(
            rect.origin.x + self.margins.left,
            rect.origin.y + self.margins.top,
            (rect.width() - self.margins.horizontal()).max(0.0),
            (rect.height() - self.margins.vertical()).max(0.0),
        );

        let total_spacing = self.spacing * (self.items.len().saturating_sub(1)) as f32;
        let available = match self.orientation {
            Orientation::Horizontal => (content.width() - total_spacing).max(0.0),
            Orientation::Vertical => (content.height() - total_spacing).max(0.0),
        };

        let total_stretch: u32 = self.items.iter().map(|i| i.stretch.max(1)).sum();
        let unit = available / total_stretch as f32;

        let mut result = Vec::with_capacity(self.items.len());
        let mut offset = 0.0;
        for item in &self.items {
            let length = unit * item.stretch.max(1) as f32;
            let slot = match self.orientation {
                Orientation::Horizontal => Rect::new(
                    content.origin.x + offset,
                    content.origin.y,
                    length,
                    content.height(),
                ),
                Orientation::Vertical => Rect::new(
                    content.origin.x,
                    content.origin.y + offset,
                    content.width(),
                    length,
                ),
            };
            result.push((item.widget, slot));
            offset += length + self.spacing;
        }
        result
    }
}
