//! Collapsible group box implementation.
//!
//! A titled, checkable container for progressive disclosure: unchecking
//! the title row hides every direct child, checking it shows them again.

use armature_core::{Object, ObjectId, Signal};

use crate::style::IconSource;
use crate::widget::layout::{BoxLayout, ContentMargins};
use crate::widget::{Orientation, Rect, Size, SizeHint, Widget, WidgetBase};

/// Height reserved for the title row.
const TITLE_HEIGHT: f32 = 24.0;

/// Collapsed/expanded indicator state.
///
/// Kept as an explicit enum read by [`CollapsibleGroupBox::indicator_icon`]
/// rather than style text, so renderers switch on state instead of
/// parsing strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorState {
    /// Children hidden; the indicator points at the title.
    Collapsed,
    /// Children visible; the indicator points down.
    Expanded,
}

/// A titled, checkable container that shows/hides its children.
///
/// The container owns its children exclusively: adding a child transfers
/// ownership, and destroying the container destroys them. The invariant
/// it maintains is simple and strict — after any toggle and after any
/// structural change to the children set, every **direct** child's
/// visibility equals the checked state. Descendants of descendants are
/// not touched; a nested collapsed group stays collapsed. The show/hide
/// is immediate, with no animation.
///
/// Vertical and horizontal variants share all of this logic and differ
/// only in the direction of the inner layout.
///
/// # Signals
///
/// - `toggled(bool)`: Emitted when the checked state changes
/// - `children_changed(())`: Emitted when children are added or removed
pub struct CollapsibleGroupBox {
    /// Widget base.
    base: WidgetBase,

    /// Title text displayed in the checkable header.
    title: String,

    /// Whether the content is expanded.
    checked: bool,

    /// Owned child widgets, in insertion order.
    children: Vec<Box<dyn Widget>>,

    /// Inner layout for child positioning.
    layout: BoxLayout,

    /// Signal emitted when the checked state changes.
    pub toggled: Signal<bool>,

    /// Signal emitted when children are added or removed.
    pub children_changed: Signal<()>,
}

impl CollapsibleGroupBox {
    /// Create an expanded group box with vertically stacked children.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_orientation(title, Orientation::Vertical)
    }

    /// Create an expanded group box with vertically stacked children.
    pub fn vertical(title: impl Into<String>) -> Self {
        Self::with_orientation(title, Orientation::Vertical)
    }

    /// Create an expanded group box with horizontally stacked children.
    pub fn horizontal(title: impl Into<String>) -> Self {
        Self::with_orientation(title, Orientation::Horizontal)
    }

    fn with_orientation(title: impl Into<String>, orientation: Orientation) -> Self {
        let base = WidgetBase::new::<Self>();
        let mut layout = BoxLayout::new(orientation);
        layout.set_content_margins(ContentMargins::uniform(10.0));

        Self {
            base,
            title: title.into(),
            checked: true,
            children: Vec::new(),
            layout,
            toggled: Signal::new(),
            children_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Title
    // =========================================================================

    /// Get the title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.base.update();
    }

    // =========================================================================
    // Checked State
    // =========================================================================

    /// Check if the content is expanded.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state.
    ///
    /// Every direct child's visibility is brought in line with the new
    /// state before `toggled` fires.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.apply_check_state();
            self.base.update();
            self.toggled.emit(checked);
        }
    }

    /// Set the initial checked state using builder pattern.
    pub fn with_checked(mut self, checked: bool) -> Self {
        if self.checked != checked {
            self.checked = checked;
            self.apply_check_state();
        }
        self
    }

    /// Toggle the checked state.
    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }

    /// Get the indicator state for the header.
    pub fn indicator(&self) -> IndicatorState {
        if self.checked {
            IndicatorState::Expanded
        } else {
            IndicatorState::Collapsed
        }
    }

    /// Map an indicator state to its icon.
    pub fn indicator_icon(state: IndicatorState) -> IconSource {
        match state {
            IndicatorState::Collapsed => IconSource::new("right_arrow"),
            IndicatorState::Expanded => IconSource::new("drop_down"),
        }
    }

    /// Re-apply the visibility invariant to every direct child.
    ///
    /// Called on every toggle and every structural change.
    fn apply_check_state(&mut self) {
        for child in &mut self.children {
            child.set_visible(self.checked);
        }
    }

    // =========================================================================
    // Child Management
    // =========================================================================

    /// Add a child widget, taking ownership.
    ///
    /// The child's visibility is immediately brought in line with the
    /// checked state. Returns the index of the new child.
    pub fn add_child(&mut self, child: Box<dyn Widget>) -> usize {
        self.insert_child(self.children.len(), child)
    }

    /// Insert a child widget at the specified index.
    ///
    /// Returns the actual index where the widget was inserted.
    pub fn insert_child(&mut self, index: usize, child: Box<dyn Widget>) -> usize {
        let index = index.min(self.children.len());
        let child_id = child.widget_base().object_id();
        if let Err(err) = child.widget_base().set_parent(Some(self.base.object_id())) {
            tracing::warn!(
                target: "armature::widget::collapsible_group_box",
                %err,
                "failed to reparent child"
            );
        }
        self.children.insert(index, child);
        self.layout.insert_widget(index, child_id, 1);

        self.apply_check_state();
        self.base.update();
        self.children_changed.emit(());
        index
    }

    /// Remove and return the child at the specified index.
    ///
    /// The removed child is unparented and shown again; hidden-because-
    /// collapsed is a property of membership, not of the child.
    pub fn remove_child(&mut self, index: usize) -> Option<Box<dyn Widget>> {
        if index >= self.children.len() {
            return None;
        }
        let mut child = self.children.remove(index);
        self.layout.remove_item(index);
        let _ = child.widget_base().set_parent(None);
        child.set_visible(true);

        self.apply_check_state();
        self.base.update();
        self.children_changed.emit(());
        Some(child)
    }

    /// Remove a child widget by its object ID.
    ///
    /// Returns the removed child if it was found.
    pub fn remove_child_by_id(&mut self, widget_id: ObjectId) -> Option<Box<dyn Widget>> {
        let index = self
            .children
            .iter()
            .position(|child| child.widget_base().object_id() == widget_id)?;
        self.remove_child(index)
    }

    /// Remove and drop all children.
    pub fn clear(&mut self) {
        self.children.clear();
        self.layout.clear();
        self.base.update();
        self.children_changed.emit(());
    }

    /// Get the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if the group box has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the child at the specified index.
    pub fn child_at(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(|child| child.as_ref())
    }

    /// Get the child at the specified index, mutably.
    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut (dyn Widget + 'static)> {
        self.children.get_mut(index).map(|child| child.as_mut())
    }

    /// Find the index of a child widget by object ID.
    pub fn index_of(&self, widget_id: ObjectId) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.widget_base().object_id() == widget_id)
    }

    /// Iterate over the children.
    pub fn children(&self) -> impl Iterator<Item = &dyn Widget> {
        self.children.iter().map(|child| child.as_ref())
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the content area rectangle (below the title row).
    pub fn contents_rect(&self) -> Rect {
        let rect = self.base.rect();
        Rect::new(
            0.0,
            TITLE_HEIGHT,
            rect.width(),
            (rect.height() - TITLE_HEIGHT).max(0.0),
        )
    }

    fn relayout(&mut self) {
        // Collapsed children keep their last geometry; they are hidden,
        // not resized.
        if !self.checked {
            return;
        }
        let slots = self.layout.distribute(self.contents_rect());
        for (id, slot) in slots {
            if let Some(index) = self.index_of(id) {
                if let Some(child) = self.children.get_mut(index) {
                    child.set_geometry(slot);
                }
            }
        }
    }
}

impl Object for CollapsibleGroupBox {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for CollapsibleGroupBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let margins = self.layout.content_margins();
        let title_width = self.title.chars().count() as f32 * 10.0 + TITLE_HEIGHT;

        if !self.checked || self.children.is_empty() {
            return SizeHint::from_dimensions(title_width.max(100.0), TITLE_HEIGHT);
        }

        let spacing = self.layout.spacing() * self.children.len().saturating_sub(1) as f32;
        let mut content = Size::ZERO;
        for child in &self.children {
            let hint = child.size_hint().preferred;
            match self.layout.orientation() {
                Orientation::Vertical => {
                    content.width = content.width.max(hint.width);
                    content.height += hint.height;
                }
                Orientation::Horizontal => {
                    content.width += hint.width;
                    content.height = content.height.max(hint.height);
                }
            }
        }
        match self.layout.orientation() {
            Orientation::Vertical => content.height += spacing,
            Orientation::Horizontal => content.width += spacing,
        }

        SizeHint::from_dimensions(
            (content.width + margins.horizontal()).max(title_width),
            content.height + margins.vertical() + TITLE_HEIGHT,
        )
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        self.relayout();
    }
}

static_assertions::assert_impl_all!(CollapsibleGroupBox: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::{Label, Slider};
    use armature_core::init_global_registry;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::Arc;

    fn setup() {
        init_global_registry();
    }

    fn make_child() -> Box<dyn Widget> {
        Box::new(Label::new("child"))
    }

    #[test]
    fn test_creation_defaults() {
        setup();
        let group = CollapsibleGroupBox::new("Settings");
        assert_eq!(group.title(), "Settings");
        assert!(group.is_checked()); // expanded by default
        assert!(group.is_empty());
        assert_eq!(group.indicator(), IndicatorState::Expanded);
    }

    #[test]
    fn test_children_follow_checked_state() {
        setup();
        let mut group = CollapsibleGroupBox::new("Options");
        group.add_child(make_child());
        group.add_child(make_child());

        assert!(group.child_at(0).unwrap().is_visible());
        assert!(group.child_at(1).unwrap().is_visible());

        group.set_checked(false);
        assert!(!group.child_at(0).unwrap().is_visible());
        assert!(!group.child_at(1).unwrap().is_visible());

        group.set_checked(true);
        assert!(group.child_at(0).unwrap().is_visible());
        assert!(group.child_at(1).unwrap().is_visible());
    }

    #[test]
    fn test_child_added_while_collapsed_is_hidden() {
        setup();
        let mut group = CollapsibleGroupBox::new("Options").with_checked(false);
        group.add_child(make_child());
        assert!(!group.child_at(0).unwrap().is_visible());
    }

    #[test]
    fn test_structural_change_reapplies_invariant() {
        setup();
        let mut group = CollapsibleGroupBox::new("Options").with_checked(false);

        // A widget that was visible on its own becomes hidden on insert.
        let child: Box<dyn Widget> = Box::new(Slider::default());
        assert!(child.is_visible());
        group.add_child(child);
        assert!(!group.child_at(0).unwrap().is_visible());

        // Removal hands the widget back visible.
        let removed = group.remove_child(0).unwrap();
        assert!(removed.is_visible());
    }

    #[test]
    fn test_toggle_round_trip_restores_visibility() {
        setup();
        let mut group = CollapsibleGroupBox::new("Round trip");
        for _ in 0..3 {
            group.add_child(make_child());
        }

        let before: Vec<bool> = group.children().map(|c| c.is_visible()).collect();
        group.toggle();
        group.toggle();
        let after: Vec<bool> = group.children().map(|c| c.is_visible()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_direct_children_only() {
        setup();
        // A collapsed inner group keeps its own children hidden even when
        // the outer group expands again.
        let mut inner = CollapsibleGroupBox::new("inner");
        inner.add_child(make_child());
        inner.set_checked(false);
        let inner_id = inner.object_id();

        let mut outer = CollapsibleGroupBox::new("outer");
        outer.add_child(Box::new(inner));

        outer.set_checked(false);
        outer.set_checked(true);

        let index = outer.index_of(inner_id).unwrap();
        let inner_ref = outer.child_at(index).unwrap();
        // The inner group itself is visible again...
        assert!(inner_ref.is_visible());
        // ...but its own child stays hidden: the outer toggle is not recursive.
        assert!(!inner_ref.widget_base().children_ids().is_empty());
        let registry = armature_core::global_registry().unwrap();
        for grandchild in inner_ref.widget_base().children_ids() {
            assert_eq!(
                registry.widget_state(grandchild).unwrap().unwrap().visible,
                false
            );
        }
    }

    #[test]
    fn test_toggled_signal() {
        setup();
        let mut group = CollapsibleGroupBox::new("Toggle");
        let observed = Arc::new(AtomicBool::new(true));
        let observed_clone = observed.clone();
        group.toggled.connect(move |&checked| {
            observed_clone.store(checked, Ordering::SeqCst);
        });

        group.set_checked(false);
        assert!(!observed.load(Ordering::SeqCst));

        // No re-emission for the same state
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        group.toggled.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        group.set_checked(false);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_children_changed_signal() {
        setup();
        let mut group = CollapsibleGroupBox::new("Signals");
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();
        group.children_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        group.add_child(make_child());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        group.remove_child(0);
        assert_eq!(count.load(Ordering::SeqCst), 2);
        group.clear();
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_indicator_icons() {
        setup();
        assert_eq!(
            CollapsibleGroupBox::indicator_icon(IndicatorState::Collapsed).name(),
            "right_arrow"
        );
        assert_eq!(
            CollapsibleGroupBox::indicator_icon(IndicatorState::Expanded).name(),
            "drop_down"
        );
    }

    #[test]
    fn test_orientation_variants_share_toggle_logic() {
        setup();
        let mut horizontal = CollapsibleGroupBox::horizontal("H");
        horizontal.add_child(make_child());
        horizontal.set_checked(false);
        assert!(!horizontal.child_at(0).unwrap().is_visible());
        horizontal.set_checked(true);
        assert!(horizontal.child_at(0).unwrap().is_visible());
    }

    #[test]
    fn test_collapsed_size_hint_is_title_only() {
        setup();
        let mut group = CollapsibleGroupBox::new("Size");
        group.add_child(make_child());

        let expanded = group.size_hint().preferred;
        group.set_checked(false);
        let collapsed = group.size_hint().preferred;
        assert!(collapsed.height < expanded.height);
        assert_eq!(collapsed.height, TITLE_HEIGHT);
    }
}
