//! Status-icon decoration wrapper.
//!
//! [`IconDecoration`] pairs an arbitrary widget with a small status icon
//! while staying API-transparent: the wrapper derefs to the inner widget,
//! so any member it does not declare itself resolves against the widget it
//! wraps. Code that only knows the inner widget's interface cannot tell
//! the widget was wrapped.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use armature_core::{global_registry, Object, ObjectId};

use crate::error::WidgetError;
use crate::style::{Color, IconSource, StatusColorSet, StatusIconSet};
use crate::widget::layout::{BoxLayout, ContentMargins};
use crate::widget::{Rect, SizeHint, Widget, WidgetBase};

/// Stretch factors for the icon : inner row.
const ICON_STRETCH: u32 = 1;
const INNER_STRETCH: u32 = 10;

/// The icon region of an [`IconDecoration`].
///
/// Holds the resolved icon, tint, and render size; the host draws it.
pub struct IconBadge {
    /// Widget base.
    base: WidgetBase,

    /// The resolved icon resource.
    icon: IconSource,

    /// The tint color.
    color: Color,

    /// Render size (both dimensions).
    icon_size: f32,
}

impl IconBadge {
    fn new(icon_size: f32) -> Self {
        Self {
            base: WidgetBase::new::<Self>(),
            icon: IconSource::none(),
            color: Color::BLACK,
            icon_size,
        }
    }

    /// Get the resolved icon resource.
    pub fn icon(&self) -> &IconSource {
        &self.icon
    }

    /// Get the tint color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Get the render size.
    pub fn icon_size(&self) -> f32 {
        self.icon_size
    }

    fn set_rendering(&mut self, icon: IconSource, color: Color, icon_size: f32) {
        self.icon = icon;
        self.color = color;
        self.icon_size = icon_size;
        self.base.update();
    }
}

impl Object for IconBadge {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for IconBadge {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::from_dimensions(self.icon_size, self.icon_size)
    }
}

/// A transparent wrapper that adds a status icon beside any widget.
///
/// The wrapper owns the inner widget exclusively; dropping the wrapper
/// drops the inner widget. The status-to-icon and status-to-color maps
/// are shared, read-only references supplied at construction — the
/// wrapper never mutates them, and missing entries fall back to the
/// maps' defaults rather than failing.
///
/// # Transparency
///
/// The wrapper's own members always win: its `Widget` implementation and
/// inherent methods (`set_status`, `current_status`, `badge`, ...) shadow
/// anything of the same name on the inner widget. Everything else —
/// method calls, reads — falls through to the inner widget via `Deref`:
///
/// ```
/// use std::sync::Arc;
/// use armature_core::init_global_registry;
/// use armature::style::{StatusColorSet, StatusIconSet};
/// use armature::widget::widgets::{IconDecoration, LineEdit};
///
/// init_global_registry();
///
/// let edit = LineEdit::new().with_text("hello");
/// let mut decorated = IconDecoration::new(
///     edit,
///     Arc::new(StatusIconSet::new()),
///     Arc::new(StatusColorSet::new()),
///     24.0,
/// );
///
/// decorated.set_status(Some("warn"));
/// // LineEdit's interface is reachable straight through the wrapper:
/// assert_eq!(decorated.text(), "hello");
/// ```
///
/// The runtime face of the same rule covers the dynamic-property surface:
/// [`property`](Self::property) / [`set_property`](Self::set_property) /
/// [`remove_property`](Self::remove_property) resolve against the wrapper
/// first and forward to the inner widget otherwise. A member that exists
/// on neither side is a programming mistake and reports
/// [`WidgetError::UnknownMember`] — the one failure in this widget that
/// surfaces to the caller.
pub struct IconDecoration<W: Widget> {
    /// Widget base.
    base: WidgetBase,

    /// The icon region, laid out beside the inner widget.
    badge: IconBadge,

    /// The wrapped widget.
    inner: W,

    /// Shared status-to-icon map.
    icons: Arc<StatusIconSet>,

    /// Shared status-to-color map.
    colors: Arc<StatusColorSet>,

    /// Row layout (icon stretch 1, inner stretch 10).
    layout: BoxLayout,

    /// The current status key.
    status: Option<String>,
}

impl<W: Widget> IconDecoration<W> {
    /// Wrap a widget, taking ownership of it.
    ///
    /// `icon_size` is the badge's base size; each
    /// [`set_status`](Self::set_status) re-renders the icon at the inner
    /// widget's current natural height. The neutral icon is rendered
    /// immediately.
    pub fn new(
        inner: W,
        icons: Arc<StatusIconSet>,
        colors: Arc<StatusColorSet>,
        icon_size: f32,
    ) -> Self {
        let base = WidgetBase::new::<Self>();
        let badge = IconBadge::new(icon_size);

        let mut layout = BoxLayout::horizontal();
        layout.set_content_margins(ContentMargins::default());
        layout.add_widget_with_stretch(badge.object_id(), ICON_STRETCH);
        layout.add_widget_with_stretch(inner.widget_base().object_id(), INNER_STRETCH);

        let _ = badge.widget_base().set_parent(Some(base.object_id()));
        let _ = inner.widget_base().set_parent(Some(base.object_id()));

        let mut this = Self {
            base,
            badge,
            inner,
            icons,
            colors,
            layout,
            status: None,
        };
        this.set_status(None);
        this
    }

    /// Set the status key, re-rendering the icon.
    ///
    /// Missing icon or color entries fall back to the maps' defaults;
    /// unknown keys are never an error. The icon is rendered at the inner
    /// widget's current natural height.
    pub fn set_status(&mut self, status: Option<&str>) {
        let icon = self.icons.get(status).clone();
        let color = self.colors.get(status);
        let size = self.inner.size_hint().preferred.height;

        self.badge.set_rendering(icon, color, size);
        self.status = status.map(String::from);
        tracing::trace!(
            target: "armature::widget::icon_decoration",
            status = ?self.status,
            icon = self.badge.icon().name(),
            "status updated"
        );
    }

    /// Get the current status key.
    pub fn current_status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Access the icon region.
    pub fn badge(&self) -> &IconBadge {
        &self.badge
    }

    /// Access the wrapped widget.
    ///
    /// Plain member access goes through `Deref`; this accessor exists for
    /// when the wrapper declares a member of the same name.
    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// Access the wrapped widget mutably.
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    // =========================================================================
    // Dynamic Property Forwarding
    // =========================================================================

    /// Read a dynamic property, consulting the wrapper first and the
    /// inner widget second.
    ///
    /// Reports [`WidgetError::UnknownMember`] when neither side has the
    /// property.
    pub fn property<T: std::any::Any + Clone>(&self, name: &str) -> Result<T, WidgetError> {
        let registry = global_registry()?;
        if let Some(value) = registry.dynamic_property::<T>(self.base.object_id(), name)? {
            return Ok(value);
        }
        let inner_id = self.inner.widget_base().object_id();
        if let Some(value) = registry.dynamic_property::<T>(inner_id, name)? {
            tracing::trace!(
                target: "armature::widget::icon_decoration",
                member = name,
                "forwarding property read to inner widget"
            );
            return Ok(value);
        }
        Err(WidgetError::UnknownMember {
            member: name.to_string(),
        })
    }

    /// Write a dynamic property.
    ///
    /// A property the wrapper already holds is overwritten in place (the
    /// wrapper's members win); anything else is written onto the inner
    /// widget.
    pub fn set_property<T: std::any::Any + Send + Sync>(
        &self,
        name: &str,
        value: T,
    ) -> Result<(), WidgetError> {
        let registry = global_registry()?;
        let own_id = self.base.object_id();
        if registry.has_dynamic_property(own_id, name)? {
            registry.set_dynamic_property(own_id, name, value)?;
            return Ok(());
        }
        tracing::trace!(
            target: "armature::widget::icon_decoration",
            member = name,
            "forwarding property write to inner widget"
        );
        let inner_id = self.inner.widget_base().object_id();
        registry.set_dynamic_property(inner_id, name, value)?;
        Ok(())
    }

    /// Delete a dynamic property from the wrapper, or failing that, from
    /// the inner widget.
    ///
    /// Reports [`WidgetError::UnknownMember`] when neither side has it.
    pub fn remove_property(&self, name: &str) -> Result<(), WidgetError> {
        let registry = global_registry()?;
        if registry
            .remove_dynamic_property(self.base.object_id(), name)?
            .is_some()
        {
            return Ok(());
        }
        let inner_id = self.inner.widget_base().object_id();
        if registry.remove_dynamic_property(inner_id, name)?.is_some() {
            tracing::trace!(
                target: "armature::widget::icon_decoration",
                member = name,
                "forwarded property delete to inner widget"
            );
            return Ok(());
        }
        Err(WidgetError::UnknownMember {
            member: name.to_string(),
        })
    }

    fn relayout(&mut self) {
        for (id, rect) in self.layout.distribute(self.base.rect()) {
            if id == self.badge.object_id() {
                self.badge.set_geometry(rect);
            } else if id == self.inner.widget_base().object_id() {
                self.inner.set_geometry(rect);
            }
        }
    }
}

impl<W: Widget> Deref for IconDecoration<W> {
    type Target = W;

    fn deref(&self) -> &W {
        &self.inner
    }
}

impl<W: Widget> DerefMut for IconDecoration<W> {
    fn deref_mut(&mut self) -> &mut W {
        &mut self.inner
    }
}

impl<W: Widget> Object for IconDecoration<W> {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl<W: Widget> Widget for IconDecoration<W> {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let inner_hint = self.inner.size_hint();
        let badge_hint = self.badge.size_hint();
        SizeHint::from_dimensions(
            badge_hint.preferred.width + self.layout.spacing() + inner_hint.preferred.width,
            inner_hint.preferred.height.max(badge_hint.preferred.height),
        )
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        self.relayout();
    }
}

static_assertions::assert_impl_all!(IconDecoration<super::LineEdit>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::LineEdit;
    use armature_core::init_global_registry;

    fn setup() {
        init_global_registry();
    }

    fn icon_maps() -> (Arc<StatusIconSet>, Arc<StatusColorSet>) {
        let icons = StatusIconSet::new()
            .with_icon("ok", IconSource::new("check"))
            .with_icon("warn", IconSource::new("warning"));
        let colors = StatusColorSet::new()
            .with_color("ok", Color::from_rgb8(0, 200, 0))
            .with_color("warn", Color::from_rgb8(255, 160, 0));
        (Arc::new(icons), Arc::new(colors))
    }

    #[test]
    fn test_neutral_icon_on_construction() {
        setup();
        let (icons, colors) = icon_maps();
        let decorated = IconDecoration::new(LineEdit::new(), icons, colors, 24.0);

        assert_eq!(decorated.current_status(), None);
        assert_eq!(decorated.badge().icon().name(), "none");
        assert_eq!(decorated.badge().color(), Color::BLACK);
    }

    #[test]
    fn test_set_status_resolves_icon_and_color() {
        setup();
        let (icons, colors) = icon_maps();
        let mut decorated = IconDecoration::new(LineEdit::new(), icons, colors, 24.0);

        decorated.set_status(Some("warn"));
        assert_eq!(decorated.current_status(), Some("warn"));
        assert_eq!(decorated.badge().icon().name(), "warning");
        assert_eq!(decorated.badge().color(), Color::from_rgb8(255, 160, 0));
    }

    #[test]
    fn test_unknown_status_falls_back() {
        setup();
        // Empty maps: every status renders the fallback icon and color.
        let mut decorated = IconDecoration::new(
            LineEdit::new().with_text("payload"),
            Arc::new(StatusIconSet::new()),
            Arc::new(StatusColorSet::new()),
            24.0,
        );

        decorated.set_status(Some("warn"));
        assert_eq!(decorated.current_status(), Some("warn"));
        assert_eq!(decorated.badge().icon().name(), "none");
        assert_eq!(decorated.badge().color(), Color::BLACK);

        // The inner widget is untouched and reachable through the wrapper.
        assert_eq!(decorated.text(), "payload");
    }

    #[test]
    fn test_icon_sized_to_inner_height() {
        setup();
        let (icons, colors) = icon_maps();
        let edit = LineEdit::new();
        let inner_height = edit.size_hint().preferred.height;
        let mut decorated = IconDecoration::new(edit, icons, colors, 64.0);

        decorated.set_status(Some("ok"));
        assert_eq!(decorated.badge().icon_size(), inner_height);
    }

    #[test]
    fn test_deref_transparency() {
        setup();
        let (icons, colors) = icon_maps();
        let mut decorated =
            IconDecoration::new(LineEdit::new().with_text("abc"), icons, colors, 24.0);

        // Reads and calls fall through to LineEdit.
        assert_eq!(decorated.text(), "abc");
        decorated.insert("d");
        assert_eq!(decorated.text(), "abcd");
    }

    #[test]
    fn test_wrapper_members_shadow_inner() {
        setup();
        let (icons, colors) = icon_maps();
        let decorated = IconDecoration::new(LineEdit::new(), icons, colors, 24.0);

        // Both the wrapper and the inner widget implement Widget; the
        // wrapper's implementation wins and reports its own identity.
        let wrapper_id = Widget::widget_base(&decorated).object_id();
        assert_eq!(wrapper_id, decorated.object_id());
        assert_ne!(wrapper_id, decorated.inner().object_id());
    }

    #[test]
    fn test_property_forwarding() {
        setup();
        let (icons, colors) = icon_maps();
        let decorated = IconDecoration::new(LineEdit::new(), icons, colors, 24.0);
        let registry = global_registry().unwrap();

        // A property on the inner widget is readable through the wrapper.
        registry
            .set_dynamic_property(decorated.inner().object_id(), "unit", "px".to_string())
            .unwrap();
        assert_eq!(decorated.property::<String>("unit").unwrap(), "px");

        // New writes land on the inner widget.
        decorated.set_property("role", "opacity".to_string()).unwrap();
        assert_eq!(
            registry
                .dynamic_property::<String>(decorated.inner().object_id(), "role")
                .unwrap(),
            Some("opacity".to_string())
        );

        // A wrapper-held property shadows the inner widget's.
        registry
            .set_dynamic_property(decorated.object_id(), "unit", "%".to_string())
            .unwrap();
        assert_eq!(decorated.property::<String>("unit").unwrap(), "%");
        decorated.set_property("unit", "pt".to_string()).unwrap();
        assert_eq!(decorated.property::<String>("unit").unwrap(), "pt");
    }

    #[test]
    fn test_unknown_member_is_reported() {
        setup();
        let (icons, colors) = icon_maps();
        let decorated = IconDecoration::new(LineEdit::new(), icons, colors, 24.0);

        let err = decorated.property::<String>("missing").unwrap_err();
        assert!(matches!(
            err,
            WidgetError::UnknownMember { member } if member == "missing"
        ));

        let err = decorated.remove_property("missing").unwrap_err();
        assert!(matches!(err, WidgetError::UnknownMember { .. }));
    }

    #[test]
    fn test_remove_property_forwards() {
        setup();
        let (icons, colors) = icon_maps();
        let decorated = IconDecoration::new(LineEdit::new(), icons, colors, 24.0);
        let registry = global_registry().unwrap();

        registry
            .set_dynamic_property(decorated.inner().object_id(), "tag", 7i32)
            .unwrap();
        decorated.remove_property("tag").unwrap();
        assert!(!registry
            .has_dynamic_property(decorated.inner().object_id(), "tag")
            .unwrap());
    }

    #[test]
    fn test_dropping_wrapper_drops_inner() {
        setup();
        let registry = global_registry().unwrap();
        let (icons, colors) = icon_maps();
        let decorated = IconDecoration::new(LineEdit::new(), icons, colors, 24.0);
        let inner_id = decorated.inner().object_id();
        let wrapper_id = decorated.object_id();

        drop(decorated);
        assert!(!registry.contains(inner_id));
        assert!(!registry.contains(wrapper_id));
    }
}
