//! Object model for Armature.
//!
//! Provides the base object system with:
//! - Unique object identifiers via arena-based storage
//! - Parent-child ownership relationships with automatic drop cascade
//! - Object naming and lookup
//! - Dynamic property storage
//! - Per-widget visible/enabled state for effective-state queries
//!
//! # Key Types
//!
//! - [`Object`] - Base trait that all objects implement
//! - [`ObjectBase`] - Helper struct for implementing [`Object`]
//! - [`ObjectId`] - Unique stable identifier for each object
//! - [`ObjectRegistry`] - Central registry managing all objects
//! - [`SharedObjectRegistry`] - Thread-safe wrapper around [`ObjectRegistry`]

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A unique identifier for an object in the registry.
    ///
    /// `ObjectId`s are stable handles that remain valid even as the object
    /// tree changes. They become invalid when the object is destroyed.
    pub struct ObjectId;
}

/// Errors that can occur during object operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The object ID is invalid or has been destroyed.
    InvalidObjectId,
    /// Attempted to set an object as its own parent/ancestor.
    CircularParentage,
    /// The property was not found.
    PropertyNotFound,
    /// The property exists but holds a different type.
    PropertyTypeMismatch {
        /// The type name that was requested.
        requested: &'static str,
    },
    /// The object registry is not initialized.
    RegistryNotInitialized,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidObjectId => write!(f, "Invalid or destroyed object ID"),
            Self::CircularParentage => {
                write!(f, "Cannot set an object as its own parent or ancestor")
            }
            Self::PropertyNotFound => write!(f, "Property not found"),
            Self::PropertyTypeMismatch { requested } => {
                write!(f, "Property type mismatch: requested {requested}")
            }
            Self::RegistryNotInitialized => write!(f, "Object registry not initialized"),
        }
    }
}

impl std::error::Error for ObjectError {}

/// Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// Widget-specific state stored in the registry for state propagation.
///
/// This is stored separately from the widget instance so that parent state
/// can be queried by ObjectId when computing effective visibility/enabled
/// state.
#[derive(Clone, Copy, Debug)]
pub struct WidgetState {
    /// Whether the widget is visible (its own state, not considering ancestors).
    pub visible: bool,
    /// Whether the widget is enabled (its own state, not considering ancestors).
    pub enabled: bool,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
        }
    }
}

/// Internal data stored in the registry for each object.
struct ObjectData {
    /// Human-readable name for debugging and lookup.
    name: String,
    /// The type name for debugging.
    type_name: &'static str,
    /// Parent object (if any).
    parent: Option<ObjectId>,
    /// Child objects.
    children: Vec<ObjectId>,
    /// Dynamic properties (type-erased).
    dynamic_properties: HashMap<String, Box<dyn Any + Send + Sync>>,
    /// Widget state for state propagation (None for non-widget objects).
    widget_state: Option<WidgetState>,
}

impl ObjectData {
    fn new(type_name: &'static str) -> Self {
        Self {
            name: String::new(),
            type_name,
            parent: None,
            children: Vec::new(),
            dynamic_properties: HashMap::new(),
            widget_state: None,
        }
    }
}

/// The central registry that manages all objects and their relationships.
///
/// Uses arena-based storage via SlotMap for stable object IDs and efficient
/// parent-child relationship management.
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, ObjectData>,
}

impl ObjectRegistry {
    /// Create a new empty object registry.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Register a new object and return its ID.
    pub fn register<T: Object + 'static>(&mut self) -> ObjectId {
        let data = ObjectData::new(std::any::type_name::<T>());
        let id = self.objects.insert(data);
        tracing::trace!(
            target: "armature_core::object",
            ?id,
            type_name = std::any::type_name::<T>(),
            "registered object"
        );
        id
    }

    /// Remove an object and all its children from the registry.
    ///
    /// This implements Qt's cascade delete behavior where destroying a
    /// parent also destroys all children.
    pub fn destroy(&mut self, id: ObjectId) -> ObjectResult<()> {
        let descendants = self.collect_descendants(id)?;
        tracing::trace!(
            target: "armature_core::object",
            ?id,
            descendant_count = descendants.len(),
            "destroying object tree"
        );

        // Remove from parent's children list.
        if let Some(data) = self.objects.get(id) {
            if let Some(parent_id) = data.parent {
                if let Some(parent_data) = self.objects.get_mut(parent_id) {
                    parent_data.children.retain(|&child| child != id);
                }
            }
        }

        // Destroy all descendants (children first, then self).
        for child_id in descendants {
            self.objects.remove(child_id);
        }
        self.objects.remove(id);

        Ok(())
    }

    /// Collect all descendant IDs in depth-first order (children before parents).
    fn collect_descendants(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        let mut result = Vec::new();
        self.collect_descendants_recursive(id, &mut result)?;
        Ok(result)
    }

    fn collect_descendants_recursive(
        &self,
        id: ObjectId,
        result: &mut Vec<ObjectId>,
    ) -> ObjectResult<()> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        for &child_id in &data.children {
            self.collect_descendants_recursive(child_id, result)?;
            result.push(child_id);
        }
        Ok(())
    }

    /// Check if an object exists in the registry.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Set the parent of an object.
    ///
    /// This handles removing from the old parent and adding to the new
    /// parent. Passing `None` makes the object a root object.
    pub fn set_parent(&mut self, id: ObjectId, new_parent: Option<ObjectId>) -> ObjectResult<()> {
        if !self.objects.contains_key(id) {
            return Err(ObjectError::InvalidObjectId);
        }

        if let Some(parent_id) = new_parent {
            if !self.objects.contains_key(parent_id) {
                return Err(ObjectError::InvalidObjectId);
            }
            if self.is_ancestor_of(id, parent_id)? {
                return Err(ObjectError::CircularParentage);
            }
        }

        // Remove from old parent.
        let old_parent = self.objects.get(id).and_then(|d| d.parent);
        if let Some(old_parent_id) = old_parent {
            if let Some(parent_data) = self.objects.get_mut(old_parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }

        if let Some(data) = self.objects.get_mut(id) {
            data.parent = new_parent;
        }

        if let Some(parent_id) = new_parent {
            if let Some(parent_data) = self.objects.get_mut(parent_id) {
                parent_data.children.push(id);
            }
        }

        Ok(())
    }

    /// Check if `potential_ancestor` is an ancestor of `id`.
    fn is_ancestor_of(&self, potential_ancestor: ObjectId, id: ObjectId) -> ObjectResult<bool> {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return Ok(true);
            }
            current = self.objects.get(current_id).and_then(|d| d.parent);
        }
        Ok(false)
    }

    /// Get the parent of an object.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.objects
            .get(id)
            .map(|d| d.parent)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the children of an object.
    pub fn children(&self, id: ObjectId) -> ObjectResult<&[ObjectId]> {
        self.objects
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.objects
            .get(id)
            .map(|d| d.name.as_str())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Set the object's name.
    pub fn set_object_name(&mut self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.objects
            .get_mut(id)
            .map(|d| d.name = name)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.objects
            .get(id)
            .map(|d| d.type_name)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Find a child by name (direct children only).
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        let children = self.children(id)?;
        for &child_id in children {
            if let Some(data) = self.objects.get(child_id) {
                if data.name == name {
                    return Ok(Some(child_id));
                }
            }
        }
        Ok(None)
    }

    // =========================================================================
    // Dynamic Properties
    // =========================================================================

    /// Set a dynamic property on an object.
    pub fn set_dynamic_property<T: Any + Send + Sync>(
        &mut self,
        id: ObjectId,
        name: impl Into<String>,
        value: T,
    ) -> ObjectResult<()> {
        let data = self.objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        data.dynamic_properties.insert(name.into(), Box::new(value));
        Ok(())
    }

    /// Get a dynamic property from an object.
    pub fn dynamic_property<T: Any>(&self, id: ObjectId, name: &str) -> ObjectResult<Option<&T>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        Ok(data
            .dynamic_properties
            .get(name)
            .and_then(|v| v.downcast_ref::<T>()))
    }

    /// Check whether an object has a dynamic property with the given name.
    pub fn has_dynamic_property(&self, id: ObjectId, name: &str) -> ObjectResult<bool> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        Ok(data.dynamic_properties.contains_key(name))
    }

    /// Remove a dynamic property from an object.
    pub fn remove_dynamic_property(
        &mut self,
        id: ObjectId,
        name: &str,
    ) -> ObjectResult<Option<Box<dyn Any + Send + Sync>>> {
        let data = self.objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        Ok(data.dynamic_properties.remove(name))
    }

    /// Get all dynamic property names for an object.
    pub fn dynamic_property_names(&self, id: ObjectId) -> ObjectResult<Vec<&str>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        Ok(data.dynamic_properties.keys().map(|s| s.as_str()).collect())
    }

    // =========================================================================
    // Widget State (for state propagation)
    // =========================================================================

    /// Initialize widget state for an object.
    ///
    /// Called when a widget is created to set up initial state in the
    /// registry. This enables state propagation queries via
    /// `is_effectively_visible` / `is_effectively_enabled`.
    pub fn init_widget_state(&mut self, id: ObjectId, state: WidgetState) -> ObjectResult<()> {
        let data = self.objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        data.widget_state = Some(state);
        Ok(())
    }

    /// Get the widget state for an object.
    ///
    /// Returns `None` if the object is not a widget or doesn't have state
    /// initialized.
    pub fn widget_state(&self, id: ObjectId) -> ObjectResult<Option<WidgetState>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        Ok(data.widget_state)
    }

    /// Set the visible state for a widget.
    pub fn set_widget_visible(&mut self, id: ObjectId, visible: bool) -> ObjectResult<()> {
        let data = self.objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        let state = data.widget_state.get_or_insert_with(WidgetState::default);
        state.visible = visible;
        Ok(())
    }

    /// Set the enabled state for a widget.
    pub fn set_widget_enabled(&mut self, id: ObjectId, enabled: bool) -> ObjectResult<()> {
        let data = self.objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        let state = data.widget_state.get_or_insert_with(WidgetState::default);
        state.enabled = enabled;
        Ok(())
    }

    /// Check if a widget is effectively visible (itself and all ancestors
    /// are visible).
    ///
    /// Returns `None` if the object doesn't have widget state.
    pub fn is_effectively_visible(&self, id: ObjectId) -> ObjectResult<Option<bool>> {
        self.effective_state(id, |state| state.visible)
    }

    /// Check if a widget is effectively enabled (itself and all ancestors
    /// are enabled).
    ///
    /// Returns `None` if the object doesn't have widget state.
    pub fn is_effectively_enabled(&self, id: ObjectId) -> ObjectResult<Option<bool>> {
        self.effective_state(id, |state| state.enabled)
    }

    fn effective_state(
        &self,
        id: ObjectId,
        flag: impl Fn(WidgetState) -> bool,
    ) -> ObjectResult<Option<bool>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;

        let state = match data.widget_state {
            Some(s) => s,
            None => return Ok(None),
        };

        if !flag(state) {
            return Ok(Some(false));
        }

        let mut current = data.parent;
        while let Some(current_id) = current {
            match self.objects.get(current_id) {
                Some(ancestor_data) => {
                    if let Some(ancestor_state) = ancestor_data.widget_state {
                        if !flag(ancestor_state) {
                            return Ok(Some(false));
                        }
                    }
                    current = ancestor_data.parent;
                }
                None => break,
            }
        }

        Ok(Some(true))
    }

    /// Get the number of registered objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over all root objects (objects with no parent).
    pub fn root_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(id, _)| id)
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper around [`ObjectRegistry`].
///
/// All widgets in a process share one registry; this wrapper serializes
/// access behind a `parking_lot::RwLock`.
pub struct SharedObjectRegistry {
    inner: RwLock<ObjectRegistry>,
}

impl SharedObjectRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ObjectRegistry::new()),
        }
    }

    /// Register a new object and return its ID.
    pub fn register<T: Object + 'static>(&self) -> ObjectId {
        self.inner.write().register::<T>()
    }

    /// Remove an object and all its children from the registry.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check if an object exists in the registry.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.inner.read().contains(id)
    }

    /// Set the parent of an object.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Get the parent of an object.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().parent(id)
    }

    /// Get the children of an object.
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// Get the object's name.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.inner.read().object_name(id).map(|s| s.to_string())
    }

    /// Set the object's name.
    pub fn set_object_name(&self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.inner.write().set_object_name(id, name)
    }

    /// Get the type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.inner.read().type_name(id)
    }

    /// Find a child by name (direct children only).
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().find_child_by_name(id, name)
    }

    /// Set a dynamic property on an object.
    pub fn set_dynamic_property<T: Any + Send + Sync>(
        &self,
        id: ObjectId,
        name: impl Into<String>,
        value: T,
    ) -> ObjectResult<()> {
        self.inner.write().set_dynamic_property(id, name, value)
    }

    /// Get a cloned dynamic property value from an object.
    ///
    /// Returns `Ok(None)` when the property is absent or holds a different
    /// type; the borrow cannot outlive the registry lock, so values are
    /// cloned out.
    pub fn dynamic_property<T: Any + Clone>(
        &self,
        id: ObjectId,
        name: &str,
    ) -> ObjectResult<Option<T>> {
        self.inner
            .read()
            .dynamic_property::<T>(id, name)
            .map(|v| v.cloned())
    }

    /// Check whether an object has a dynamic property with the given name.
    pub fn has_dynamic_property(&self, id: ObjectId, name: &str) -> ObjectResult<bool> {
        self.inner.read().has_dynamic_property(id, name)
    }

    /// Remove a dynamic property from an object.
    pub fn remove_dynamic_property(
        &self,
        id: ObjectId,
        name: &str,
    ) -> ObjectResult<Option<Box<dyn Any + Send + Sync>>> {
        self.inner.write().remove_dynamic_property(id, name)
    }

    /// Get all dynamic property names for an object.
    pub fn dynamic_property_names(&self, id: ObjectId) -> ObjectResult<Vec<String>> {
        self.inner
            .read()
            .dynamic_property_names(id)
            .map(|names| names.into_iter().map(|s| s.to_string()).collect())
    }

    /// Initialize widget state for an object.
    pub fn init_widget_state(&self, id: ObjectId, state: WidgetState) -> ObjectResult<()> {
        self.inner.write().init_widget_state(id, state)
    }

    /// Get the widget state for an object.
    pub fn widget_state(&self, id: ObjectId) -> ObjectResult<Option<WidgetState>> {
        self.inner.read().widget_state(id)
    }

    /// Set the visible state for a widget.
    pub fn set_widget_visible(&self, id: ObjectId, visible: bool) -> ObjectResult<()> {
        self.inner.write().set_widget_visible(id, visible)
    }

    /// Set the enabled state for a widget.
    pub fn set_widget_enabled(&self, id: ObjectId, enabled: bool) -> ObjectResult<()> {
        self.inner.write().set_widget_enabled(id, enabled)
    }

    /// Check if a widget is effectively visible.
    pub fn is_effectively_visible(&self, id: ObjectId) -> ObjectResult<Option<bool>> {
        self.inner.read().is_effectively_visible(id)
    }

    /// Check if a widget is effectively enabled.
    pub fn is_effectively_enabled(&self, id: ObjectId) -> ObjectResult<Option<bool>> {
        self.inner.read().is_effectively_enabled(id)
    }

    /// Get the number of registered objects.
    pub fn object_count(&self) -> usize {
        self.inner.read().object_count()
    }

    /// Get all root objects (objects with no parent).
    pub fn root_objects(&self) -> Vec<ObjectId> {
        self.inner.read().root_objects().collect()
    }

    /// Access the registry with a read lock for complex operations.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ObjectRegistry) -> R,
    {
        f(&self.inner.read())
    }

    /// Access the registry with a write lock for complex operations.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ObjectRegistry) -> R,
    {
        f(&mut self.inner.write())
    }
}

impl Default for SharedObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global object registry (lazy initialized).
static GLOBAL_REGISTRY: OnceLock<SharedObjectRegistry> = OnceLock::new();

/// Initialize the global object registry.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_global_registry() {
    let _ = GLOBAL_REGISTRY.get_or_init(SharedObjectRegistry::new);
}

/// Get a reference to the global object registry.
///
/// Returns an error if the registry hasn't been initialized.
pub fn global_registry() -> ObjectResult<&'static SharedObjectRegistry> {
    GLOBAL_REGISTRY.get().ok_or(ObjectError::RegistryNotInitialized)
}

/// The base trait that all objects must implement.
///
/// Types implementing this trait participate in the object tree, have
/// dynamic properties, and support signals through the
/// [`Signal`](crate::Signal) system.
///
/// # Example
///
/// ```
/// use armature_core::{Object, ObjectId, ObjectBase, init_global_registry};
///
/// init_global_registry();
///
/// struct MyWidget {
///     base: ObjectBase,
///     title: String,
/// }
///
/// impl MyWidget {
///     fn new(title: &str) -> Self {
///         Self {
///             base: ObjectBase::new::<Self>(),
///             title: title.to_string(),
///         }
///     }
/// }
///
/// impl Object for MyWidget {
///     fn object_id(&self) -> ObjectId {
///         self.base.id()
///     }
/// }
///
/// let widget = MyWidget::new("Hello");
/// assert_eq!(widget.title, "Hello");
/// ```
pub trait Object: Any + Send + Sync {
    /// Get this object's unique identifier.
    fn object_id(&self) -> ObjectId;
}

/// Helper for implementing the [`Object`] trait.
///
/// Include this as a field in your object types to handle registration and
/// provide the object ID. On construction, it automatically registers the
/// object with the [`global_registry`]; on drop, it destroys the registry
/// entry (and any registered children, cascade-style).
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Create a new ObjectBase, registering the object in the global registry.
    ///
    /// # Panics
    ///
    /// Panics if the global object registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        let registry = global_registry()
            .expect("object registry not initialized; call init_global_registry() first");
        Self {
            id: registry.register::<T>(),
        }
    }

    /// Get the object's unique ID.
    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the object's name.
    pub fn name(&self) -> String {
        global_registry()
            .and_then(|r| r.object_name(self.id))
            .unwrap_or_default()
    }

    /// Set the object's name.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(registry) = global_registry() {
            let _ = registry.set_object_name(self.id, name.into());
        }
    }

    /// Get the parent object's ID.
    pub fn parent(&self) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.parent(self.id))
            .ok()
            .flatten()
    }

    /// Set the parent object.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        global_registry()?.set_parent(self.id, parent)
    }

    /// Get the IDs of child objects.
    pub fn children(&self) -> Vec<ObjectId> {
        global_registry()
            .and_then(|r| r.children(self.id))
            .unwrap_or_default()
    }

    /// Find a child by name.
    pub fn find_child_by_name(&self, name: &str) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.find_child_by_name(self.id, name))
            .ok()
            .flatten()
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        // Children owned as Rust values destroy their own entries when they
        // drop, so the cascade may find them already gone.
        if let Ok(registry) = global_registry() {
            let _ = registry.destroy(self.id);
        }
    }
}

impl Object for ObjectBase {
    fn object_id(&self) -> ObjectId {
        self.id
    }
}
