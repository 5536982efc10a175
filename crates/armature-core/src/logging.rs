//! Diagnostics helpers for Armature.
//!
//! All modules in this workspace log through [`tracing`] with per-module
//! targets (`armature_core::object`, `armature::widget`, ...). This module
//! adds an object-tree formatter for debugging widget hierarchies:
//!
//! ```
//! use armature_core::{init_global_registry, ObjectTreeDebug};
//!
//! init_global_registry();
//! let tree = ObjectTreeDebug::new();
//! println!("{}", tree.format_all().unwrap());
//! ```

use std::fmt::Write as _;

use crate::object::{global_registry, ObjectId, ObjectRegistry, ObjectResult};

/// Options controlling how the object tree is formatted.
#[derive(Clone, Copy, Debug)]
pub struct TreeFormatOptions {
    /// Include raw object IDs in the output.
    pub show_ids: bool,
    /// Include Rust type names in the output.
    pub show_type_names: bool,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            show_ids: false,
            show_type_names: true,
        }
    }
}

impl TreeFormatOptions {
    /// Options showing everything.
    pub fn detailed() -> Self {
        Self {
            show_ids: true,
            show_type_names: true,
        }
    }

    /// Options showing only object names.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_type_names: false,
        }
    }
}

/// Formats the object tree for debugging.
///
/// Renders each object as `name (TypeName)` with box-drawing connectors,
/// one line per object, children indented under their parent.
pub struct ObjectTreeDebug {
    options: TreeFormatOptions,
}

impl ObjectTreeDebug {
    /// Create a formatter with default options.
    pub fn new() -> Self {
        Self {
            options: TreeFormatOptions::default(),
        }
    }

    /// Create a formatter with the given options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every root object and its descendants.
    pub fn format_all(&self) -> ObjectResult<String> {
        let registry = global_registry()?;
        registry.with_read(|reg| {
            let mut out = String::new();
            let roots: Vec<ObjectId> = reg.root_objects().collect();
            for root in roots {
                self.format_subtree_into(reg, root, 0, &mut out)?;
            }
            Ok(out)
        })
    }

    /// Format one object and its descendants.
    pub fn format_subtree(&self, root: ObjectId) -> ObjectResult<String> {
        let registry = global_registry()?;
        registry.with_read(|reg| {
            let mut out = String::new();
            self.format_subtree_into(reg, root, 0, &mut out)?;
            Ok(out)
        })
    }

    fn format_subtree_into(
        &self,
        reg: &ObjectRegistry,
        id: ObjectId,
        depth: usize,
        out: &mut String,
    ) -> ObjectResult<()> {
        let name = reg.object_name(id)?;
        let label = if name.is_empty() { "<unnamed>" } else { name };

        for _ in 0..depth {
            out.push_str("  ");
        }
        if depth > 0 {
            out.push_str("└ ");
        }
        out.push_str(label);

        if self.options.show_type_names {
            let type_name = reg.type_name(id)?;
            // Strip module path, keep the bare type name.
            let short = type_name.rsplit("::").next().unwrap_or(type_name);
            let _ = write!(out, " ({short})");
        }
        if self.options.show_ids {
            let _ = write!(out, " [{:?}]", id);
        }
        out.push('\n');

        let children: Vec<ObjectId> = reg.children(id)?.to_vec();
        for child in children {
            self.format_subtree_into(reg, child, depth + 1, out)?;
        }
        Ok(())
    }
}

impl Default for ObjectTreeDebug {
    fn default() -> Self {
        Self::new()
    }
}
