//! Error types for the Armature widget layer.

use armature_core::ObjectError;
use thiserror::Error;

/// Errors produced by the widget layer.
///
/// The error surface is deliberately narrow: bad user input (unparsable
/// text, out-of-bound values) and missing icon/color lookups are all
/// recovered locally by the widgets and never reach the caller. What
/// remains is structural misuse — a programming mistake, not user input.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A member was requested through a decoration wrapper that exists on
    /// neither the wrapper nor its inner widget.
    #[error("no member named `{member}` on the wrapper or its inner widget")]
    UnknownMember {
        /// The member name that failed to resolve.
        member: String,
    },

    /// An object-system operation failed.
    #[error(transparent)]
    Object(#[from] ObjectError),
}

/// A specialized Result type for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;
