#![forbid(unsafe_code)]

//! Error taxonomy.
//!
//! Three classes with three destinies:
//!
//! - [`PageError`]: caller misuse. Propagates immediately; a defect in the
//!   calling code, not a runtime condition.
//! - [`RenderError`]: a renderer failed while producing an object's HTML.
//!   Caught at the collection boundary and retained, so one bad renderer
//!   never aborts sibling renders.
//! - Routing faults (unknown button, unrecognized scheme) are not errors at
//!   all: the router logs and drops them.

use thiserror::Error;

/// Caller misuse; propagate with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// A list asked for a filter control without a fragment id to scope it.
    #[error("list filtering requires a fragment id")]
    FilterWithoutId,
}

/// A failure while rendering one object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No renderer is registered for the object's concrete type.
    #[error("no renderer registered for {name}")]
    UnknownType {
        /// Display name of the object that could not be dispatched.
        name: String,
    },
    /// The renderer itself reported a failure.
    #[error("renderer failed: {0}")]
    Failed(String),
}

impl RenderError {
    /// Shorthand for a renderer-reported failure.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
