#![forbid(unsafe_code)]

//! Shared leaf types for the tessella rendering engine.
//!
//! # Role in tessella
//! `tessella-core` holds everything the page store and the collection
//! dispatcher both depend on: the domain-object abstraction and its
//! identity, the output-event model, the click-routing URL grammar, the
//! host-view seam, and the error taxonomy.
//!
//! # Primary responsibilities
//! - **ModelObject/ObjectId**: what a renderable domain object is, and the
//!   identity links are keyed by.
//! - **PageEvent/EventQueue**: fixed-payload output events drained by the
//!   embedding host.
//! - **scheme**: the `link://` / `btn://` / `file://` URL grammar shared by
//!   link emission and click routing.
//! - **HostView/NodeHandle**: the patchable host document, abstracted so the
//!   diff engine never touches a concrete DOM API.

pub mod error;
pub mod event;
pub mod host;
pub mod model;
pub mod scheme;

pub use error::{PageError, RenderError};
pub use event::{EventQueue, PageEvent};
pub use host::{HostView, NodeHandle};
pub use model::{ModelObject, ObjectId, SharedObject};
pub use url::Url;
