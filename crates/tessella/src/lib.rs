#![forbid(unsafe_code)]

//! tessella public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! The engine renders arbitrary domain objects into HTML fragments, keeps
//! them synchronized inside a host webview through targeted patches, and
//! routes in-page clicks back to handler code:
//!
//! 1. Register renderers per model type on a [`RendererMap`].
//! 2. Publish link lists through a [`Collection`] onto a [`Page`].
//! 3. Drain the page's events after each click the host delivers, feeding
//!    them to [`Collection::handle_event`] first.

// --- Core re-exports -------------------------------------------------------

pub use tessella_core::error::{PageError, RenderError};
pub use tessella_core::event::{EventQueue, PageEvent};
pub use tessella_core::host::{HostView, NodeHandle};
pub use tessella_core::model::{ANONYMOUS_NAME, ModelObject, ObjectId, SharedObject};
pub use tessella_core::scheme::{self, ClickRoute};
pub use tessella_core::Url;

// --- Page re-exports -------------------------------------------------------

pub use tessella_page::fragment::{Button, Fragment};
pub use tessella_page::headless::{HeadlessHost, PatchRecord, to_html, to_html_body};
pub use tessella_page::html::{ListItem, escape_text, file_link, main_doc, render_item};
pub use tessella_page::page::{ListOptions, Page, PushOptions};

// --- Collection re-exports -------------------------------------------------

pub use tessella_collection::{Collection, Element, RenderFn, RenderOptions, RendererMap};
pub use tessella_collection::registry::RenderingRegistry;

// --- Prelude ---------------------------------------------------------------

/// Types needed by almost every embedding.
pub mod prelude {
    pub use crate::{
        Button, ClickRoute, Collection, Element, HeadlessHost, HostView, ListItem, ListOptions,
        ModelObject, NodeHandle, ObjectId, Page, PageError, PageEvent, PushOptions, RenderError,
        RenderOptions, RendererMap, RenderingRegistry, SharedObject, Url,
    };
}
