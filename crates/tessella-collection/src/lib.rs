#![forbid(unsafe_code)]

//! Object-collection rendering over a type-dispatched registry.
//!
//! # Role in tessella
//! `tessella-collection` turns lists of domain objects into clickable link
//! fragments and resolves the clicks back: every emitted link id is
//! registered before its HTML exists, so a displayed link always resolves.
//! Single-object rendering is delegated to a rendering registry; renderer
//! failures are caught at this boundary and retained instead of aborting
//! sibling renders.
//!
//! # Primary responsibilities
//! - **RenderingRegistry/RenderOptions**: the registry seam the collection
//!   consumes, and the options renderers receive (element keys win over
//!   caller defaults).
//! - **RendererMap**: a `TypeId`-dispatched registry implementation.
//! - **Element**: transient per-render link descriptors.
//! - **Collection**: the link registry and dispatcher itself.

pub mod collection;
pub mod dispatch;
pub mod element;
pub mod registry;

pub use collection::Collection;
pub use dispatch::{RenderFn, RendererMap};
pub use element::Element;
pub use registry::{RenderOptions, RenderingRegistry};
