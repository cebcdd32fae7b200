#![forbid(unsafe_code)]

//! The rendering-registry seam consumed by [`Collection`](crate::Collection).
//!
//! The registry maps a domain object's type to renderer logic. Collections
//! forward registrations verbatim and delegate single-object rendering; the
//! registry's failures are its own and are propagated to the caller, which
//! decides whether to retain or re-raise them.

use std::any::TypeId;
use std::collections::BTreeMap;

use tessella_core::error::RenderError;
use tessella_core::host::HostView;
use tessella_core::model::SharedObject;
use tessella_page::Page;

/// Renderer-facing options.
///
/// A container id plus free-form string parameters. Merging is key-by-key
/// with the more specific side winning, mirroring how element options
/// override caller defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    container_id: Option<String>,
    params: BTreeMap<String, String>,
}

impl RenderOptions {
    /// Empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with the container the renderer must render into.
    #[must_use]
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = Some(id.into());
        self
    }

    /// Set the render container.
    pub fn set_container_id(&mut self, id: impl Into<String>) {
        self.container_id = Some(id.into());
    }

    /// The container the renderer must render into, when fixed.
    #[must_use]
    pub fn container_id(&self) -> Option<&str> {
        self.container_id.as_deref()
    }

    /// Add a free-form parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Look up a free-form parameter.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Merge these options over `defaults`; keys present here win.
    #[must_use]
    pub fn merged_over(&self, defaults: &Self) -> Self {
        let mut merged = defaults.clone();
        if let Some(id) = &self.container_id {
            merged.container_id = Some(id.clone());
        }
        for (key, value) in &self.params {
            merged.params.insert(key.clone(), value.clone());
        }
        merged
    }
}

/// Type-dispatch table mapping a domain object's type to renderer logic.
pub trait RenderingRegistry<H: HostView> {
    /// Registered renderer representation.
    type Renderer;

    /// Register a renderer for a concrete model type, with per-type default
    /// options.
    fn register(&mut self, model: TypeId, renderer: Self::Renderer, options: RenderOptions);

    /// Render `object` into the page.
    ///
    /// The failure is the renderer's own and is propagated; the caller
    /// decides its fate.
    fn render(
        &mut self,
        page: &mut Page<H>,
        object: &SharedObject,
        options: &RenderOptions,
    ) -> Result<(), RenderError>;

    /// Attach whatever event listeners the registry needs.
    fn enable(&mut self) {}

    /// Detach the registry's event listeners.
    fn disable(&mut self) {}

    /// Drop the registry's own accumulated state.
    fn clear(&mut self) {}
}
