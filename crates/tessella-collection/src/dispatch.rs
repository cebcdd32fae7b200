#![forbid(unsafe_code)]

//! `TypeId`-dispatched renderer table.
//!
//! [`RendererMap`] is the standard [`RenderingRegistry`] implementation:
//! one boxed render function per concrete model type, registered with
//! per-type default options and dispatched on the object's runtime type.
//! Typed registration through [`RendererMap::register_fn`] hides the
//! downcast from renderer code.

use std::any::{Any, TypeId};
use std::fmt;

use ahash::AHashMap;

use tessella_core::error::RenderError;
use tessella_core::host::HostView;
use tessella_core::model::{ModelObject, SharedObject};
use tessella_page::Page;

use crate::registry::{RenderOptions, RenderingRegistry};

/// Boxed render function stored per model type.
pub type RenderFn<H> =
    Box<dyn Fn(&mut Page<H>, &dyn ModelObject, &RenderOptions) -> Result<(), RenderError>>;

struct Entry<H: HostView> {
    render: RenderFn<H>,
    defaults: RenderOptions,
}

/// `TypeId` → renderer dispatch table with per-type default options.
pub struct RendererMap<H: HostView> {
    entries: AHashMap<TypeId, Entry<H>>,
    enabled: bool,
}

impl<H: HostView> RendererMap<H> {
    /// Create an empty, enabled table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: AHashMap::new(),
            enabled: true,
        }
    }

    /// Register a typed render function.
    ///
    /// The object is downcast to `M` before the handler runs; dispatch
    /// guarantees the downcast matches.
    pub fn register_fn<M, F>(&mut self, defaults: RenderOptions, render: F)
    where
        M: ModelObject,
        F: Fn(&mut Page<H>, &M, &RenderOptions) -> Result<(), RenderError> + 'static,
    {
        let boxed: RenderFn<H> = Box::new(move |page, object, options| {
            let any: &dyn Any = object;
            let object = any
                .downcast_ref::<M>()
                .ok_or_else(|| RenderError::UnknownType {
                    name: std::any::type_name::<M>().to_owned(),
                })?;
            render(page, object, options)
        });
        RenderingRegistry::register(self, TypeId::of::<M>(), boxed, defaults);
    }

    /// Whether event listeners are attached.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether any type is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: HostView> Default for RendererMap<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HostView> fmt::Debug for RendererMap<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererMap")
            .field("types", &self.entries.len())
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl<H: HostView> RenderingRegistry<H> for RendererMap<H> {
    type Renderer = RenderFn<H>;

    fn register(&mut self, model: TypeId, renderer: Self::Renderer, options: RenderOptions) {
        self.entries.insert(
            model,
            Entry {
                render: renderer,
                defaults: options,
            },
        );
    }

    fn render(
        &mut self,
        page: &mut Page<H>,
        object: &SharedObject,
        options: &RenderOptions,
    ) -> Result<(), RenderError> {
        let type_id = object.concrete_type_id();
        let Some(entry) = self.entries.get(&type_id) else {
            return Err(RenderError::UnknownType {
                name: object.display_name(),
            });
        };
        let merged = options.merged_over(&entry.defaults);
        (entry.render)(page, &**object, &merged)
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use tessella_page::{HeadlessHost, PushOptions};

    use super::*;

    struct Pump {
        flow: u32,
    }

    impl ModelObject for Pump {}

    struct Valve;

    impl ModelObject for Valve {
        fn explicit_name(&self) -> Option<&str> {
            Some("the valve")
        }
    }

    fn page() -> Page<HeadlessHost> {
        Page::new(HeadlessHost::new())
    }

    #[test]
    fn dispatches_on_the_concrete_type() {
        let mut map: RendererMap<HeadlessHost> = RendererMap::new();
        map.register_fn::<Pump, _>(RenderOptions::new(), |page, pump, _options| {
            page.push(None, format!("<p>flow {}</p>", pump.flow), PushOptions::default());
            Ok(())
        });

        let mut page = page();
        let pump: SharedObject = Rc::new(Pump { flow: 42 });
        map.render(&mut page, &pump, &RenderOptions::new())
            .expect("a renderer is registered");

        assert_eq!(page.fragments().len(), 1);
        assert!(page.fragments()[0].html().contains("flow 42"));
    }

    #[test]
    fn unknown_types_are_reported_by_display_name() {
        let mut map: RendererMap<HeadlessHost> = RendererMap::new();
        let mut page = page();
        let valve: SharedObject = Rc::new(Valve);

        let error = map
            .render(&mut page, &valve, &RenderOptions::new())
            .expect_err("nothing is registered");
        assert_eq!(
            error,
            RenderError::UnknownType {
                name: "the valve".to_owned(),
            }
        );
    }

    #[test]
    fn per_type_defaults_are_merged_under_call_options() {
        let mut map: RendererMap<HeadlessHost> = RendererMap::new();
        map.register_fn::<Pump, _>(
            RenderOptions::new().with_param("style", "compact").with_param("depth", "1"),
            |_page, _pump, options| {
                assert_eq!(options.param("style"), Some("compact"));
                assert_eq!(options.param("depth"), Some("2"));
                Ok(())
            },
        );

        let mut page = page();
        let pump: SharedObject = Rc::new(Pump { flow: 1 });
        map.render(
            &mut page,
            &pump,
            &RenderOptions::new().with_param("depth", "2"),
        )
        .expect("renderer succeeds");
    }

    #[test]
    fn clear_drops_every_registration() {
        let mut map: RendererMap<HeadlessHost> = RendererMap::new();
        map.register_fn::<Pump, _>(RenderOptions::new(), |_page, _pump, _options| Ok(()));
        assert_eq!(map.len(), 1);

        map.clear();
        assert!(map.is_empty());
    }
}
