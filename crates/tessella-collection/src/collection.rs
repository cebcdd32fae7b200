#![forbid(unsafe_code)]

//! The collection: link registry and type-dispatched render entry point.
//!
//! A collection publishes lists of objects as clickable links and resolves
//! clicks on them back to the objects. Object identities are registered
//! *before* any HTML is emitted, so a displayed link can never reference an
//! unregistered object. Single-object rendering delegates to the rendering
//! registry; a renderer failure is retained in a fault list instead of
//! aborting the view, and an `Updated` event fires either way.
//!
//! Every render entry point restores the page to its last saved snapshot
//! first, undoing the previous (possibly partial) render. Combined with the
//! host delivering clicks serially, that makes a render pass effectively a
//! small state machine (restore, render, record outcome) that can never
//! overlap with another.

use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashMap;
use tracing::{debug, warn};
use url::Url;

use tessella_core::error::{PageError, RenderError};
use tessella_core::event::PageEvent;
use tessella_core::host::HostView;
use tessella_core::model::{ObjectId, SharedObject};
use tessella_core::scheme;
use tessella_page::html::ListItem;
use tessella_page::page::{ListOptions, Page, PushOptions};

use crate::element::Element;
use crate::registry::{RenderOptions, RenderingRegistry};

/// Suffix of the container every collection renders its current element
/// into.
const CURRENT_ELEMENT_SUFFIX: &str = "currently-rendered-element";

static NEXT_NAMESPACE: AtomicU64 = AtomicU64::new(0);

/// Renders collections of objects whose per-object rendering is delegated,
/// and resolves clicks on the links it emitted.
pub struct Collection<H: HostView, R: RenderingRegistry<H>> {
    namespace: String,
    registry: R,
    objects: AHashMap<ObjectId, SharedObject>,
    render_faults: Vec<RenderError>,
    enabled: bool,
    _host: PhantomData<fn(&mut Page<H>)>,
}

impl<H: HostView, R: RenderingRegistry<H>> Collection<H, R> {
    /// Create a collection around a rendering registry.
    ///
    /// Every instance gets its own namespace, so several collections can
    /// share one page without click-id collisions.
    pub fn new(registry: R) -> Self {
        let n = NEXT_NAMESPACE.fetch_add(1, Ordering::Relaxed);
        Self {
            namespace: format!("collection-{n}"),
            registry,
            objects: AHashMap::new(),
            render_faults: Vec::new(),
            enabled: true,
            _host: PhantomData,
        }
    }

    /// The namespace prefixing every link id this collection emits.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The rendering registry.
    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable access to the rendering registry.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Faults retained from the last render pass.
    #[must_use]
    pub fn render_faults(&self) -> &[RenderError] {
        &self.render_faults
    }

    /// Resolve a registered object by identity.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SharedObject> {
        self.objects.get(&id)
    }

    /// Forward a renderer registration to the registry.
    pub fn register_type(
        &mut self,
        model: std::any::TypeId,
        renderer: R::Renderer,
        options: RenderOptions,
    ) {
        self.registry.register(model, renderer, options);
    }

    /// Start consuming link clicks and attach the registry's listeners.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.registry.enable();
    }

    /// Stop consuming link clicks and detach the registry's listeners.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.registry.disable();
    }

    /// Empty the object registry, drop retained faults, and clear the
    /// rendering registry's own state.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.render_faults.clear();
        self.registry.clear();
    }

    /// Click target for an element link.
    ///
    /// Interactive targets route through the click scheme; non-interactive
    /// ones are plain in-page anchors.
    #[must_use]
    pub fn element_link_target(&self, object: &SharedObject, interactive: bool) -> String {
        let id = ObjectId::of(object);
        if interactive {
            scheme::link_href(&self.namespace, id)
        } else {
            format!("#{id}")
        }
    }

    /// Render `elements` as one fragment of clickable links.
    ///
    /// Every element's object is registered before any HTML is emitted, so
    /// a click can never reference an unregistered object.
    pub fn render_links(
        &mut self,
        page: &mut Page<H>,
        title: Option<&str>,
        elements: &[Element],
        options: ListOptions,
    ) -> Result<(), PageError> {
        for element in elements {
            self.objects
                .insert(ObjectId::of(element.object()), Rc::clone(element.object()));
        }

        let items: Vec<ListItem> = elements
            .iter()
            .map(|element| {
                let mut item = ListItem::new(element.anchor_html());
                for (name, value) in element.attributes() {
                    item = item.with_attribute(name.as_str(), value.as_str());
                }
                item
            })
            .collect();
        page.render_list(title, &items, options)
    }

    /// Render each element as its own titled section.
    ///
    /// Element-specific render options are merged over `defaults` (element
    /// keys win). A faulting element is retained and does not stop its
    /// siblings; afterwards the fault list holds exactly the failures of
    /// this pass.
    pub fn render_all_elements(
        &mut self,
        page: &mut Page<H>,
        elements: &[Element],
        defaults: &RenderOptions,
    ) {
        self.render_faults.clear();
        for element in elements {
            let id = ObjectId::of(element.object());
            page.push(
                None,
                format!("<h1 id=\"{id}\">{}</h1>", element.heading_html()),
                PushOptions::default(),
            );

            let options = element.rendering_options().merged_over(defaults);
            let object = Rc::clone(element.object());
            self.render_element_inner(page, &object, &options);
        }
    }

    /// Render one object, undoing the previous render first.
    ///
    /// Clears retained faults, restores the page to its last saved
    /// snapshot, and delegates to the rendering registry. A renderer
    /// failure is retained rather than re-raised; an `Updated` event fires
    /// regardless of outcome, and the viewport scrolls to the render
    /// container.
    pub fn render_element(
        &mut self,
        page: &mut Page<H>,
        object: &SharedObject,
        options: &RenderOptions,
    ) {
        self.render_faults.clear();
        self.render_element_inner(page, object, options);
    }

    fn render_element_inner(
        &mut self,
        page: &mut Page<H>,
        object: &SharedObject,
        options: &RenderOptions,
    ) {
        page.restore();

        let mut options = options.clone();
        let target = match options.container_id() {
            Some(id) => id.to_owned(),
            None => {
                let id = format!("{}-{CURRENT_ELEMENT_SUFFIX}", self.namespace);
                options.set_container_id(id.clone());
                id
            }
        };

        if let Err(fault) = self.registry.render(page, object, &options) {
            debug!(%fault, "renderer fault retained");
            self.render_faults.push(fault);
        }
        page.emit(PageEvent::Updated);
        page.host_mut().scroll_to(&target);
    }

    /// Handle one page event; reports whether this collection consumed it.
    ///
    /// Only `link://` clicks inside this collection's namespace are
    /// handled: the id is decoded, resolved through the object registry,
    /// and the object re-rendered. Everything else is left for the
    /// embedding host (or another collection sharing the page).
    pub fn handle_event(&mut self, page: &mut Page<H>, event: &PageEvent) -> bool {
        if !self.enabled {
            return false;
        }
        let PageEvent::LinkClicked(url) = event else {
            return false;
        };
        self.handle_link_click(page, url)
    }

    fn handle_link_click(&mut self, page: &mut Page<H>, url: &Url) -> bool {
        if url.host_str() != Some(scheme::ROUTING_HOST) {
            return false;
        }
        let Some(id) = scheme::namespaced_object_id(url.path(), &self.namespace) else {
            return false;
        };
        let Some(object) = self.objects.get(&id).cloned() else {
            // Inside our namespace but unknown: a dangling link. Consume it
            // so no other handler misreads the id, but do not fail.
            warn!(%url, "link references an object missing from the registry");
            return true;
        };
        self.render_element(page, &object, &RenderOptions::new());
        true
    }
}

impl<H: HostView, R: RenderingRegistry<H>> std::fmt::Debug for Collection<H, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("namespace", &self.namespace)
            .field("objects", &self.objects.len())
            .field("render_faults", &self.render_faults.len())
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
