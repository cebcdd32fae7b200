#![forbid(unsafe_code)]

//! The page: fragment store, diff protocol, click routing, and assembly.
//!
//! A [`Page`] owns an ordered sequence of [`Fragment`]s and a host view.
//! Publishing is upsert-style: pushing under an existing id patches only
//! that fragment's container node, while appending rebuilds the whole
//! document (insertion changes the surrounding structure). `save` captures
//! a structural snapshot; `restore` reverts the *displayed* content to it,
//! removing fragments the snapshot does not know about.
//!
//! Click routing never fails: URLs that reference an unknown button or an
//! unrecognized scheme are logged and dropped.

use std::collections::HashMap;

use tracing::{debug, warn};
use url::Url;

use tessella_core::error::PageError;
use tessella_core::event::{EventQueue, PageEvent};
use tessella_core::host::{HostView, NodeHandle};
use tessella_core::model::{ObjectId, SharedObject};
use tessella_core::scheme::{self, ClickRoute};

use crate::fragment::{Button, Fragment};
use crate::html::{self, ListItem};

/// Options for [`Page::push`].
#[derive(Debug, Clone, Default)]
pub struct PushOptions {
    /// Fragment id. Pushing under an existing id updates that fragment in
    /// place; omitting the id always appends with an auto-assigned one.
    pub id: Option<String>,
    /// Buttons attached to the fragment when it is first created.
    pub buttons: Vec<Button>,
}

impl PushOptions {
    /// Options targeting the given fragment id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            buttons: Vec::new(),
        }
    }

    /// Attach buttons to the fragment.
    #[must_use]
    pub fn buttons(mut self, buttons: Vec<Button>) -> Self {
        self.buttons = buttons;
        self
    }
}

/// Options for [`Page::render_list`].
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Emit a text filter control above the list. Requires a fragment id.
    pub filter: bool,
    /// Push options for the resulting fragment.
    pub push: PushOptions,
}

/// Fragment store and diff engine over a host view.
pub struct Page<H: HostView> {
    host: H,
    title: Option<String>,
    fragments: Vec<Fragment>,
    saved: Option<Vec<Fragment>>,
    object_uris: HashMap<ObjectId, String>,
    javascript: Vec<String>,
    events: EventQueue,
    next_auto_id: u64,
}

impl<H: HostView> Page<H> {
    /// Create an empty page over the given host view.
    pub fn new(host: H) -> Self {
        Self {
            host,
            title: None,
            fragments: Vec::new(),
            saved: None,
            object_uris: HashMap::new(),
            javascript: Vec::new(),
            events: EventQueue::new(),
            next_auto_id: 0,
        }
    }

    /// The host view.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host view.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Page title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the page title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// The current fragment sequence, in display order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Append an event to the outbox.
    pub fn emit(&mut self, event: PageEvent) {
        self.events.emit(event);
    }

    /// Pop the oldest pending event.
    pub fn poll_event(&mut self) -> Option<PageEvent> {
        self.events.poll()
    }

    /// Take every pending event, oldest first.
    pub fn take_events(&mut self) -> Vec<PageEvent> {
        self.events.take()
    }

    /// Reference a script from the assembled document's head.
    pub fn load_javascript(&mut self, path: impl Into<String>) {
        self.javascript.push(path.into());
    }

    /// Associate a URI with an object, for [`Page::link_to`].
    pub fn register_uri(&mut self, object: &SharedObject, uri: impl Into<String>) {
        self.object_uris.insert(ObjectId::of(object), uri.into());
    }

    /// The URI registered for an object, if any.
    #[must_use]
    pub fn uri_for(&self, object: &SharedObject) -> Option<&str> {
        self.object_uris.get(&ObjectId::of(object)).map(String::as_str)
    }

    /// Build an anchor for a registered object, or plain escaped text for
    /// an unregistered one.
    ///
    /// The text defaults to the object's display name and is always
    /// escaped. Registered URIs without a scheme are normalized onto the
    /// link scheme.
    #[must_use]
    pub fn link_to(&self, object: &SharedObject, text: Option<&str>) -> String {
        let text = match text {
            Some(text) => html::escape_text(text),
            None => html::escape_text(&object.display_name()),
        };
        match self.uri_for(object) {
            Some(uri) => format!("<a href=\"{}\">{text}</a>", scheme::absolutize(uri)),
            None => text,
        }
    }

    /// Add or update a fragment.
    ///
    /// When the id matches an existing fragment, its title and html are
    /// replaced and only that fragment's container node is patched.
    /// Otherwise the fragment is appended (with an auto-assigned id when
    /// none was given) and the whole document is rebuilt.
    pub fn push(&mut self, title: Option<&str>, html: impl Into<String>, options: PushOptions) {
        let html = html.into();
        if let Some(id) = options.id.as_deref()
            && let Some(index) = self.fragments.iter().position(|f| f.id() == id)
        {
            let fragment = &mut self.fragments[index];
            fragment.set_title(title.map(str::to_owned));
            fragment.set_html(html);
            let container = fragment.id().to_owned();
            let rendered = fragment.to_html();
            self.patch_container(&container, &rendered);
            return;
        }

        let id = options.id.unwrap_or_else(|| self.auto_id());
        self.fragments.push(Fragment::new(
            title.map(str::to_owned),
            html,
            id,
            options.buttons,
        ));
        self.update_document();
    }

    /// Render a list of prebuilt item snippets and push it as one fragment.
    ///
    /// With `filter: true`, a text filter control is emitted above the
    /// list; this requires a fragment id to scope the control to, and
    /// asking for one without the other is caller misuse.
    pub fn render_list(
        &mut self,
        title: Option<&str>,
        items: &[ListItem],
        options: ListOptions,
    ) -> Result<(), PageError> {
        if options.filter && options.push.id.is_none() {
            return Err(PageError::FilterWithoutId);
        }
        let html = html::list(items, options.filter, options.push.id.as_deref());
        self.push(title, html, options.push);
        Ok(())
    }

    /// Capture a structural snapshot of the fragment sequence.
    ///
    /// Only the most recent snapshot is retained; a later `save`
    /// overwrites it.
    pub fn save(&mut self) {
        self.saved = Some(self.fragments.clone());
    }

    /// Revert the displayed content to the last snapshot.
    ///
    /// No-op without a snapshot. Fragments whose html changed since the
    /// snapshot get their container patched back to the snapshot's html;
    /// the in-memory fragment keeps its current content, ready for a fresh
    /// render on top. Fragments absent from the snapshot are removed: their
    /// container is cleared and the entry dropped. The snapshot is
    /// consumed.
    pub fn restore(&mut self) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        let saved_by_id: HashMap<&str, &Fragment> =
            saved.iter().map(|fragment| (fragment.id(), fragment)).collect();

        let mut reverts: Vec<(String, String)> = Vec::new();
        let mut removed: Vec<String> = Vec::new();
        self.fragments.retain(|fragment| {
            if let Some(old) = saved_by_id.get(fragment.id()) {
                if old.html() != fragment.html() {
                    reverts.push((fragment.id().to_owned(), old.html().to_owned()));
                }
                true
            } else {
                removed.push(fragment.id().to_owned());
                false
            }
        });

        for (id, old_html) in reverts {
            self.patch_container(&id, &old_html);
        }
        for id in removed {
            self.patch_container(&id, "");
        }
    }

    /// Remove every fragment and blank the host document.
    pub fn clear(&mut self) {
        self.fragments.clear();
        self.host.set_document("");
    }

    /// Route one incoming click URL from the host.
    ///
    /// `btn://` toggles a button and patches its node; `link://` and
    /// `file://` are surfaced as events. Unknown buttons and unrecognized
    /// schemes are logged and dropped; routing never fails.
    pub fn route_click(&mut self, url: Url) {
        match ClickRoute::classify(url) {
            ClickRoute::Button { id, state } => self.toggle_button(&id, state),
            ClickRoute::Link { url, .. } => self.events.emit(PageEvent::LinkClicked(url)),
            ClickRoute::FileOpen(url) => self.events.emit(PageEvent::FileOpenRequested(url)),
            ClickRoute::Unroutable(url) => warn!(%url, "ignored click with unroutable URL"),
        }
    }

    fn toggle_button(&mut self, id: &str, state: bool) {
        let mut hit: Option<(String, String)> = None;
        'fragments: for fragment in &mut self.fragments {
            for button in fragment.buttons_mut() {
                if button.id() == id {
                    button.set_state(state);
                    hit = Some((button.html_id(), button.render()));
                    break 'fragments;
                }
            }
        }

        match hit {
            Some((html_id, rendered)) => {
                self.patch_container(&html_id, &rendered);
                self.events.emit(PageEvent::ButtonToggled {
                    id: id.to_owned(),
                    state,
                });
            }
            None => {
                let mut known: Vec<&str> = self
                    .fragments
                    .iter()
                    .flat_map(|fragment| fragment.buttons().iter().map(Button::id))
                    .collect();
                known.sort_unstable();
                warn!(
                    button = %id,
                    known = %known.join(", "),
                    "invalid button URL: no matching button"
                );
            }
        }
    }

    /// Assemble the full document.
    #[must_use]
    pub fn document(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        if let Some(title) = &self.title {
            out.push_str(&format!("<title>{}</title>\n", html::escape_text(title)));
        }
        for script in &self.javascript {
            out.push_str(&format!(
                "<script src=\"{}\"></script>\n",
                html::escape_text(script)
            ));
        }
        out.push_str("</head>\n<body>\n");
        out.push_str(&self.document_body());
        out.push_str("</body>\n</html>\n");
        out
    }

    /// Assemble only the body content.
    #[must_use]
    pub fn document_body(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&format!(
                "<h1 class=\"page-title\">{}</h1>\n",
                html::escape_text(title)
            ));
        }
        for fragment in &self.fragments {
            out.push_str(&fragment.to_html());
            out.push('\n');
        }
        out
    }

    /// Push the assembled document to the host.
    pub fn update_document(&mut self) {
        let document = self.document();
        self.host.set_document(&document);
    }

    fn patch_container(&mut self, id: &str, html: &str) {
        match self.host.find_container(id) {
            Some(mut node) => node.replace(html),
            None => debug!(container = %id, "container not present in host document"),
        }
    }

    fn auto_id(&mut self) -> String {
        self.next_auto_id += 1;
        format!("page-fragment-{}", self.next_auto_id)
    }
}

impl<H: HostView + std::fmt::Debug> std::fmt::Debug for Page<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("host", &self.host)
            .field("title", &self.title)
            .field("fragments", &self.fragments.len())
            .field("saved", &self.saved.is_some())
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}
