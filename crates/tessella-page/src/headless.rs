#![forbid(unsafe_code)]

//! In-memory host for tests and static HTML export.
//!
//! [`HeadlessHost`] captures what a real webview would display: the last
//! full document pushed by the page, and the stream of container patches
//! applied since. Patches are recorded, not folded back into the document
//! string; the document plus the patch stream together describe the
//! displayed state, which is exactly what tests want to assert on.

use tessella_core::host::{HostView, NodeHandle};

use crate::page::Page;

/// One recorded container patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRecord {
    /// Element id the patch targeted.
    pub container: String,
    /// Replacement outer HTML; empty when the node was cleared.
    pub html: String,
}

/// Headless host view capturing the document and the patch stream.
#[derive(Debug, Default, Clone)]
pub struct HeadlessHost {
    document: String,
    patches: Vec<PatchRecord>,
    scrolled_to: Option<String>,
}

impl HeadlessHost {
    /// Create an empty headless host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last full document pushed by the page.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Patches recorded since the last [`HeadlessHost::take_patches`].
    #[must_use]
    pub fn patches(&self) -> &[PatchRecord] {
        &self.patches
    }

    /// Take the recorded patches, leaving the stream empty.
    pub fn take_patches(&mut self) -> Vec<PatchRecord> {
        std::mem::take(&mut self.patches)
    }

    /// Anchor of the last scroll request, if any.
    #[must_use]
    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }
}

/// Patch handle recording into its [`HeadlessHost`].
#[derive(Debug)]
pub struct HeadlessNode<'a> {
    host: &'a mut HeadlessHost,
    container: String,
}

impl NodeHandle for HeadlessNode<'_> {
    fn replace(&mut self, html: &str) {
        self.host.patches.push(PatchRecord {
            container: self.container.clone(),
            html: html.to_owned(),
        });
    }
}

impl HostView for HeadlessHost {
    type Node<'a>
        = HeadlessNode<'a>
    where
        Self: 'a;

    fn set_document(&mut self, html: &str) {
        self.document = html.to_owned();
    }

    fn find_container(&mut self, id: &str) -> Option<Self::Node<'_>> {
        // The container exists if the last full document mentions its id.
        let marker = format!("id=\"{id}\"");
        if self.document.contains(&marker) {
            Some(HeadlessNode {
                host: self,
                container: id.to_owned(),
            })
        } else {
            None
        }
    }

    fn scroll_to(&mut self, anchor: &str) {
        self.scrolled_to = Some(anchor.to_owned());
    }
}

/// Render a page built by `build` to a standalone HTML document.
pub fn to_html(build: impl FnOnce(&mut Page<HeadlessHost>)) -> String {
    let mut page = Page::new(HeadlessHost::new());
    build(&mut page);
    page.document()
}

/// Body-only variant of [`to_html`].
pub fn to_html_body(build: impl FnOnce(&mut Page<HeadlessHost>)) -> String {
    let mut page = Page::new(HeadlessHost::new());
    build(&mut page);
    page.document_body()
}
