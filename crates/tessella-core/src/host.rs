#![forbid(unsafe_code)]

//! The host-view seam: the embedding webview as the engine sees it.
//!
//! The diff engine needs exactly three things from a host document: replace
//! the whole document, look up a container element by id and patch it in
//! place, and scroll the viewport. Keeping the lookup behind
//! [`HostView::find_container`] and the patch behind [`NodeHandle::replace`]
//! keeps the engine independent of any concrete DOM API.

/// A patchable handle onto one element of the host document.
pub trait NodeHandle {
    /// Replace the element's outer HTML.
    fn replace(&mut self, html: &str);
}

/// The host document the engine renders into.
pub trait HostView {
    /// Patchable node type returned by container lookup.
    type Node<'a>: NodeHandle
    where
        Self: 'a;

    /// Replace the whole document.
    fn set_document(&mut self, html: &str);

    /// Look up the element with the given id.
    fn find_container(&mut self, id: &str) -> Option<Self::Node<'_>>;

    /// Scroll the viewport to the element with the given id.
    ///
    /// Hosts without a viewport ignore this.
    fn scroll_to(&mut self, anchor: &str) {
        let _ = anchor;
    }
}
