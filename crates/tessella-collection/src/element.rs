#![forbid(unsafe_code)]

//! Transient per-render link descriptors.

use std::fmt;

use tessella_core::model::{ObjectId, SharedObject};

use crate::registry::RenderOptions;

/// One renderable entry of a collection.
///
/// Elements are rebuilt on every render call and never persisted; only the
/// object registry outlives a render pass. The `format` template is a
/// snippet with a single `{}` placeholder that receives the anchor (for
/// link lists) or the display text (for section headings).
#[derive(Clone)]
pub struct Element {
    object: SharedObject,
    format: String,
    url: String,
    text: String,
    rendering_options: RenderOptions,
    attributes: Vec<(String, String)>,
}

impl Element {
    /// Create an element for `object`, displayed as `text` and linking to
    /// `url`.
    #[must_use]
    pub fn new(object: SharedObject, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            object,
            format: "{}".to_owned(),
            url: url.into(),
            text: text.into(),
            rendering_options: RenderOptions::new(),
            attributes: Vec::new(),
        }
    }

    /// Wrap the rendered link or heading in a snippet template.
    ///
    /// The template must contain one `{}` placeholder.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Element-specific render options; they win over caller defaults.
    #[must_use]
    pub fn with_rendering_options(mut self, options: RenderOptions) -> Self {
        self.rendering_options = options;
        self
    }

    /// Add an attribute to the element's list line.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// The object this element stands for.
    #[must_use]
    pub fn object(&self) -> &SharedObject {
        &self.object
    }

    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Target URL of the element's anchor.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Element-specific render options.
    #[must_use]
    pub fn rendering_options(&self) -> &RenderOptions {
        &self.rendering_options
    }

    /// List-line attributes.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// The anchor snippet: the format template with the anchor substituted.
    #[must_use]
    pub(crate) fn anchor_html(&self) -> String {
        let anchor = format!("<a href=\"{}\">{}</a>", self.url, self.text);
        self.format.replacen("{}", &anchor, 1)
    }

    /// The heading snippet: the format template with the raw text
    /// substituted.
    #[must_use]
    pub(crate) fn heading_html(&self) -> String {
        self.format.replacen("{}", &self.text, 1)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("object", &ObjectId::of(&self.object))
            .field("text", &self.text)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
