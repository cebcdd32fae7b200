#![forbid(unsafe_code)]

//! HTML assembly helpers.
//!
//! Fragment bodies are built with plain string assembly plus escaping;
//! there is no template language. Renderers are expected to escape any
//! user-controlled text they interpolate: these helpers treat the snippets
//! they are handed as HTML.

use std::path::Path;

use pulldown_cmark::{Parser, html::push_html};
use v_htmlescape::escape;

use tessella_core::scheme;

/// Escape text for inclusion in HTML.
#[must_use]
pub fn escape_text(text: &str) -> String {
    escape(text).to_string()
}

/// `<li>` item helper for name/value renderings.
#[must_use]
pub fn render_item(name: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("<li><b>{name}</b>: {value}</li>"),
        None => format!("<li>{name}</li>"),
    }
}

/// Convert Markdown to HTML and wrap it as a main documentation block.
#[must_use]
pub fn main_doc(text: &str) -> String {
    let mut body = String::new();
    push_html(&mut body, Parser::new(text));
    format!("<div class=\"doc-main\">{body}</div>")
}

/// Build a `file://` anchor for a filesystem path.
#[must_use]
pub fn file_link(path: &Path, text: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        scheme::file_href(path),
        escape(text)
    )
}

/// One prebuilt list line plus optional per-line attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    /// Inner HTML of the line.
    pub html: String,
    /// Attributes emitted on the line's `<li>` element.
    pub attributes: Vec<(String, String)>,
}

impl ListItem {
    /// Create a list item from its inner HTML.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            attributes: Vec::new(),
        }
    }

    /// Add an attribute to the item's `<li>` element.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

/// Item list, optionally preceded by a filter control scoped to `list_id`.
pub(crate) fn list(items: &[ListItem], filter: bool, list_id: Option<&str>) -> String {
    let mut out = String::new();
    if filter && let Some(id) = list_id {
        out.push_str(&format!(
            "<input class=\"list-filter\" type=\"text\" data-list=\"{}\" placeholder=\"Filter\">\n",
            escape(id)
        ));
    }
    match list_id {
        Some(id) => out.push_str(&format!("<ul id=\"{}-list\">\n", escape(id))),
        None => out.push_str("<ul>\n"),
    }
    for item in items {
        out.push_str("<li");
        for (name, value) in &item.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        out.push('>');
        out.push_str(&item.html);
        out.push_str("</li>\n");
    }
    out.push_str("</ul>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escape_text_neutralizes_markup() {
        assert_eq!(escape_text("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn render_item_with_and_without_value() {
        assert_eq!(
            render_item("rate", Some("10 Hz")),
            "<li><b>rate</b>: 10 Hz</li>"
        );
        assert_eq!(render_item("flagged", None), "<li>flagged</li>");
    }

    #[test]
    fn main_doc_wraps_rendered_markdown() {
        let html = main_doc("some *emphasis*");
        assert!(html.starts_with("<div class=\"doc-main\">"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn file_link_targets_the_file_scheme() {
        let html = file_link(Path::new("/var/log/app.log"), "app.log");
        assert_eq!(
            html,
            "<a href=\"file:///var/log/app.log\">app.log</a>"
        );
    }

    #[test]
    fn list_emits_items_with_attributes() {
        let items = vec![
            ListItem::new("<a href=\"#\">first</a>"),
            ListItem::new("second").with_attribute("class", "dim"),
        ];
        let html = list(&items, false, Some("things"));
        assert!(html.contains("<ul id=\"things-list\">"));
        assert!(html.contains("<li><a href=\"#\">first</a></li>"));
        assert!(html.contains("<li class=\"dim\">second</li>"));
    }

    #[test]
    fn filtered_list_gets_a_filter_control() {
        let html = list(&[], true, Some("things"));
        assert!(html.contains("class=\"list-filter\""));
        assert!(html.contains("data-list=\"things\""));
    }
}
