#![forbid(unsafe_code)]

//! Fragments and their buttons.

use v_htmlescape::escape;

use tessella_core::scheme;

/// A toggle control owned by exactly one [`Fragment`].
///
/// Renders as an anchor whose href encodes the *next* state
/// (`btn://metaruby/<id>#on` while off, `#off` while on). Click routing
/// flips the state and re-renders only this anchor's node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    id: String,
    on_label: String,
    off_label: String,
    state: bool,
}

impl Button {
    /// Create a button, off by default, with `text (on)` / `text (off)`
    /// labels.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: id.into(),
            on_label: format!("{text} (on)"),
            off_label: format!("{text} (off)"),
            state: false,
        }
    }

    /// Label shown while the button is off (the one offering to switch on).
    #[must_use]
    pub fn with_on_label(mut self, label: impl Into<String>) -> Self {
        self.on_label = label.into();
        self
    }

    /// Label shown while the button is on.
    #[must_use]
    pub fn with_off_label(mut self, label: impl Into<String>) -> Self {
        self.off_label = label.into();
        self
    }

    /// Start in the given state.
    #[must_use]
    pub fn with_state(mut self, state: bool) -> Self {
        self.state = state;
        self
    }

    /// The button's id, as carried in its toggle URL.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current toggle state.
    #[must_use]
    pub const fn state(&self) -> bool {
        self.state
    }

    /// Set the toggle state.
    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Element id of the rendered anchor: the button id with anything
    /// unsafe for an HTML id replaced.
    #[must_use]
    pub fn html_id(&self) -> String {
        self.id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect()
    }

    /// Label for the current state.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.state {
            &self.off_label
        } else {
            &self.on_label
        }
    }

    /// Render the anchor for the current state.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "<a id=\"{}\" href=\"{}\">{}</a>",
            self.html_id(),
            scheme::button_href(&self.id, !self.state),
            escape(self.label()),
        )
    }
}

/// An addressable, independently patchable block of rendered content.
///
/// Identity is the id; the assembled document wraps every fragment in a
/// container keyed by it, so later pushes and restores can patch exactly
/// this block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    title: Option<String>,
    html: String,
    id: String,
    buttons: Vec<Button>,
}

impl Fragment {
    pub(crate) fn new(
        title: Option<String>,
        html: String,
        id: String,
        buttons: Vec<Button>,
    ) -> Self {
        Self {
            title,
            html,
            id,
            buttons,
        }
    }

    /// Stable identifier of this fragment (and of its container element).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Section title, when the fragment has one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Body HTML.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The fragment's buttons, in declaration order.
    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub(crate) fn buttons_mut(&mut self) -> &mut [Button] {
        &mut self.buttons
    }

    pub(crate) fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub(crate) fn set_html(&mut self, html: String) {
        self.html = html;
    }

    /// Render this fragment wrapped in its patchable container, including
    /// the auto-generated button bar.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<div id=\"{}\" class=\"page-fragment\">\n",
            escape(&self.id)
        ));
        if let Some(title) = &self.title {
            out.push_str(&format!(
                "<h2 class=\"fragment-title\">{}</h2>\n",
                escape(title)
            ));
        }
        if !self.buttons.is_empty() {
            out.push_str("<div class=\"fragment-buttons\">");
            for (i, button) in self.buttons.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&button.render());
            }
            out.push_str("</div>\n");
        }
        out.push_str("<div class=\"fragment-body\">");
        out.push_str(&self.html);
        out.push_str("</div>\n</div>");
        out
    }
}
