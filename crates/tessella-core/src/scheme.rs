#![forbid(unsafe_code)]

//! The click-routing URL grammar.
//!
//! Every in-page interaction arrives from the host as a URL. Scheme and
//! host select the disposition:
//!
//! - `link://metaruby/<namespace>/<id>`: a clickable object link; the path
//!   is opaque to the page and decoded by the owning collection.
//! - `btn://metaruby/<buttonId>#on|off`: a button toggle; the fragment is
//!   the state to switch to (`on` means true, anything else false).
//! - `file://<path>`: a filesystem link, surfaced to the host as a
//!   file-open request.
//!
//! Anything else is unroutable and gets logged and dropped by the router.

use std::path::Path;

use url::Url;

use crate::model::ObjectId;

/// Scheme of object links.
pub const LINK_SCHEME: &str = "link";
/// Scheme of button toggles.
pub const BUTTON_SCHEME: &str = "btn";
/// Scheme of filesystem links.
pub const FILE_SCHEME: &str = "file";
/// Routing host shared by the link and button schemes.
pub const ROUTING_HOST: &str = "metaruby";
/// URL fragment that switches a button on; any other fragment switches off.
pub const BUTTON_ON_FRAGMENT: &str = "on";

/// Disposition of one incoming click URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickRoute {
    /// An object link. The path is opaque here; collections decode it.
    Link {
        /// URL path, including the leading slash.
        path: String,
        /// The raw URL, forwarded in the link-clicked event.
        url: Url,
    },
    /// A button toggle.
    Button {
        /// The button id (URL path without its leading slash).
        id: String,
        /// The state to switch to.
        state: bool,
    },
    /// A filesystem link.
    FileOpen(Url),
    /// Anything the grammar does not cover.
    Unroutable(Url),
}

impl ClickRoute {
    /// Classify an incoming click URL.
    #[must_use]
    pub fn classify(url: Url) -> Self {
        let routed_host = url.host_str() == Some(ROUTING_HOST);
        if routed_host && url.scheme() == LINK_SCHEME {
            let path = url.path().to_owned();
            return Self::Link { path, url };
        }
        if routed_host && url.scheme() == BUTTON_SCHEME {
            return Self::Button {
                id: url.path().trim_start_matches('/').to_owned(),
                state: url.fragment() == Some(BUTTON_ON_FRAGMENT),
            };
        }
        if url.scheme() == FILE_SCHEME {
            return Self::FileOpen(url);
        }
        Self::Unroutable(url)
    }
}

/// Href of the link for object `id` under a collection namespace.
#[must_use]
pub fn link_href(namespace: &str, id: ObjectId) -> String {
    format!("{LINK_SCHEME}://{ROUTING_HOST}/{namespace}/{id}")
}

/// Href of the button toggle that switches `id` to `state`.
#[must_use]
pub fn button_href(id: &str, state: bool) -> String {
    let fragment = if state { BUTTON_ON_FRAGMENT } else { "off" };
    format!("{BUTTON_SCHEME}://{ROUTING_HOST}/{id}#{fragment}")
}

/// Href of a filesystem link.
#[must_use]
pub fn file_href(path: &Path) -> String {
    format!("{FILE_SCHEME}://{}", path.display())
}

/// Normalize a registered object URI onto the link scheme.
///
/// URIs that already carry a scheme are kept as-is; anything else becomes a
/// `link://metaruby/...` path.
#[must_use]
pub fn absolutize(uri: &str) -> String {
    if has_scheme(uri) {
        uri.to_owned()
    } else if uri.starts_with('/') {
        format!("{LINK_SCHEME}://{ROUTING_HOST}{uri}")
    } else {
        format!("{LINK_SCHEME}://{ROUTING_HOST}/{uri}")
    }
}

fn has_scheme(uri: &str) -> bool {
    uri.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

/// Decode the object id from a link path inside the given namespace.
///
/// Returns `None` when the path belongs to another namespace or carries no
/// leading digit run after it.
#[must_use]
pub fn namespaced_object_id(path: &str, namespace: &str) -> Option<ObjectId> {
    let rest = path
        .strip_prefix('/')?
        .strip_prefix(namespace)?
        .strip_prefix('/')?;
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("test URL parses")
    }

    #[test]
    fn link_urls_classify_with_their_path() {
        let route = ClickRoute::classify(url("link://metaruby/collection-3/4215"));
        match route {
            ClickRoute::Link { path, url } => {
                assert_eq!(path, "/collection-3/4215");
                assert_eq!(url.as_str(), "link://metaruby/collection-3/4215");
            }
            other => panic!("expected a link route, got {other:?}"),
        }
    }

    #[test]
    fn button_urls_decode_id_and_state() {
        assert_eq!(
            ClickRoute::classify(url("btn://metaruby/show-sources#on")),
            ClickRoute::Button {
                id: "show-sources".to_owned(),
                state: true,
            }
        );
        assert_eq!(
            ClickRoute::classify(url("btn://metaruby/show-sources#off")),
            ClickRoute::Button {
                id: "show-sources".to_owned(),
                state: false,
            }
        );
        // Any fragment other than `on` switches off; so does no fragment.
        assert_eq!(
            ClickRoute::classify(url("btn://metaruby/show-sources")),
            ClickRoute::Button {
                id: "show-sources".to_owned(),
                state: false,
            }
        );
    }

    #[test]
    fn file_urls_route_to_file_open() {
        let route = ClickRoute::classify(url("file:///var/log/app.log"));
        assert!(matches!(route, ClickRoute::FileOpen(_)));
    }

    #[test]
    fn foreign_schemes_and_hosts_are_unroutable() {
        assert!(matches!(
            ClickRoute::classify(url("https://example.com/x")),
            ClickRoute::Unroutable(_)
        ));
        assert!(matches!(
            ClickRoute::classify(url("link://elsewhere/1/2")),
            ClickRoute::Unroutable(_)
        ));
    }

    #[test]
    fn built_hrefs_classify_back_to_their_route() {
        let id = ObjectId::from_raw(98_321);
        let link = url(&link_href("collection-0", id));
        assert!(matches!(ClickRoute::classify(link), ClickRoute::Link { .. }));

        let button = url(&button_href("trace", true));
        assert_eq!(
            ClickRoute::classify(button),
            ClickRoute::Button {
                id: "trace".to_owned(),
                state: true,
            }
        );
    }

    #[test]
    fn namespaced_ids_decode_only_in_their_namespace() {
        let id = ObjectId::from_raw(512);
        let href = link_href("collection-7", id);
        let parsed = url(&href);

        assert_eq!(
            namespaced_object_id(parsed.path(), "collection-7"),
            Some(id)
        );
        assert_eq!(namespaced_object_id(parsed.path(), "collection-8"), None);
        assert_eq!(namespaced_object_id("/collection-7/", "collection-7"), None);
        assert_eq!(
            namespaced_object_id("/collection-7/12suffix", "collection-7"),
            Some(ObjectId::from_raw(12))
        );
    }

    #[test]
    fn absolutize_leaves_absolute_uris_alone() {
        assert_eq!(absolutize("https://example.com/a"), "https://example.com/a");
        assert_eq!(absolutize("models/pump"), "link://metaruby/models/pump");
        assert_eq!(absolutize("/models/pump"), "link://metaruby/models/pump");
    }
}
