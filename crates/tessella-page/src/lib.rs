#![forbid(unsafe_code)]

//! Page engine: fragments, the save/restore diff protocol, and routing.
//!
//! # Role in tessella
//! `tessella-page` is the fragment store. It owns an ordered sequence of
//! [`Fragment`]s, publishes them into a [`HostView`](tessella_core::HostView)
//! with upsert semantics (targeted patch on id match, full rebuild on
//! append), reverts the view to the last saved snapshot on demand, and
//! routes incoming click URLs to buttons, links, and file-open requests.
//!
//! # Primary responsibilities
//! - **Fragment/Button**: addressable units of rendered content and their
//!   toggle controls.
//! - **Page**: the store itself: push, save/restore, clear, click routing,
//!   whole-document assembly.
//! - **html**: escape/list/markdown helpers used to build fragment bodies.
//! - **headless**: an in-memory host for tests and static HTML export.

pub mod fragment;
pub mod headless;
pub mod html;
pub mod page;

pub use fragment::{Button, Fragment};
pub use headless::{HeadlessHost, PatchRecord};
pub use html::{ListItem, escape_text, file_link, main_doc, render_item};
pub use page::{ListOptions, Page, PushOptions};
