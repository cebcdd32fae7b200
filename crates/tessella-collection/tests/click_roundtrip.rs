#![forbid(unsafe_code)]

//! End-to-end click round trip: register a type, publish a link list,
//! deliver the click URL the way a host would, and check that the clicked
//! object is re-rendered through the registry.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use tessella_collection::{Collection, Element, RenderOptions, RendererMap};
use tessella_core::{ModelObject, PageEvent, SharedObject, Url};
use tessella_page::{HeadlessHost, ListOptions, Page, PushOptions};

struct Component {
    name: String,
}

impl ModelObject for Component {
    fn explicit_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

fn component(name: &str) -> SharedObject {
    Rc::new(Component {
        name: name.to_owned(),
    })
}

#[test]
fn clicking_a_rendered_link_re_renders_the_clicked_object() {
    let rendered: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let mut map = RendererMap::new();
    {
        let rendered = Rc::clone(&rendered);
        map.register_fn::<Component, _>(RenderOptions::new(), move |page, object, options| {
            rendered.borrow_mut().push(object.name.clone());
            let mut push = PushOptions::default();
            push.id = options.container_id().map(str::to_owned);
            page.push(
                Some(object.name.as_str()),
                format!("<p>{}</p>", object.name),
                push,
            );
            Ok(())
        });
    }

    let mut page = Page::new(HeadlessHost::new());
    let mut collection = Collection::new(map);

    let pump = component("pump");
    let valve = component("valve");
    let elements: Vec<Element> = [&pump, &valve]
        .into_iter()
        .map(|object| {
            Element::new(
                Rc::clone(object),
                object.display_name(),
                collection.element_link_target(object, true),
            )
        })
        .collect();

    collection
        .render_links(&mut page, Some("Components"), &elements, ListOptions::default())
        .expect("plain list options");
    // Snapshot the link list so a click-rerender restores back to it.
    page.save();

    // The link list itself renders nothing through the registry.
    assert!(rendered.borrow().is_empty());

    // The host delivers the click URL for `pump`, the page routes it into
    // a link-clicked event, and the collection resolves it.
    let href = collection.element_link_target(&pump, true);
    page.route_click(Url::parse(&href).expect("generated hrefs parse"));
    for event in page.take_events() {
        collection.handle_event(&mut page, &event);
    }

    assert_eq!(*rendered.borrow(), vec!["pump".to_owned()]);
    assert!(collection.render_faults().is_empty());

    // The render pass emitted its own updated notification.
    assert_eq!(page.take_events(), vec![PageEvent::Updated]);
}

#[test]
fn unhandled_clicks_stay_available_for_the_host() {
    let mut page: Page<HeadlessHost> = Page::new(HeadlessHost::new());
    let mut collection = Collection::new(RendererMap::new());

    page.route_click(Url::parse("link://metaruby/another-namespace/42").expect("parses"));
    let events = page.take_events();
    assert_eq!(events.len(), 1);
    assert!(!collection.handle_event(&mut page, &events[0]));
}
