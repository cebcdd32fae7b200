//! Headless end-to-end walkthrough: register a renderer, publish a link
//! list, route a click the way a host webview would, and print the
//! assembled document.

use std::rc::Rc;

use tessella::escape_text;
use tessella::prelude::*;

struct Task {
    name: String,
    done: bool,
}

impl ModelObject for Task {
    fn explicit_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

fn main() {
    let mut page = Page::new(HeadlessHost::new());
    page.set_title("Task inspector");

    let mut registry = RendererMap::new();
    registry.register_fn::<Task, _>(RenderOptions::new(), |page, task, options| {
        let status = if task.done { "done" } else { "pending" };
        let html = format!("<p>{}: {status}</p>", escape_text(&task.name));
        let mut push = PushOptions::default();
        push.id = options.container_id().map(str::to_owned);
        page.push(Some("Task"), html, push);
        Ok(())
    });
    let mut collection = Collection::new(registry);

    let tasks: Vec<SharedObject> = vec![
        Rc::new(Task {
            name: "write docs".to_owned(),
            done: false,
        }),
        Rc::new(Task {
            name: "ship".to_owned(),
            done: true,
        }),
    ];
    let elements: Vec<Element> = tasks
        .iter()
        .map(|task| {
            Element::new(
                Rc::clone(task),
                task.display_name(),
                collection.element_link_target(task, true),
            )
        })
        .collect();

    collection
        .render_links(&mut page, Some("Tasks"), &elements, ListOptions::default())
        .expect("list options carry no filter");
    // Snapshot the link list so every click-rerender starts from it.
    page.save();

    // Simulate a click on the first task's link and drain the resulting
    // events the way an embedding host would.
    let href = collection.element_link_target(&tasks[0], true);
    page.route_click(Url::parse(&href).expect("generated hrefs parse"));
    for event in page.take_events() {
        if !collection.handle_event(&mut page, &event) {
            println!("unhandled event: {event:?}");
        }
    }

    println!("{}", page.document());
}
