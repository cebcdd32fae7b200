#![forbid(unsafe_code)]

//! Property tests for the fragment-store invariants: pushes never duplicate
//! ids, and restore leaves exactly the saved fragments live.

use proptest::prelude::*;

use tessella_page::{HeadlessHost, Page, PushOptions};

/// One scripted push: an optional id drawn from a small pool, plus body
/// text. `None` exercises the auto-id append path.
fn push_op() -> impl Strategy<Value = (Option<u8>, String)> {
    (proptest::option::of(0..6u8), "[a-z]{0,12}")
}

fn apply(page: &mut Page<HeadlessHost>, ops: &[(Option<u8>, String)]) {
    for (id, body) in ops {
        let options = match id {
            Some(n) => PushOptions::with_id(format!("frag-{n}")),
            None => PushOptions::default(),
        };
        page.push(None, body.clone(), options);
    }
}

fn live_ids(page: &Page<HeadlessHost>) -> Vec<String> {
    page.fragments()
        .iter()
        .map(|fragment| fragment.id().to_owned())
        .collect()
}

proptest! {
    #[test]
    fn pushes_never_duplicate_ids(ops in proptest::collection::vec(push_op(), 0..40)) {
        let mut page = Page::new(HeadlessHost::new());
        apply(&mut page, &ops);

        let mut ids = live_ids(&page);
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn restore_keeps_exactly_the_saved_fragments(
        before in proptest::collection::vec(push_op(), 0..20),
        after in proptest::collection::vec(push_op(), 0..20),
    ) {
        let mut page = Page::new(HeadlessHost::new());
        apply(&mut page, &before);
        page.save();
        let saved = live_ids(&page);

        apply(&mut page, &after);
        page.restore();

        prop_assert_eq!(live_ids(&page), saved);
    }

    #[test]
    fn restore_is_idempotent_once_consumed(
        ops in proptest::collection::vec(push_op(), 0..20),
    ) {
        let mut page = Page::new(HeadlessHost::new());
        apply(&mut page, &ops);
        page.save();
        page.restore();
        page.host_mut().take_patches();

        // The snapshot is consumed: a second restore changes nothing.
        let ids = live_ids(&page);
        page.restore();
        prop_assert_eq!(live_ids(&page), ids);
        prop_assert!(page.host_mut().take_patches().is_empty());
    }
}
