#![forbid(unsafe_code)]

//! Output events and the host-drained event queue.
//!
//! The engine never calls back into the embedding host. It appends events
//! to a FIFO outbox; the host drains the outbox at its own pace, one event
//! fully processed before the next. Subscription is explicit: the host
//! forwards each drained event to whichever component wants it (a
//! collection's `handle_event`, its own file-open handler, ...).

use std::collections::VecDeque;

use url::Url;

/// Events produced by the engine for the embedding host.
///
/// Payload shapes are fixed; matching on a variant is the subscription
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A render pass finished, successfully or not.
    Updated,
    /// An in-page `link://` click, carrying the raw URL.
    LinkClicked(Url),
    /// A button changed state through click routing.
    ButtonToggled {
        /// The button's id.
        id: String,
        /// The state the button was switched to.
        state: bool,
    },
    /// A `file://` link was clicked; the host decides how to open it.
    FileOpenRequested(Url),
}

/// FIFO outbox of [`PageEvent`]s, drained by the embedding host.
#[derive(Debug, Default, Clone)]
pub struct EventQueue {
    queue: VecDeque<PageEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn emit(&mut self, event: PageEvent) {
        self.queue.push_back(event);
    }

    /// Pop the oldest pending event.
    pub fn poll(&mut self) -> Option<PageEvent> {
        self.queue.pop_front()
    }

    /// Take every pending event, oldest first.
    pub fn take(&mut self) -> Vec<PageEvent> {
        self.queue.drain(..).collect()
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check whether anything is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn events_are_delivered_in_emission_order() {
        let mut queue = EventQueue::new();
        queue.emit(PageEvent::Updated);
        queue.emit(PageEvent::ButtonToggled {
            id: "b".to_owned(),
            state: true,
        });

        assert_eq!(queue.poll(), Some(PageEvent::Updated));
        assert_eq!(
            queue.poll(),
            Some(PageEvent::ButtonToggled {
                id: "b".to_owned(),
                state: true,
            })
        );
        assert_eq!(queue.poll(), None);
    }

    #[test]
    fn take_delivers_each_event_once() {
        let mut queue = EventQueue::new();
        queue.emit(PageEvent::Updated);
        queue.emit(PageEvent::Updated);

        assert_eq!(queue.take().len(), 2);
        assert!(queue.is_empty());
        assert_eq!(queue.take().len(), 0);
    }
}
