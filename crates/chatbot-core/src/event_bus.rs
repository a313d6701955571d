//! Controller to UI event queue.
//!
//! Single-threaded: the controller pushes from spawned futures and the UI
//! drains once per frame. At most `MAX_PENDING` events are held; when full,
//! the oldest is dropped first.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use chatbot_types::event::ChatEvent;

pub const MAX_PENDING: usize = 256;

#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: ChatEvent) {
        let mut queue = self.queue.borrow_mut();
        if queue.len() >= MAX_PENDING {
            if let Some(dropped) = queue.pop_front() {
                log::warn!("event queue full, dropping {:?}", dropped);
            }
        }
        queue.push_back(event);
    }

    /// Everything emitted since the last drain, oldest first.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.queue.take().into()
    }

    /// Lets the UI skip state updates on idle frames.
    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}
