use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in a buffer shared by all of its clones,
// so a caller can hand one clone to a service and read events back from another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}
