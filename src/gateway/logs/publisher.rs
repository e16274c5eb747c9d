use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogsPublisher writes each domain event as a structured tracing record.
#[derive(Debug, Default)]
pub struct LogsPublisher {}

impl LogsPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogsPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!(event_id = event.event_id.as_str(), name = event.name.as_str(),
            key = event.key.as_str(), kind = ?event.kind, event = json.as_str(), "domain event");
        Ok(())
    }
}
