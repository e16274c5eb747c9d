use std::collections::HashMap;
use tracing::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::validation::{is_valid_isbn, is_valid_title, MAX_TITLE_LEN};
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    branch_id: String,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            events_publisher,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn register_book(&self, isbn: &str, title: &str, author: &str) -> LibraryResult<BookDto> {
        if !is_valid_isbn(isbn) {
            warn!(isbn, "rejected book with invalid isbn");
            return Err(LibraryError::validation(
                format!("invalid isbn {:?}", isbn).as_str(), Some("400".to_string())));
        }
        if !is_valid_title(title) {
            warn!(isbn, "rejected book with invalid title");
            return Err(LibraryError::validation(
                format!("title must be non-blank and at most {} characters", MAX_TITLE_LEN).as_str(),
                Some("400".to_string())));
        }
        let book = BookDto::from(&BookEntity::new(isbn, title, author));
        self.events_publisher.publish(&DomainEvent::added(
            "books", "catalog", book.isbn.as_str(),
            &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]), &book)?)?;
        info!(isbn, branch_id = self.branch_id.as_str(), "registered book");
        Ok(book)
    }
}
