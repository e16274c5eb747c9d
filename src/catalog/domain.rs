pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

pub trait CatalogService {
    // validates isbn and title and returns the new book as available
    fn register_book(&self, isbn: &str, title: &str, author: &str) -> LibraryResult<BookDto>;
}
