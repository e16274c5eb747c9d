use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError};
use crate::utils::date::opt_serializer;

// BookDto is a data transfer object for the lending commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
    #[serde(with = "opt_serializer", default)]
    pub due_at: Option<NaiveDateTime>,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
            due_at: None,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn due_at(&self) -> Option<NaiveDateTime> {
        self.due_at
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.status(),
            due_at: other.due_at(),
        }
    }
}

impl TryFrom<&BookDto> for BookEntity {
    type Error = LibraryError;

    fn try_from(other: &BookDto) -> Result<Self, Self::Error> {
        BookEntity::restore(other.isbn.as_str(), other.title.as_str(), other.author.as_str(),
                            other.book_status, other.due_at)
    }
}
