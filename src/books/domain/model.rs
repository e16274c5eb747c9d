use chrono::{Duration, NaiveDateTime, Utc};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// BookEntity is the lending record of a single book. Its status and due date
// only move together: a due date exists exactly while the book is checked out.
#[derive(Debug, PartialEq, Clone)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    book_status: BookStatus,
    due_at: Option<NaiveDateTime>,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
            due_at: None,
        }
    }

    /// Rebuilds an entity from previously captured state, rejecting a status
    /// and due date that disagree with each other.
    pub fn restore(isbn: &str, title: &str, author: &str,
                   book_status: BookStatus, due_at: Option<NaiveDateTime>) -> LibraryResult<Self> {
        if book_status.is_available() == due_at.is_some() {
            return Err(LibraryError::invalid_state(
                format!("book {} is {} but due date is {:?}", isbn, book_status, due_at).as_str(),
                Some("422".to_string())));
        }
        Ok(Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            book_status,
            due_at,
        })
    }

    /// Checks the book out for `days` days starting now and returns the due date.
    pub fn check_out(&mut self, days: i64) -> LibraryResult<NaiveDateTime> {
        self.check_out_at(days, Utc::now().naive_utc())
    }

    pub fn check_out_at(&mut self, days: i64, now: NaiveDateTime) -> LibraryResult<NaiveDateTime> {
        if !self.book_status.is_available() {
            return Err(LibraryError::invalid_state("book is already checked out", Some("409".to_string())));
        }
        if days < 0 {
            return Err(LibraryError::validation(
                format!("loan days must not be negative {}", days).as_str(), Some("400".to_string())));
        }
        let due_at = Duration::try_days(days)
            .and_then(|d| now.checked_add_signed(d))
            .ok_or_else(|| LibraryError::validation(
                format!("loan days out of range {}", days).as_str(), Some("400".to_string())))?;
        self.book_status = BookStatus::CheckedOut;
        self.due_at = Some(due_at);
        Ok(due_at)
    }

    // Returning an available book is a no-op.
    pub fn return_book(&mut self) {
        self.book_status = BookStatus::Available;
        self.due_at = None;
    }

    pub fn days_overdue(&self, as_of: NaiveDateTime) -> i64 {
        match self.due_at {
            Some(due_at) if as_of > due_at => (as_of - due_at).num_days(),
            _ => 0,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn due_at(&self) -> Option<NaiveDateTime> {
        self.due_at
    }
}
