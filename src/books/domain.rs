use chrono::NaiveDateTime;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn status(&self) -> BookStatus;
    fn due_at(&self) -> Option<NaiveDateTime>;

    fn is_available(&self) -> bool {
        self.status().is_available()
    }
}
