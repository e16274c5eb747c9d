use chrono::NaiveDateTime;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

pub mod service;

pub trait CheckoutService {
    // checks the book out for `days`, or the configured loan length, and returns the due date
    fn checkout(&self, book: &mut BookEntity, days: Option<i64>) -> LibraryResult<NaiveDateTime>;
    fn returned(&self, book: &mut BookEntity) -> LibraryResult<()>;
    fn late_fee(&self, book: &BookEntity, as_of: NaiveDateTime) -> f64;
}
