use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::utils::date::serializer;

pub struct CheckoutBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckoutBookCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    book: BookDto,
    #[serde(default)]
    days: Option<i64>,
}

impl CheckoutBookCommandRequest {
    pub fn new(book: BookDto, days: Option<i64>) -> Self {
        Self {
            book,
            days,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub book: BookDto,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
}

impl CheckoutBookCommandResponse {
    pub fn new(book: BookDto, due_at: NaiveDateTime) -> Self {
        Self {
            book,
            due_at,
        }
    }
}

impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        let mut book = BookEntity::try_from(&req.book)?;
        let due_at = self.checkout_service.checkout(&mut book, req.days)?;
        Ok(CheckoutBookCommandResponse::new(BookDto::from(&book), due_at))
    }
}
