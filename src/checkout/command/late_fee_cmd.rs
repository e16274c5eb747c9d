use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::utils::date::{opt_serializer, serializer};

pub struct LateFeeCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl LateFeeCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LateFeeCommandRequest {
    book: BookDto,
    // defaults to now
    #[serde(with = "opt_serializer", default)]
    as_of: Option<NaiveDateTime>,
}

impl LateFeeCommandRequest {
    pub fn new(book: BookDto, as_of: Option<NaiveDateTime>) -> Self {
        Self {
            book,
            as_of,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LateFeeCommandResponse {
    pub isbn: String,
    pub fee: f64,
    #[serde(with = "serializer")]
    pub as_of: NaiveDateTime,
}

impl Command<LateFeeCommandRequest, LateFeeCommandResponse> for LateFeeCommand {
    fn execute(&self, req: LateFeeCommandRequest) -> Result<LateFeeCommandResponse, CommandError> {
        let book = BookEntity::try_from(&req.book)?;
        let as_of = req.as_of.unwrap_or_else(|| Utc::now().naive_utc());
        let fee = self.checkout_service.late_fee(&book, as_of);
        Ok(LateFeeCommandResponse { isbn: book.isbn, fee, as_of })
    }
}
