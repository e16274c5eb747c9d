use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    book: BookDto,
}

impl ReturnBookCommandRequest {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let mut book = BookEntity::try_from(&req.book)?;
        self.checkout_service.returned(&mut book)?;
        Ok(ReturnBookCommandResponse::new(BookDto::from(&book)))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::checkout::factory::{create_checkout_service, create_checkout_service_with};
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEventType;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[test]
    fn test_should_run_return_book() {
        let checkout_cmd = CheckoutBookCommand::new(create_checkout_service(&Configuration::new("test")));
        let return_cmd = ReturnBookCommand::new(create_checkout_service(&Configuration::new("test")));

        let book = BookDto::new("1234567890", "test book", "author");
        let checked_out = checkout_cmd.execute(CheckoutBookCommandRequest::new(book.clone(), None))
            .expect("should checkout book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new(checked_out.book)).expect("should return book");
        assert_eq!(book, res.book);
    }

    #[test]
    fn test_should_return_available_book() {
        let publisher = MemoryPublisher::new();
        let return_cmd = ReturnBookCommand::new(
            create_checkout_service_with(&Configuration::new("test"), Box::new(publisher.clone())));

        let book = BookDto::new("1234567890", "test book", "author");
        let res = return_cmd.execute(ReturnBookCommandRequest::new(book.clone())).expect("should return book");
        assert_eq!(book, res.book);
        assert_eq!(0, publisher.events().len());
    }

    #[test]
    fn test_should_publish_one_event_per_real_return() {
        let publisher = MemoryPublisher::new();
        let checkout_cmd = CheckoutBookCommand::new(
            create_checkout_service_with(&Configuration::new("test"), Box::new(publisher.clone())));
        let return_cmd = ReturnBookCommand::new(
            create_checkout_service_with(&Configuration::new("test"), Box::new(publisher.clone())));

        let book = BookDto::new("1234567890", "test book", "author");
        let checked_out = checkout_cmd.execute(CheckoutBookCommandRequest::new(book, None))
            .expect("should checkout book");
        let returned = return_cmd.execute(ReturnBookCommandRequest::new(checked_out.book)).expect("should return book");
        let _ = return_cmd.execute(ReturnBookCommandRequest::new(returned.book)).expect("should return book again");

        let kinds: Vec<DomainEventType> = publisher.events().iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::CheckedOut, DomainEventType::Returned], kinds);
    }
}
