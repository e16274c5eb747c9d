use std::collections::HashMap;
use chrono::NaiveDateTime;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::validation::calculate_late_fee_with;
use crate::checkout::domain::CheckoutService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

pub struct CheckoutServiceImpl {
    branch_id: String,
    book_loan_days: i64,
    late_fee_per_day: f64,
    max_late_fee: f64,
    events_publisher: Box<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_loan_days: config.book_loan_days,
            late_fee_per_day: config.late_fee_per_day,
            max_late_fee: config.max_late_fee,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    fn publish_checked_out(&self, book: &BookEntity) -> LibraryResult<()> {
        self.events_publisher.publish(&DomainEvent::checked_out(
            "book_checkout", "checkout", book.id().as_str(), &self.metadata(), &BookDto::from(book))?)
    }

    fn publish_returned(&self, book: &BookEntity) -> LibraryResult<()> {
        self.events_publisher.publish(&DomainEvent::returned(
            "book_returned", "checkout", book.id().as_str(), &self.metadata(), &BookDto::from(book))?)
    }
}

impl CheckoutService for CheckoutServiceImpl {
    fn checkout(&self, book: &mut BookEntity, days: Option<i64>) -> LibraryResult<NaiveDateTime> {
        let days = days.unwrap_or(self.book_loan_days);
        let due_at = book.check_out(days).map_err(|err| {
            warn!(isbn = book.isbn.as_str(), error = %err, "checkout rejected");
            err
        })?;
        if let Err(err) = self.publish_checked_out(book) {
            // the book stays available when the checkout cannot be announced
            book.return_book();
            warn!(isbn = book.isbn.as_str(), error = %err, "checkout rolled back");
            return Err(err);
        }
        info!(isbn = book.isbn.as_str(), days, due_at = %due_at, "book checked out");
        Ok(due_at)
    }

    fn returned(&self, book: &mut BookEntity) -> LibraryResult<()> {
        if book.is_available() {
            debug!(isbn = book.isbn.as_str(), "book already available");
            return Ok(());
        }
        let previous = book.clone();
        book.return_book();
        if let Err(err) = self.publish_returned(book) {
            *book = previous;
            warn!(isbn = book.isbn.as_str(), error = %err, "return rolled back");
            return Err(err);
        }
        info!(isbn = book.isbn.as_str(), "book returned");
        Ok(())
    }

    fn late_fee(&self, book: &BookEntity, as_of: NaiveDateTime) -> f64 {
        let days_overdue = book.days_overdue(as_of);
        let fee = calculate_late_fee_with(days_overdue, self.late_fee_per_day, self.max_late_fee);
        debug!(isbn = book.isbn.as_str(), days_overdue, fee, "assessed late fee");
        fee
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::domain::service::CheckoutServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::core::library::LibraryError;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    struct FailingPublisher {}

    impl EventPublisher for FailingPublisher {
        fn publish(&self, _event: &DomainEvent) -> Result<(), LibraryError> {
            Err(LibraryError::serialization("publisher is down"))
        }
    }

    fn build_service(config: &Configuration) -> (CheckoutServiceImpl, MemoryPublisher) {
        let publisher = MemoryPublisher::new();
        let svc = CheckoutServiceImpl::new(config, Box::new(publisher.clone()));
        (svc, publisher)
    }

    fn sample_book() -> BookEntity {
        BookEntity::new("1234567890", "Test Book", "Test Author")
    }

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(9, 30, 0)).expect("valid date")
    }

    #[test]
    fn test_should_checkout_and_returned() {
        let (checkout_svc, publisher) = build_service(&Configuration::new("test"));
        let mut book = sample_book();

        let due_at = checkout_svc.checkout(&mut book, None).expect("should checkout");
        assert!(!book.is_available());
        assert_eq!((Utc::now().naive_utc() + Duration::days(14)).date(), due_at.date());

        checkout_svc.returned(&mut book).expect("should return");
        assert_eq!(sample_book(), book);

        let kinds: Vec<DomainEventType> = publisher.events().iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::CheckedOut, DomainEventType::Returned], kinds);
    }

    #[test]
    fn test_should_use_explicit_days() {
        let (checkout_svc, _) = build_service(&Configuration::new("test"));
        let mut book = sample_book();

        let due_at = checkout_svc.checkout(&mut book, Some(3)).expect("should checkout");
        assert_eq!((Utc::now().naive_utc() + Duration::days(3)).date(), due_at.date());
    }

    #[test]
    fn test_should_not_checkout_twice() {
        let (checkout_svc, publisher) = build_service(&Configuration::new("test"));
        let mut book = sample_book();

        let _ = checkout_svc.checkout(&mut book, None).expect("should checkout");
        let res = checkout_svc.checkout(&mut book, None);
        assert!(matches!(res, Err(LibraryError::InvalidState{ .. })));
        assert_eq!(1, publisher.events().len());
    }

    #[test]
    fn test_should_not_publish_return_of_available_book() {
        let (checkout_svc, publisher) = build_service(&Configuration::new("test"));
        let mut book = sample_book();

        checkout_svc.returned(&mut book).expect("should return");
        checkout_svc.returned(&mut book).expect("should return again");
        assert_eq!(sample_book(), book);
        assert!(publisher.events().is_empty());

        let _ = checkout_svc.checkout(&mut book, None).expect("should checkout");
        checkout_svc.returned(&mut book).expect("should return");
        checkout_svc.returned(&mut book).expect("should return again");
        let kinds: Vec<DomainEventType> = publisher.events().iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::CheckedOut, DomainEventType::Returned], kinds);
    }

    #[test]
    fn test_should_keep_book_available_when_checkout_event_fails() {
        let checkout_svc = CheckoutServiceImpl::new(&Configuration::new("test"), Box::new(FailingPublisher {}));
        let mut book = sample_book();

        let res = checkout_svc.checkout(&mut book, None);
        assert!(matches!(res, Err(LibraryError::Serialization{ .. })));
        assert_eq!(sample_book(), book);
    }

    #[test]
    fn test_should_keep_book_checked_out_when_return_event_fails() {
        let checkout_svc = CheckoutServiceImpl::new(&Configuration::new("test"), Box::new(FailingPublisher {}));
        let mut book = sample_book();
        let due_at = book.check_out_at(14, morning()).expect("should checkout");
        let checked_out = book.clone();

        let res = checkout_svc.returned(&mut book);
        assert!(matches!(res, Err(LibraryError::Serialization{ .. })));
        assert_eq!(checked_out, book);
        assert_eq!(Some(due_at), book.due_at());
    }

    #[test]
    fn test_should_assess_late_fee() {
        let (checkout_svc, _) = build_service(&Configuration::new("test"));
        let mut book = sample_book();
        assert_eq!(0.0, checkout_svc.late_fee(&book, morning()));

        let due_at = book.check_out_at(14, morning()).expect("should checkout");
        assert_eq!(0.0, checkout_svc.late_fee(&book, due_at));
        assert_eq!(0.50, checkout_svc.late_fee(&book, due_at + Duration::days(1)));
        assert_eq!(5.00, checkout_svc.late_fee(&book, due_at + Duration::days(10)));
        assert_eq!(20.00, checkout_svc.late_fee(&book, due_at + Duration::days(100)));
    }

    #[test]
    fn test_should_assess_late_fee_with_configured_schedule() {
        let mut config = Configuration::new("test");
        config.late_fee_per_day = 1.0;
        config.max_late_fee = 7.0;
        let (checkout_svc, _) = build_service(&config);
        let mut book = sample_book();

        let due_at = book.check_out_at(14, morning()).expect("should checkout");
        assert_eq!(4.0, checkout_svc.late_fee(&book, due_at + Duration::days(4)));
        assert_eq!(7.0, checkout_svc.late_fee(&book, due_at + Duration::days(30)));
    }
}
