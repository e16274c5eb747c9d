use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;

pub fn create_checkout_service(config: &Configuration) -> Box<dyn CheckoutService> {
    create_checkout_service_with(config, create_publisher(config.publisher))
}

// the caller keeps its own handle on the publisher, e.g. a MemoryPublisher clone
pub fn create_checkout_service_with(config: &Configuration,
                                    publisher: Box<dyn EventPublisher>) -> Box<dyn CheckoutService> {
    Box::new(CheckoutServiceImpl::new(config, publisher))
}
