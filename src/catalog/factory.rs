use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    create_catalog_service_with(config, create_publisher(config.publisher))
}

pub fn create_catalog_service_with(config: &Configuration,
                                   publisher: Box<dyn EventPublisher>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, publisher))
}
