pub mod events;
pub mod factory;

pub mod logs {
    pub mod publisher;
}

pub mod memory {
    pub mod publisher;
}

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayPublisherVia {
    Logs,
}
