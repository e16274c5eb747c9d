use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by lending records
pub trait Identifiable {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the lending system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub branch_id: String,
    pub book_loan_days: i64,
    pub late_fee_per_day: f64,
    pub max_late_fee: f64,
    pub publisher: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            book_loan_days: 14,
            late_fee_per_day: 0.50,
            max_late_fee: 20.00,
            publisher: GatewayPublisherVia::Logs,
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    // loan length and fee schedule must not be negative; NaN fees are rejected too
    pub fn validate(&self) -> LibraryResult<()> {
        if self.book_loan_days < 0 {
            return Err(LibraryError::validation(
                format!("book_loan_days must not be negative {}", self.book_loan_days).as_str(), Some("400".to_string())));
        }
        if !(self.late_fee_per_day >= 0.0) {
            return Err(LibraryError::validation(
                format!("late_fee_per_day must not be negative {}", self.late_fee_per_day).as_str(), Some("400".to_string())));
        }
        if !(self.max_late_fee >= 0.0) {
            return Err(LibraryError::validation(
                format!("max_late_fee must not be negative {}", self.max_late_fee).as_str(), Some("400".to_string())));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("main")
    }
}
