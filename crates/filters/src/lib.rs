//! Validation and aggregation filters over loosely-typed records
//!
//! This crate provides the order aggregator, email validator and
//! measurement averager. Inputs are `serde_json::Value` sequences, so
//! callers can hand over records exactly as they were decoded.

pub mod config;
pub mod email;
pub mod measurements;
pub mod orders;


pub use config::{ConfigFormat, FiltersConfig};
pub use email::{count_valid_emails, is_valid_email, EmailStats, EmailValidator};
pub use measurements::{average_present, average_valid_measurements, MeasurementAverager};
pub use orders::{average_order_value, OrderAggregator, OrderSummary};
pub use tallykit_core::{Error, Result};
