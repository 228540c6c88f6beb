//! Core building blocks for tallykit
//!
//! This crate provides the numeric coercion rules and the running-mean
//! accumulator shared by the order, email and measurement filters.

pub mod coerce;
pub mod error;
pub mod stats;

pub use coerce::{parse_numeric, to_f64};
pub use error::{Error, Result};
pub use stats::RunningMean;
