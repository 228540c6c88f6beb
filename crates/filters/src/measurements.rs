//! Averaging of sensor measurements with missing values
//!
//! A JSON `null` marks a missing reading. It is distinct from `0`, which is
//! a real measurement and counts towards the average.

use serde_json::Value;
use tallykit_core::{to_f64, Result, RunningMean};
use tracing::debug;

/// Breakdown of one averaging pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSummary {
    pub total: usize,
    pub present: usize,
    pub missing: usize,
    pub average: f64,
}

/// Averages present measurements, skipping missing ones
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurementAverager;

impl MeasurementAverager {
    pub fn new() -> Self {
        Self
    }

    /// Average of all present values, `0.0` if none are present
    pub fn average(&self, values: &[Value]) -> Result<f64> {
        Ok(self.summarize(values)?.average)
    }

    /// Average present values and count the missing ones
    ///
    /// A present value that cannot be coerced to a number is an error.
    pub fn summarize(&self, values: &[Value]) -> Result<MeasurementSummary> {
        let mut acc = RunningMean::new();

        for value in values {
            if value.is_null() {
                continue;
            }
            acc.push(to_f64(value)?);
        }

        let summary = MeasurementSummary {
            total: values.len(),
            present: acc.count(),
            missing: values.len() - acc.count(),
            average: acc.mean(),
        };
        debug!(
            "Averaged {} measurements: {} present, {} missing",
            summary.total, summary.present, summary.missing
        );
        Ok(summary)
    }
}

/// Average of all non-null measurements
pub fn average_valid_measurements(values: &[Value]) -> Result<f64> {
    MeasurementAverager::new().average(values)
}

/// Average of all `Some` measurements, `0.0` if there are none
pub fn average_present(values: &[Option<f64>]) -> f64 {
    values.iter().flatten().copied().collect::<RunningMean>().mean()
}
