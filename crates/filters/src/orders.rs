//! Average order value over non-cancelled orders

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tallykit_core::{to_f64, Error, Result, RunningMean};
use tracing::{debug, trace};

/// Field names and status literal used to read order records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderAggregatorConfig {
    pub status_field: String,
    pub amount_field: String,
    /// Exact, case-sensitive status value that excludes an order
    pub cancelled_status: String,
}

impl Default for OrderAggregatorConfig {
    fn default() -> Self {
        Self {
            status_field: "status".to_string(),
            amount_field: "amount".to_string(),
            cancelled_status: "cancelled".to_string(),
        }
    }
}

impl OrderAggregatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.status_field.is_empty() {
            return Err(Error::InvalidConfig("status_field must not be empty".to_string()));
        }
        if self.amount_field.is_empty() {
            return Err(Error::InvalidConfig("amount_field must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Breakdown of one aggregation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSummary {
    pub total: usize,
    pub included: usize,
    pub cancelled: usize,
    pub sum: f64,
    pub average: f64,
}

/// Averages order amounts, skipping cancelled orders
#[derive(Debug, Clone, Default)]
pub struct OrderAggregator {
    config: OrderAggregatorConfig,
}

impl OrderAggregator {
    pub fn new(config: OrderAggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrderAggregatorConfig {
        &self.config
    }

    /// Average amount of all non-cancelled orders, `0.0` if none remain
    pub fn average(&self, orders: &[Value]) -> Result<f64> {
        Ok(self.summarize(orders)?.average)
    }

    /// Aggregate orders and report how many were included or cancelled
    ///
    /// A missing status counts as not cancelled and a missing amount as `0`.
    /// An amount that cannot be coerced to a number, or a record that is not
    /// an object, is an error.
    pub fn summarize(&self, orders: &[Value]) -> Result<OrderSummary> {
        let mut acc = RunningMean::new();
        let mut cancelled = 0;

        for (index, order) in orders.iter().enumerate() {
            let fields = order.as_object().ok_or_else(|| {
                Error::InvalidRecord(format!("order {} is not an object: {}", index, order))
            })?;

            if self.is_cancelled(fields.get(&self.config.status_field)) {
                trace!("Skipping cancelled order {}", index);
                cancelled += 1;
                continue;
            }

            let amount = match fields.get(&self.config.amount_field) {
                Some(value) => to_f64(value)?,
                None => 0.0,
            };
            acc.push(amount);
        }

        let summary = OrderSummary {
            total: orders.len(),
            included: acc.count(),
            cancelled,
            sum: acc.sum(),
            average: acc.mean(),
        };
        debug!(
            "Aggregated {} orders: {} included, {} cancelled, average {:.2}",
            summary.total, summary.included, summary.cancelled, summary.average
        );
        Ok(summary)
    }

    fn is_cancelled(&self, status: Option<&Value>) -> bool {
        matches!(status, Some(Value::String(s)) if *s == self.config.cancelled_status)
    }
}

/// Average amount of non-cancelled orders using the default field names
pub fn average_order_value(orders: &[Value]) -> Result<f64> {
    OrderAggregator::default().average(orders)
}
