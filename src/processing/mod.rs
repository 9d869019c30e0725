//! Data processing step for the example agent.
//!
//! One deterministic computation: sum a fixed in-memory sequence and stamp
//! the result. The record is transient and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status marker attached to every processing result
pub const STATUS_ACTIVE: &str = "active";

/// The fixed sequence processed on every invocation
pub const SAMPLE_ITEMS: [i64; 5] = [1, 2, 3, 4, 5];

/// Result of one processing step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessingResult {
    /// Moment the step ran (later than the owning agent's start time)
    pub timestamp: DateTime<Utc>,
    /// Always [`STATUS_ACTIVE`]
    pub status: String,
    /// Always [`SAMPLE_ITEMS`]
    pub items: Vec<i64>,
    /// Sum of `items`, computed fresh each call
    pub total: i64,
}

impl ProcessingResult {
    /// Build a result over the fixed sample sequence, stamped with the
    /// current time.
    pub fn over_sample_items() -> Self {
        let items = SAMPLE_ITEMS.to_vec();
        let total = items.iter().sum();
        Self {
            timestamp: Utc::now(),
            status: STATUS_ACTIVE.to_string(),
            items,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_items_are_fixed_sequence() {
        let result = ProcessingResult::over_sample_items();
        assert_eq!(result.items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_result_total_is_sum_of_items() {
        let result = ProcessingResult::over_sample_items();
        assert_eq!(result.total, 15);
        assert_eq!(result.total, result.items.iter().sum::<i64>());
    }

    #[test]
    fn test_result_status_is_active() {
        for _ in 0..3 {
            let result = ProcessingResult::over_sample_items();
            assert_eq!(result.status, STATUS_ACTIVE);
        }
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = ProcessingResult::over_sample_items();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"status\":\"active\""));
        assert!(json.contains("\"items\":[1,2,3,4,5]"));
        assert!(json.contains("\"total\":15"));
    }

    #[test]
    fn test_result_timestamps_are_fresh() {
        let first = ProcessingResult::over_sample_items();
        let second = ProcessingResult::over_sample_items();
        assert!(second.timestamp >= first.timestamp);
    }
}
