//! Stock batch models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ExpiryStatus;

/// A quantity of one medicine received at one time, tracked with its own
/// expiry date and price. A batch belongs to exactly one warehouse at a time;
/// its expiry date is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockBatch {
    pub id: u32,
    pub medicine_id: u32,
    pub medicine_name: String,
    pub warehouse_id: u32,
    pub quantity: u32,
    pub price: Decimal,
    pub expiry_date: NaiveDate,
}

impl StockBatch {
    /// Days remaining until expiry as of the given date (negative if expired).
    pub fn days_until_expiry(&self, on: NaiveDate) -> i64 {
        (self.expiry_date - on).num_days()
    }

    /// Shelf-life category as of the given date.
    pub fn expiry_status(&self, on: NaiveDate) -> ExpiryStatus {
        ExpiryStatus::from_days_left(self.days_until_expiry(on))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(expiry: NaiveDate) -> StockBatch {
        StockBatch {
            id: 1,
            medicine_id: 1,
            medicine_name: "Paracetamol 500mg".to_string(),
            warehouse_id: 1,
            quantity: 100,
            price: Decimal::new(12_000, 0),
            expiry_date: expiry,
        }
    }

    #[test]
    fn test_days_until_expiry() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let b = batch(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(b.days_until_expiry(today), 14);
    }

    #[test]
    fn test_expiry_status_depends_on_observation_date() {
        let b = batch(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());

        let far = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(b.expiry_status(far), ExpiryStatus::Normal);

        let close = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(b.expiry_status(close), ExpiryStatus::Warning);

        let imminent = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
        assert_eq!(b.expiry_status(imminent), ExpiryStatus::Critical);
    }
}
