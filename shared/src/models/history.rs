//! Append-only audit history models
//!
//! These records are never updated or deleted; deleting a medicine leaves its
//! history intact.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Audit entry for stock received (medicine creation or batch import)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportBatch {
    pub id: u32,
    pub medicine_id: u32,
    pub medicine_name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Audit entry for stock sold
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportBatch {
    pub id: u32,
    pub medicine_id: u32,
    pub medicine_name: String,
    pub amount: u32,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Audit entry for a batch movement between two warehouses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferRecord {
    pub id: u32,
    pub medicine_name: String,
    pub from_warehouse_id: u32,
    pub to_warehouse_id: u32,
    pub quantity: u32,
    pub timestamp: DateTime<Utc>,
}
