//! Medicine catalogue models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A medicine in the catalogue with its aggregate stock count
///
/// `quantity` is decremented by a sale and incremented by a batch import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}
