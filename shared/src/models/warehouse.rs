//! Warehouse models

use serde::{Deserialize, Serialize};

/// A physical storage location for stock batches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warehouse {
    pub id: u32,
    pub name: String,
    pub warehouse_type: WarehouseType,
}

/// Warehouse role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseType {
    /// Central stock held for distribution
    Main,
    /// Front-of-store stock available for sale
    Store,
}

impl WarehouseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarehouseType::Main => "main",
            WarehouseType::Store => "store",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WarehouseType::Main => "Main",
            WarehouseType::Store => "Store",
        }
    }
}

impl std::fmt::Display for WarehouseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
