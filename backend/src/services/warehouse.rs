//! Warehouse management service

use serde::Deserialize;
use shared::models::{Warehouse, WarehouseType};
use shared::validation::validate_name;

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Service for managing warehouses
#[derive(Clone)]
pub struct WarehouseService {
    store: Store,
}

/// Input for creating a warehouse
#[derive(Debug, Deserialize)]
pub struct CreateWarehouseInput {
    pub name: String,
    pub warehouse_type: WarehouseType,
}

impl WarehouseService {
    /// Create a new WarehouseService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List all warehouses
    pub fn list(&self) -> Vec<Warehouse> {
        self.store.read().warehouses.clone()
    }

    /// Create a warehouse
    pub fn create(&self, input: CreateWarehouseInput) -> AppResult<Warehouse> {
        validate_name(&input.name).map_err(AppError::validation)?;

        let warehouse = {
            let mut inventory = self.store.write();
            let id = inventory.next_warehouse_id();
            let warehouse = Warehouse {
                id,
                name: input.name.trim().to_string(),
                warehouse_type: input.warehouse_type,
            };
            inventory.warehouses.push(warehouse.clone());
            warehouse
        };
        self.store.persist()?;

        tracing::info!(
            id = warehouse.id,
            name = %warehouse.name,
            warehouse_type = warehouse.warehouse_type.as_str(),
            "warehouse created"
        );
        Ok(warehouse)
    }
}
