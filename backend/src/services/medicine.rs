//! Medicine catalogue service: listing, creation, deletion, and sales

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{ExportBatch, ImportBatch, Medicine};
use shared::validation::{validate_name, validate_price, validate_quantity};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Service for managing the medicine catalogue and sales
#[derive(Clone)]
pub struct MedicineService {
    store: Store,
}

/// Input for creating a medicine
#[derive(Debug, Deserialize)]
pub struct CreateMedicineInput {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Input for selling stock of a medicine
#[derive(Debug, Deserialize)]
pub struct SellInput {
    pub id: u32,
    pub amount: u32,
}

impl MedicineService {
    /// Create a new MedicineService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List the full catalogue
    pub fn list(&self) -> Vec<Medicine> {
        self.store.read().medicines.clone()
    }

    /// Create a medicine, recording any initial stock as an import entry
    pub fn create(&self, input: CreateMedicineInput) -> AppResult<Medicine> {
        validate_name(&input.name).map_err(AppError::validation)?;
        validate_price(input.price).map_err(AppError::validation)?;

        let medicine = {
            let mut inventory = self.store.write();
            let id = inventory.next_medicine_id();
            let medicine = Medicine {
                id,
                name: input.name.trim().to_string(),
                price: input.price,
                quantity: input.quantity,
            };
            inventory.medicines.push(medicine.clone());

            if medicine.quantity > 0 {
                let import_id = inventory.next_import_id();
                inventory.import_log.push(ImportBatch {
                    id: import_id,
                    medicine_id: medicine.id,
                    medicine_name: medicine.name.clone(),
                    quantity: medicine.quantity,
                    price: medicine.price,
                    timestamp: Utc::now(),
                });
            }
            medicine
        };
        self.store.persist()?;

        tracing::info!(id = medicine.id, name = %medicine.name, "medicine created");
        Ok(medicine)
    }

    /// Delete a medicine and its remaining stock batches.
    ///
    /// Audit history is append-only and keeps the medicine's entries.
    pub fn delete(&self, id: u32) -> AppResult<()> {
        {
            let mut inventory = self.store.write();
            let position = inventory
                .medicines
                .iter()
                .position(|m| m.id == id)
                .ok_or_else(|| AppError::not_found("Medicine"))?;
            inventory.medicines.remove(position);
            inventory.stock_batches.retain(|b| b.medicine_id != id);
        }
        self.store.persist()?;

        tracing::info!(id, "medicine deleted");
        Ok(())
    }

    /// Sell stock, decrementing the aggregate count and recording an export
    /// entry
    pub fn sell(&self, input: SellInput) -> AppResult<Medicine> {
        validate_quantity(input.amount).map_err(AppError::validation)?;

        let medicine = {
            let mut inventory = self.store.write();
            let medicine = {
                let medicine = inventory
                    .medicine_mut(input.id)
                    .ok_or_else(|| AppError::not_found("Medicine"))?;
                if medicine.quantity < input.amount {
                    return Err(AppError::InsufficientStock {
                        available: medicine.quantity,
                    });
                }
                medicine.quantity -= input.amount;
                medicine.clone()
            };

            let export_id = inventory.next_export_id();
            inventory.export_log.push(ExportBatch {
                id: export_id,
                medicine_id: medicine.id,
                medicine_name: medicine.name.clone(),
                amount: input.amount,
                price: medicine.price,
                timestamp: Utc::now(),
            });
            medicine
        };
        self.store.persist()?;

        tracing::info!(id = medicine.id, amount = input.amount, "medicine sold");
        Ok(medicine)
    }
}
