//! Stock batch service: warehouse-level imports, expiry reporting, and
//! transfers between warehouses

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{ImportBatch, StockBatch, TransferRecord};
use shared::types::ExpiryStatus;
use shared::validation::{validate_price, validate_quantity, validate_transfer_quantity};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Service for managing stock batches
#[derive(Clone)]
pub struct BatchService {
    store: Store,
}

/// Input for importing a batch into a warehouse
#[derive(Debug, Deserialize)]
pub struct ImportBatchInput {
    pub medicine_id: u32,
    /// Name as shown in the form; the stored medicine name wins
    pub medicine_name: String,
    pub warehouse_id: u32,
    pub quantity: u32,
    pub price: Decimal,
    pub expiry_date: NaiveDate,
}

/// Input for transferring batch stock to another warehouse
#[derive(Debug, Deserialize)]
pub struct TransferInput {
    pub batch_id: u32,
    pub to_warehouse_id: u32,
    pub quantity: u32,
}

/// Stock batch annotated with shelf-life information
#[derive(Debug, Clone, Serialize)]
pub struct ExpiringBatch {
    #[serde(flatten)]
    pub batch: StockBatch,
    pub days_until_expiry: i64,
    pub status: ExpiryStatus,
}

impl BatchService {
    /// Create a new BatchService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List all stock batches
    pub fn list(&self) -> Vec<StockBatch> {
        self.store.read().stock_batches.clone()
    }

    /// Import a batch into a warehouse.
    ///
    /// The medicine's aggregate quantity grows by the imported quantity, and
    /// the import is recorded in the audit log.
    pub fn import(&self, input: ImportBatchInput) -> AppResult<StockBatch> {
        validate_quantity(input.quantity).map_err(AppError::validation)?;
        validate_price(input.price).map_err(AppError::validation)?;

        let batch = {
            let mut inventory = self.store.write();
            if inventory.warehouse(input.warehouse_id).is_none() {
                return Err(AppError::not_found("Warehouse"));
            }

            let medicine_name = {
                let medicine = inventory
                    .medicine_mut(input.medicine_id)
                    .ok_or_else(|| AppError::not_found("Medicine"))?;
                medicine.quantity += input.quantity;
                medicine.name.clone()
            };

            let id = inventory.next_batch_id();
            let batch = StockBatch {
                id,
                medicine_id: input.medicine_id,
                medicine_name: medicine_name.clone(),
                warehouse_id: input.warehouse_id,
                quantity: input.quantity,
                price: input.price,
                expiry_date: input.expiry_date,
            };
            inventory.stock_batches.push(batch.clone());

            let import_id = inventory.next_import_id();
            inventory.import_log.push(ImportBatch {
                id: import_id,
                medicine_id: input.medicine_id,
                medicine_name,
                quantity: input.quantity,
                price: input.price,
                timestamp: Utc::now(),
            });
            batch
        };
        self.store.persist()?;

        tracing::info!(
            id = batch.id,
            medicine_id = batch.medicine_id,
            warehouse_id = batch.warehouse_id,
            "batch imported"
        );
        Ok(batch)
    }

    /// Batches already inside the warning window as of the given date,
    /// soonest expiry first
    pub fn expiring_as_of(&self, today: NaiveDate) -> Vec<ExpiringBatch> {
        let inventory = self.store.read();
        let mut expiring: Vec<ExpiringBatch> = inventory
            .stock_batches
            .iter()
            .filter(|b| b.expiry_status(today) != ExpiryStatus::Normal)
            .map(|b| ExpiringBatch {
                batch: b.clone(),
                days_until_expiry: b.days_until_expiry(today),
                status: b.expiry_status(today),
            })
            .collect();
        expiring.sort_by_key(|e| e.batch.expiry_date);
        expiring
    }

    /// Batches inside the warning window as of today
    pub fn expiring(&self) -> Vec<ExpiringBatch> {
        self.expiring_as_of(Utc::now().date_naive())
    }

    /// Move quantity from a batch's warehouse to another warehouse.
    ///
    /// A full-quantity transfer re-homes the batch; a partial one splits it,
    /// creating a new batch in the destination with the same medicine, price,
    /// and expiry date. The whole mutation happens under one store lock.
    pub fn transfer(&self, input: TransferInput) -> AppResult<TransferRecord> {
        let record = {
            let mut inventory = self.store.write();
            let position = inventory
                .batch_position(input.batch_id)
                .ok_or_else(|| AppError::not_found("Batch"))?;
            if inventory.warehouse(input.to_warehouse_id).is_none() {
                return Err(AppError::not_found("Warehouse"));
            }

            let from_warehouse_id = inventory.stock_batches[position].warehouse_id;
            if from_warehouse_id == input.to_warehouse_id {
                return Err(AppError::validation("Batch is already in that warehouse"));
            }
            validate_transfer_quantity(input.quantity, inventory.stock_batches[position].quantity)
                .map_err(AppError::validation)?;

            let medicine_name = inventory.stock_batches[position].medicine_name.clone();
            if input.quantity == inventory.stock_batches[position].quantity {
                inventory.stock_batches[position].warehouse_id = input.to_warehouse_id;
            } else {
                inventory.stock_batches[position].quantity -= input.quantity;
                let source = inventory.stock_batches[position].clone();
                let id = inventory.next_batch_id();
                inventory.stock_batches.push(StockBatch {
                    id,
                    medicine_id: source.medicine_id,
                    medicine_name: source.medicine_name,
                    warehouse_id: input.to_warehouse_id,
                    quantity: input.quantity,
                    price: source.price,
                    expiry_date: source.expiry_date,
                });
            }

            let id = inventory.next_transfer_id();
            let record = TransferRecord {
                id,
                medicine_name,
                from_warehouse_id,
                to_warehouse_id: input.to_warehouse_id,
                quantity: input.quantity,
                timestamp: Utc::now(),
            };
            inventory.transfer_log.push(record.clone());
            record
        };
        self.store.persist()?;

        tracing::info!(
            batch_id = input.batch_id,
            from = record.from_warehouse_id,
            to = record.to_warehouse_id,
            quantity = record.quantity,
            "batch transferred"
        );
        Ok(record)
    }
}
