//! In-memory inventory store with JSON snapshot persistence
//!
//! All consistency lives behind one lock: a mutation takes the write guard,
//! applies every effect (stock change plus audit entry), releases the guard,
//! and then snapshots the whole state to disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use shared::models::{ExportBatch, ImportBatch, Medicine, StockBatch, TransferRecord, Warehouse};

use crate::error::{AppError, AppResult};

/// Complete inventory state, as persisted in the snapshot file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub medicines: Vec<Medicine>,
    #[serde(default)]
    pub warehouses: Vec<Warehouse>,
    #[serde(default)]
    pub stock_batches: Vec<StockBatch>,
    #[serde(default)]
    pub import_log: Vec<ImportBatch>,
    #[serde(default)]
    pub export_log: Vec<ExportBatch>,
    #[serde(default)]
    pub transfer_log: Vec<TransferRecord>,
    #[serde(default)]
    counters: Counters,
}

/// Monotonic id counters, persisted so ids stay unique across restarts and
/// are never recycled after a delete
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Counters {
    medicines: u32,
    warehouses: u32,
    batches: u32,
    imports: u32,
    exports: u32,
    transfers: u32,
}

impl Inventory {
    pub fn next_medicine_id(&mut self) -> u32 {
        self.counters.medicines += 1;
        self.counters.medicines
    }

    pub fn next_warehouse_id(&mut self) -> u32 {
        self.counters.warehouses += 1;
        self.counters.warehouses
    }

    pub fn next_batch_id(&mut self) -> u32 {
        self.counters.batches += 1;
        self.counters.batches
    }

    pub fn next_import_id(&mut self) -> u32 {
        self.counters.imports += 1;
        self.counters.imports
    }

    pub fn next_export_id(&mut self) -> u32 {
        self.counters.exports += 1;
        self.counters.exports
    }

    pub fn next_transfer_id(&mut self) -> u32 {
        self.counters.transfers += 1;
        self.counters.transfers
    }

    pub fn medicine(&self, id: u32) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    pub fn medicine_mut(&mut self, id: u32) -> Option<&mut Medicine> {
        self.medicines.iter_mut().find(|m| m.id == id)
    }

    pub fn warehouse(&self, id: u32) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.id == id)
    }

    pub fn batch_position(&self, id: u32) -> Option<usize> {
        self.stock_batches.iter().position(|b| b.id == id)
    }
}

/// Cloneable handle to the shared inventory state and its snapshot location
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<Inventory>>,
    path: Option<Arc<PathBuf>>,
}

impl Store {
    /// Open a store backed by the given snapshot file.
    ///
    /// A missing or unreadable snapshot starts the store empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let inventory = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                tracing::warn!(
                    "Snapshot {} unreadable ({}), starting empty",
                    path.display(),
                    e
                );
                Inventory::default()
            }),
            Err(_) => Inventory::default(),
        };

        Self {
            inner: Arc::new(RwLock::new(inventory)),
            path: Some(Arc::new(path)),
        }
    }

    /// Open a store with no snapshot file; `persist` becomes a no-op.
    pub fn ephemeral() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inventory::default())),
            path: None,
        }
    }

    /// Snapshot file backing this store, if any
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.path.as_ref().map(|p| p.as_path())
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Inventory> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Inventory> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write the current state to the snapshot file, if one is configured.
    pub fn persist(&self) -> AppResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let data = {
            let inventory = self.read();
            serde_json::to_string_pretty(&*inventory).map_err(|e| AppError::Storage(e.to_string()))?
        };
        fs::write(path.as_path(), data).map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(())
    }
}
