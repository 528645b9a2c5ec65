//! Audit history service
//!
//! Import and export logs are returned in append order (the frontend reverses
//! for display); transfers are returned most-recent-first.

use shared::models::{ExportBatch, ImportBatch, TransferRecord};

use crate::store::Store;

/// Service for reading the append-only audit logs
#[derive(Clone)]
pub struct HistoryService {
    store: Store,
}

impl HistoryService {
    /// Create a new HistoryService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Import audit log, oldest first
    pub fn import_batches(&self) -> Vec<ImportBatch> {
        self.store.read().import_log.clone()
    }

    /// Export audit log, oldest first
    pub fn export_batches(&self) -> Vec<ExportBatch> {
        self.store.read().export_log.clone()
    }

    /// Transfer audit log, most recent first
    pub fn transfers(&self) -> Vec<TransferRecord> {
        let mut transfers = self.store.read().transfer_log.clone();
        transfers.reverse();
        transfers
    }
}
