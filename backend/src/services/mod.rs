//! Business logic services for the Pharmacy Inventory Management Platform

pub mod batch;
pub mod history;
pub mod medicine;
pub mod warehouse;

pub use batch::BatchService;
pub use history::HistoryService;
pub use medicine::MedicineService;
pub use warehouse::WarehouseService;
