//! HTTP handlers for the Pharmacy Inventory Management Platform

pub mod batch;
pub mod health;
pub mod history;
pub mod medicine;
pub mod warehouse;

pub use batch::*;
pub use health::*;
pub use history::*;
pub use medicine::*;
pub use warehouse::*;
