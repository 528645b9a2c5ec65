//! Domain models for the Pharmacy Inventory Management Platform

mod batch;
mod history;
mod medicine;
mod warehouse;

pub use batch::*;
pub use history::*;
pub use medicine::*;
pub use warehouse::*;
