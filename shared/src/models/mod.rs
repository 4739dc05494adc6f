//! Domain models for the Paint Inventory Dashboard

pub mod product;
pub mod supplier;
pub mod transaction;

pub use product::*;
pub use supplier::*;
pub use transaction::*;
