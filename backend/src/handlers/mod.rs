//! HTTP handlers for the Paint Inventory Dashboard

pub mod dashboard;
pub mod health;
pub mod product;
pub mod report;
pub mod supplier;
pub mod transaction;

pub use dashboard::*;
pub use health::*;
pub use product::*;
pub use report::*;
pub use supplier::*;
pub use transaction::*;
