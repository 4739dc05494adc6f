//! Shared types and computation cores for the Paint Inventory Dashboard
//!
//! This crate contains the models shared between the backend and any other
//! components, plus the pure report computations (daily stock status and
//! low-stock classification) that the dashboard and report endpoints feed on.

pub mod low_stock;
pub mod models;
pub mod stock_status;

pub use low_stock::*;
pub use models::*;
pub use stock_status::*;
