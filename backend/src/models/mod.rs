//! Database models for the Paint Inventory Dashboard
//!
//! Re-exports models from the shared crate and adds backend-specific models

pub use shared::models::*;
