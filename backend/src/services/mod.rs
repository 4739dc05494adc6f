//! Business logic services for the Paint Inventory Dashboard

pub mod product;
pub mod report;
pub mod supplier;
pub mod transaction;

pub use product::ProductService;
pub use report::ReportService;
pub use supplier::SupplierService;
pub use transaction::TransactionService;
