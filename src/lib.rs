//! Market point-of-sale reporting library
//!
//! Looks up non-voided sales of a date range together with their line items
//! and computed subtotals, and exposes the result over HTTP.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::reports;
pub use modules::sales;
