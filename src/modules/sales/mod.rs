pub mod models;
pub mod repositories;
pub mod services;

pub use models::{DateInput, DateRange, Sale, SaleDetail};
pub use repositories::{InMemorySaleRepository, MySqlSaleRepository, SaleRepository};
pub use services::{SalesInRange, SalesSummaryService};
