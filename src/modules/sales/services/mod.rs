pub mod sales_in_range;
pub mod sales_summary_service;

pub use sales_in_range::SalesInRange;
pub use sales_summary_service::SalesSummaryService;
