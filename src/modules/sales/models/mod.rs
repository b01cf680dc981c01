pub mod date_range;
pub mod sale;
pub mod sale_detail;

pub use date_range::{DateInput, DateRange};
pub use sale::Sale;
pub use sale_detail::SaleDetail;
