pub mod in_memory;
pub mod sale_repository;

pub use in_memory::InMemorySaleRepository;
pub use sale_repository::{MySqlSaleRepository, SaleRepository};
