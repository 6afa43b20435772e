pub mod catalog;
pub mod entities;

pub use catalog::{CatalogError, PortfolioCatalog};
