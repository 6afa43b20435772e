use crate::portfolio::application::domain::{CatalogError, PortfolioCatalog};

/// Supplies the portfolio data the catalog is built from.
pub trait PortfolioSource: Send + Sync {
    fn load(&self) -> Result<PortfolioCatalog, CatalogError>;
}
