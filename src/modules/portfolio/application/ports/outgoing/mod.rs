mod portfolio_source;

pub use portfolio_source::PortfolioSource;
