mod static_portfolio;

pub use static_portfolio::StaticPortfolioSource;
