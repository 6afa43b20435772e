pub mod export;
pub mod gateway;
pub mod i18n;
pub mod portfolio;
pub mod theme;
