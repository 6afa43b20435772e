pub mod domain;
pub mod i18n_state;
pub mod ports;
pub mod services;
