mod locale;

pub use locale::{locale_cookie, RequestLocale};
