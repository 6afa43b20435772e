mod get_bundle;
mod switch_locale;

pub use get_bundle::*;
pub use switch_locale::*;
