pub mod bundle;
pub mod locale;
pub mod translation_key;

pub use bundle::{BundleError, LocaleBundle};
pub use locale::{Locale, SUPPORTED_LOCALES};
pub use translation_key::{TranslationKey, DEFAULT_NAMESPACE, NAMESPACES};
