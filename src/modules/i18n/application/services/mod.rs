mod locale_resolver;
mod translation_service;
mod translator;

pub use locale_resolver::{
    FirstVisitPolicy, LocaleHints, LocaleResolution, LocaleResolver, LocaleSource,
};
pub use translation_service::TranslationService;
pub use translator::Translator;
