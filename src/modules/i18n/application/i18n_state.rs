use std::sync::Arc;

use crate::i18n::application::services::{LocaleResolver, TranslationService};

/// Locale handling shared by every request.
#[derive(Clone)]
pub struct I18nState {
    pub resolver: Arc<LocaleResolver>,
    pub translations: Arc<TranslationService>,
    /// Query parameter that selects a locale explicitly.
    pub query_param: String,
    /// Cookie holding the persisted locale choice.
    pub cookie_name: String,
}
