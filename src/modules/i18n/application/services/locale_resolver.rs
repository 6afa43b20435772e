use std::str::FromStr;

use serde::Serialize;

use crate::i18n::application::domain::Locale;

/// What decides the locale on a first visit, when no preference is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstVisitPolicy {
    /// The browser's `Accept-Language` wins if it names a supported locale.
    #[default]
    Browser,
    /// The default locale wins until the visitor picks one explicitly.
    Default,
}

impl FromStr for FirstVisitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "browser" => Ok(Self::Browser),
            "default" => Ok(Self::Default),
            other => Err(format!("unknown first-visit policy: {other}")),
        }
    }
}

/// Raw locale signals carried by a request.
#[derive(Debug, Clone, Default)]
pub struct LocaleHints<'a> {
    pub query: Option<&'a str>,
    pub stored: Option<&'a str>,
    pub accept_language: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleSource {
    Query,
    Stored,
    Browser,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleResolution {
    pub locale: Locale,
    pub source: LocaleSource,
    /// The stored preference must be (re)written with `locale`.
    pub persist: bool,
}

/// Picks the active locale: explicit query, then stored preference, then
/// the browser's languages, then the default. The first source naming a
/// supported locale wins.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    default_locale: Locale,
    first_visit: FirstVisitPolicy,
}

impl LocaleResolver {
    pub fn new(default_locale: Locale, first_visit: FirstVisitPolicy) -> Self {
        Self {
            default_locale,
            first_visit,
        }
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn resolve(&self, hints: &LocaleHints<'_>) -> LocaleResolution {
        let stored = hints.stored.and_then(Locale::parse);

        let (locale, source) = if let Some(locale) = hints.query.and_then(Locale::parse) {
            (locale, LocaleSource::Query)
        } else if let Some(locale) = stored {
            (locale, LocaleSource::Stored)
        } else if let Some(locale) = self.browser_locale(hints.accept_language) {
            (locale, LocaleSource::Browser)
        } else {
            (self.default_locale, LocaleSource::Default)
        };

        LocaleResolution {
            locale,
            source,
            persist: stored != Some(locale),
        }
    }

    fn browser_locale(&self, header: Option<&str>) -> Option<Locale> {
        match self.first_visit {
            FirstVisitPolicy::Default => None,
            FirstVisitPolicy::Browser => header.and_then(preferred_from_accept_language),
        }
    }
}

/// Highest-weighted supported language in an `Accept-Language` header.
/// Ties keep header order.
pub fn preferred_from_accept_language(header: &str) -> Option<Locale> {
    let mut candidates: Vec<(f32, usize, &str)> = header
        .split(',')
        .enumerate()
        .filter_map(|(index, part)| {
            let mut pieces = part.trim().split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (quality > 0.0).then_some((quality, index, tag))
        })
        .collect();

    candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
    candidates.into_iter().find_map(|(_, _, tag)| Locale::parse(tag))
}
