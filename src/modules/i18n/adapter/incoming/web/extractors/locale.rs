use std::collections::HashMap;
use std::future::{ready, Ready};

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    dev::Payload,
    http::header::ACCEPT_LANGUAGE,
    web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use tracing::debug;

use crate::{
    i18n::application::{
        domain::Locale,
        services::{LocaleHints, LocaleResolution, LocaleSource},
    },
    shared::api::ApiResponse,
    AppState,
};

/// The locale resolved for the current request.
#[derive(Debug, Clone)]
pub struct RequestLocale {
    pub resolution: LocaleResolution,
    cookie_name: String,
}

impl RequestLocale {
    pub fn locale(&self) -> Locale {
        self.resolution.locale
    }

    pub fn source(&self) -> LocaleSource {
        self.resolution.source
    }

    /// Writes the preference cookie when the stored choice is stale.
    pub fn persist_on(&self, response: &mut HttpResponse) {
        if !self.resolution.persist {
            return;
        }
        debug!(
            "Persisting locale {} resolved from {:?}",
            self.resolution.locale, self.resolution.source
        );
        if let Err(err) = response.add_cookie(&locale_cookie(&self.cookie_name, self.locale())) {
            debug!("Could not set locale cookie: {}", err);
        }
    }
}

/// Long-lived cookie carrying the locale choice across sessions.
pub fn locale_cookie(name: &str, locale: Locale) -> Cookie<'static> {
    Cookie::build(name.to_string(), locale.as_str())
        .path("/")
        .max_age(Duration::days(365))
        .same_site(SameSite::Lax)
        .finish()
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for RequestLocale {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            None => return ready(Err(create_api_error(ApiResponse::internal_error()))),
        };
        let i18n = &state.i18n;

        let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .map(|q| q.into_inner())
            .unwrap_or_default();
        let stored = req.cookie(&i18n.cookie_name);
        let accept_language = req
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());

        let resolution = i18n.resolver.resolve(&LocaleHints {
            query: query.get(&i18n.query_param).map(String::as_str),
            stored: stored.as_ref().map(|c| c.value()),
            accept_language,
        });

        ready(Ok(RequestLocale {
            resolution,
            cookie_name: i18n.cookie_name.clone(),
        }))
    }
}
