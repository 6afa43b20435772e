use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::gateway::application::ports::outgoing::{
    ForwardError, ForwardRequest, ForwardResponse, UpstreamForwarder,
};
use crate::i18n::application::{
    domain::{Locale, LocaleBundle},
    ports::outgoing::{BundleLoadError, BundleSource},
};
use crate::theme::application::{
    domain::{LoadedTheme, ThemeId},
    ports::outgoing::{ThemeLoadError, ThemeLoader},
};

/// Bundle source whose every load fails.
#[derive(Default, Clone)]
pub struct StubBundleSource;

impl StubBundleSource {
    pub fn failing() -> Self {
        Self
    }
}

#[async_trait]
impl BundleSource for StubBundleSource {
    async fn load(&self, locale: Locale) -> Result<LocaleBundle, BundleLoadError> {
        Err(BundleLoadError::Io {
            path: format!("locales/{locale}"),
            message: "stubbed failure".to_string(),
        })
    }
}

/// Serves `/* v{n} */` as every theme's stylesheet and counts loads.
#[derive(Default)]
pub struct StubThemeLoader {
    failing: HashSet<u8>,
    calls: AtomicUsize,
}

impl StubThemeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(ids: impl IntoIterator<Item = u8>) -> Self {
        Self {
            failing: ids.into_iter().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThemeLoader for StubThemeLoader {
    async fn load(&self, id: ThemeId) -> Result<LoadedTheme, ThemeLoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&id.get()) {
            return Err(ThemeLoadError::AssetMissing {
                id,
                path: format!("themes/{id}/theme.css"),
            });
        }
        Ok(LoadedTheme::new(id, format!("/* {id} */")))
    }
}

/// Records forwarded requests and answers with a canned response or error.
pub struct StubForwarder {
    response: Option<ForwardResponse>,
    requests: Mutex<Vec<ForwardRequest>>,
}

impl StubForwarder {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: Some(ForwardResponse {
                status,
                headers: vec![
                    ("content-type".to_string(), b"text/html".to_vec()),
                    ("connection".to_string(), b"close".to_vec()),
                ],
                body: body.as_bytes().to_vec(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            response: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ForwardRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl UpstreamForwarder for StubForwarder {
    async fn forward(&self, request: ForwardRequest) -> Result<ForwardResponse, ForwardError> {
        let url = request.url.clone();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.response.clone().ok_or(ForwardError::Unreachable {
            url,
            message: "connection refused".to_string(),
        })
    }
}
