use serde::Serialize;

/// The route prefix a theme is mounted under, e.g. `/v3`, optionally
/// nested below a public deployment prefix such as `/portfolio`.
///
/// Handed to every mounted theme so links never hardcode the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeBasePath {
    public: String,
    prefix: String,
}

impl ThemeBasePath {
    pub fn new(public_prefix: &str, theme_prefix: &str) -> Self {
        let public = normalize(public_prefix);
        let prefix = format!("{}{}", public, normalize(theme_prefix));
        Self { public, prefix }
    }

    /// Prefix without trailing slash, e.g. `/v3`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Root of the theme, always with a trailing slash.
    pub fn root(&self) -> String {
        format!("{}/", self.prefix)
    }

    /// Root of the whole site, outside any theme.
    pub fn site_root(&self) -> String {
        format!("{}/", self.public)
    }

    /// Absolute path for a site-relative path outside the theme.
    pub fn site_join(&self, path: &str) -> String {
        format!("{}/{}", self.public, path.trim_start_matches('/'))
    }

    /// Absolute path for a theme-relative path.
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.root()
        } else {
            format!("{}/{}", self.prefix, path)
        }
    }

    /// Strips this prefix from an absolute request path, returning the
    /// theme-relative remainder without leading slash.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        let rest = path.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() {
            Some("")
        } else {
            rest.strip_prefix('/')
        }
    }
}

fn normalize(segment: &str) -> String {
    let trimmed = segment.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
