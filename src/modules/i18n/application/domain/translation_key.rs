/// Namespace used when a key carries none.
pub const DEFAULT_NAMESPACE: &str = "common";

/// Namespaces every locale bundle is split into.
pub const NAMESPACES: &[&str] = &["common", "profile", "projects", "experience"];

/// A parsed `namespace:dotted.path` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationKey<'a> {
    pub namespace: &'a str,
    pub path: &'a str,
}

impl<'a> TranslationKey<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(':') {
            Some((namespace, path)) if !namespace.is_empty() => Self { namespace, path },
            Some((_, path)) => Self {
                namespace: DEFAULT_NAMESPACE,
                path,
            },
            None => Self {
                namespace: DEFAULT_NAMESPACE,
                path: raw,
            },
        }
    }

    /// The canonical `namespace:path` form used as bundle lookup key.
    pub fn qualified(&self) -> String {
        format!("{}:{}", self.namespace, self.path)
    }
}
