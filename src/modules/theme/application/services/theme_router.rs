use crate::theme::application::domain::ThemeId;

/// Where a request path belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// The gateway landing view at `/`.
    Landing,
    /// A path under `/v{n}`. `tail` is the remainder after the prefix,
    /// empty for the bare prefix and `/` for the theme root.
    Theme { id: ThemeId, tail: String },
    Unmatched,
}

/// Maps request paths onto the version-prefixed theme mounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeRouter;

impl ThemeRouter {
    pub fn match_path(path: &str) -> RouteMatch {
        if path.is_empty() || path == "/" {
            return RouteMatch::Landing;
        }

        let Some(rest) = path.strip_prefix('/') else {
            return RouteMatch::Unmatched;
        };
        let (segment, tail) = match rest.find('/') {
            Some(index) => (&rest[..index], &rest[index..]),
            None => (rest, ""),
        };

        match ThemeId::from_segment(segment) {
            Some(id) => RouteMatch::Theme {
                id,
                tail: tail.to_string(),
            },
            None => RouteMatch::Unmatched,
        }
    }
}
