/// A page inside a theme, addressed by the path after `/v{n}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemePage {
    Home,
    About,
    Skills,
    Experience,
    Portfolio,
    Project(String),
    Contact,
    Stylesheet,
    NotFound,
}

/// Pages linked from every theme's navigation, in display order.
pub const NAV_PAGES: [ThemePage; 6] = [
    ThemePage::Home,
    ThemePage::About,
    ThemePage::Skills,
    ThemePage::Experience,
    ThemePage::Portfolio,
    ThemePage::Contact,
];

pub const STYLESHEET_FILE: &str = "theme.css";

impl ThemePage {
    /// Parses the tail of a theme path. An empty tail and `/` both mean the
    /// home page; a trailing slash on any other page is tolerated.
    pub fn parse(tail: &str) -> Self {
        let trimmed = tail.strip_prefix('/').unwrap_or(tail);
        if trimmed.starts_with('/') {
            return Self::NotFound;
        }
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let mut segments = trimmed.split('/');

        match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) => Self::Home,
            (Some("about"), None, None) => Self::About,
            (Some("skills"), None, None) => Self::Skills,
            (Some("experience"), None, None) => Self::Experience,
            (Some("portfolio"), None, None) => Self::Portfolio,
            (Some("portfolio"), Some(slug), None) if !slug.is_empty() => {
                Self::Project(slug.to_string())
            }
            (Some("contact"), None, None) => Self::Contact,
            (Some(STYLESHEET_FILE), None, None) => Self::Stylesheet,
            _ => Self::NotFound,
        }
    }

    /// Path relative to the theme root, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Self::Home | Self::NotFound => "/".to_string(),
            Self::About => "/about".to_string(),
            Self::Skills => "/skills".to_string(),
            Self::Experience => "/experience".to_string(),
            Self::Portfolio => "/portfolio".to_string(),
            Self::Project(slug) => format!("/portfolio/{slug}"),
            Self::Contact => "/contact".to_string(),
            Self::Stylesheet => format!("/{STYLESHEET_FILE}"),
        }
    }

    /// Translation key of the page title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Home => "common:nav.home",
            Self::About => "common:nav.about",
            Self::Skills => "common:nav.skills",
            Self::Experience => "common:nav.experience",
            Self::Portfolio | Self::Project(_) => "common:nav.portfolio",
            Self::Contact => "common:nav.contact",
            Self::Stylesheet | Self::NotFound => "common:not_found.title",
        }
    }

    /// The navigation entry highlighted while this page is shown.
    pub fn nav_section(&self) -> Option<ThemePage> {
        match self {
            Self::Project(_) => Some(Self::Portfolio),
            Self::Stylesheet | Self::NotFound => None,
            other => Some(other.clone()),
        }
    }
}
