use crate::theme::application::domain::{ThemeId, ThemeKind};

/// A theme whose assets have been loaded and can render pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTheme {
    pub id: ThemeId,
    pub kind: ThemeKind,
    pub stylesheet: String,
}

impl LoadedTheme {
    pub fn new(id: ThemeId, stylesheet: String) -> Self {
        Self {
            id,
            kind: ThemeKind::for_id(id),
            stylesheet,
        }
    }
}
