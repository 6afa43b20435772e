pub mod loaded_theme;
pub mod page;
pub mod theme_id;
pub mod theme_kind;

pub use loaded_theme::LoadedTheme;
pub use page::{ThemePage, NAV_PAGES, STYLESHEET_FILE};
pub use theme_id::{InvalidThemeId, ThemeId};
pub use theme_kind::{Layout, Palette, ThemeKind};
