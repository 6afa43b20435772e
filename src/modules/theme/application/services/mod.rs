mod theme_registry;
mod theme_router;

pub use theme_registry::{ThemeRegistry, ThemeSummary};
pub use theme_router::{RouteMatch, ThemeRouter};
