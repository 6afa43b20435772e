mod theme_loader;

pub use theme_loader::{ThemeLoadError, ThemeLoader};
