mod get_themes;
mod theme_page;

pub use get_themes::*;
pub use theme_page::*;
