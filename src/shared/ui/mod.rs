//! Cross-theme UI primitives: base-path context, theme-relative links,
//! scroll restoration and HTML escaping.

mod base_path;
mod html;
mod scroll;
mod theme_link;

pub use base_path::ThemeBasePath;
pub use html::escape;
pub use scroll::scroll_to_top;
pub use theme_link::ThemeLink;
