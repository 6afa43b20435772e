//! Server-rendered HTML for the fifteen themes.
//!
//! Every theme renders the same pages from the same catalog; the theme's
//! layout decides the page frame and how content blocks are arranged, and
//! its palette and stylesheet decide the look.

mod document;
mod fallback;
mod keys;
mod sections;

pub use document::{render_page, PageContext, RenderedPage};
pub use fallback::{render_fallback, FallbackReason};
pub use keys::REQUIRED_KEYS;
