mod landing;

pub use landing::{render_landing, LANDING_KEYS};
