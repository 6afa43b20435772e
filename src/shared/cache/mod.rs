mod lazy_cache;

pub use lazy_cache::{LazyCache, LoadState};
