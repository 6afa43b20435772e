mod bundle_source;

pub use bundle_source::{BundleLoadError, BundleSource};
