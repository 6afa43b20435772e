mod json_bundle_source;

pub use json_bundle_source::JsonBundleSource;
