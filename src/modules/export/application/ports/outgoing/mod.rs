mod site_writer;

pub use site_writer::{SiteWriteError, SiteWriter};
