mod fs_site_writer;

pub use fs_site_writer::FsSiteWriter;
