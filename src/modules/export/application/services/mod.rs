mod static_site_exporter;

pub use static_site_exporter::{ExportError, ExportOptions, ExportReport, StaticSiteExporter};
