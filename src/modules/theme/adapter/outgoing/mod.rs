mod fs_theme_loader;

pub use fs_theme_loader::FsThemeLoader;
