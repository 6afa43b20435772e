use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::gateway::application::domain::{GatewayMode, ProxyTable};
use crate::i18n::application::domain::Locale;
use crate::theme::application::domain::{InvalidThemeId, ThemeId};

#[derive(Parser, Debug)]
#[command(name = "portfolio_server")]
#[command(
    about = "Multi-theme portfolio site: server, static export and gateway tools",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Serve only this theme; `/` redirects to it
        #[arg(long, value_name = "N", value_parser = parse_theme_id)]
        theme: Option<ThemeId>,

        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// `bundled` or `proxy`
        #[arg(long, value_name = "MODE")]
        mode: Option<GatewayMode>,
    },

    /// Render every page of the selected themes into static files
    Export {
        #[arg(long, value_name = "DIR", default_value = "dist")]
        out: PathBuf,

        /// Theme to export; repeat for several. Defaults to all
        #[arg(long = "theme", value_name = "N", value_parser = parse_theme_id)]
        themes: Vec<ThemeId>,

        #[arg(long, value_name = "LOCALE")]
        locale: Option<Locale>,

        /// Prefix the exported site is published under, e.g. `/portfolio`
        #[arg(long, value_name = "PATH")]
        base_path: Option<String>,
    },

    /// Print the development proxy table
    Routes {
        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        #[arg(long, value_name = "PORT")]
        base_port: Option<u16>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn parse_theme_id(value: &str) -> Result<ThemeId, String> {
    let n: u32 = value
        .trim()
        .trim_start_matches('v')
        .parse()
        .map_err(|_| format!("not a theme number: {value}"))?;
    ThemeId::new(n).map_err(|e: InvalidThemeId| e.to_string())
}

/// Applies `serve` flags on top of the environment configuration. A
/// standalone theme listens on its own development port unless `--port`
/// says otherwise.
pub fn apply_serve_overrides(
    config: &mut AppConfig,
    theme: Option<ThemeId>,
    host: Option<String>,
    port: Option<u16>,
    mode: Option<GatewayMode>,
) {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(mode) = mode {
        config.gateway_mode = mode;
    }
    if let Some(id) = theme {
        config.gateway_mode = GatewayMode::Standalone(id);
        config.port = config.base_port.saturating_add(u16::from(id.get()));
    }
    if let Some(port) = port {
        config.port = port;
    }
}

/// The proxy table as aligned text, one route per line.
pub fn format_routes(table: &ProxyTable) -> String {
    table
        .routes()
        .iter()
        .map(|route| format!("{:<5} -> {}\n", route.prefix, route.target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().command.unwrap()
    }

    #[test]
    fn no_subcommand_means_serve() {
        assert!(Cli::try_parse_from(["portfolio_server"]).unwrap().command.is_none());
    }

    #[test]
    fn serve_accepts_a_standalone_theme() {
        let command = parse(&["portfolio_server", "serve", "--theme", "v4", "--port", "3004"]);
        assert_eq!(
            command,
            Command::Serve {
                theme: Some(ThemeId::new(4).unwrap()),
                host: None,
                port: Some(3004),
                mode: None,
            }
        );
    }

    #[test]
    fn rejects_unknown_themes_and_modes() {
        assert!(Cli::try_parse_from(["portfolio_server", "serve", "--theme", "16"]).is_err());
        assert!(Cli::try_parse_from(["portfolio_server", "serve", "--mode", "cluster"]).is_err());
        assert!(Cli::try_parse_from(["portfolio_server", "export", "--locale", "fr"]).is_err());
    }

    #[test]
    fn export_collects_repeated_themes() {
        let command = parse(&[
            "portfolio_server", "export", "--theme", "1", "--theme", "3", "--locale", "en",
        ]);
        let Command::Export { out, themes, locale, base_path } = command else {
            panic!("expected export");
        };
        assert_eq!(out, PathBuf::from("dist"));
        assert_eq!(themes, vec![ThemeId::new(1).unwrap(), ThemeId::new(3).unwrap()]);
        assert_eq!(locale, Some(Locale::En));
        assert_eq!(base_path, None);
    }

    #[test]
    fn theme_flag_wins_over_mode() {
        let mut config = AppConfig::default();
        apply_serve_overrides(
            &mut config,
            Some(ThemeId::new(2).unwrap()),
            Some("0.0.0.0".into()),
            None,
            Some(GatewayMode::Proxy),
        );

        assert_eq!(config.gateway_mode, GatewayMode::Standalone(ThemeId::new(2).unwrap()));
        assert_eq!(config.server_url(), "0.0.0.0:3002");
    }

    #[test]
    fn explicit_port_wins_over_theme_port() {
        let mut config = AppConfig::default();
        apply_serve_overrides(&mut config, Some(ThemeId::new(9).unwrap()), None, Some(8080), None);

        assert_eq!(config.port, 8080);
    }

    #[test]
    fn formats_one_line_per_route() {
        let table = ProxyTable::generate("localhost", 3000, ThemeId::all()).unwrap();
        let text = format_routes(&table);

        assert_eq!(text.lines().count(), 15);
        assert_eq!(text.lines().next(), Some("/v1   -> http://localhost:3001"));
        assert_eq!(text.lines().last(), Some("/v15  -> http://localhost:3015"));
    }
}
