use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Write logs to this file
    #[arg(long)]
    pub log_path: Option<String>,

    /// Lifetime of informational toasts in milliseconds, 0 keeps them until dismissed
    #[arg(long, default_value_t = 3000)]
    pub toast_lifetime_ms: u64,

    /// Lifetime of error toasts in milliseconds, 0 keeps them until dismissed
    #[arg(long, default_value_t = 5000)]
    pub error_lifetime_ms: u64,

    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    pub theme: ThemeArg,

    /// Start with the sidebar collapsed
    #[arg(long)]
    pub no_sidebar: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeArg {
    Dark,
    SolarizedDark,
}

pub fn load_config() -> Config {
    Config::from_args(Args::parse())
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_path: Option<String>,
    pub toast_lifetime: Duration,
    pub error_lifetime: Duration,
    pub theme: Theme,
    pub sidebar: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: None,
            toast_lifetime: Duration::from_millis(3000),
            error_lifetime: Duration::from_millis(5000),
            theme: Theme::Dark,
            sidebar: true,
        }
    }
}

impl Config {
    pub fn from_args(args: Args) -> Config {
        Config {
            log_path: args.log_path,
            toast_lifetime: Duration::from_millis(args.toast_lifetime_ms),
            error_lifetime: Duration::from_millis(args.error_lifetime_ms),
            theme: match args.theme {
                ThemeArg::Dark => Theme::Dark,
                ThemeArg::SolarizedDark => Theme::SolarizedDark,
            },
            sidebar: !args.no_sidebar,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() -> Result<(), anyhow::Error> {
        let config = Config::from_args(Args::try_parse_from(["toast-tui"])?);
        assert_eq!(Config::default(), config);
        Ok(())
    }

    #[test]
    fn test_from_args() -> Result<(), anyhow::Error> {
        let config = Config::from_args(Args::try_parse_from([
            "toast-tui",
            "--log-path",
            "/tmp/toast.log",
            "--toast-lifetime-ms",
            "0",
            "--error-lifetime-ms",
            "10000",
            "--theme",
            "solarized-dark",
            "--no-sidebar",
        ])?);
        assert_eq!(
            Config {
                log_path: Some("/tmp/toast.log".to_string()),
                toast_lifetime: Duration::ZERO,
                error_lifetime: Duration::from_secs(10),
                theme: Theme::SolarizedDark,
                sidebar: false,
            },
            config
        );
        Ok(())
    }

    #[test]
    fn test_rejects_negative_lifetime() {
        assert!(Args::try_parse_from(["toast-tui", "--toast-lifetime-ms", "-1"]).is_err());
    }
}
