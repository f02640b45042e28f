//! REPL configuration.
//!
//! Settings come from an optional TOML file, then CLI flags on top:
//!
//! | Purpose  | Default location                              |
//! |----------|-----------------------------------------------|
//! | Config   | `$XDG_CONFIG_HOME/folio/config.toml`          |
//!
//! ```toml
//! start_dir = "/about"
//! filesystem = "/path/to/tree.json"
//! color = false
//! ```
//!
//! Command history lives in the session and is never written to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use directories::BaseDirs;
use serde::Deserialize;

/// Command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "folio", version, about = "A portfolio in a terminal")]
pub struct Cli {
    /// Directory to start in.
    #[arg(long, value_name = "PATH")]
    pub start: Option<String>,

    /// JSON tree to use instead of the built-in portfolio.
    #[arg(long = "fs", value_name = "FILE")]
    pub filesystem: Option<PathBuf>,

    /// Config file to read instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Print every scrollback record as a JSON line.
    #[arg(long)]
    pub json: bool,
}

/// Contents of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub start_dir: Option<String>,
    pub filesystem: Option<PathBuf>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_dir: None,
            filesystem: None,
            color: true,
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid config")
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let loaded = match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).with_context(|| format!("reading {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        };
        loaded.inspect_err(|e| tracing::warn!(path = %path.display(), "failed to load config: {e:#}"))
    }
}

/// Effective settings after merging config and flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub start_dir: Option<String>,
    pub filesystem: Option<PathBuf>,
    pub color: bool,
    pub json: bool,
}

impl Settings {
    /// Load the config file named by the CLI (or the default one) and merge.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = match cli.config.clone().or_else(default_config_path) {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };
        Ok(Self::merge(cli, config))
    }

    /// CLI flags win over config values.
    pub fn merge(cli: &Cli, config: Config) -> Self {
        Self {
            start_dir: cli.start.clone().or(config.start_dir),
            filesystem: cli.filesystem.clone().or(config.filesystem),
            color: config.color && !cli.no_color && !cli.json,
            json: cli.json,
        }
    }
}

/// `$XDG_CONFIG_HOME/folio/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|d| d.config_dir().join("folio").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn parse_all_fields() {
        let config = Config::parse(
            r#"
            start_dir = "/about"
            filesystem = "tree.json"
            color = false
            "#,
        )
        .unwrap();
        assert_eq!(config.start_dir.as_deref(), Some("/about"));
        assert_eq!(config.filesystem, Some(PathBuf::from("tree.json")));
        assert!(!config.color);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("colour = true").is_err());
    }

    #[test]
    fn history_keys_are_gone() {
        assert!(Config::parse("history = true").is_err());
        assert!(Config::parse("history_file = \"h.txt\"").is_err());
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_load_logs_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "start_dir = ").unwrap();

        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || Config::load(&path));

        assert!(result.is_err());
        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("WARN"), "got: {logged}");
        assert!(logged.contains("failed to load config"), "got: {logged}");
    }

    #[test]
    fn missing_file_does_not_warn() {
        let dir = tempfile::tempdir().unwrap();
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let config = tracing::subscriber::with_default(subscriber, || {
            Config::load(&dir.path().join("absent.toml"))
        })
        .unwrap();

        assert_eq!(config, Config::default());
        assert!(!String::from_utf8_lossy(&capture.0.lock().unwrap()).contains("WARN"));
    }

    #[test]
    fn cli_overrides_config() {
        let cli = Cli {
            start: Some("/blog".into()),
            no_color: true,
            ..Cli::default()
        };
        let config = Config {
            start_dir: Some("/about".into()),
            ..Config::default()
        };
        let settings = Settings::merge(&cli, config);
        assert_eq!(settings.start_dir.as_deref(), Some("/blog"));
        assert!(!settings.color);
    }

    #[test]
    fn json_mode_disables_color() {
        let cli = Cli {
            json: true,
            ..Cli::default()
        };
        let settings = Settings::merge(&cli, Config::default());
        assert!(settings.json);
        assert!(!settings.color);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["folio", "--start", "/about", "--fs", "t.json", "--json"]);
        assert_eq!(cli.start.as_deref(), Some("/about"));
        assert_eq!(cli.filesystem, Some(PathBuf::from("t.json")));
        assert!(cli.json);
    }
}
