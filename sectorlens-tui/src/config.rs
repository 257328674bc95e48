//! Runtime settings: command-line flags layered over an optional TOML file.
//!
//! Precedence is flag > file > default. The file lives at
//! `<config dir>/sectorlens/config.toml` unless `--config` names another one.
//! A missing default file is silent; an unreadable or malformed default file
//! is reported and ignored; any problem with an explicit `--config` file is
//! fatal.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_TICK_MS: u64 = 100;
pub const MIN_TICK_MS: u64 = 10;
pub const MAX_TICK_MS: u64 = 1000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser)]
#[command(
    name = "sectorlens-tui",
    about = "SectorLens: financial metrics dashboard for the terminal"
)]
pub struct Args {
    /// Path to a TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Input poll interval in milliseconds (10-1000).
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Log file. Defaults to <config dir>/sectorlens/sectorlens.log.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "sectorlens_core=trace". RUST_LOG wins if set.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Render without colours.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

/// Contents of the TOML config file. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub tick_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub tick: Duration,
    pub log_level: String,
    pub log_file: PathBuf,
    pub color: bool,
}

/// Resolved settings plus a default-file problem that was skipped.
#[derive(Debug)]
pub struct Loaded {
    pub settings: Settings,
    pub ignored: Option<ConfigError>,
}

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sectorlens")
}

pub fn default_config_path() -> PathBuf {
    app_dir().join("config.toml")
}

pub fn default_log_path() -> PathBuf {
    app_dir().join("sectorlens.log")
}

/// Parse a config file's contents.
pub fn parse(path: &Path, content: &str) -> Result<FileConfig, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a config file. `Ok(None)` when it does not exist.
pub fn read(path: &Path) -> Result<Option<FileConfig>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(path, &content).map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl Settings {
    /// Layer flags over a file config over defaults.
    pub fn merge(args: &Args, file: &FileConfig) -> Self {
        let tick_ms = args
            .tick_ms
            .or(file.tick_ms)
            .unwrap_or(DEFAULT_TICK_MS)
            .clamp(MIN_TICK_MS, MAX_TICK_MS);
        let log_level = args
            .log_level
            .clone()
            .or_else(|| file.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_file = args
            .log_file
            .clone()
            .or_else(|| file.log_file.clone())
            .unwrap_or_else(default_log_path);
        let color = !args.no_color && file.color.unwrap_or(true);

        Self {
            tick: Duration::from_millis(tick_ms),
            log_level,
            log_file,
            color,
        }
    }
}

/// Load settings for `args`, reading `--config` or the default file.
pub fn load(args: &Args) -> Result<Loaded, ConfigError> {
    load_with_default(args, &default_config_path())
}

/// [`load`] with the default file at `default_path`.
pub fn load_with_default(args: &Args, default_path: &Path) -> Result<Loaded, ConfigError> {
    let (file, ignored) = match &args.config {
        Some(path) => match read(path)? {
            Some(file) => (file, None),
            None => {
                return Err(ConfigError::Read {
                    path: path.clone(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            }
        },
        None => match read(default_path) {
            Ok(file) => (file.unwrap_or_default(), None),
            Err(e) => (FileConfig::default(), Some(e)),
        },
    };

    Ok(Loaded {
        settings: Settings::merge(args, &file),
        ignored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["sectorlens-tui"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let settings = Settings::merge(&args(&[]), &FileConfig::default());
        assert_eq!(settings.tick, Duration::from_millis(DEFAULT_TICK_MS));
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_file, default_log_path());
        assert!(settings.color);
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig {
            tick_ms: Some(250),
            log_level: Some("warn".into()),
            log_file: Some(PathBuf::from("/tmp/from-file.log")),
            color: Some(true),
        };
        let settings = Settings::merge(
            &args(&["--tick-ms", "50", "--log-level", "debug", "--no-color"]),
            &file,
        );
        assert_eq!(settings.tick, Duration::from_millis(50));
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.log_file, PathBuf::from("/tmp/from-file.log"));
        assert!(!settings.color);
    }

    #[test]
    fn tick_is_clamped() {
        let fast = Settings::merge(&args(&["--tick-ms", "1"]), &FileConfig::default());
        assert_eq!(fast.tick, Duration::from_millis(MIN_TICK_MS));
        let slow = Settings::merge(&args(&["--tick-ms", "60000"]), &FileConfig::default());
        assert_eq!(slow.tick, Duration::from_millis(MAX_TICK_MS));
    }

    #[test]
    fn file_can_disable_color() {
        let file = parse(Path::new("config.toml"), "color = false\n").unwrap();
        assert!(!Settings::merge(&args(&[]), &file).color);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse(Path::new("config.toml"), "active_tab = \"growth\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_ms = 200\nlog_level = \"trace\"\n").unwrap();

        let loaded = load(&args(&["--config", path.to_str().unwrap()])).unwrap();
        assert!(loaded.ignored.is_none());
        assert_eq!(loaded.settings.tick, Duration::from_millis(200));
        assert_eq!(loaded.settings.log_level, "trace");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load(&args(&["--config", path.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_ms = \"fast\"").unwrap();
        let err = load(&args(&["--config", path.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read(&dir.path().join("nope.toml")).unwrap(), None);
    }

    #[test]
    fn malformed_default_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_ms = [1, 2").unwrap();

        let loaded = load_with_default(&args(&["--tick-ms", "40"]), &path).unwrap();
        assert!(matches!(loaded.ignored, Some(ConfigError::Parse { .. })));
        assert_eq!(
            loaded.settings,
            Settings::merge(&args(&["--tick-ms", "40"]), &FileConfig::default())
        );
        assert_eq!(loaded.settings.tick, Duration::from_millis(40));
        assert_eq!(loaded.settings.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn unreadable_default_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file.
        let loaded = load_with_default(&args(&[]), dir.path()).unwrap();
        assert!(matches!(loaded.ignored, Some(ConfigError::Read { .. })));
        assert_eq!(loaded.settings, Settings::merge(&args(&[]), &FileConfig::default()));
    }

    #[test]
    fn missing_default_config_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_with_default(&args(&[]), &dir.path().join("absent.toml")).unwrap();
        assert!(loaded.ignored.is_none());
        assert!(loaded.settings.color);
    }

    #[test]
    fn explicit_config_wins_over_default_path() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("default.toml");
        std::fs::write(&default, "not toml at all [").unwrap();
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(&explicit, "color = false\n").unwrap();

        let loaded =
            load_with_default(&args(&["--config", explicit.to_str().unwrap()]), &default).unwrap();
        assert!(loaded.ignored.is_none());
        assert!(!loaded.settings.color);
    }
}
