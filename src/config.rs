// Configuration loaded from a TOML file.
//
// Precedence for the startup language: --lang flag > config file > built-in
// default. RUST_LOG overrides logging.level. Missing files and missing fields
// fall back to the built-in defaults.

use crate::domain::{DisplayMode, Language, TextSize};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "ideagramer";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the config directory")]
    NoConfigDir,
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// Startup preferences for a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub language: Language,
    pub mode: DisplayMode,
    pub size: TextSize,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Directory for the log file; defaults to the platform data dir
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Directory the log file goes into
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.logging.dir {
            return dir.clone();
        }
        dirs::data_local_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR))
    }

    /// Serialize to the commented TOML layout written by `init`
    pub fn to_toml(&self) -> String {
        let dir_line = match &self.logging.dir {
            Some(dir) => format!("dir = {}", toml_string(&dir.display().to_string())),
            None => "# dir = \"/path/to/logs\"".to_string(),
        };

        format!(
            r#"# IdeaGramer configuration

# Startup preferences. Reset always returns to es / light / normal.
[session]
language = "{language}"  # en, es
mode = "{mode}"       # light, dark
size = "{size}"       # pocket, normal, large

# Logging (RUST_LOG overrides level)
[logging]
level = {level}
{dir_line}
"#,
            language = self.session.language.code(),
            mode = mode_name(self.session.mode),
            size = size_name(self.session.size),
            level = toml_string(&self.logging.level),
            dir_line = dir_line,
        )
    }
}

/// Quoted and escaped TOML string literal
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

fn mode_name(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Light => "light",
        DisplayMode::Dark => "dark",
    }
}

fn size_name(size: TextSize) -> &'static str {
    match size {
        TextSize::Pocket => "pocket",
        TextSize::Normal => "normal",
        TextSize::Large => "large",
    }
}

/// Default config path: `<config_dir>/ideagramer/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load config from a file; a missing file yields the defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a default config file, refusing to overwrite an existing one
pub fn write_default_config<P: AsRef<Path>>(path: P) -> Result<PathBuf, ConfigError> {
    let path = path.as_ref();

    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, Config::default().to_toml()).map_err(write_err)?;

    Ok(path.to_path_buf())
}
