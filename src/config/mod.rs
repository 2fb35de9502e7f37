//! Editor defaults read from `$XDG_CONFIG_HOME/typescale/config.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::EditorDefaults;

const APP_DIR: &str = "typescale";
const APP_CONFIG_FILE: &str = "config.json";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigPathError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Path(#[from] ConfigPathError),
    #[error("failed to read editor config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse editor config")]
    ParseConfig(#[from] serde_json::Error),
}

/// Overrides from `config.json`; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileDefaults {
    #[serde(default)]
    pub initial_size: Option<f64>,
    #[serde(default)]
    pub steps: Option<u32>,
    #[serde(default)]
    pub line_height_percent: Option<f64>,
    #[serde(default)]
    pub letter_spacing: Option<f64>,
    #[serde(default)]
    pub scale_ratio: Option<f64>,
    #[serde(default)]
    pub manual_ratio: Option<f64>,
}

impl FileDefaults {
    /// Layers the overrides on top of `base`. Sizes and ratios that are not
    /// positive finite numbers are ignored.
    pub fn merged_into(&self, base: EditorDefaults) -> EditorDefaults {
        EditorDefaults {
            initial_size: positive("initial_size", self.initial_size)
                .unwrap_or(base.initial_size),
            steps: self.steps.filter(|steps| *steps > 0).unwrap_or(base.steps),
            line_height_percent: positive("line_height_percent", self.line_height_percent)
                .unwrap_or(base.line_height_percent),
            letter_spacing: self
                .letter_spacing
                .filter(|value| value.is_finite())
                .unwrap_or(base.letter_spacing),
            scale_ratio: positive("scale_ratio", self.scale_ratio).unwrap_or(base.scale_ratio),
            manual_ratio: positive("manual_ratio", self.manual_ratio)
                .unwrap_or(base.manual_ratio),
        }
    }
}

fn positive(field: &'static str, value: Option<f64>) -> Option<f64> {
    let value = value?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        tracing::warn!(field, value, "ignoring non-positive editor default");
        None
    }
}

/// Built-in defaults overlaid with the user's config file. Never fails: a
/// missing file yields the built-ins, a broken one is logged and skipped.
pub fn load_editor_defaults() -> EditorDefaults {
    let (xdg_config_home, home) = config_env_dirs();
    load_editor_defaults_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_editor_defaults_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> EditorDefaults {
    match try_load_file_defaults_with(xdg_config_home, home) {
        Ok(file) => file.merged_into(EditorDefaults::default()),
        Err(ConfigError::Path(_)) => EditorDefaults::default(),
        Err(err) => {
            tracing::warn!(%err, "failed to load config.json; using defaults");
            EditorDefaults::default()
        }
    }
}

/// Reads the overrides without falling back, for callers that surface errors.
pub fn try_load_file_defaults() -> ConfigResult<FileDefaults> {
    let (xdg_config_home, home) = config_env_dirs();
    try_load_file_defaults_with(xdg_config_home.as_deref(), home.as_deref())
}

fn try_load_file_defaults_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<FileDefaults> {
    let path = app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home)?;
    if !path.exists() {
        return Ok(FileDefaults::default());
    }

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let file = serde_json::from_str(&contents)?;
    tracing::debug!(?path, "loaded editor defaults");
    Ok(file)
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
