use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::types::TocConfig;
use crate::config::validation;
use crate::utils::error::TocError;

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_toc.yml", "_toc.yaml", "_toc.toml", "_toc.json"];

/// Load the outline configuration.
///
/// An explicit `config_file` always wins. Otherwise the first of
/// [`CONFIG_FILES`] found in `source_dir` is used, and defaults apply when
/// none exists. The result is validated before it is returned.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_file: Option<PathBuf>,
) -> Result<TocConfig, TocError> {
    let config_path = match config_file {
        Some(path) => Some(path),
        None => find_default_config_file(&source_dir),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            read_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            TocConfig::default()
        }
    };

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the default configuration file
fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Read and parse one configuration file
fn read_config_file(config_path: &Path) -> Result<TocConfig, TocError> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| TocError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension
    if let Some(ext) = config_path.extension() {
        let ext_str = ext.to_string_lossy().to_lowercase();
        match ext_str.as_str() {
            "yml" | "yaml" => parse_yaml_config(&content, config_path),
            "toml" => parse_toml_config(&content, config_path),
            "json" => parse_json_config(&content, config_path),
            _ => Err(TocError::Config(format!(
                "Unsupported configuration file format: {}", ext.to_string_lossy()
            ))),
        }
    } else {
        // Assume YAML if no extension
        parse_yaml_config(&content, config_path)
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> Result<TocConfig, TocError> {
    // An empty YAML document deserializes to null, not to an empty mapping
    if content.trim().is_empty() {
        return Ok(TocConfig::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> Result<TocConfig, TocError> {
    toml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )))
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> Result<TocConfig, TocError> {
    serde_json::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )))
}
