use std::fs;
use std::path::Path;

use log::debug;

use crate::config::types::ConvertOptions;
use crate::config::validation;
use crate::utils::error::{BoxResult, ConvertError};

/// Load conversion options from a YAML, TOML or JSON file.
///
/// Keys missing from the file keep their built-in defaults.
pub fn load_options<P: AsRef<Path>>(path: P) -> BoxResult<ConvertOptions> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConvertError::Config(format!(
            "Options file not found: {}", path.display()
        )).into());
    }

    debug!("Loading options from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|e| ConvertError::Config(format!(
            "Failed to read options file {}: {}", path.display(), e
        )))?;

    let format = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let options = parse_options(&content, &format)?;

    validation::validate_options(&options)?;

    debug!("Options loaded: {:?}", options);
    Ok(options)
}

/// Parse options text in the given format (`yml`, `yaml`, `toml` or `json`)
pub fn parse_options(content: &str, format: &str) -> Result<ConvertOptions, ConvertError> {
    match format {
        "yml" | "yaml" => parse_yaml_options(content),
        "toml" => parse_toml_options(content),
        "json" => parse_json_options(content),
        other => Err(ConvertError::Config(format!(
            "Unsupported options file format: {}", other
        ))),
    }
}

fn parse_yaml_options(content: &str) -> Result<ConvertOptions, ConvertError> {
    // An empty YAML document parses as null rather than an empty mapping
    if content.trim().is_empty() {
        return Ok(ConvertOptions::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| ConvertError::Config(format!("Failed to parse YAML options: {}", e)))
}

fn parse_toml_options(content: &str) -> Result<ConvertOptions, ConvertError> {
    toml::from_str(content)
        .map_err(|e| ConvertError::Config(format!("Failed to parse TOML options: {}", e)))
}

fn parse_json_options(content: &str) -> Result<ConvertOptions, ConvertError> {
    serde_json::from_str(content)
        .map_err(|e| ConvertError::Config(format!("Failed to parse JSON options: {}", e)))
}
