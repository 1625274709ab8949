//! Configuration loader
//!
//! Reads a [`KitConfig`] from a JSON or TOML file chosen by the host. The
//! format is detected from the file extension. Nothing is read from the
//! environment.

use std::path::Path;

use datewise_domain::{DateError, KitConfig, Result};

use crate::format::compile_pattern;

/// Serialized form of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json`, read with `serde_json`.
    Json,
    /// `.toml`, read with `toml`.
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension.
    ///
    /// # Errors
    /// Returns [`DateError::Config`] for anything other than `.json` or
    /// `.toml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(DateError::Config(format!(
                "Unsupported config format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }
}

/// Load and validate configuration from a file.
///
/// # Errors
/// Returns [`DateError::Config`] if the file is missing, unreadable, has an
/// unsupported extension or fails to parse. Returns the errors of
/// [`validate`] for a well-formed file with bad values.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<KitConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DateError::Config(format!("Config file not found: {}", path.display())));
    }

    let format = ConfigFormat::from_path(path)?;
    tracing::info!(path = %path.display(), ?format, "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| DateError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, format)?;
    validate(&config)?;
    tracing::debug!(timezone = %config.timezone, "Configuration loaded");
    Ok(config)
}

/// Parse configuration from string content.
///
/// Missing fields take their defaults. Values are not validated.
///
/// # Errors
/// Returns [`DateError::Config`] if the content is not valid for `format`.
pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<KitConfig> {
    match format {
        ConfigFormat::Toml => toml::from_str(contents)
            .map_err(|e| DateError::Config(format!("Invalid TOML format: {e}"))),
        ConfigFormat::Json => serde_json::from_str(contents)
            .map_err(|e| DateError::Config(format!("Invalid JSON format: {e}"))),
    }
}

/// Check the zone name and every format pattern.
///
/// # Errors
/// Returns [`DateError::InvalidTimeZone`] or [`DateError::InvalidFormat`].
pub fn validate(config: &KitConfig) -> Result<()> {
    config.zone()?;
    for pattern in [&config.date_format, &config.time_format, &config.date_time_format] {
        compile_pattern(pattern)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn temp_config(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_file_toml() {
        let file = temp_config(
            ".toml",
            r#"
            timezone = "America/New_York"
            date_format = "%d/%m/%Y"
            "#,
        );

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.timezone, "America/New_York");
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert_eq!(config.time_format, "%H:%M:%S");
    }

    #[test]
    fn test_load_from_file_json() {
        let file = temp_config(".json", r#"{ "timezone": "Asia/Tokyo" }"#);

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.zone().unwrap(), chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn test_missing_file() {
        let result = load_from_file("/nonexistent/datewise.toml");
        assert!(matches!(result, Err(DateError::Config(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_config(".yaml", "timezone: UTC");
        assert!(matches!(load_from_file(file.path()), Err(DateError::Config(_))));
    }

    #[test]
    fn test_invalid_contents() {
        let result = parse_config("timezone = ", ConfigFormat::Toml);
        assert!(matches!(result, Err(DateError::Config(msg)) if msg.starts_with("Invalid TOML")));

        let result = parse_config("{ timezone", ConfigFormat::Json);
        assert!(matches!(result, Err(DateError::Config(msg)) if msg.starts_with("Invalid JSON")));
    }

    #[test]
    fn test_load_rejects_bad_values() {
        let file = temp_config(".toml", r#"timezone = "Atlantis/Capital""#);
        assert_eq!(
            load_from_file(file.path()),
            Err(DateError::InvalidTimeZone("Atlantis/Capital".into()))
        );

        let file = temp_config(".json", r#"{ "time_format": "%H:%Q" }"#);
        assert_eq!(load_from_file(file.path()), Err(DateError::InvalidFormat("%H:%Q".into())));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("", ConfigFormat::Toml).unwrap();
        assert_eq!(config, KitConfig::default());
    }
}
