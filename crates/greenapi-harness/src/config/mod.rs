pub mod types;
use crate::error::{HarnessError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
pub use types::{CONFIG_PATH, GREENAPI_CONFIG, GatewayConfig};

/// Config file location: `$GREENAPI_CONFIG` if set, otherwise `config.json`
pub fn config_path() -> PathBuf {
    std::env::var_os(GREENAPI_CONFIG)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_PATH))
}

impl GatewayConfig {
    /// Load the config from [`config_path`]
    ///
    /// ## Errors
    /// - `HarnessError::Io` - file missing or unreadable
    /// - `HarnessError::Serialization` - content is not a config object
    /// - `HarnessError::Config` - a required value is empty
    pub fn load() -> Result<Self> {
        Self::from_path(config_path())
    }

    /// Load the config from a file. The file is only read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading gateway config from {}", path.display());
        std::fs::read_to_string(path)
            .map_err(HarnessError::from)
            .and_then(|str| Self::from_json(&str))
    }

    /// Parse the config from a JSON string
    pub fn from_json(str: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(str)?;
        config.validate()?;
        Ok(config)
    }

    /// Every value that ends up in a request URL must be set
    fn validate(&self) -> Result<()> {
        let required = [
            ("apiUrl", &self.api_url),
            ("idInstance", &self.id_instance),
            ("apiTokenInstance", &self.api_token_instance),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((key, _)) => Err(HarnessError::Config(format!("`{key}` must not be empty"))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "apiUrl": "https://api.green-api.com",
        "mediaUrl": "https://media.green-api.com",
        "idInstance": "1101000001",
        "apiTokenInstance": "d75b3a66374942c5b3c019c698abc2067e151558acbd412345"
    }"#;

    #[test]
    fn test_from_json_reads_every_field() {
        let config = GatewayConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.api_url, "https://api.green-api.com");
        assert_eq!(config.media_url, "https://media.green-api.com");
        assert_eq!(config.id_instance, "1101000001");
        assert_eq!(
            config.api_token_instance,
            "d75b3a66374942c5b3c019c698abc2067e151558acbd412345"
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = GatewayConfig::from_json("{\"apiUrl\": ");
        assert!(matches!(result, Err(HarnessError::Serialization(_))));
    }

    #[test]
    fn test_from_json_rejects_missing_key() {
        let result = GatewayConfig::from_json(r#"{"apiUrl": "https://api.green-api.com"}"#);
        assert!(matches!(result, Err(HarnessError::Serialization(_))));
    }

    #[test]
    fn test_from_json_without_media_url() {
        let json = r#"{
            "apiUrl": "https://api.green-api.com",
            "idInstance": "1101000001",
            "apiTokenInstance": "token123"
        }"#;
        let config = GatewayConfig::from_json(json).unwrap();
        assert_eq!(config.media_url, "");
        assert_eq!(config.id_instance, "1101000001");
    }

    #[test]
    fn test_from_json_rejects_empty_token() {
        let json = SAMPLE.replace(
            "d75b3a66374942c5b3c019c698abc2067e151558acbd412345",
            "",
        );
        let err = GatewayConfig::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("apiTokenInstance"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = GatewayConfig::from_json(SAMPLE).unwrap();
        let printed = format!("{config:?}");
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("d75b3a66"));
    }
}
