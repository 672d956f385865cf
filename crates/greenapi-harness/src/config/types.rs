use serde::{Deserialize, Serialize};
use std::fmt;

/// Default config location, relative to the working directory
pub static CONFIG_PATH: &str = "config.json";
/// Environment variable that overrides [`CONFIG_PATH`]
pub static GREENAPI_CONFIG: &str = "GREENAPI_CONFIG";

/// Gateway instance credentials
#[derive(Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    /// Base API URL, e.g. `https://api.green-api.com`
    pub api_url: String,
    /// Base URL for media uploads, unused by the text methods
    #[serde(default)]
    pub media_url: String,
    pub id_instance: String,
    pub api_token_instance: String,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_url", &self.api_url)
            .field("media_url", &self.media_url)
            .field("id_instance", &self.id_instance)
            .field("api_token_instance", &"<redacted>")
            .finish()
    }
}
