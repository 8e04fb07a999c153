//! Streaming-service configuration
//!
//! Values are baked in at build time from the environment. Missing values
//! become empty strings and are not validated here; a lookup with empty
//! credentials fails upstream and surfaces as "unavailable".

use std::fmt;

pub const DEFAULT_CHANNEL: &str = "venujams";

#[derive(Clone, PartialEq)]
pub struct StreamServiceConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Channel login whose live status drives playback
    pub channel: String,
}

impl StreamServiceConfig {
    /// Read `VENU_TWITCH_CLIENT_ID`, `VENU_TWITCH_CLIENT_SECRET` and
    /// `VENU_TWITCH_CHANNEL` as captured at compile time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("VENU_TWITCH_CLIENT_ID"),
            option_env!("VENU_TWITCH_CLIENT_SECRET"),
            option_env!("VENU_TWITCH_CHANNEL"),
        )
    }

    pub fn from_values(
        client_id: Option<&str>,
        client_secret: Option<&str>,
        channel: Option<&str>,
    ) -> Self {
        let channel = channel
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CHANNEL);

        Self {
            client_id: client_id.unwrap_or_default().to_string(),
            client_secret: client_secret.unwrap_or_default().to_string(),
            channel: channel.to_string(),
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl fmt::Debug for StreamServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamServiceConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("channel", &self.channel)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_default_to_empty() {
        let config = StreamServiceConfig::from_values(None, None, None);
        assert_eq!(config.client_id, "");
        assert_eq!(config.client_secret, "");
        assert_eq!(config.channel, DEFAULT_CHANNEL);
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_blank_channel_falls_back() {
        let config = StreamServiceConfig::from_values(Some("id"), Some("secret"), Some("  "));
        assert_eq!(config.channel, "venujams");
        assert!(config.has_credentials());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = StreamServiceConfig::from_values(Some("id"), Some("hunter2"), Some("other"));
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("other"));
    }
}
