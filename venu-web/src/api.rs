//! Twitch Helix client for the channel's live status

use crate::config::StreamServiceConfig;
use reqwest::{Client, StatusCode};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};
use venu_common::{AppAccessToken, StreamInfo, StreamLookupError, StreamsResponse};

const TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";
const STREAMS_URL: &str = "https://api.twitch.tv/helix/streams";

fn network_error(e: reqwest::Error) -> StreamLookupError {
    StreamLookupError::Network(e.to_string())
}

/// Lookups without both credentials never reach the network.
fn require_credentials(client_id: &str, client_secret: &str) -> Result<(), StreamLookupError> {
    if client_id.is_empty() || client_secret.is_empty() {
        return Err(StreamLookupError::MissingCredentials);
    }
    Ok(())
}

fn token_status(status: StatusCode) -> Result<(), StreamLookupError> {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(StreamLookupError::Unauthorized)
        }
        status if !status.is_success() => Err(StreamLookupError::Status(status.as_u16())),
        _ => Ok(()),
    }
}

/// App access token shared by clones of one client
#[derive(Clone, Default)]
struct TokenCache(Rc<RefCell<Option<String>>>);

impl TokenCache {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, token: String) {
        *self.0.borrow_mut() = Some(token);
    }

    /// Map a Helix response status. A 401 drops the cached token so the
    /// next lookup fetches a fresh one.
    fn check_streams_status(&self, status: StatusCode) -> Result<(), StreamLookupError> {
        if status == StatusCode::UNAUTHORIZED {
            self.0.borrow_mut().take();
            return Err(StreamLookupError::Unauthorized);
        }
        if !status.is_success() {
            return Err(StreamLookupError::Status(status.as_u16()));
        }
        Ok(())
    }
}

/// Built once per widget; clones share the cached app access token.
#[derive(Clone)]
pub struct TwitchClient {
    client: Client,
    client_id: String,
    client_secret: String,
    token: TokenCache,
}

impl TwitchClient {
    pub fn new(config: &StreamServiceConfig) -> Self {
        Self {
            client: Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token: TokenCache::default(),
        }
    }

    /// Look up the channel's current stream. `Ok(None)` means offline.
    pub async fn stream_info(&self, channel: &str) -> Result<Option<StreamInfo>, StreamLookupError> {
        require_credentials(&self.client_id, &self.client_secret)?;

        let token = self.app_access_token().await?;
        info!("📡 Twitch API: GET {} for {}", STREAMS_URL, channel);

        let resp = self
            .client
            .get(STREAMS_URL)
            .query(&[("user_login", channel)])
            .header("Client-Id", &self.client_id)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(network_error)?;

        self.token.check_streams_status(resp.status())?;

        let body = resp.text().await.map_err(network_error)?;
        StreamsResponse::parse(&body)
    }

    /// Client-credentials grant, cached for the lifetime of the client.
    async fn app_access_token(&self) -> Result<String, StreamLookupError> {
        if let Some(token) = self.token.get() {
            return Ok(token);
        }

        debug!("Requesting Twitch app access token");
        let resp = self
            .client
            .post(TOKEN_URL)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await
            .map_err(network_error)?;

        token_status(resp.status())?;

        let token: AppAccessToken = resp
            .json()
            .await
            .map_err(|e| StreamLookupError::Parse(e.to_string()))?;
        debug!("Got app access token, expires in {}s", token.expires_in);

        self.token.set(token.access_token.clone());
        Ok(token.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_short_circuit() {
        assert!(matches!(
            require_credentials("", ""),
            Err(StreamLookupError::MissingCredentials)
        ));
        assert!(matches!(
            require_credentials("id", ""),
            Err(StreamLookupError::MissingCredentials)
        ));
        assert!(matches!(
            require_credentials("", "secret"),
            Err(StreamLookupError::MissingCredentials)
        ));
        assert!(require_credentials("id", "secret").is_ok());
    }

    #[test]
    fn test_streams_unauthorized_clears_cached_token() {
        let cache = TokenCache::default();
        cache.set("stale".to_string());
        let shared = cache.clone();

        let result = cache.check_streams_status(StatusCode::UNAUTHORIZED);
        assert!(matches!(result, Err(StreamLookupError::Unauthorized)));
        assert_eq!(shared.get(), None);
    }

    #[test]
    fn test_streams_error_status_keeps_token() {
        let cache = TokenCache::default();
        cache.set("abc".to_string());

        let result = cache.check_streams_status(StatusCode::SERVICE_UNAVAILABLE);
        assert!(matches!(result, Err(StreamLookupError::Status(503))));
        assert_eq!(cache.get().as_deref(), Some("abc"));
        assert!(cache.check_streams_status(StatusCode::OK).is_ok());
    }

    #[test]
    fn test_token_status_mapping() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::FORBIDDEN,
        ] {
            assert!(matches!(
                token_status(status),
                Err(StreamLookupError::Unauthorized)
            ));
        }
        assert!(matches!(
            token_status(StatusCode::TOO_MANY_REQUESTS),
            Err(StreamLookupError::Status(429))
        ));
        assert!(token_status(StatusCode::OK).is_ok());
    }
}
