//! Streaming-service response model
//!
//! Mirrors the parts of the Twitch Helix `GET /streams` and OAuth
//! client-credentials payloads the widget reads. Everything else in those
//! payloads is ignored.

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StreamLookupError {
    #[error("Streaming service credentials are not configured")]
    MissingCredentials,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Streaming service rejected the credentials")]
    Unauthorized,
    #[error("Streaming service returned HTTP {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for StreamLookupError {
    fn from(e: serde_json::Error) -> Self {
        StreamLookupError::Parse(e.to_string())
    }
}

/// Stream `type` field. Helix sends `"live"` or an empty string on error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    Live,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StreamInfo {
    #[serde(rename = "type", default)]
    pub stream_type: StreamType,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub user_login: String,
    #[serde(default)]
    pub title: String,
}

impl StreamInfo {
    pub fn is_live(&self) -> bool {
        self.stream_type == StreamType::Live
    }

    /// Resource handed to the audio element.
    ///
    /// This is the `thumbnail_url` field, which in Helix names a preview
    /// image rather than a media stream.
    pub fn source(&self) -> &str {
        &self.thumbnail_url
    }
}

/// Helix streams envelope. Offline channels are simply absent from `data`.
#[derive(Debug, Deserialize)]
pub struct StreamsResponse {
    #[serde(default)]
    pub data: Vec<StreamInfo>,
}

impl StreamsResponse {
    pub fn into_first(self) -> Option<StreamInfo> {
        self.data.into_iter().next()
    }

    pub fn parse(body: &str) -> Result<Option<StreamInfo>, StreamLookupError> {
        let response: StreamsResponse = serde_json::from_str(body)?;
        Ok(response.into_first())
    }
}

/// OAuth client-credentials grant response
#[derive(Debug, Clone, Deserialize)]
pub struct AppAccessToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_live_stream() {
        let body = r#"{
            "data": [{
                "id": "40952121085",
                "user_login": "venujams",
                "type": "live",
                "title": "late night set",
                "viewer_count": 78365,
                "thumbnail_url": "https://static-cdn.jtvnw.net/previews-ttv/live_user_venujams-{width}x{height}.jpg"
            }],
            "pagination": {}
        }"#;
        let info = StreamsResponse::parse(body).unwrap().unwrap();
        assert!(info.is_live());
        assert_eq!(info.user_login, "venujams");
        assert_eq!(
            info.source(),
            "https://static-cdn.jtvnw.net/previews-ttv/live_user_venujams-{width}x{height}.jpg"
        );
    }

    #[test]
    fn test_parse_offline_channel() {
        let body = r#"{"data": [], "pagination": {}}"#;
        assert_eq!(StreamsResponse::parse(body).unwrap(), None);
    }

    #[test]
    fn test_unknown_type_is_not_live() {
        let body = r#"{"data": [{"type": "", "thumbnail_url": "x"}]}"#;
        let info = StreamsResponse::parse(body).unwrap().unwrap();
        assert_eq!(info.stream_type, StreamType::Other);
        assert!(!info.is_live());
    }

    #[test]
    fn test_parse_malformed_body() {
        match StreamsResponse::parse("<html>gateway timeout</html>") {
            Err(StreamLookupError::Parse(_)) => {}
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_access_token() {
        let body = r#"{"access_token":"jostpf5q0uzmxmkba9iyug38kjtgh","expires_in":5011271,"token_type":"bearer"}"#;
        let token: AppAccessToken = serde_json::from_str(body).unwrap();
        assert_eq!(token.access_token, "jostpf5q0uzmxmkba9iyug38kjtgh");
        assert_eq!(token.expires_in, 5011271);
    }
}
