use reqwest::{Method, StatusCode};

/// Errors returned by [TrelloClient](super::TrelloClient) requests.
///
/// `url` fields hold the request URL without its query string, so credentials
/// never end up in error messages.
#[derive(Debug, thiserror::Error)]
pub enum TrelloError {
    #[error("Invalid {method} request {url}: {source}")]
    InvalidRequest {
        method: Method,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP request failure on {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failure on {url}: {status} {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("HTTP request failure on {url}: {status}, response body unreadable: {source}")]
    StatusBodyUnreadable {
        url: String,
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP read error on response for {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON decode failed on {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON decode failed on {url}: {source}\n{body}")]
    DecodeBody {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TrelloError {
    /// Request URL, without query parameters.
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidRequest { url, .. }
            | Self::Request { url, .. }
            | Self::Status { url, .. }
            | Self::StatusBodyUnreadable { url, .. }
            | Self::Read { url, .. }
            | Self::Decode { url, .. }
            | Self::DecodeBody { url, .. } => url,
        }
    }

    /// Status code of a response the API rejected.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } | Self::StatusBodyUnreadable { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::DecodeBody { .. })
    }
}

pub type Result<T> = std::result::Result<T, TrelloError>;

#[cfg(test)]
mod tests {
    use super::TrelloError;
    use reqwest::StatusCode;

    #[test]
    fn test_status_error_embeds_body() {
        let err = TrelloError::Status {
            url: "https://api.trello.com/1/boards/missing".to_string(),
            status: StatusCode::NOT_FOUND,
            body: "Not Found".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "HTTP request failure on https://api.trello.com/1/boards/missing: 404 Not Found Not Found"
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(!err.is_decode());
    }

    #[test]
    fn test_decode_body_error_embeds_raw_body() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = TrelloError::DecodeBody {
            url: "https://api.trello.com/1/cards".to_string(),
            body: "{not json".to_string(),
            source,
        };

        assert!(err.is_decode());
        assert_eq!(err.url(), "https://api.trello.com/1/cards");
        assert_eq!(err.status(), None);
        assert!(err.to_string().ends_with("\n{not json"));
    }
}
