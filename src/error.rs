use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Empty response: {message}")]
    EmptyResponse { message: String },

    #[error("Browser API error: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

impl From<gloo::net::Error> for SiteError {
    fn from(err: gloo::net::Error) -> Self {
        match err {
            gloo::net::Error::SerdeError(e) => SiteError::Decode(e),
            other => SiteError::Network(other.to_string()),
        }
    }
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = SiteError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: SiteError = serde_err.into();
        assert!(matches!(err, SiteError::Decode(_)));
        assert!(err.to_string().starts_with("JSON decode error"));
    }

    #[test]
    fn test_gloo_serde_error_maps_to_decode() {
        let serde_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err: SiteError = gloo::net::Error::SerdeError(serde_err).into();
        assert!(matches!(err, SiteError::Decode(_)));
    }

    #[test]
    fn test_gloo_other_error_maps_to_network() {
        let err: SiteError = gloo::net::Error::GlooError("connection refused".to_string()).into();
        match err {
            SiteError::Network(msg) => assert!(msg.contains("connection refused")),
            other => panic!("Expected Network, got {:?}", other),
        }
    }
}
