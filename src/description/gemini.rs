use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: String) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: Some(text) }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn carrying the prompt
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content::user_text(prompt.to_string())],
        }
    }
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, verbatim
    pub fn into_first_text(self) -> Result<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| SiteError::EmptyResponse {
                message: "no candidate text in generateContent response".to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiClient {
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(endpoint: String, model: String, api_key: String) -> Self {
        Self {
            endpoint,
            model,
            api_key,
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest::from_prompt(prompt);
        let response = Request::post(&self.url()).json(&body)?.send().await?;
        if !response.ok() {
            return Err(SiteError::HttpStatus {
                status: response.status(),
            });
        }
        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_first_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest::from_prompt("Describe it.");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "Describe it." }] }
                ]
            })
        );
    }

    #[test]
    fn test_first_candidate_text_is_used() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "First." }, { "text": "Ignored." }] } },
                { "content": { "role": "model", "parts": [{ "text": "Second." }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.into_first_text().unwrap(), "First.");
    }

    #[test]
    fn test_no_candidates_is_an_error() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            response.into_first_text(),
            Err(SiteError::EmptyResponse { .. })
        ));
    }

    #[test]
    fn test_candidate_without_content_is_an_error() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .unwrap();
        assert!(response.into_first_text().is_err());
    }

    #[test]
    fn test_url() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            "gemini-2.0-flash".to_string(),
            "k3y".to_string(),
        );
        assert_eq!(
            client.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key=k3y"
        );
    }
}
