//! Mistral API key stored by the backend.

use crate::shared::error::ValidationError;
use crate::usecases::common::UseCaseMetadata;
use serde::{Deserialize, Serialize};

/// `GET /api_key` response; the key is masked by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyStatus {
    #[serde(default)]
    pub has_key: bool,

    #[serde(default)]
    pub api_key: Option<String>,
}

impl ApiKeyStatus {
    /// Status shown right after a successful save
    pub fn saved(api_key: &str) -> Self {
        Self {
            has_key: true,
            api_key: Some(mask_api_key(api_key)),
        }
    }
}

/// `POST /api_key` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveApiKeyRequest {
    pub api_key: String,
}

impl SaveApiKeyRequest {
    pub fn new(api_key: &str) -> Result<Self, ValidationError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ValidationError::EmptyApiKey);
        }
        Ok(Self {
            api_key: api_key.to_string(),
        })
    }
}

/// First 8 characters, `***`, last 4 characters
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    let head: String = chars.iter().take(8).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Key to send with an AI request.
///
/// A typed key wins; `None` lets the backend use its stored key. Without
/// either the action is refused before any request.
pub fn resolve_api_key(typed: &str, has_stored_key: bool) -> Result<Option<String>, ValidationError> {
    let typed = typed.trim();
    if !typed.is_empty() {
        return Ok(Some(typed.to_string()));
    }
    if has_stored_key {
        Ok(None)
    } else {
        Err(ValidationError::MissingApiKey)
    }
}

pub struct ConfigureApiKey;

impl UseCaseMetadata for ConfigureApiKey {
    fn usecase_index() -> &'static str {
        "u506"
    }

    fn usecase_name() -> &'static str {
        "api_key"
    }

    fn display_name() -> &'static str {
        "Configuration API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("abcdefgh12345678wxyz"), "abcdefgh***wxyz");
        assert_eq!(mask_api_key("abc"), "abc***abc");
    }

    #[test]
    fn test_save_rejects_empty_key() {
        assert_eq!(SaveApiKeyRequest::new("  "), Err(ValidationError::EmptyApiKey));
        assert_eq!(SaveApiKeyRequest::new(" k ").unwrap().api_key, "k");
    }

    #[test]
    fn test_resolve_api_key() {
        assert_eq!(resolve_api_key(" sk ", false), Ok(Some("sk".into())));
        assert_eq!(resolve_api_key("", true), Ok(None));
        assert_eq!(resolve_api_key("", false), Err(ValidationError::MissingApiKey));
    }

    #[test]
    fn test_status_without_key() {
        let status: ApiKeyStatus = serde_json::from_str(r#"{"api_key": null, "has_key": false}"#).unwrap();
        assert!(!status.has_key);
        assert!(ApiKeyStatus::saved("abcdefgh12345678wxyz").has_key);
    }
}
