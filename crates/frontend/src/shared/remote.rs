//! HTTP client for the backend.
//!
//! Every call resolves to `Result<T, ApiError>`: transport failures are
//! logged and mapped to [`ApiError::Network`], non-2xx responses carry the
//! backend `error` message, unreadable success bodies become
//! [`ApiError::Decode`].

use crate::shared::api_utils::api_url;
use contracts::shared::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

fn network_error(path: &str, err: gloo_net::Error) -> ApiError {
    log::error!("Request {} failed: {}", path, err);
    ApiError::Network(err.to_string())
}

/// Parses a success body. Endpoints that only acknowledge may send nothing.
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| network_error(path, e))?;

    if !response.ok() {
        let err = ApiError::from_body(status, &body);
        log::warn!("{} returned {}: {}", path, status, err);
        return Err(err);
    }

    parse_body(&body).inspect_err(|e| log::error!("{}: {}", path, e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    read_json(path, response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    read_json(path, response).await
}

/// POST without a body
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    read_json(path, response).await
}

/// Multipart POST; the browser sets the boundary header
pub async fn post_form<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .body(form)
        .map_err(|e| network_error(path, e))?
        .send()
        .await
        .map_err(|e| network_error(path, e))?;
    read_json(path, response).await
}

/// GET of a file body
pub async fn get_bytes(path: &str) -> Result<Vec<u8>, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| network_error(path, e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_body(status, &body);
        log::warn!("{} returned {}: {}", path, status, err);
        return Err(err);
    }

    response
        .binary()
        .await
        .map_err(|e| network_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::common::Ack;
    use contracts::usecases::u505_validate_fields::JustifyResponse;

    #[test]
    fn test_empty_body_is_ack() {
        let ack: Ack = parse_body("").unwrap();
        assert!(!ack.success);
    }

    #[test]
    fn test_mismatched_body_is_decode_error() {
        let res: Result<JustifyResponse, _> = parse_body("[1, 2]");
        assert!(matches!(res, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_success_body() {
        let res: JustifyResponse = parse_body(r#"{"passage": "Total: 1200 EUR"}"#).unwrap();
        assert_eq!(res.passage, "Total: 1200 EUR");
    }
}
