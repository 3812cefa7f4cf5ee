//! HTTP client for eligibility service requests.
//!
//! This module provides a low-level wrapper that builds endpoint URLs under
//! the fixed API path and turns raw responses into typed results.

use super::error::GatewayError;
use log::*;
use reqwest::{Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// Path segments every endpoint lives under.
///
const API_PATH: [&str; 3] = ["api", "v1", "loans"];

/// Messages used when a failed response carries no `message` of its own.
///
#[derive(Clone, Copy, Debug)]
pub struct Fallback {
    pub failed: &'static str,
    pub not_found: Option<&'static str>,
}

/// Shape of the service's error bodies.
///
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Makes requests to the eligibility service and conforms response data to
/// the requested type.
///
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let invalid = |reason: String| GatewayError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let base_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("cannot carry a path".to_string()));
        }
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Client {
            base_url,
            http_client,
        })
    }

    /// Return the URL for the given segments below the API path. Segments
    /// are percent-encoded individually.
    ///
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(API_PATH).extend(segments);
        }
        url
    }

    /// Send a JSON body and return the decoded response.
    ///
    pub async fn post<B, T>(&self, segments: &[&str], body: &B, fallback: Fallback) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        debug!("POST {}", url);
        let response = self.http_client.post(url).json(body).send().await?;
        Self::decode(response, fallback).await
    }

    /// Fetch and decode a resource.
    ///
    pub async fn get<T>(&self, segments: &[&str], query: &[(&str, String)], fallback: Fallback) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        debug!("GET {} {:?}", url, query);
        let response = self.http_client.get(url).query(query).send().await?;
        Self::decode(response, fallback).await
    }

    /// Map a response onto the requested type or a gateway error.
    ///
    async fn decode<T: DeserializeOwned>(response: Response, fallback: Fallback) -> Result<T, GatewayError> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return serde_json::from_slice::<T>(&body).map_err(|e| {
                error!(
                    "Failed to deserialize response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&body)
                );
                GatewayError::from(e)
            });
        }

        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        warn!(
            "Request failed with status {}: {}",
            status,
            message.as_deref().unwrap_or("<no message>")
        );

        match (status, fallback.not_found) {
            (StatusCode::NOT_FOUND, Some(not_found)) => Err(GatewayError::NotFound {
                message: message.unwrap_or_else(|| not_found.to_string()),
            }),
            _ => Err(GatewayError::RequestFailed {
                status: status.as_u16(),
                message: message.unwrap_or_else(|| fallback.failed.to_string()),
            }),
        }
    }
}
