use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::model::{Coordinate, UvReading};

use super::FetchError;

const OPENUV_API_BASE: &str = "https://api.openuv.io";

/// Client for the OpenUV real-time UV index API.
#[derive(Debug, Clone)]
pub struct OpenUvProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenUvProvider {
    /// Build a provider for the public OpenUV endpoint.
    ///
    /// The credential is injected by the caller; the provider never reads
    /// ambient configuration or environment state.
    pub fn new(api_key: String) -> Self {
        Self::new_with_base_url(api_key, OPENUV_API_BASE)
    }

    /// Same as [`OpenUvProvider::new`] but against an arbitrary base URL,
    /// for exercising the client against a local mock server.
    pub fn new_with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.to_string(),
            http: Client::new(),
        }
    }

    /// Fetch the current and daily-maximum UV index for a coordinate.
    ///
    /// One request, one attempt: no retry, no caching, transport-default
    /// timeout. Coordinates are forwarded as-is, without range clamping.
    pub async fn fetch(&self, coord: Coordinate) -> Result<UvReading, FetchError> {
        let url = format!("{}/api/v1/uv", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("lat", coord.latitude), ("lng", coord.longitude)])
            .header("x-access-token", self.api_key.as_str())
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Api {
                status,
                message: extract_error_message(&body),
            });
        }

        let parsed: UvResponse = serde_json::from_str(&body).map_err(|e| {
            FetchError::Malformed(format!(
                "failed to parse OpenUV response ({e}): {}",
                truncate_body(&body),
            ))
        })?;

        Ok(UvReading {
            uv: parsed.result.uv,
            uv_max: parsed.result.uv_max,
            uv_time: parsed.result.uv_time,
        })
    }
}

/// Pull the server-supplied `error` field out of a failure body, if any.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<UvErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| "Unknown error".to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct UvErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UvResult {
    uv: f64,
    uv_max: f64,
    uv_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct UvResponse {
    result: UvResult,
}
