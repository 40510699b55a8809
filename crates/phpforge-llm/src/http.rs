//! HTTP helpers shared by the wire protocol modules.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::AdapterConfig;
use crate::error::{ProviderError, Result};

/// Attach the adapter's extra headers.
pub(crate) fn with_extra_headers(mut req: RequestBuilder, config: &AdapterConfig) -> RequestBuilder {
    for (k, v) in &config.headers {
        req = req.header(k.as_str(), v.as_str());
    }
    req
}

/// Send `req` and decode a successful JSON body.
///
/// Non-2xx answers become typed errors: 401/403 are auth failures, 404 means
/// the model (or endpoint) does not exist, everything else keeps the status
/// and body text.
pub(crate) async fn send_json<T: DeserializeOwned>(req: RequestBuilder, config: &AdapterConfig) -> Result<T> {
    let response = req.send().await?;
    let response = check_status(response, config).await?;
    let body = response.text().await?;
    debug!(provider = %config.id, bytes = body.len(), "response received");
    serde_json::from_str(&body)
        .map_err(|e| ProviderError::InvalidResponse(format!("failed to parse response: {e}")))
}

async fn check_status(response: Response, config: &AdapterConfig) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(match status.as_u16() {
        401 | 403 => ProviderError::AuthFailed(body),
        404 => ProviderError::ModelNotFound(format!("model '{}': {body}", config.model)),
        _ => ProviderError::RequestFailed(format!("HTTP {status}: {body}")),
    })
}
