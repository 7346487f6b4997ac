use reqwest::Client;
use std::time::Instant;
use tracing::{debug, warn};

use crate::api::{
    AnalyzeResponse, AnalyzeTextBody, AnalyzeUrlBody, DateLookupBody, DateResponse, ErrorBody,
    SourceCheckBody, SourceCheckResponse,
};
use crate::config::ServiceConfig;
use crate::error::AnalysisError;
use crate::request::AnalysisRequest;

/// HTTP face of the remote analysis service.
///
/// One client per session; every operation is a single-shot, non-retrying
/// call. Error normalization: network failures become `NetworkError`,
/// non-2xx statuses become `ServerError` with a message pulled from the
/// body when one is there, unreadable success bodies become
/// `MalformedResponse`.
#[derive(Debug, Clone)]
pub struct BiasClient {
    http: Client,
    config: ServiceConfig,
}

impl BiasClient {
    pub fn new(config: ServiceConfig) -> Self {
        BiasClient { http: Client::new(), config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Submit one analysis request and decode the structured result.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalyzeResponse, AnalysisError> {
        let endpoint = self.config.analyze_url();
        let started = Instant::now();
        debug!("analyze dispatched - mode={}, endpoint={}", request.kind(), endpoint);

        let builder = self.http.post(&endpoint);
        let builder = match request {
            AnalysisRequest::Text(text) => builder.json(&AnalyzeTextBody { text: text.clone() }),
            AnalysisRequest::Url(url) => builder.json(&AnalyzeUrlBody { url: url.clone() }),
        };

        let response = builder.send().await.map_err(|e| {
            warn!("analyze request failed - {}", e);
            AnalysisError::NetworkError
        })?;
        let response = into_checked(response).await?;
        let parsed: AnalyzeResponse = response
            .json()
            .await
            .map_err(|_| AnalysisError::MalformedResponse)?;

        debug!(
            "analyze completed - mode={}, duration={:.2}s",
            request.kind(),
            started.elapsed().as_secs_f32()
        );
        Ok(parsed)
    }

    /// Best-effort publish-date lookup for URL-mode analyses. Callers swallow
    /// the error into the fallback sentinel; it never reaches the user.
    pub async fn fetch_published_date(&self, url: &str) -> Result<Option<String>, AnalysisError> {
        let endpoint = self.config.analyze_url();
        debug!("date lookup dispatched - url={}", url);

        let response = self
            .http
            .post(&endpoint)
            .json(&DateLookupBody::new(url))
            .send()
            .await
            .map_err(|_| AnalysisError::NetworkError)?;
        let response = into_checked(response).await?;
        let parsed: DateResponse = response
            .json()
            .await
            .map_err(|_| AnalysisError::MalformedResponse)?;
        Ok(parsed.published_date)
    }

    /// Look up the credibility category for a source URL.
    pub async fn check_source(&self, url: &str) -> Result<SourceCheckResponse, AnalysisError> {
        let endpoint = self.config.source_check_url();
        debug!("source check dispatched - endpoint={}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .json(&SourceCheckBody { url: url.to_string() })
            .send()
            .await
            .map_err(|e| {
                warn!("source check request failed - {}", e);
                AnalysisError::NetworkError
            })?;
        let response = into_checked(response).await?;
        response
            .json()
            .await
            .map_err(|_| AnalysisError::MalformedResponse)
    }
}

/// Pass 2xx responses through; turn anything else into `ServerError` with
/// the best message available.
async fn into_checked(response: reqwest::Response) -> Result<reqwest::Response, AnalysisError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    warn!("service returned error status - status={}", status.as_u16());
    Err(AnalysisError::ServerError(error_message(status.as_u16(), &body)))
}

/// Pull a human-readable message out of a non-2xx body, falling back to a
/// message carrying the bare status code when the body has no usable
/// `error` field.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Server error: {}", status))
}
