//! HTTP client for the segmentation service
//!
//! The service is an opaque black box reached through two endpoints:
//! `POST /segment` does the work, `GET /health` is an advisory liveness
//! probe. One request per submission, no retries, no client-side timeout
//! unless configured.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::dto::{ErrorBody, SegmentationRequest, SegmentationResponse};
use crate::error::{ClientError, Result};

/// Message used when a rejection carries no parsable detail
const GENERIC_SERVICE_ERROR: &str = "Segmentation failed";

/// Liveness probes give up quickly instead of hanging the caller
const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for the segmentation service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL
    pub base_url: String,
    /// Optional request timeout; `None` waits until the transport errors
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Client for the remote segmentation service
pub struct SegmentClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SegmentClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| ClientError::Network {
            base_url: config.base_url.clone(),
            message: e.to_string(),
        })?;

        Ok(Self { http, config })
    }

    /// Create a client with the default configuration
    pub fn with_default_config() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// The configured service base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn segment_url(&self) -> String {
        format!("{}/segment", self.config.base_url.trim_end_matches('/'))
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url.trim_end_matches('/'))
    }

    fn network_error(&self, message: impl Into<String>) -> ClientError {
        ClientError::Network {
            base_url: self.config.base_url.clone(),
            message: message.into(),
        }
    }

    /// Submit one segmentation request
    ///
    /// Issues exactly one `POST /segment` with the JSON triple
    /// `{text, language, method}`. A non-2xx status becomes a
    /// [`ClientError::Service`] carrying the backend's `detail` message when
    /// one is present; transport failures and unparsable bodies become
    /// [`ClientError::Network`].
    pub async fn segment(&self, request: &SegmentationRequest) -> Result<SegmentationResponse> {
        log::debug!(
            "POST {} (text: {} bytes, language: {}, method: {})",
            self.segment_url(),
            request.text.len(),
            request.language,
            request.method
        );

        let response = self
            .http
            .post(self.segment_url())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    self.network_error(format!("Cannot connect to the segmentation service: {e}"))
                } else {
                    self.network_error(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string());
            log::debug!("segmentation rejected with HTTP {status}: {message}");
            return Err(ClientError::Service { message });
        }

        let parsed: SegmentationResponse = response
            .json()
            .await
            .map_err(|e| self.network_error(format!("Invalid response: {e}")))?;

        log::debug!("segmentation returned {} sentences", parsed.count);
        Ok(parsed)
    }

    /// Best-effort liveness probe
    ///
    /// Any 2xx counts as healthy. Failures are logged, never surfaced as
    /// errors; callers treat the result as advisory.
    pub async fn health(&self) -> bool {
        match self
            .http
            .get(self.health_url())
            .timeout(HEALTH_PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                log::info!("backend API is running at {}", self.config.base_url);
                true
            }
            Ok(response) => {
                log::warn!(
                    "backend API at {} answered the health probe with HTTP {}",
                    self.config.base_url,
                    response.status()
                );
                false
            }
            Err(e) => {
                log::warn!(
                    "backend API not reachable at {}: {e}",
                    self.config.base_url
                );
                false
            }
        }
    }
}

/// Issues generation numbers for submissions
///
/// A response is only rendered while its ticket still names the latest
/// submission; anything older is discarded instead of overwriting newer
/// results.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    current: AtomicU64,
}

impl SubmissionTracker {
    /// Create a tracker with no submissions yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new submission, invalidating all earlier tickets
    pub fn begin(&self) -> SubmissionTicket<'_> {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        SubmissionTicket {
            generation,
            tracker: self,
        }
    }
}

/// Proof of which submission a response belongs to
#[derive(Debug)]
pub struct SubmissionTicket<'a> {
    generation: u64,
    tracker: &'a SubmissionTracker,
}

impl SubmissionTicket<'_> {
    /// The generation number of this submission
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether this ticket still names the latest submission
    pub fn is_current(&self) -> bool {
        self.tracker.current.load(Ordering::SeqCst) == self.generation
    }
}
