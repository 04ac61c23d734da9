use std::time::Duration;

use chrono::{DateTime, Utc};
use github_activity_events_models::ActivityEvent;
use github_activity_provider::{ActivityError, ActivityProvider, validate_username};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("github-activity/", env!("CARGO_PKG_VERSION"));

pub struct GitHubEventsClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GitHubEventsClient {
    /// Create an unauthenticated client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// * [`ActivityError::NetworkError`] if the HTTP client fails to build
    pub fn new(timeout: Duration) -> Result<Self, ActivityError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(classify_transport_error)?;
        Ok(Self {
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn events_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/events",
            self.base_url,
            urlencoding::encode(username)
        )
    }
}

#[async_trait::async_trait]
impl ActivityProvider for GitHubEventsClient {
    async fn fetch_events(&self, username: &str) -> Result<Vec<ActivityEvent>, ActivityError> {
        let username = validate_username(username)?;
        let url = self.events_url(username);
        log::debug!("GET {url}");

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await
            .map_err(classify_transport_error)?;
        let status = response.status();

        if !status.is_success() {
            let headers = response.headers().clone();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    log::warn!("Failed to read GitHub error body for {status}: {e}");
                    String::new()
                }
            };
            log::error!("GitHub API error: {status} {body}");
            return Err(classify_status(status, &headers, &body, username));
        }

        let body = response.text().await.map_err(classify_transport_error)?;
        let events = parse_events(&body)?;
        log::debug!("GitHub returned {} events for {username}", events.len());

        Ok(events)
    }

    fn provider_name(&self) -> &'static str {
        "github"
    }
}

fn parse_events(body: &str) -> Result<Vec<ActivityEvent>, ActivityError> {
    serde_json::from_str(body).map_err(|e| ActivityError::ParseError(e.to_string()))
}

fn classify_status(
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
    username: &str,
) -> ActivityError {
    match status {
        StatusCode::NOT_FOUND => ActivityError::UserNotFound(username.to_string()),
        StatusCode::TOO_MANY_REQUESTS => ActivityError::RateLimited {
            reset_at: rate_limit_reset(headers),
        },
        StatusCode::FORBIDDEN if is_rate_limited(headers, body) => ActivityError::RateLimited {
            reset_at: rate_limit_reset(headers),
        },
        _ => ActivityError::ApiError {
            status: status.as_u16(),
            reason: error_reason(status, body),
        },
    }
}

fn is_rate_limited(headers: &HeaderMap, body: &str) -> bool {
    let exhausted = headers
        .get("x-ratelimit-remaining")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|remaining| remaining.trim() == "0");

    exhausted || body.to_ascii_lowercase().contains("rate limit")
}

fn rate_limit_reset(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    let epoch_secs = headers
        .get("x-ratelimit-reset")?
        .to_str()
        .ok()?
        .trim()
        .parse::<i64>()
        .ok()?;
    DateTime::from_timestamp(epoch_secs, 0)
}

/// GitHub's own `message` when the body carries one, else the HTTP reason
/// phrase.
fn error_reason(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value["message"]
                .as_str()
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(ToString::to_string)
        })
        .or_else(|| status.canonical_reason().map(ToString::to_string))
        .unwrap_or_else(|| "Unknown error".to_string())
}

fn classify_transport_error(err: reqwest::Error) -> ActivityError {
    if err.is_decode() {
        return ActivityError::ParseError(error_chain(&err));
    }
    if err.is_timeout() {
        return ActivityError::NetworkError(format!("request timed out ({})", error_chain(&err)));
    }
    ActivityError::NetworkError(error_chain(&err))
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
