use github_activity_events_models::ActivityEvent;

use crate::ActivityError;

/// A source of public user activity.
#[async_trait::async_trait]
pub trait ActivityProvider: Send + Sync {
    /// Fetch the most recent public events for `username`, newest first.
    ///
    /// Implementations make at most one request per call and must reject an
    /// empty username before doing any I/O.
    ///
    /// # Errors
    ///
    /// * [`ActivityError::InvalidInput`] if `username` is blank
    /// * any other [`ActivityError`] variant classifying the failed request
    async fn fetch_events(&self, username: &str) -> Result<Vec<ActivityEvent>, ActivityError>;

    fn provider_name(&self) -> &str;
}

/// Trim `username` and reject it if nothing is left.
///
/// # Errors
///
/// * [`ActivityError::InvalidInput`] if the username is empty or whitespace
pub fn validate_username(username: &str) -> Result<&str, ActivityError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(ActivityError::InvalidInput(
            "Username cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}
