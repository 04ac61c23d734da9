use chrono::{DateTime, Utc};

/// Errors that can occur while fetching or presenting activity.
///
/// Each variant maps to exactly one user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    /// Empty username or malformed event count.
    #[error("{0}")]
    InvalidInput(String),

    /// The API answered 404 for the user.
    #[error("User '{0}' not found")]
    UserNotFound(String),

    /// The API refused the request because the rate limit was hit.
    #[error(
        "API rate limit exceeded. Please try again later.{}",
        reset_suffix(.reset_at.as_ref())
    )]
    RateLimited { reset_at: Option<DateTime<Utc>> },

    /// Any other non-success status.
    #[error("GitHub API error: {status} - {reason}")]
    ApiError { status: u16, reason: String },

    /// DNS, connect or timeout failure.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The response body was not a JSON event list.
    #[error("Invalid response from GitHub API: {0}")]
    ParseError(String),

    /// Writing the rendered activity failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn reset_suffix(reset_at: Option<&DateTime<Utc>>) -> String {
    reset_at.map_or_else(String::new, |at| {
        format!(" (resets at {} UTC)", at.format("%H:%M"))
    })
}
