use std::io::Write;
use std::num::{IntErrorKind, NonZeroUsize};

use github_activity_format::format_event;
use github_activity_provider::{ActivityError, ActivityProvider};

/// How many events are shown when no count is given.
pub const DEFAULT_MAX_EVENTS: usize = 10;

/// Parse the optional `max_events` argument.
///
/// Positive values too large for `usize` mean "no practical limit" and
/// saturate at [`NonZeroUsize::MAX`].
///
/// # Errors
///
/// * [`ActivityError::InvalidInput`] if the value is not a positive integer
pub fn parse_max_events(raw: Option<&str>) -> Result<Option<NonZeroUsize>, ActivityError> {
    raw.map(|value| match value.trim().parse::<NonZeroUsize>() {
        Ok(limit) => Ok(limit),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(NonZeroUsize::MAX),
        Err(_) => Err(ActivityError::InvalidInput(format!(
            "max_events must be a positive integer, got '{value}'"
        ))),
    })
    .transpose()
}

/// Validate the arguments, then fetch and print activity for `username`.
///
/// Nothing is requested from `provider` if `max_events` is malformed.
///
/// # Errors
///
/// * [`ActivityError::InvalidInput`] if `max_events` is not a positive integer
/// * any error from [`present`]
pub async fn run<P, W>(
    provider: &P,
    username: &str,
    max_events: Option<&str>,
    out: &mut W,
) -> Result<usize, ActivityError>
where
    P: ActivityProvider + ?Sized,
    W: Write + Send,
{
    let max_events = parse_max_events(max_events)?;
    present(provider, username, max_events, out).await
}

/// Fetch the events for `username` and write at most `max_events` of them
/// to `out`, newest first, followed by a summary line.
///
/// Returns the number of events written. Nothing is written when the fetch
/// fails.
///
/// # Errors
///
/// * any [`ActivityError`] returned by `provider`
/// * [`ActivityError::Output`] if writing to `out` fails
pub async fn present<P, W>(
    provider: &P,
    username: &str,
    max_events: Option<NonZeroUsize>,
    out: &mut W,
) -> Result<usize, ActivityError>
where
    P: ActivityProvider + ?Sized,
    W: Write + Send,
{
    log::info!(
        "Fetching recent activity for '{username}' from {}",
        provider.provider_name()
    );
    let events = provider.fetch_events(username).await?;
    let username = username.trim();

    if events.is_empty() {
        writeln!(out, "📭 No recent activity found for '{username}'")?;
        return Ok(0);
    }

    let limit = max_events.map_or(DEFAULT_MAX_EVENTS, NonZeroUsize::get);
    log::debug!("Rendering {} of {} events", limit.min(events.len()), events.len());

    writeln!(out, "📊 Recent activity for {username}:")?;
    writeln!(out)?;

    let mut displayed = 0;
    for event in events.iter().take(limit) {
        writeln!(out, "• {}", format_event(event))?;
        displayed += 1;
    }

    let noun = if displayed == 1 { "event" } else { "events" };
    writeln!(out)?;
    writeln!(out, "📈 Displaying {displayed} most recent {noun}.")?;

    Ok(displayed)
}
