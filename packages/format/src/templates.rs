//! Built-in line templates, one per event kind GitHub documents.
//!
//! A template returns `None` when the payload lacks a field it needs, which
//! sends the event to the generic fallback line instead.

use github_activity_events_models::{ActivityEvent, EventKind};

use crate::formatter::Template;

pub(crate) fn builtin() -> [(EventKind, Template); 15] {
    [
        (EventKind::Push, push),
        (EventKind::Issues, issues),
        (EventKind::IssueComment, issue_comment),
        (EventKind::Watch, watch),
        (EventKind::Fork, fork),
        (EventKind::Create, create),
        (EventKind::Delete, delete),
        (EventKind::PullRequest, pull_request),
        (EventKind::PullRequestReview, pull_request_review),
        (EventKind::PullRequestReviewComment, pull_request_review_comment),
        (EventKind::CommitComment, commit_comment),
        (EventKind::Release, release),
        (EventKind::Public, public),
        (EventKind::Member, member),
        (EventKind::Gollum, gollum),
    ]
}

fn push(event: &ActivityEvent) -> Option<String> {
    let commits = event
        .payload_array_len("/commits")
        .or_else(|| {
            event
                .payload_u64("/size")
                .and_then(|size| usize::try_from(size).ok())
        })?;
    let noun = if commits == 1 { "commit" } else { "commits" };
    Some(format!("Pushed {commits} {noun} to {}", event.repo_name()))
}

fn issues(event: &ActivityEvent) -> Option<String> {
    let action = event.payload_str("/action")?;
    Some(format!(
        "{} an issue in {}",
        capitalize(action),
        event.repo_name()
    ))
}

fn issue_comment(event: &ActivityEvent) -> Option<String> {
    Some(format!("Commented on an issue in {}", event.repo_name()))
}

fn watch(event: &ActivityEvent) -> Option<String> {
    Some(format!("Starred {}", event.repo_name()))
}

fn fork(event: &ActivityEvent) -> Option<String> {
    Some(format!("Forked {}", event.repo_name()))
}

fn create(event: &ActivityEvent) -> Option<String> {
    ref_change("Created", event)
}

fn delete(event: &ActivityEvent) -> Option<String> {
    ref_change("Deleted", event)
}

fn ref_change(verb: &str, event: &ActivityEvent) -> Option<String> {
    let ref_type = event.payload_str("/ref_type")?;
    let line = match event.payload_str("/ref") {
        Some(name) => format!("{verb} {ref_type} '{name}' in {}", event.repo_name()),
        None => format!("{verb} {ref_type} in {}", event.repo_name()),
    };
    Some(line)
}

fn pull_request(event: &ActivityEvent) -> Option<String> {
    let action = event.payload_str("/action")?;
    let merged = event
        .payload_bool("/pull_request/merged")
        .unwrap_or(false);
    let verb = if action == "closed" && merged {
        "Merged".to_string()
    } else {
        capitalize(action)
    };
    Some(format!("{verb} a pull request in {}", event.repo_name()))
}

fn pull_request_review(event: &ActivityEvent) -> Option<String> {
    Some(format!("Reviewed a pull request in {}", event.repo_name()))
}

fn pull_request_review_comment(event: &ActivityEvent) -> Option<String> {
    Some(format!(
        "Commented on a pull request in {}",
        event.repo_name()
    ))
}

fn commit_comment(event: &ActivityEvent) -> Option<String> {
    Some(format!("Commented on a commit in {}", event.repo_name()))
}

fn release(event: &ActivityEvent) -> Option<String> {
    let tag = event.payload_str("/release/tag_name")?;
    Some(format!("Released {tag} in {}", event.repo_name()))
}

fn public(event: &ActivityEvent) -> Option<String> {
    Some(format!("Made {} public", event.repo_name()))
}

fn member(event: &ActivityEvent) -> Option<String> {
    let action = event.payload_str("/action")?;
    Some(format!(
        "{} a collaborator to {}",
        capitalize(action),
        event.repo_name()
    ))
}

fn gollum(event: &ActivityEvent) -> Option<String> {
    Some(format!("Updated the wiki in {}", event.repo_name()))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
