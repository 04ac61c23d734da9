use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Discriminator carried in the `type` field of a GitHub event.
///
/// Tags GitHub adds later decode into [`EventKind::Other`] with the raw tag
/// preserved, so decoding never fails on an unfamiliar event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, EnumIter, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    #[strum(serialize = "PushEvent")]
    Push,
    #[strum(serialize = "IssuesEvent")]
    Issues,
    #[strum(serialize = "IssueCommentEvent")]
    IssueComment,
    #[strum(serialize = "WatchEvent")]
    Watch,
    #[strum(serialize = "ForkEvent")]
    Fork,
    #[strum(serialize = "CreateEvent")]
    Create,
    #[strum(serialize = "DeleteEvent")]
    Delete,
    #[strum(serialize = "PullRequestEvent")]
    PullRequest,
    #[strum(serialize = "PullRequestReviewEvent")]
    PullRequestReview,
    #[strum(serialize = "PullRequestReviewCommentEvent")]
    PullRequestReviewComment,
    #[strum(serialize = "CommitCommentEvent")]
    CommitComment,
    #[strum(serialize = "ReleaseEvent")]
    Release,
    #[strum(serialize = "PublicEvent")]
    Public,
    #[strum(serialize = "MemberEvent")]
    Member,
    #[strum(serialize = "GollumEvent")]
    Gollum,
    #[strum(default)]
    Other(String),
}

impl EventKind {
    /// The tag exactly as GitHub spells it.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Push => "PushEvent",
            Self::Issues => "IssuesEvent",
            Self::IssueComment => "IssueCommentEvent",
            Self::Watch => "WatchEvent",
            Self::Fork => "ForkEvent",
            Self::Create => "CreateEvent",
            Self::Delete => "DeleteEvent",
            Self::PullRequest => "PullRequestEvent",
            Self::PullRequestReview => "PullRequestReviewEvent",
            Self::PullRequestReviewComment => "PullRequestReviewCommentEvent",
            Self::CommitComment => "CommitCommentEvent",
            Self::Release => "ReleaseEvent",
            Self::Public => "PublicEvent",
            Self::Member => "MemberEvent",
            Self::Gollum => "GollumEvent",
            Self::Other(tag) => tag,
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::from(tag.to_string())
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for EventKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for EventKind {
    fn from(tag: String) -> Self {
        tag.parse().unwrap_or(Self::Other(tag))
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
