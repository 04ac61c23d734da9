use std::collections::HashMap;
use std::sync::LazyLock;

use github_activity_events_models::{ActivityEvent, EventKind};

use crate::templates;
use crate::timestamp::format_timestamp;

/// Builds the message for one event, or `None` if the payload is missing
/// something the message needs.
pub type Template = fn(&ActivityEvent) -> Option<String>;

static DEFAULT_FORMATTER: LazyLock<EventFormatter> = LazyLock::new(EventFormatter::default);

/// Render `event` with the built-in templates.
#[must_use]
pub fn format_event(event: &ActivityEvent) -> String {
    DEFAULT_FORMATTER.format(event)
}

/// Lookup table from event kind to line template.
///
/// Every event renders to exactly one line: kinds without a template, and
/// templates that return `None`, fall back to `"{type} in {repo}"`.
pub struct EventFormatter {
    templates: HashMap<EventKind, Template>,
}

impl EventFormatter {
    /// A formatter with no templates; every event uses the fallback line.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Register `template` for `kind`, replacing any existing entry.
    #[must_use]
    pub fn with_template(mut self, kind: EventKind, template: Template) -> Self {
        self.templates.insert(kind, template);
        self
    }

    #[must_use]
    pub fn format(&self, event: &ActivityEvent) -> String {
        let message = self
            .templates
            .get(&event.kind)
            .and_then(|template| template(event))
            .unwrap_or_else(|| fallback(event));

        match event.created_at.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => format!("{} - {message}", format_timestamp(raw)),
            _ => message,
        }
    }
}

impl Default for EventFormatter {
    fn default() -> Self {
        Self {
            templates: templates::builtin().into_iter().collect(),
        }
    }
}

fn fallback(event: &ActivityEvent) -> String {
    let tag = event.kind.tag();
    let tag = if tag.is_empty() { "Unknown event" } else { tag };
    format!("{tag} in {}", event.repo_name())
}
