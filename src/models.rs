use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::feed::{DailyActivity, FeedCounts, FilterSelection};

/// Category of an activity record, decoded from the GitHub event `type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Push,
    Create,
    Issues,
    PullRequest,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Push => "PushEvent",
            EventKind::Create => "CreateEvent",
            EventKind::Issues => "IssuesEvent",
            EventKind::PullRequest => "PullRequestEvent",
            EventKind::Other(name) => name,
        }
    }

    /// Display label: the event name without its `Event` suffix.
    pub fn label(&self) -> &str {
        let name = self.as_str();
        name.strip_suffix("Event").unwrap_or(name)
    }
}

impl From<String> for EventKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PushEvent" => EventKind::Push,
            "CreateEvent" => EventKind::Create,
            "IssuesEvent" => EventKind::Issues,
            "PullRequestEvent" => EventKind::PullRequest,
            _ => EventKind::Other(value),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// One entry of the activity feed.
///
/// Kind-specific details are stored as decoded, but only surfaced through the
/// accessors when they belong to the record's kind. Serialization goes through
/// the same accessors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(rename = "date", default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "repo", default)]
    pub repository: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    commits: Option<Vec<Commit>>,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    issue: Option<Issue>,
    #[serde(default)]
    ref_type: Option<String>,
    #[serde(rename = "ref", default)]
    git_ref: Option<String>,
}

impl ActivityRecord {
    pub fn new(kind: EventKind, repository: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            timestamp: None,
            repository: repository.into(),
            url: url.into(),
            commits: None,
            action: None,
            issue: None,
            ref_type: None,
            git_ref: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_commits(mut self, commits: Vec<Commit>) -> Self {
        self.commits = Some(commits);
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_issue(mut self, action: impl Into<String>, issue: Issue) -> Self {
        self.action = Some(action.into());
        self.issue = Some(issue);
        self
    }

    pub fn with_ref(mut self, ref_type: impl Into<String>, git_ref: impl Into<String>) -> Self {
        self.ref_type = Some(ref_type.into());
        self.git_ref = Some(git_ref.into());
        self
    }

    /// Commits of a push; empty for every other kind.
    pub fn commits(&self) -> &[Commit] {
        match (&self.kind, &self.commits) {
            (EventKind::Push, Some(commits)) => commits,
            _ => &[],
        }
    }

    /// Verb of an issues event (`opened`) or of an uncounted event such as a
    /// watch (`started`) or a repository made public (`published`).
    pub fn action(&self) -> Option<&str> {
        match self.kind {
            EventKind::Issues | EventKind::Other(_) => self.action.as_deref(),
            _ => None,
        }
    }

    /// Action and issue of an issues event. The action may be absent.
    pub fn issue(&self) -> Option<(Option<&str>, &Issue)> {
        match (&self.kind, &self.issue) {
            (EventKind::Issues, Some(issue)) => Some((self.action(), issue)),
            _ => None,
        }
    }

    /// Ref type and name of a create event (`branch`, `main`).
    pub fn created_ref(&self) -> Option<(&str, Option<&str>)> {
        match (&self.kind, &self.ref_type) {
            (EventKind::Create, Some(ref_type)) => Some((ref_type, self.git_ref.as_deref())),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ActivityRecordOut<'a> {
    #[serde(rename = "type")]
    kind: &'a EventKind,
    #[serde(rename = "date", skip_serializing_if = "Option::is_none")]
    timestamp: Option<&'a DateTime<Utc>>,
    #[serde(rename = "repo")]
    repository: &'a str,
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    commits: Option<&'a [Commit]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue: Option<&'a Issue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ref_type: Option<&'a str>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    git_ref: Option<&'a str>,
}

impl Serialize for ActivityRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let commits = match self.kind {
            EventKind::Push => self.commits.as_deref(),
            _ => None,
        };
        let created = self.created_ref();
        ActivityRecordOut {
            kind: &self.kind,
            timestamp: self.timestamp.as_ref(),
            repository: &self.repository,
            url: &self.url,
            commits,
            action: self.action(),
            issue: self.issue().map(|(_, issue)| issue),
            ref_type: created.map(|(ref_type, _)| ref_type),
            git_ref: created.and_then(|(_, git_ref)| git_ref),
        }
        .serialize(serializer)
    }
}

/// A watched show as served by `/api/shows`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub backdrop_url: Option<String>,
    #[serde(default)]
    pub episodes_watched: u64,
    #[serde(default)]
    pub total_episodes: u64,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_watched_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_genres")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub network: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommitsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ActivityDaysResponse {
    pub days: Vec<DailyActivity>,
}

#[derive(Debug, Serialize)]
pub struct ActivityFeedResponse<'a> {
    pub selection: FilterSelection,
    pub counts: FeedCounts,
    pub activities: Vec<&'a ActivityRecord>,
}

/// Accepts RFC 3339 strings; empty, null or malformed values become `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(text)) => DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}

fn lenient_genres<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
