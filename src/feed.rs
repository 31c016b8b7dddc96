use crate::models::{ActivityRecord, EventKind};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::{collections::BTreeMap, str::FromStr, sync::Arc};
use thiserror::Error;

/// Event kinds a reader can narrow the feed to.
///
/// Pull requests are counted and get an icon, but have no filter of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FilterSelection {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "PushEvent")]
    Push,
    #[serde(rename = "CreateEvent")]
    Create,
    #[serde(rename = "IssuesEvent")]
    Issues,
}

impl FilterSelection {
    pub const ALL: [FilterSelection; 4] = [
        FilterSelection::All,
        FilterSelection::Push,
        FilterSelection::Create,
        FilterSelection::Issues,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterSelection::All => "all",
            FilterSelection::Push => "PushEvent",
            FilterSelection::Create => "CreateEvent",
            FilterSelection::Issues => "IssuesEvent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterSelection::All => "All Events",
            FilterSelection::Push => "Push",
            FilterSelection::Create => "Create",
            FilterSelection::Issues => "Issues",
        }
    }

    pub fn matches(self, kind: &EventKind) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Push => *kind == EventKind::Push,
            FilterSelection::Create => *kind == EventKind::Create,
            FilterSelection::Issues => *kind == EventKind::Issues,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}', expected one of: all, PushEvent, CreateEvent, IssuesEvent")]
pub struct UnknownFilter(pub String);

impl FromStr for FilterSelection {
    type Err = UnknownFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        FilterSelection::ALL
            .into_iter()
            .find(|selection| selection.as_str() == value)
            .ok_or_else(|| UnknownFilter(value.to_string()))
    }
}

/// Per-kind totals over the whole record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FeedCounts {
    pub push: usize,
    pub create: usize,
    pub issues: usize,
    pub pull_request: usize,
    pub total: usize,
}

impl FeedCounts {
    pub fn get(&self, kind: &EventKind) -> usize {
        match kind {
            EventKind::Push => self.push,
            EventKind::Create => self.create,
            EventKind::Issues => self.issues,
            EventKind::PullRequest => self.pull_request,
            EventKind::Other(_) => self.other(),
        }
    }

    /// Records whose kind is not one of the counted kinds.
    pub fn other(&self) -> usize {
        self.total
            .saturating_sub(self.push + self.create + self.issues + self.pull_request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitCommit,
    GitBranch,
    MessageCircle,
    GitPullRequest,
    None,
}

impl Icon {
    pub fn name(self) -> Option<&'static str> {
        match self {
            Icon::GitCommit => Some("git-commit"),
            Icon::GitBranch => Some("git-branch"),
            Icon::MessageCircle => Some("message-circle"),
            Icon::GitPullRequest => Some("git-pull-request"),
            Icon::None => None,
        }
    }
}

pub fn icon_for(kind: &EventKind) -> Icon {
    match kind {
        EventKind::Push => Icon::GitCommit,
        EventKind::Create => Icon::GitBranch,
        EventKind::Issues => Icon::MessageCircle,
        EventKind::PullRequest => Icon::GitPullRequest,
        EventKind::Other(_) => Icon::None,
    }
}

/// Number of events on one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub count: usize,
}

/// A pushed commit flattened out of its push event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentCommit<'a> {
    pub repo: &'a str,
    pub message: &'a str,
    pub url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

pub const RECENT_COMMITS_LIMIT: usize = 20;

/// Activity list plus the reader's current filter.
///
/// Everything derived from the records is recomputed on read, so every method
/// can be called again on each redraw with the same result.
#[derive(Debug, Clone)]
pub struct ActivityFeedModel {
    records: Arc<[ActivityRecord]>,
    selection: FilterSelection,
}

impl ActivityFeedModel {
    pub fn new(records: impl Into<Arc<[ActivityRecord]>>) -> Self {
        Self {
            records: records.into(),
            selection: FilterSelection::All,
        }
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn selection(&self) -> FilterSelection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    pub fn counts(&self) -> FeedCounts {
        let mut counts = FeedCounts {
            total: self.records.len(),
            ..FeedCounts::default()
        };
        for record in self.records.iter() {
            match record.kind {
                EventKind::Push => counts.push += 1,
                EventKind::Create => counts.create += 1,
                EventKind::Issues => counts.issues += 1,
                EventKind::PullRequest => counts.pull_request += 1,
                EventKind::Other(_) => {}
            }
        }
        counts
    }

    pub fn filtered(&self) -> Vec<&ActivityRecord> {
        self.records
            .iter()
            .filter(|record| self.selection.matches(&record.kind))
            .collect()
    }

    pub fn icon_for(&self, kind: &EventKind) -> Icon {
        icon_for(kind)
    }

    /// Events per UTC day over the whole feed, oldest day first. Records
    /// without a timestamp are left out.
    pub fn daily_counts(&self) -> Vec<DailyActivity> {
        let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for timestamp in self.records.iter().filter_map(|record| record.timestamp) {
            *days.entry(timestamp.date_naive()).or_default() += 1;
        }
        days.into_iter()
            .map(|(date, count)| DailyActivity { date, count })
            .collect()
    }

    /// Commits of every push, newest push first, at most `limit` of them.
    /// Commits of one push keep their order; pushes without a timestamp go last.
    pub fn recent_commits(&self, limit: usize) -> Vec<RecentCommit<'_>> {
        let mut pushes: Vec<&ActivityRecord> = self
            .records
            .iter()
            .filter(|record| record.kind == EventKind::Push)
            .collect();
        pushes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        pushes
            .into_iter()
            .flat_map(|record| {
                record.commits().iter().map(move |commit| RecentCommit {
                    repo: &record.repository,
                    message: &commit.message,
                    url: &commit.url,
                    date: record.timestamp,
                })
            })
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: EventKind, repo: &str) -> ActivityRecord {
        ActivityRecord::new(kind, repo, format!("https://github.com/{repo}"))
    }

    fn sample() -> Vec<ActivityRecord> {
        vec![
            record(EventKind::Push, "a/first"),
            record(EventKind::Push, "a/second"),
            record(EventKind::Issues, "a/third"),
            record(EventKind::Create, "a/fourth"),
        ]
    }

    #[test]
    fn counts_each_kind_and_total() {
        let model = ActivityFeedModel::new(sample());
        let counts = model.counts();
        assert_eq!(counts.push, 2);
        assert_eq!(counts.create, 1);
        assert_eq!(counts.issues, 1);
        assert_eq!(counts.pull_request, 0);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.other(), 0);
    }

    #[test]
    fn push_selection_keeps_original_order() {
        let mut model = ActivityFeedModel::new(sample());
        model.set_selection(FilterSelection::Push);
        let repos: Vec<&str> = model
            .filtered()
            .into_iter()
            .map(|r| r.repository.as_str())
            .collect();
        assert_eq!(repos, vec!["a/first", "a/second"]);
    }

    #[test]
    fn all_selection_returns_every_record() {
        let records = sample();
        let model = ActivityFeedModel::new(records.clone());
        assert_eq!(model.selection(), FilterSelection::All);
        let filtered: Vec<ActivityRecord> = model.filtered().into_iter().cloned().collect();
        assert_eq!(filtered, records);
    }

    #[test]
    fn other_kinds_count_toward_total_only() {
        let mut records = sample();
        records.push(record(EventKind::Other("WatchEvent".into()), "b/x"));
        records.push(record(EventKind::PullRequest, "b/y"));
        let model = ActivityFeedModel::new(records);
        let counts = model.counts();
        let counted = counts.push + counts.create + counts.issues + counts.pull_request;
        assert!(counted <= counts.total);
        assert_eq!(counts.total, 6);
        assert_eq!(counts.pull_request, 1);
        assert_eq!(counts.other(), 1);
        assert_eq!(counts.get(&EventKind::Other("Anything".into())), 1);
    }

    #[test]
    fn reads_are_idempotent() {
        let mut model = ActivityFeedModel::new(sample());
        model.set_selection(FilterSelection::Issues);
        assert_eq!(model.counts(), model.counts());
        assert_eq!(model.filtered(), model.filtered());
        assert_eq!(model.filtered().len(), 1);
    }

    #[test]
    fn empty_feed() {
        let model = ActivityFeedModel::new(Vec::new());
        assert!(model.is_empty());
        assert_eq!(model.counts().total, 0);
        assert!(model.filtered().is_empty());
    }

    #[test]
    fn icons_by_kind() {
        assert_eq!(icon_for(&EventKind::Push), Icon::GitCommit);
        assert_eq!(icon_for(&EventKind::Create), Icon::GitBranch);
        assert_eq!(icon_for(&EventKind::Issues), Icon::MessageCircle);
        assert_eq!(icon_for(&EventKind::PullRequest), Icon::GitPullRequest);
        assert_eq!(icon_for(&EventKind::Other("ForkEvent".into())), Icon::None);
        assert_eq!(Icon::None.name(), None);
    }

    fn push_at(repo: &str, day: u32, hour: u32, messages: &[&str]) -> ActivityRecord {
        use chrono::TimeZone;
        record(EventKind::Push, repo)
            .with_timestamp(Utc.with_ymd_and_hms(2026, 1, day, hour, 0, 0).unwrap())
            .with_commits(
                messages
                    .iter()
                    .map(|message| crate::models::Commit {
                        message: message.to_string(),
                        url: format!("https://github.com/{repo}/commit/{message}"),
                    })
                    .collect(),
            )
    }

    #[test]
    fn daily_counts_group_by_utc_day_ascending() {
        use chrono::TimeZone;
        let model = ActivityFeedModel::new(vec![
            push_at("a/x", 6, 23, &[]),
            record(EventKind::Issues, "a/y")
                .with_timestamp(Utc.with_ymd_and_hms(2026, 1, 4, 1, 0, 0).unwrap()),
            push_at("a/z", 6, 0, &[]),
            record(EventKind::Create, "a/undated"),
        ]);

        let days = model.daily_counts();
        assert_eq!(
            days,
            vec![
                DailyActivity {
                    date: NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
                    count: 1
                },
                DailyActivity {
                    date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
                    count: 2
                },
            ]
        );
        assert_eq!(
            serde_json::to_value(days[0]).unwrap(),
            serde_json::json!({ "date": "2026-01-04", "count": 1 })
        );
    }

    #[test]
    fn daily_counts_of_empty_feed() {
        assert!(ActivityFeedModel::new(Vec::new()).daily_counts().is_empty());
    }

    #[test]
    fn recent_commits_newest_push_first_and_limited() {
        let model = ActivityFeedModel::new(vec![
            push_at("a/old", 2, 9, &["o1"]),
            record(EventKind::Issues, "a/issue"),
            push_at("a/new", 5, 9, &["n1", "n2"]),
            push_at("a/mid", 3, 9, &["m1"]),
        ]);

        let messages: Vec<&str> = model
            .recent_commits(RECENT_COMMITS_LIMIT)
            .into_iter()
            .map(|commit| commit.message)
            .collect();
        assert_eq!(messages, vec!["n1", "n2", "m1", "o1"]);

        let limited = model.recent_commits(2);
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[1].repo, "a/new");
        assert!(limited[0].date.is_some());
    }

    #[test]
    fn recent_commits_ignore_commits_on_other_kinds() {
        let stray = record(EventKind::Create, "a/b").with_commits(vec![crate::models::Commit {
            message: "stray".to_string(),
            url: String::new(),
        }]);
        assert!(ActivityFeedModel::new(vec![stray]).recent_commits(5).is_empty());
    }

    #[test]
    fn other_saturates_on_inconsistent_totals() {
        let counts = FeedCounts {
            push: 3,
            total: 1,
            ..FeedCounts::default()
        };
        assert_eq!(counts.other(), 0);
    }

    #[test]
    fn parses_filter_values() {
        assert_eq!("all".parse::<FilterSelection>(), Ok(FilterSelection::All));
        assert_eq!(" PushEvent ".parse::<FilterSelection>(), Ok(FilterSelection::Push));
        assert_eq!("IssuesEvent".parse::<FilterSelection>(), Ok(FilterSelection::Issues));
        assert!("PullRequestEvent".parse::<FilterSelection>().is_err());
    }
}
