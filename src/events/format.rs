//! Per-kind formatting of grouped records into display entries.
//!
//! Each [`EventKind`] has one rule:
//!
//! - `Push` collapses records into one counted entry per repository. The
//!   actor shown is the actor of the last record for that repository.
//! - `Watch` keeps one entry per record.
//! - `Create` keeps one entry per repository, taken from the first record
//!   for that repository.

use std::collections::{HashMap, HashSet};

use super::{ActivityRecord, EventKind, GroupedRecords, UNKNOWN};

/// Pushes to one repository, folded together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushSummary {
    pub repo: String,
    pub tag: String,
    pub actor: String,
    pub count: usize,
}

/// A single star/watch of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEntry {
    pub repo: String,
    pub action: String,
    pub is_public: bool,
    pub org: String,
}

impl WatchEntry {
    /// Whether the record named an organization.
    pub fn has_org(&self) -> bool {
        self.org != UNKNOWN
    }
}

/// A repository or ref creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEntry {
    pub actor: String,
    pub repo: String,
    pub branch: String,
    pub description: Option<String>,
    pub is_public: bool,
}

/// Display-ready entries for one recognized kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedGroup {
    Push(Vec<PushSummary>),
    Watch(Vec<WatchEntry>),
    Create(Vec<CreateEntry>),
}

impl FormattedGroup {
    pub fn kind(&self) -> EventKind {
        match self {
            FormattedGroup::Push(_) => EventKind::Push,
            FormattedGroup::Watch(_) => EventKind::Watch,
            FormattedGroup::Create(_) => EventKind::Create,
        }
    }

    /// Number of display entries (one output line each).
    pub fn len(&self) -> usize {
        match self {
            FormattedGroup::Push(entries) => entries.len(),
            FormattedGroup::Watch(entries) => entries.len(),
            FormattedGroup::Create(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Format the records of one kind.
pub fn format(kind: EventKind, records: &[&ActivityRecord]) -> FormattedGroup {
    match kind {
        EventKind::Push => FormattedGroup::Push(summarize_pushes(records)),
        EventKind::Watch => {
            FormattedGroup::Watch(records.iter().copied().map(watch_entry).collect())
        }
        EventKind::Create => FormattedGroup::Create(unique_creates(records)),
    }
}

/// Format every recognized group, keeping group order.
pub fn format_all(grouped: &GroupedRecords<'_>) -> Vec<FormattedGroup> {
    grouped
        .groups()
        .iter()
        .filter_map(|group| match group.kind() {
            Some(kind) => {
                let formatted = format(kind, &group.records);
                tracing::debug!(
                    %kind,
                    records = group.len(),
                    entries = formatted.len(),
                    "Formatted event group"
                );
                Some(formatted)
            }
            None => {
                tracing::debug!(
                    tag = group.tag,
                    records = group.len(),
                    "Skipping unrecognized event type"
                );
                None
            }
        })
        .collect()
}

fn summarize_pushes(records: &[&ActivityRecord]) -> Vec<PushSummary> {
    let mut summaries: Vec<PushSummary> = Vec::new();
    // repo name -> position in `summaries`
    let mut index: HashMap<&str, usize> = HashMap::new();

    for &record in records {
        let repo = record.repo_name();
        match index.get(repo) {
            Some(&pos) => {
                let summary = &mut summaries[pos];
                summary.count += 1;
                summary.actor = record.actor_login().to_string();
                summary.tag = record.type_tag().to_string();
            }
            None => {
                index.insert(repo, summaries.len());
                summaries.push(PushSummary {
                    repo: repo.to_string(),
                    tag: record.type_tag().to_string(),
                    actor: record.actor_login().to_string(),
                    count: 1,
                });
            }
        }
    }

    summaries
}

fn watch_entry(record: &ActivityRecord) -> WatchEntry {
    WatchEntry {
        repo: record.repo_name().to_string(),
        action: record.payload_str("action").unwrap_or(UNKNOWN).to_string(),
        is_public: record.is_public(),
        org: record.org_login().to_string(),
    }
}

fn create_entry(record: &ActivityRecord) -> CreateEntry {
    CreateEntry {
        actor: record.actor_login().to_string(),
        repo: record.repo_name().to_string(),
        branch: record
            .payload_str("master_branch")
            .unwrap_or(UNKNOWN)
            .to_string(),
        description: record.payload_str("description").map(String::from),
        is_public: record.is_public(),
    }
}

fn unique_creates(records: &[&ActivityRecord]) -> Vec<CreateEntry> {
    let mut seen: HashSet<&str> = HashSet::new();

    records
        .iter()
        .copied()
        .filter(|record| seen.insert(record.repo_name()))
        .map(create_entry)
        .collect()
}
