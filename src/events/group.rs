//! Grouping records by their `type` tag.

use super::{ActivityRecord, EventKind};

/// Records sharing one `type` tag, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordGroup<'a> {
    pub tag: &'a str,
    pub records: Vec<&'a ActivityRecord>,
}

impl RecordGroup<'_> {
    /// The recognized kind for this group's tag, if any.
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_tag(self.tag)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Records grouped by tag.
///
/// Groups are ordered by the first occurrence of their tag in the input.
/// Groups borrow from the input slice, which is left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedRecords<'a> {
    groups: Vec<RecordGroup<'a>>,
}

impl<'a> GroupedRecords<'a> {
    pub fn groups(&self) -> &[RecordGroup<'a>] {
        &self.groups
    }

    pub fn get(&self, tag: &str) -> Option<&RecordGroup<'a>> {
        self.groups.iter().find(|group| group.tag == tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|group| group.tag)
    }

    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(RecordGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group records by `type` tag.
///
/// Records without a tag are grouped under the "No type" sentinel.
pub fn classify(records: &[ActivityRecord]) -> GroupedRecords<'_> {
    let mut groups: Vec<RecordGroup<'_>> = Vec::new();

    for record in records {
        let tag = record.type_tag();
        match groups.iter_mut().find(|group| group.tag == tag) {
            Some(group) => group.records.push(record),
            None => groups.push(RecordGroup {
                tag,
                records: vec![record],
            }),
        }
    }

    tracing::debug!(
        records = records.len(),
        groups = groups.len(),
        "Classified activity records"
    );

    GroupedRecords { groups }
}
