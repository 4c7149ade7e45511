//! Recognized activity kinds.

use std::fmt;

/// Activity kinds the report knows how to summarize.
///
/// Tags outside this set never become an `EventKind` and are left out of
/// the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Push,
    Watch,
    Create,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Push, EventKind::Watch, EventKind::Create];

    /// Look up the kind for a `type` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PushEvent" => Some(EventKind::Push),
            "WatchEvent" => Some(EventKind::Watch),
            "CreateEvent" => Some(EventKind::Create),
            _ => None,
        }
    }

    /// The `type` tag as it appears in the feed.
    pub fn tag(self) -> &'static str {
        match self {
            EventKind::Push => "PushEvent",
            EventKind::Watch => "WatchEvent",
            EventKind::Create => "CreateEvent",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
