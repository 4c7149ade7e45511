//! Activity records and the classification pipeline.
//!
//! Records come in as raw JSON ([`ActivityRecord`]), are grouped by their
//! `type` tag ([`classify`]) and turned into display entries per
//! recognized [`EventKind`] ([`format`], [`format_all`]).

mod format;
mod group;
mod kind;
mod record;

pub use format::{format, format_all, CreateEntry, FormattedGroup, PushSummary, WatchEntry};
pub use group::{classify, GroupedRecords, RecordGroup};
pub use kind::EventKind;
pub use record::{records_from_json, ActivityRecord, NO_TYPE, UNKNOWN};
