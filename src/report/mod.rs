//! Plain-text rendering of formatted activity groups.
//!
//! One line is written per display entry:
//!
//! ```text
//! - PushEvent: 3 commits to owner/repo by someone
//! - WatchEvent: started public owner/repo by org
//! - CreateEvent: Public repo owner/repo created in branch main by someone
//! ```

use std::io::Write;

use crate::events::{CreateEntry, EventKind, FormattedGroup, PushSummary, WatchEntry};

/// Writes report lines to an output stream.
pub struct ReportRenderer<W: Write> {
    out: W,
    lines: usize,
}

impl<W: Write> ReportRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Render one group.
    pub fn render(&mut self, group: &FormattedGroup) -> std::io::Result<()> {
        for line in render_lines(group) {
            writeln!(self.out, "{}", line)?;
            self.lines += 1;
        }
        Ok(())
    }

    /// Render every group in order and flush.
    pub fn render_all(&mut self, groups: &[FormattedGroup]) -> std::io::Result<()> {
        for group in groups {
            self.render(group)?;
        }
        self.out.flush()
    }

    /// Lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The report lines for one group.
pub fn render_lines(group: &FormattedGroup) -> Vec<String> {
    match group {
        FormattedGroup::Push(summaries) => summaries.iter().map(push_line).collect(),
        FormattedGroup::Watch(entries) => entries.iter().map(watch_line).collect(),
        FormattedGroup::Create(entries) => entries.iter().map(create_line).collect(),
    }
}

fn push_line(summary: &PushSummary) -> String {
    format!(
        "- {}: {} commits to {} by {}",
        summary.tag, summary.count, summary.repo, summary.actor
    )
}

fn watch_line(entry: &WatchEntry) -> String {
    let visibility = if entry.is_public { "public" } else { "private" };
    let mut line = format!(
        "- {}: {} {} {}",
        EventKind::Watch,
        entry.action,
        visibility,
        entry.repo
    );
    if entry.has_org() {
        line.push_str(" by ");
        line.push_str(&entry.org);
    }
    line
}

fn create_line(entry: &CreateEntry) -> String {
    let visibility = if entry.is_public { "Public" } else { "Private" };
    let mut line = format!(
        "- {}: {} repo {} created in branch {} by {}",
        EventKind::Create,
        visibility,
        entry.repo,
        entry.branch,
        entry.actor
    );
    if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(" with description: ");
        line.push_str(description);
    }
    line
}
