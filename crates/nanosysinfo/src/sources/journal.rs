//! Tail of the system journal.

use crate::command::capture_checked;
use nanosys_common::Result;

pub const JOURNAL_LINES: usize = 10;

pub fn read() -> Result<Vec<String>> {
    let count = JOURNAL_LINES.to_string();
    let text = capture_checked("journalctl", &["-n", count.as_str(), "--no-pager", "-q"], false)?;
    Ok(tail_lines(&text, JOURNAL_LINES))
}

/// Last `n` lines, verbatim. Only a trailing empty line is dropped.
pub fn tail_lines(text: &str, n: usize) -> Vec<String> {
    let mut lines: Vec<&str> = text.lines().collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let skip = lines.len().saturating_sub(n);
    lines[skip..].iter().map(|line| line.to_string()).collect()
}
