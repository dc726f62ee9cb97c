//! Section layout and small value formatters.

use crate::model::round1;
use crate::theme::{Theme, Token};

/// Width of the label column, colon included.
pub const HEADING_WIDTH: usize = 20;

const ELLIPSIS: char = '…';

/// One labelled line (or block) of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    /// Already styled with the theme the report is rendered with
    pub body: String,
    pub emphasis: Token,
}

impl Section {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
            emphasis: Token::White,
        }
    }

    pub fn with_emphasis(mut self, emphasis: Token) -> Self {
        self.emphasis = emphasis;
        self
    }

    /// Bold, coloured heading padded to [`HEADING_WIDTH`], then the body.
    /// Continuation lines of the body are indented under the first one.
    pub fn render(&self, theme: &dyn Theme) -> String {
        let heading = heading_text(&self.label);
        let indent = " ".repeat(HEADING_WIDTH);
        let body = self.body.replace('\n', &format!("\n{}", indent));

        format!(
            "{}{}{}{}{}{}\n",
            theme.token(Token::Bold),
            theme.token(self.emphasis),
            theme.escape(&heading),
            theme.token(Token::Reset),
            theme.token(Token::Reset),
            body
        )
    }
}

/// `label:` left-justified in the heading column. Labels too long for the
/// column are cut and marked with an ellipsis so at least one space remains.
pub fn heading_text(label: &str) -> String {
    let max_label = HEADING_WIDTH - 2;
    let label: String = if label.chars().count() > max_label {
        let mut cut: String = label.chars().take(max_label - 1).collect();
        cut.push(ELLIPSIS);
        cut
    } else {
        label.to_string()
    };

    format!("{:<width$}", format!("{}:", label), width = HEADING_WIDTH)
}

/// Whole seconds as `H:MM:SS`, prefixed with `N day(s), ` past one day.
pub fn format_duration(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

/// Bytes to GiB, one decimal.
pub fn gigabytes(bytes: u64) -> f64 {
    round1(bytes as f64 / 1024.0 / 1024.0 / 1024.0)
}
