//! Style tokens for the two output media
//!
//! A report is written once against [`Theme`] and rendered either with ANSI
//! escape codes for a terminal or with `<span>` markup for a browser. Both
//! themes answer every [`Token`]; there is no lookup that can fail.
//!
//! The markup theme maps `Reset` to a single `</span>`. Bold and colour each
//! open their own span, so a caller that opens both has to reset twice. One
//! reset closes only the innermost span, which is the opposite of the
//! terminal where one reset clears everything. Balanced pairs render the same
//! in both media; unbalanced ones do not.

use std::borrow::Cow;

/// Named style markers shared by every theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Reset,
    Bold,
}

impl Token {
    pub const ALL: [Token; 10] = [
        Token::Black,
        Token::Red,
        Token::Green,
        Token::Yellow,
        Token::Blue,
        Token::Magenta,
        Token::Cyan,
        Token::White,
        Token::Reset,
        Token::Bold,
    ];
}

/// Supplies style markers and escapes raw text for one output medium.
pub trait Theme: Send + Sync {
    fn token(&self, token: Token) -> &'static str;

    /// Make machine-provided text safe to splice into this medium.
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// `text` wrapped in `color` and a reset. The text is used as is.
    fn paint(&self, color: Token, text: &str) -> String {
        format!("{}{}{}", self.token(color), text, self.token(Token::Reset))
    }
}

/// ANSI escape sequences for a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiTheme;

impl Theme for AnsiTheme {
    fn token(&self, token: Token) -> &'static str {
        match token {
            Token::Black => "\x1b[30m",
            Token::Red => "\x1b[31m",
            Token::Green => "\x1b[32m",
            Token::Yellow => "\x1b[33m",
            Token::Blue => "\x1b[34m",
            Token::Magenta => "\x1b[35m",
            Token::Cyan => "\x1b[36m",
            Token::White => "\x1b[37m",
            Token::Reset => "\x1b[0m",
            Token::Bold => "\x1b[1m",
        }
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Inline-styled `<span>` tags for an HTML `<pre>` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTheme;

impl Theme for HtmlTheme {
    fn token(&self, token: Token) -> &'static str {
        match token {
            Token::Black => "<span style='color:black'>",
            Token::Red => "<span style='color:red'>",
            Token::Green => "<span style='color:green'>",
            Token::Yellow => "<span style='color:yellow'>",
            Token::Blue => "<span style='color:blue'>",
            Token::Magenta => "<span style='color:magenta'>",
            Token::Cyan => "<span style='color:cyan'>",
            Token::White => "<span style='color:white'>",
            Token::Reset => "</span>",
            Token::Bold => "<span style='font-weight:bold'>",
        }
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.contains(['&', '<', '>', '"', '\'']) {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len() + 16);
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}

/// Which theme a delivery front end wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Terminal,
    Markup,
}

impl ThemeKind {
    pub fn theme(self) -> &'static dyn Theme {
        match self {
            ThemeKind::Terminal => &AnsiTheme,
            ThemeKind::Markup => &HtmlTheme,
        }
    }
}
