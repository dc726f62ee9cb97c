//! Both themes must answer the same tokens and render the same sections
//! once their markers are stripped.

use nanosys_common::{
    format_duration, AnsiTheme, HtmlTheme, Section, Severity, Theme, ThemeKind, Token,
};

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn strip_tags(text: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[test]
fn test_every_token_is_non_empty() {
    for kind in [ThemeKind::Terminal, ThemeKind::Markup] {
        for token in Token::ALL {
            assert!(!kind.theme().token(token).is_empty(), "{:?} {:?}", kind, token);
        }
    }
}

#[test]
fn test_same_text_in_both_media() {
    let body = format!(
        "{} since boot, load {}",
        format_duration(3_725),
        "42.0%"
    );
    let ansi = Section::new("Uptime", AnsiTheme.paint(Severity::classify(42.0).token(), &body));
    let html = Section::new("Uptime", HtmlTheme.paint(Severity::classify(42.0).token(), &body));

    assert_eq!(
        strip_ansi(&ansi.render(&AnsiTheme)),
        strip_tags(&html.render(&HtmlTheme))
    );
}

#[test]
fn test_markup_escape_survives_rendering() {
    let raw = "if a < b && c > d";
    let section = Section::new("Journal", HtmlTheme.escape(raw).into_owned());
    let rendered = section.render(&HtmlTheme);

    assert!(rendered.contains("if a &lt; b &amp;&amp; c &gt; d"));
    assert_eq!(
        rendered.matches("<span").count(),
        rendered.matches("</span>").count()
    );
}
