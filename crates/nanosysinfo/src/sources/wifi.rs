//! Wireless link from `iwconfig`.

use crate::command::capture;
use nanosys_common::{LinkQuality, NetworkLinkState, Result, SourceError, WifiLink};

/// ESSID printed for an interface that is not associated.
pub const NOT_ASSOCIATED: &str = "off/any";

pub fn read() -> Result<NetworkLinkState> {
    // iwconfig exits non-zero when some interfaces lack wireless
    // extensions, and prints those complaints on stderr.
    let output = capture("iwconfig", &[], true)?;
    parse_iwconfig(&output.text)
}

/// First associated interface wins. An interface that names an ESSID but
/// not its bit rate or link quality is a parse error.
pub fn parse_iwconfig(text: &str) -> Result<NetworkLinkState> {
    for block in interface_blocks(text) {
        if let Some(link) = parse_block(&block)? {
            return Ok(NetworkLinkState::Connected(link));
        }
    }
    Ok(NetworkLinkState::Disconnected)
}

/// Split the output into per-interface chunks. A new interface starts on
/// every non-indented line.
fn interface_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let starts_interface = !line.starts_with(char::is_whitespace);
        match blocks.last_mut() {
            Some(block) if !starts_interface => block.push(line),
            _ => blocks.push(vec![line]),
        }
    }
    blocks
}

fn parse_block(lines: &[&str]) -> Result<Option<WifiLink>> {
    let mut essid = None;
    let mut bitrate = None;
    let mut quality = None;

    for line in lines.iter().copied() {
        if let Some(value) = value_after(line, "ESSID:") {
            essid = Some(unquote(value));
        }
        if let Some(value) = value_after(line, "Bit Rate") {
            let value = value.trim_start_matches(['=', ':']);
            bitrate = Some(value.split_whitespace().take(2).collect::<Vec<_>>().join(" "));
        }
        if let Some(value) = value_after(line, "Link Quality") {
            let value = value.trim_start_matches(['=', ':']);
            quality = value.split_whitespace().next();
        }
    }

    let essid = match essid {
        Some(essid) if essid != NOT_ASSOCIATED && !essid.is_empty() => essid,
        _ => return Ok(None),
    };

    let bitrate = bitrate
        .filter(|b| !b.is_empty())
        .ok_or_else(|| SourceError::parse(format!("no bit rate for ESSID '{}'", essid)))?;
    let quality = quality
        .ok_or_else(|| SourceError::parse(format!("no link quality for ESSID '{}'", essid)))
        .and_then(parse_fraction)?;

    Ok(Some(WifiLink {
        essid,
        bitrate,
        quality,
    }))
}

/// `70/70` as a fraction. Never evaluated as anything but two numbers.
pub fn parse_fraction(text: &str) -> Result<LinkQuality> {
    let (num, den) = text
        .split_once('/')
        .ok_or_else(|| SourceError::parse(format!("link quality '{}' is not x/y", text)))?;

    let numerator: f64 = num
        .trim()
        .parse()
        .map_err(|_| SourceError::parse(format!("bad numerator in '{}'", text)))?;
    let denominator: f64 = den
        .trim()
        .parse()
        .map_err(|_| SourceError::parse(format!("bad denominator in '{}'", text)))?;

    if denominator <= 0.0 || !numerator.is_finite() || !denominator.is_finite() {
        return Err(SourceError::parse(format!("link quality '{}' out of range", text)));
    }

    Ok(LinkQuality {
        numerator,
        denominator,
    })
}

fn value_after<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.find(key).map(|idx| line[idx + key.len()..].trim())
}

fn unquote(value: &str) -> String {
    match value.strip_prefix('"') {
        Some(rest) => match rest.rfind('"') {
            Some(end) => rest[..end].to_string(),
            None => rest.to_string(),
        },
        None => value.split_whitespace().next().unwrap_or_default().to_string(),
    }
}
