//! Round trip to a well-known public address.

use crate::command::capture;
use nanosys_common::{PingResult, Result, SourceError};

pub const PING_TARGET: &str = "8.8.8.8";

/// Five echoes 200 ms apart, two seconds to wait for each reply.
const PING_ARGS: [&str; 6] = ["-c", "5", "-i", "0.2", "-W", "2"];

pub fn read() -> Result<PingResult> {
    let mut args = PING_ARGS.to_vec();
    args.push(PING_TARGET);

    // ping exits 1 when nothing came back; the summary is still printed.
    let output = capture("ping", &args, false)?;
    parse_ping(PING_TARGET, &output.text)
}

/// Reads the `N packets transmitted, M received` summary and, when present,
/// the average from the `rtt min/avg/max/mdev` line.
pub fn parse_ping(target: &str, text: &str) -> Result<PingResult> {
    let summary = text
        .lines()
        .find(|line| line.contains("packets transmitted"))
        .ok_or_else(|| SourceError::parse("no ping summary line"))?;

    let mut parts = summary.split(',').map(str::trim);
    let sent = leading_number(parts.next(), "transmitted")?;
    let received = leading_number(parts.next(), "received")?;

    if sent == 0 {
        return Err(SourceError::parse("ping sent no packets"));
    }

    let avg_rtt_ms = text
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("rtt") || line.starts_with("round-trip"))
        .and_then(|line| line.split_once('='))
        .and_then(|(_, values)| values.trim().split('/').nth(1))
        .map(|avg| avg.trim().to_string());

    Ok(PingResult {
        target: target.to_string(),
        sent,
        received,
        avg_rtt_ms,
    })
}

fn leading_number(part: Option<&str>, what: &str) -> Result<u32> {
    part.and_then(|p| p.split_whitespace().next())
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| SourceError::parse(format!("no {} count in ping summary", what)))
}
