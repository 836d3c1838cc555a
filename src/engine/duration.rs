//! Solve time codec
//!
//! Converts between the text competitors type in (`"1:05.32"`, `"DNF"`) and
//! an integer millisecond value. Unparsable text is read as DNS rather than
//! rejected, so a bad row degrades to "no attempt" instead of failing a
//! whole computation.

use std::cmp::Ordering;
use std::fmt;

use crate::constants::{CLOCK_UNIT_MS, DNF_TEXT, DNS_TEXT, VERY_SLOW_MS};

/// The value of one attempt, or of an aggregate of attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveTime {
    /// A completed attempt, in milliseconds (or moves, for FMC)
    Finite(u64),
    /// Attempted but not finished
    Dnf,
    /// Not attempted
    Dns,
}

impl SolveTime {
    /// Parse solve text. Never fails: malformed text becomes DNS.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            DNF_TEXT => SolveTime::Dnf,
            DNS_TEXT => SolveTime::Dns,
            clock => parse_clock(clock).map(SolveTime::Finite).unwrap_or(SolveTime::Dns),
        }
    }

    /// True for finite values below the "very slow" ceiling
    pub fn is_rankable(&self) -> bool {
        matches!(self, SolveTime::Finite(ms) if *ms < VERY_SLOW_MS)
    }

    /// True unless the attempt was never started
    pub fn is_started(&self) -> bool {
        !matches!(self, SolveTime::Dns)
    }

    /// Raw value for finite results
    pub fn value(&self) -> Option<u64> {
        match self {
            SolveTime::Finite(value) => Some(*value),
            _ => None,
        }
    }

    fn sort_key(&self) -> (u8, u64) {
        match self {
            SolveTime::Finite(ms) if *ms < VERY_SLOW_MS => (0, *ms),
            SolveTime::Finite(ms) => (1, *ms),
            SolveTime::Dnf => (2, 0),
            SolveTime::Dns => (3, 0),
        }
    }
}

impl Ord for SolveTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for SolveTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SolveTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveTime::Finite(ms) => f.write_str(&format_millis(*ms)),
            SolveTime::Dnf => f.write_str(DNF_TEXT),
            SolveTime::Dns => f.write_str(DNS_TEXT),
        }
    }
}

/// Parse `[[[days:]hours:]minutes:]seconds[.cc]` into milliseconds
fn parse_clock(text: &str) -> Option<u64> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, "00"));

    if fraction.len() != 2 {
        return None;
    }
    let mut total = parse_digits(fraction)? * 10;

    let groups: Vec<&str> = whole.split(':').collect();
    if groups.len() > CLOCK_UNIT_MS.len() {
        return None;
    }

    for (token, unit) in groups.iter().rev().zip(CLOCK_UNIT_MS) {
        let group_ms = parse_digits(token)?.checked_mul(unit)?;
        total = total.checked_add(group_ms)?;
    }

    Some(total)
}

fn parse_digits(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Render milliseconds as `[[D:]HH:]MM:SS.cc`, dropping leading zero groups
pub fn format_millis(ms: u64) -> String {
    let centis = (ms % 1_000) / 10;
    let total_seconds = ms / 1_000;

    let groups = [
        total_seconds / 86_400,
        (total_seconds % 86_400) / 3_600,
        (total_seconds % 3_600) / 60,
        total_seconds % 60,
    ];

    let mut clock = String::new();
    for group in groups {
        if !clock.is_empty() {
            clock.push_str(&format!(":{:02}", group));
        } else if group > 0 {
            clock = group.to_string();
        }
    }
    if clock.is_empty() {
        clock.push('0');
    }

    format!("{}.{:02}", clock, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinels() {
        assert_eq!(SolveTime::parse("DNF"), SolveTime::Dnf);
        assert_eq!(SolveTime::parse("DNS"), SolveTime::Dns);
        assert_ne!(SolveTime::parse("DNF"), SolveTime::parse("DNS"));
    }

    #[test]
    fn test_parse_clock_groups() {
        assert_eq!(SolveTime::parse("8.81"), SolveTime::Finite(8_810));
        assert_eq!(SolveTime::parse("12"), SolveTime::Finite(12_000));
        assert_eq!(SolveTime::parse("1:05.32"), SolveTime::Finite(65_320));
        assert_eq!(SolveTime::parse("2:00:00.00"), SolveTime::Finite(7_200_000));
        assert_eq!(SolveTime::parse("1:00:00:01.50"), SolveTime::Finite(86_401_500));
        assert_eq!(SolveTime::parse(" 9.99 "), SolveTime::Finite(9_990));
    }

    #[test]
    fn test_parse_malformed_is_dns() {
        for text in ["", "abc", "12.5", "12.345", "1::05", "-3.00", "+3.00", "1:2:3:4:5.00", "dnf"] {
            assert_eq!(SolveTime::parse(text), SolveTime::Dns, "input {:?}", text);
        }
    }

    #[test]
    fn test_format() {
        assert_eq!(SolveTime::Finite(8_810).to_string(), "8.81");
        assert_eq!(SolveTime::Finite(500).to_string(), "0.50");
        assert_eq!(SolveTime::Finite(0).to_string(), "0.00");
        assert_eq!(SolveTime::Finite(65_000).to_string(), "1:05.00");
        assert_eq!(SolveTime::Finite(3_600_000).to_string(), "1:00:00.00");
        assert_eq!(SolveTime::Finite(86_401_500).to_string(), "1:00:00:01.50");
        assert_eq!(SolveTime::Finite(12_373).to_string(), "12.37");
        assert_eq!(SolveTime::Dnf.to_string(), "DNF");
        assert_eq!(SolveTime::Dns.to_string(), "DNS");
    }

    #[test]
    fn test_round_trip() {
        for ms in [0, 10, 990, 59_990, 60_000, 3_599_990, 3_600_010, 90_061_230] {
            let value = SolveTime::Finite(ms);
            assert_eq!(SolveTime::parse(&value.to_string()), value);
        }
        assert_eq!(SolveTime::parse("01:05.00").to_string(), "1:05.00");
    }

    #[test]
    fn test_ordering() {
        let fast = SolveTime::Finite(9_000);
        let slow = SolveTime::Finite(VERY_SLOW_MS);
        assert!(fast < SolveTime::Finite(9_010));
        assert!(fast < slow);
        assert!(slow < SolveTime::Dnf);
        assert!(SolveTime::Finite(VERY_SLOW_MS - 1) < SolveTime::Dnf);
        assert!(SolveTime::Dnf < SolveTime::Dns);
        assert!(!slow.is_rankable());
        assert!(fast.is_rankable());
        assert!(SolveTime::Dnf.is_started());
        assert!(!SolveTime::Dns.is_started());
    }
}
