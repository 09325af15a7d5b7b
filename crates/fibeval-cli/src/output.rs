//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigUint;

/// Values longer than this many digits are elided unless verbose.
const TRUNCATE_DIGITS: usize = 100;
const EDGE_DIGITS: usize = 50;

/// Format a `BigUint` for display, eliding the middle of long values.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > TRUNCATE_DIGITS {
        format!(
            "{}...{} ({} digits)",
            &s[..EDGE_DIGITS],
            &s[s.len() - EDGE_DIGITS..],
            format_number(s.len() as u64)
        )
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a signed index with thousand separators.
#[must_use]
pub fn format_index(n: i64) -> String {
    if n < 0 {
        format!("-{}", format_number(n.unsigned_abs()))
    } else {
        format_number(n.unsigned_abs())
    }
}

/// Write the decimal value to a file.
pub fn write_to_file(path: &Path, value: &BigUint) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write!(file, "{value}")?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        assert_eq!(format_duration(Duration::from_millis(42)), "42.00ms");
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_millis(3140)), "3.140s");
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn format_index_signed() {
        assert_eq!(format_index(-1234), "-1,234");
        assert_eq!(format_index(5504), "5,504");
        assert_eq!(format_index(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn format_result_short() {
        let value = BigUint::from(12345u64);
        assert_eq!(format_result(&value, false), "12345");
    }

    #[test]
    fn format_result_truncates_long_values() {
        let value = BigUint::parse_bytes(&[b'7'; 150], 10).unwrap();
        let s = format_result(&value, false);
        assert!(s.ends_with("(150 digits)"));
        assert_eq!(format_result(&value, true).len(), 150);
    }

    #[test]
    fn write_to_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("f100.txt");
        let value = BigUint::parse_bytes(b"354224848179261915075", 10).unwrap();
        write_to_file(&path, &value).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "354224848179261915075"
        );
    }
}
