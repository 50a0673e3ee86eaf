//! Canonical duration grammar: `[-+]?([0-9]*(\.[0-9]*)?[a-zµμ]+)+`.
//!
//! Formatting emits hours, minutes and seconds (`1h30m45s`) for magnitudes of
//! a second or more, and a single `ms`, `µs` or `ns` component below that.

use std::fmt;

use crate::error::ParseError;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Magnitude of `i64::MIN` nanoseconds, the largest a parsed value may reach.
const MAX_MAGNITUDE: u64 = 1 << 63;

/// Writes the canonical text form of `nanos`.
pub(crate) fn format<W: fmt::Write>(w: &mut W, nanos: i64) -> fmt::Result {
    if nanos == 0 {
        return w.write_str("0s");
    }
    if nanos < 0 {
        w.write_char('-')?;
    }
    let u = nanos.unsigned_abs();

    if u < SECOND {
        let (prec, unit) = if u < MICROSECOND {
            (0, "ns")
        } else if u < MILLISECOND {
            (3, "\u{00b5}s")
        } else {
            (6, "ms")
        };
        let pow = 10u64.pow(prec);
        write_decimal(w, u / pow, u % pow, prec)?;
        return w.write_str(unit);
    }

    let mins = u / MINUTE;
    let hours = mins / 60;
    if hours > 0 {
        write!(w, "{hours}h")?;
    }
    if mins > 0 {
        write!(w, "{}m", mins % 60)?;
    }
    let secs = (u / SECOND) % 60;
    write_decimal(w, secs, u % SECOND, 9)?;
    w.write_char('s')
}

/// Writes `int.frac` with `frac` zero-padded to `prec` digits and trailing
/// zeros trimmed; the point is omitted when the fraction is zero.
fn write_decimal<W: fmt::Write>(w: &mut W, int: u64, frac: u64, prec: u32) -> fmt::Result {
    write!(w, "{int}")?;
    if frac == 0 {
        return Ok(());
    }
    let digits = format!("{frac:0width$}", width = prec as usize);
    w.write_char('.')?;
    w.write_str(digits.trim_end_matches('0'))
}

/// Parses the canonical grammar into a nanosecond count.
///
/// A leading sign applies to the whole value. The bare string `"0"` is
/// accepted without a unit.
pub(crate) fn parse(input: &str) -> Result<i64, ParseError> {
    let mut s = input;
    let mut neg = false;
    if let Some(rest) = s.strip_prefix('-') {
        neg = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(0);
    }
    if s.is_empty() {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        return Err(invalid(input));
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        let first = s.as_bytes()[0];
        if !(first == b'.' || first.is_ascii_digit()) {
            return Err(invalid(input));
        }

        let before = s.len();
        let (int, rest) = leading_int(s).ok_or_else(|| overflow(input))?;
        s = rest;
        let has_int = before != s.len();

        let mut frac = 0u64;
        let mut scale = 1.0f64;
        let mut has_frac = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (f, sc, rest_after) = leading_fraction(rest);
            has_frac = rest.len() != rest_after.len();
            frac = f;
            scale = sc;
            s = rest_after;
        }
        if !has_int && !has_frac {
            return Err(invalid(input));
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(ParseError::MissingUnit {
                input: input.to_owned(),
            });
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;
        let unit = unit_nanos(unit).ok_or_else(|| ParseError::UnknownUnit {
            unit: unit.to_owned(),
            input: input.to_owned(),
        })?;

        if int > MAX_MAGNITUDE / unit {
            return Err(overflow(input));
        }
        let mut value = int * unit;
        if frac > 0 {
            // float64 keeps fractions exact up to the precision of the unit
            value += (frac as f64 * (unit as f64 / scale)) as u64;
            if value > MAX_MAGNITUDE {
                return Err(overflow(input));
            }
        }
        total = total
            .checked_add(value)
            .filter(|t| *t <= MAX_MAGNITUDE)
            .ok_or_else(|| overflow(input))?;
    }

    if neg {
        // total <= 2^63, so this wraps exactly onto i64::MIN at the bound
        return Ok((total as i64).wrapping_neg());
    }
    i64::try_from(total).map_err(|_| overflow(input))
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Consumes leading ASCII digits. Returns `None` past 2^63.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = digits_end(s);
    let mut x: u64 = 0;
    for b in s[..end].bytes() {
        if x > MAX_MAGNITUDE / 10 {
            return None;
        }
        x = x * 10 + u64::from(b - b'0');
        if x > MAX_MAGNITUDE {
            return None;
        }
    }
    Some((x, &s[end..]))
}

/// Consumes the digits after a decimal point, returning the value, its
/// power-of-ten scale, and the rest. Digits beyond 63 bits of precision are
/// consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = digits_end(s);
    let mut x: u64 = 0;
    let mut scale = 1.0f64;
    let mut saturated = false;
    for b in s[..end].bytes() {
        if saturated {
            continue;
        }
        if x > (i64::MAX as u64) / 10 {
            saturated = true;
            continue;
        }
        let y = x * 10 + u64::from(b - b'0');
        if y > MAX_MAGNITUDE {
            saturated = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale, &s[end..])
}

fn digits_end(s: &str) -> usize {
    s.bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len())
}

fn invalid(input: &str) -> ParseError {
    ParseError::Invalid {
        input: input.to_owned(),
    }
}

fn overflow(input: &str) -> ParseError {
    ParseError::Overflow {
        input: input.to_owned(),
    }
}

#[cfg(test)]
mod grammar_tests {
    use super::*;

    fn fmt(nanos: i64) -> String {
        let mut s = String::new();
        format(&mut s, nanos).unwrap();
        s
    }

    #[test]
    fn test_format_fraction_trimming() {
        assert_eq!(fmt(1_500_000_000), "1.5s");
        assert_eq!(fmt(1_200_000), "1.2ms");
        assert_eq!(fmt(1_001), "1.001\u{00b5}s");
        assert_eq!(fmt(999), "999ns");
        assert_eq!(fmt(-(HOUR as i64) - 500_000_000), "-1h0m0.5s");
    }

    #[test]
    fn test_format_extremes() {
        assert_eq!(fmt(i64::MIN), "-2562047h47m16.854775808s");
        assert_eq!(fmt(i64::MAX), "2562047h47m16.854775807s");
        assert_eq!(fmt(1), "1ns");
        assert_eq!(fmt(-1), "-1ns");
    }

    #[test]
    fn test_parse_extremes() {
        assert_eq!(parse("-2562047h47m16.854775808s"), Ok(i64::MIN));
        assert_eq!(parse("2562047h47m16.854775807s"), Ok(i64::MAX));
        assert!(matches!(
            parse("2562047h47m16.854775808s"),
            Err(ParseError::Overflow { .. })
        ));
        assert!(matches!(
            parse("9223372037s"),
            Err(ParseError::Overflow { .. })
        ));
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(parse("1.5h"), Ok(5_400_000_000_000));
        assert_eq!(parse(".5s"), Ok(500_000_000));
        assert_eq!(parse("5.s"), Ok(5_000_000_000));
        assert_eq!(parse("1.0000000001s"), Ok(1_000_000_000));
    }

    #[test]
    fn test_parse_error_kinds() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert!(matches!(parse("-"), Err(ParseError::Invalid { .. })));
        assert!(matches!(parse(".s"), Err(ParseError::Invalid { .. })));
        assert!(matches!(parse("42"), Err(ParseError::MissingUnit { .. })));
        assert!(matches!(parse("1h30"), Err(ParseError::MissingUnit { .. })));
        assert_eq!(
            parse("1h-5m"),
            Err(ParseError::UnknownUnit {
                unit: "h-".to_owned(),
                input: "1h-5m".to_owned(),
            })
        );
        assert_eq!(
            parse("5x"),
            Err(ParseError::UnknownUnit {
                unit: "x".to_owned(),
                input: "5x".to_owned(),
            })
        );
    }
}
