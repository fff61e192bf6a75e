//! Whole-line numeric literal recognition.
//!
//! A line is an integer when it is an optional sign followed by decimal
//! digits, otherwise a float when it is any valid decimal literal (optional
//! fraction, optional exponent), otherwise a string. Digits are any Unicode
//! `Nd` character, so `"١٢٣"` is the integer 123. Nothing is trimmed: a line
//! with surrounding whitespace is always a string.

use std::str::FromStr;
use std::sync::OnceLock;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use regex::Regex;

use crate::models::ParsedLine;

fn integer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?\d+$").expect("regex is valid"))
}

fn decimal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?P<sign>[+-]?)(?:(?P<int>\d+)(?:\.(?P<frac>\d*))?|\.(?P<bare_frac>\d+))(?:[eE](?P<exp>[+-]?\d+))?$",
        )
        .expect("regex is valid")
    })
}

fn digit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d$").expect("regex is valid"))
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    digit_re().is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a Unicode decimal digit.
///
/// `Nd` characters come in contiguous runs of ten, `0` through `9`, so the
/// value is the offset from the start of the enclosing run, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Rewrite `digits` (already matched as `\d*`) with ASCII digits.
fn to_ascii_digits(digits: &str, out: &mut String) -> Option<()> {
    for c in digits.chars() {
        out.push(char::from_digit(digit_value(c)?, 10)?);
    }
    Some(())
}

/// Classify `line` and return the value it will be aggregated by.
///
/// Never fails: anything that is not a numeric literal is [`ParsedLine::Text`],
/// carrying the line length in UTF-16 code units.
pub fn classify(line: &str) -> ParsedLine {
    if let Some(value) = parse_integer(line) {
        return ParsedLine::Integer(value);
    }
    if let Some(value) = parse_decimal(line) {
        return ParsedLine::Float(value);
    }
    ParsedLine::Text(line.encode_utf16().count())
}

/// Parse `line` as a base-10 integer literal of arbitrary magnitude.
pub fn parse_integer(line: &str) -> Option<BigInt> {
    if !integer_re().is_match(line) {
        return None;
    }
    let (negative, digits) = match line.strip_prefix(['+', '-']) {
        Some(rest) => (line.starts_with('-'), rest),
        None => (false, line),
    };
    let mut normalised = String::with_capacity(digits.len() + 1);
    if negative {
        normalised.push('-');
    }
    to_ascii_digits(digits, &mut normalised)?;
    BigInt::from_str(&normalised).ok()
}

/// Parse `line` as a base-10 decimal literal, keeping its exact scale.
///
/// `"3.14"` becomes 314 at scale 2 and `"1e3"` becomes 1 at scale -3. Literals
/// whose exponent or resulting scale does not fit in an `i32` are rejected.
pub fn parse_decimal(line: &str) -> Option<BigDecimal> {
    let caps = decimal_re().captures(line)?;

    let int_digits = caps.name("int").map_or("", |m| m.as_str());
    let frac_digits = caps
        .name("frac")
        .or_else(|| caps.name("bare_frac"))
        .map_or("", |m| m.as_str());

    let exponent: i64 = match caps.name("exp") {
        Some(m) => {
            let raw = m.as_str();
            let (sign, digits) = match raw.strip_prefix(['+', '-']) {
                Some(rest) => (&raw[..1], rest),
                None => ("", raw),
            };
            let mut normalised = sign.to_string();
            to_ascii_digits(digits, &mut normalised)?;
            normalised.parse().ok()?
        }
        None => 0,
    };
    if i32::try_from(exponent).is_err() {
        return None;
    }

    let scale = frac_digits.chars().count() as i64 - exponent;
    if i32::try_from(scale).is_err() {
        return None;
    }

    let negative = caps.name("sign").is_some_and(|m| m.as_str() == "-");
    let mut digits = String::with_capacity(int_digits.len() + frac_digits.len() + 1);
    if negative {
        digits.push('-');
    }
    to_ascii_digits(int_digits, &mut digits)?;
    to_ascii_digits(frac_digits, &mut digits)?;

    let mantissa = BigInt::from_str(&digits).ok()?;
    Some(BigDecimal::new(mantissa, scale))
}
