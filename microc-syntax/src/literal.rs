//! Conversion of raw lexemes into literal values.
//!
//! The scanner hands over the text it matched, quotes and prefixes included.
//! Unary minus is never part of a numeral.

use crate::errors::{Error, Result};

/// Reads a `0x` hexadecimal, `0b` binary or plain decimal numeral.
///
/// Hexadecimal and binary numerals are 32-bit patterns, so `0xFFFFFFFF` is -1.
/// Signs are not part of a numeral.
pub fn sanitize_integer(text: &str) -> Result<i32> {
    if let Some(digits) = text.strip_prefix("0x") {
        return u32::from_str_radix(check_digits(text, digits, 16)?, 16)
            .map(|bits| bits as i32)
            .map_err(|e| Error::invalid_literal(text, e));
    }

    if let Some(digits) = text.strip_prefix("0b") {
        return u32::from_str_radix(check_digits(text, digits, 2)?, 2)
            .map(|bits| bits as i32)
            .map_err(|e| Error::invalid_literal(text, e));
    }

    check_digits(text, text, 10)?
        .parse::<i32>()
        .map_err(|e| Error::invalid_literal(text, e))
}

/// `digits` must be non-empty and only hold digits of `radix`.
fn check_digits<'a>(text: &str, digits: &'a str, radix: u32) -> Result<&'a str> {
    if digits.is_empty() {
        return Err(Error::invalid_literal(text, "no digits"));
    }

    match digits.chars().find(|ch| !ch.is_digit(radix)) {
        Some(ch) => Err(Error::invalid_literal(
            text,
            format!("invalid digit '{ch}' for base {radix}"),
        )),
        None => Ok(digits),
    }
}

/// Reads a quoted character lexeme such as `'a'` or `'\n'`.
pub fn sanitize_char(text: &str) -> Result<char> {
    let inner = text
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .ok_or_else(|| Error::invalid_literal(text, "missing quotes"))?;

    let mut chars = inner.chars();
    let value = match (chars.next(), chars.next(), chars.next()) {
        (Some('\\'), Some(escaped), None) => match escaped {
            '0' => '\0',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '\'' => '\'',
            other => {
                return Err(Error::invalid_literal(
                    text,
                    format!("unknown escape '\\{other}'"),
                ))
            }
        },
        (Some(ch), None, None) => ch,
        _ => return Err(Error::invalid_literal(text, "expected a single character")),
    };

    Ok(value)
}

/// Reads a quoted string lexeme, resolving `\n`, `\r` and `\t`. Any other
/// escaped character stands for itself.
pub fn sanitize_string(text: &str) -> Result<String> {
    let mut chars = text.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(Error::invalid_literal(text, "missing quotes"));
    }

    let mut value = String::with_capacity(text.len());
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            value.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => value.push('\n'),
            Some('r') => value.push('\r'),
            Some('t') => value.push('\t'),
            Some(other) => value.push(other),
            // backslash in last position
            None => value.push('\\'),
        }
    }

    Ok(value)
}

/// Strips the quotes around an `asm` payload. The text inside is opaque and
/// kept as written.
pub fn sanitize_assembly(text: &str) -> Result<String> {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_literal(text, "missing quotes"))
}
