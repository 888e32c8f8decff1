// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sign-aware digit transforms.
//!
//! Every operation here works on the decimal digits of the absolute value of
//! a total and reapplies the sign afterwards. Zero counts as positive:
//! `sign(0) == 1`, so a transform never turns zero negative.
//!
//! Positions count from the least significant digit: position 0 is the ones
//! place.
//!
//! # Examples
//!
//! ```
//! use calc_solver::digits;
//!
//! assert_eq!(digits::reversed(-120).unwrap(), -21);
//! assert_eq!(digits::rotate_left(123).unwrap(), 231);
//! assert_eq!(digits::delete_at(120, 1).unwrap(), 10);
//! ```

use crate::button::CalcError;

/// Largest magnitude a total may reach after any move.
pub const MAX_TOTAL: i64 = 999_999;

/// Sign of a total, with zero treated as positive.
pub fn sign(value: i64) -> i64 {
    if value < 0 {
        -1
    } else {
        1
    }
}

/// Decimal digits of the absolute value.
pub fn digits(value: i64) -> String {
    value.unsigned_abs().to_string()
}

/// Number of decimal digits of the absolute value (1 for zero).
pub fn digit_count(value: i64) -> usize {
    digits(value).len()
}

/// Digit at `pos` counting from the right, if the total has that many digits.
pub fn digit_at(value: i64, pos: usize) -> Option<u8> {
    let text = digits(value);
    let index = text.len().checked_sub(pos + 1)?;
    Some(text.as_bytes()[index] - b'0')
}

/// Parse an unsigned digit string and reapply `sign`.
///
/// An empty string reads as zero. Leading zeros are dropped.
pub fn signed(sign: i64, digits: &str) -> Result<i64, CalcError> {
    if digits.is_empty() {
        return Ok(0);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalcError::InvalidOperand);
    }
    let magnitude: i64 = digits.parse().map_err(|_| CalcError::Overflow)?;
    Ok(sign * magnitude)
}

/// Parse signed decimal text, as produced by text substitution on a total.
///
/// Empty text and a bare minus read as zero.
pub fn parse_total(text: &str) -> Result<i64, CalcError> {
    match text.strip_prefix('-') {
        Some(rest) => signed(-1, rest),
        None => signed(1, text),
    }
}

/// `10^exp` as an i64, failing with overflow when it does not fit.
pub fn pow10(exp: usize) -> Result<i64, CalcError> {
    let exp = u32::try_from(exp).map_err(|_| CalcError::Overflow)?;
    10i64.checked_pow(exp).ok_or(CalcError::Overflow)
}

/// Rewrite the digit string of the absolute value, keeping the sign.
fn map_digits(value: i64, f: impl FnOnce(&str) -> String) -> Result<i64, CalcError> {
    signed(sign(value), &f(&digits(value)))
}

/// Drop the last digit.
pub fn backspace(value: i64) -> i64 {
    sign(value) * (value.abs() / 10)
}

/// Append the decimal text of `suffix` to the signed total.
///
/// `suffix` must be non-negative: `12` appended to `-3` gives `-312`.
pub fn append(value: i64, suffix: i64) -> Result<i64, CalcError> {
    if suffix < 0 {
        return Err(CalcError::InvalidOperand);
    }
    map_digits(value, |text| format!("{text}{suffix}"))
}

/// Reverse the digit order.
pub fn reversed(value: i64) -> Result<i64, CalcError> {
    map_digits(value, |text| text.chars().rev().collect())
}

/// Sum of the digits.
pub fn digit_sum(value: i64) -> i64 {
    let sum: i64 = digits(value).bytes().map(|b| i64::from(b - b'0')).sum();
    sign(value) * sum
}

/// Append a digit-reversed copy: `12` becomes `1221`.
pub fn mirrored(value: i64) -> Result<i64, CalcError> {
    map_digits(value, |text| {
        let tail: String = text.chars().rev().collect();
        format!("{text}{tail}")
    })
}

/// Move the first digit to the end: `123` becomes `231`.
pub fn rotate_left(value: i64) -> Result<i64, CalcError> {
    map_digits(value, |text| format!("{}{}", &text[1..], &text[..1]))
}

/// Move the last digit to the front: `123` becomes `312`.
pub fn rotate_right(value: i64) -> Result<i64, CalcError> {
    map_digits(value, |text| {
        let split = text.len() - 1;
        format!("{}{}", &text[split..], &text[..split])
    })
}

/// Replace every digit `d` outside {0, 5} with `10 - d`.
pub fn inverted(value: i64) -> Result<i64, CalcError> {
    map_digits(value, |text| {
        text.bytes()
            .map(|b| match b {
                b'0' | b'5' => char::from(b),
                _ => char::from(b'0' + 10 - (b - b'0')),
            })
            .collect()
    })
}

/// Sort the digits ascending, or descending when `descending` is set.
pub fn sorted(value: i64, descending: bool) -> Result<i64, CalcError> {
    map_digits(value, |text| {
        let mut bytes = text.as_bytes().to_vec();
        bytes.sort_unstable();
        if descending {
            bytes.reverse();
        }
        bytes.into_iter().map(char::from).collect()
    })
}

/// Remove the digit at `pos`.
pub fn delete_at(value: i64, pos: usize) -> Result<i64, CalcError> {
    check_position(value, pos)?;
    let base = pow10(pos)?;
    let magnitude = value.abs();
    Ok(sign(value) * (magnitude / base / 10 * base + magnitude % base))
}

/// Insert the decimal text of `inserted` so that it ends at `pos`.
///
/// `pos` may equal the digit count, which prepends.
pub fn insert_at(value: i64, pos: usize, inserted: i64) -> Result<i64, CalcError> {
    if pos > digit_count(value) {
        return Err(CalcError::NoSuchDigit);
    }
    if inserted < 0 {
        return Err(CalcError::InvalidOperand);
    }
    let base = pow10(pos)?;
    let width = pow10(inserted.to_string().len())?;
    let magnitude = value.abs();
    let (left, right) = (magnitude / base, magnitude % base);
    let shifted = left
        .checked_mul(base)
        .and_then(|v| v.checked_mul(width))
        .and_then(|v| inserted.checked_mul(base).and_then(|mid| v.checked_add(mid)))
        .and_then(|v| v.checked_add(right))
        .ok_or(CalcError::Overflow)?;
    Ok(sign(value) * shifted)
}

/// Round half away from zero at `10^pos`.
pub fn round_at(value: i64, pos: usize) -> Result<i64, CalcError> {
    check_position(value, pos)?;
    let base = pow10(pos)?;
    let magnitude = value.abs();
    let (mut left, right) = (magnitude / base, magnitude % base);
    if right >= base / 2 {
        left += 1;
    }
    Ok(sign(value) * left * base)
}

/// Replace the digit at `pos` with the decimal text of `replacement`.
pub fn replace_at(value: i64, pos: usize, replacement: &str) -> Result<i64, CalcError> {
    check_position(value, pos)?;
    map_digits(value, |text| {
        let index = text.len() - pos - 1;
        format!("{}{}{}", &text[..index], replacement, &text[index + 1..])
    })
}

/// Add `delta` to the digit at `pos`, wrapping modulo 10.
///
/// A zero digit counts as 10 before the addition, so `0 - 1` gives `9`.
/// Negative sums wrap too: `1 - 3` gives `8`. The Python solver takes the
/// absolute value instead and gives `2`, so golden output from it can
/// differ here.
pub fn add_at(value: i64, pos: usize, delta: i64) -> Result<i64, CalcError> {
    let digit = digit_at(value, pos).ok_or(CalcError::NoSuchDigit)?;
    let digit = if digit == 0 { 10 } else { i64::from(digit) };
    let wrapped = digit
        .checked_add(delta)
        .ok_or(CalcError::Overflow)?
        .rem_euclid(10);
    replace_at(value, pos, &wrapped.to_string())
}

fn check_position(value: i64, pos: usize) -> Result<(), CalcError> {
    if pos < digit_count(value) {
        Ok(())
    } else {
        Err(CalcError::NoSuchDigit)
    }
}
