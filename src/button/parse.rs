// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Building buttons from their text form.
//!
//! Prefixes are checked in a fixed order, so `[+]2` is a Change and not an
//! Add, and `blue+1` is a digit addition rather than a Replace.

use super::{Button, ButtonParseError};
use std::str::FromStr;

impl FromStr for Button {
    type Err = ButtonParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let number = |digits: &str| -> Result<i64, ButtonParseError> {
            digits
                .parse()
                .map_err(|source| ButtonParseError::InvalidNumber {
                    text: text.to_string(),
                    source,
                })
        };

        let button = match text {
            "<<" => Button::Backspace,
            "<" => Button::ShiftLeft,
            ">" => Button::ShiftRight,
            "+/-" => Button::Sign,
            "reverse" => Button::Reverse,
            "sum" => Button::Sum,
            "mirror" => Button::Mirror,
            "store" => Button::Store(None),
            "storev2" => Button::store_v2(),
            "inv10" => Button::Inv10,
            "sort>" => Button::Sort { descending: false },
            "sort<" => Button::Sort { descending: true },
            "delete" => Button::Delete,
            "round" => Button::Round,
            "shift" => Button::Shift,
            "lock" => Button::Lock,
            _ => {
                if let Some(rest) = text.strip_prefix("replace") {
                    Button::Replace(number(rest)?)
                } else if let Some(rest) = text.strip_prefix("insert") {
                    Button::Insert(number(rest)?)
                } else if let Some(rest) = text
                    .strip_prefix("digit+")
                    .or_else(|| text.strip_prefix("blue+"))
                {
                    Button::DigitAdd(number(rest)?)
                } else if let Some(rest) = text
                    .strip_prefix("digit-")
                    .or_else(|| text.strip_prefix("blue-"))
                {
                    Button::digit_sub(number(rest)?)
                } else if let Some(rest) = text.strip_prefix("blue") {
                    Button::Replace(number(rest)?)
                } else if let Some(rest) = text.strip_prefix("cut") {
                    if rest.is_empty() {
                        return Err(ButtonParseError::EmptyPattern(text.to_string()));
                    }
                    number(rest)?;
                    Button::Cut(rest.to_string())
                } else if let Some(rest) = text.strip_prefix("[+]") {
                    Button::Change(number(rest)?)
                } else if let Some(rest) = text.strip_prefix('+') {
                    Button::Add(number(rest)?)
                } else if let Some(rest) = text.strip_prefix('-') {
                    Button::sub(number(rest)?)
                } else if let Some(rest) = text.strip_prefix('x') {
                    Button::Mul(number(rest)?)
                } else if let Some(rest) = text.strip_prefix('/') {
                    Button::Div(number(rest)?)
                } else if let Some(rest) = text.strip_prefix('^') {
                    Button::Pow(number(rest)?)
                } else if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                    Button::Num(number(text)?)
                } else if let Some((from, to)) = text.split_once("=>") {
                    if from.is_empty() {
                        return Err(ButtonParseError::EmptyPattern(text.to_string()));
                    }
                    Button::convert(from, to)
                } else {
                    return Err(ButtonParseError::Unknown(text.to_string()));
                }
            }
        };
        Ok(button)
    }
}
