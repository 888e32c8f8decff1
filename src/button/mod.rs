// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Calculator buttons.
//!
//! A [`Button`] is one operation kind together with its mutable parameter.
//! Every kind exposes the same three operations:
//!
//! - [`Button::apply`] transforms a total, or fails with a [`CalcError`]
//!   leaving both the total and the button unchanged.
//! - [`Button::revert`] undoes whatever a successful `apply` did to the
//!   button itself. It is a no-op for stateless kinds and safe to call twice.
//! - [`Button::adjust`] shifts the numeric parameter, for the kinds that
//!   have one. This is what a Change (`[+]n`) press broadcasts.
//!
//! Broadcasting itself needs the whole set, so it lives in
//! [`ButtonSet`](crate::state::ButtonSet).
//!
//! # Example
//!
//! ```
//! use calc_solver::button::{Button, CalcError, Trial};
//!
//! let mut div = Button::Div(3);
//! assert_eq!(div.apply(9, &Trial::Press), Ok(3));
//! assert_eq!(div.apply(10, &Trial::Press), Err(CalcError::Aliquant));
//!
//! let mut delete = Button::Delete;
//! assert_eq!(delete.apply(120, &Trial::At(1)), Ok(10));
//! ```

pub mod errors;
mod label;
mod parse;

pub use errors::{ButtonParseError, CalcError};

use crate::digits;
use std::fmt;
use strum_macros::{EnumDiscriminants, IntoStaticStr};

/// How a button is activated on one trial.
///
/// Most kinds take a plain [`Trial::Press`]; position kinds need the digit
/// position, Store V2 distinguishes long and normal presses, and Shift takes
/// a rotation plan of `<` and `>` steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Trial {
    /// Plain press.
    Press,

    /// Press at a digit position, 0 being the ones place.
    At(usize),

    /// Long press of a Store V2 button (captures the total).
    LongPress,

    /// Rotation plan for Shift. Spaces, commas and semicolons are ignored.
    Rotate(String),
}

impl fmt::Display for Trial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trial::Press => Ok(()),
            Trial::At(pos) => write!(f, "[pos {pos}]"),
            Trial::LongPress => write!(f, "[long press]"),
            Trial::Rotate(plan) => write!(f, "[{plan}]"),
        }
    }
}

/// One calculator button.
///
/// The variant is the immutable kind; fields are the mutable parameters.
/// `Sub` and `DigitSub` hold their operand already negated, so `Sub(3)` is
/// built with [`Button::sub`] and stored as `Sub(-3)`.
#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(name(ButtonKind), derive(IntoStaticStr))]
pub enum Button {
    Add(i64),
    /// Holds the negated operand.
    Sub(i64),
    Mul(i64),
    Div(i64),
    Pow(i64),
    Backspace,
    /// Appends its digits to the total.
    Num(i64),
    Convert {
        from: String,
        to: String,
    },
    /// Removes the first occurrence of an integer pattern.
    Cut(String),
    Sign,
    Reverse,
    Sum,
    ShiftLeft,
    ShiftRight,
    Mirror,
    Inv10,
    Sort {
        descending: bool,
    },
    /// Adds its value to the parameter of every button in the set.
    Change(i64),
    /// Captured value, set by the search's long-press switches.
    Store(Option<i64>),
    /// Store with its own long press and a history of earlier captures.
    StoreV2 {
        value: Option<i64>,
        history: Vec<Option<i64>>,
    },
    Delete,
    Insert(i64),
    Round,
    DigitAdd(i64),
    /// Holds the negated operand.
    DigitSub(i64),
    Replace(i64),
    Lock,
    Shift,
}

impl Button {
    /// Subtraction button for `-value`.
    pub fn sub(value: i64) -> Self {
        Button::Sub(-value)
    }

    /// Digit subtraction button for `-value`.
    pub fn digit_sub(value: i64) -> Self {
        Button::DigitSub(-value)
    }

    /// Text substitution button.
    pub fn convert(from: impl Into<String>, to: impl Into<String>) -> Self {
        Button::Convert {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Empty Store V2 button.
    pub fn store_v2() -> Self {
        Button::StoreV2 {
            value: None,
            history: Vec::new(),
        }
    }

    /// The kind tag.
    pub fn kind(&self) -> ButtonKind {
        self.into()
    }

    /// Transform `total`.
    ///
    /// On failure neither the total nor the button changes. Only a Store V2
    /// long press mutates the button; see [`Button::revert`].
    pub fn apply(&mut self, total: i64, trial: &Trial) -> Result<i64, CalcError> {
        match self {
            Button::Add(value) | Button::Sub(value) => {
                total.checked_add(*value).ok_or(CalcError::Overflow)
            }
            Button::Mul(value) => total.checked_mul(*value).ok_or(CalcError::Overflow),
            Button::Div(value) => match total.checked_rem(*value) {
                Some(0) => Ok(total / *value),
                _ => Err(CalcError::Aliquant),
            },
            Button::Pow(value) => {
                let exp = u32::try_from(*value).map_err(|_| CalcError::InvalidOperand)?;
                total.checked_pow(exp).ok_or(CalcError::Overflow)
            }
            Button::Backspace => Ok(digits::backspace(total)),
            Button::Num(value) => digits::append(total, *value),
            Button::Convert { from, to } => substitute(total, from, to),
            Button::Cut(pattern) => substitute(total, pattern, ""),
            Button::Sign => total.checked_neg().ok_or(CalcError::Overflow),
            Button::Reverse => digits::reversed(total),
            Button::Sum => Ok(digits::digit_sum(total)),
            Button::ShiftLeft => digits::rotate_left(total),
            Button::ShiftRight => digits::rotate_right(total),
            Button::Mirror => digits::mirrored(total),
            Button::Inv10 => digits::inverted(total),
            Button::Sort { descending } => digits::sorted(total, *descending),
            Button::Change(_) | Button::Lock => Ok(total),
            Button::Store(value) => append_captured(total, *value),
            Button::StoreV2 { value, history } => match trial {
                Trial::LongPress => {
                    if *value == Some(total) {
                        return Err(CalcError::AlreadyStored);
                    }
                    history.push(*value);
                    *value = Some(total);
                    Ok(total)
                }
                _ => append_captured(total, *value),
            },
            Button::Delete => digits::delete_at(total, position(trial)?),
            Button::Insert(value) => digits::insert_at(total, position(trial)?, *value),
            Button::Round => digits::round_at(total, position(trial)?),
            Button::DigitAdd(value) | Button::DigitSub(value) => {
                digits::add_at(total, position(trial)?, *value)
            }
            Button::Replace(value) => {
                if *value < 0 {
                    return Err(CalcError::InvalidOperand);
                }
                digits::replace_at(total, position(trial)?, &value.to_string())
            }
            Button::Shift => match trial {
                Trial::Rotate(plan) => rotate(total, plan),
                _ => Err(CalcError::UnknownAction),
            },
        }
    }

    /// Undo the effect a successful `apply(total, trial)` had on this button.
    ///
    /// Only a Store V2 long press changes the button. Its history unwinds
    /// last-in first-out, one entry per matching revert. A second revert
    /// for the same press finds the value no longer equal to `total` (a long
    /// press never captures the value already held) and does nothing.
    pub fn revert(&mut self, total: i64, trial: &Trial) {
        if let (Button::StoreV2 { value, history }, Trial::LongPress) = (self, trial) {
            if *value == Some(total) {
                if let Some(previous) = history.pop() {
                    *value = previous;
                }
            }
        }
    }

    /// Shift the numeric parameter by `delta`. Kinds without one ignore it.
    pub fn adjust(&mut self, delta: i64) {
        match self {
            Button::Add(value)
            | Button::Mul(value)
            | Button::Div(value)
            | Button::Num(value)
            | Button::Insert(value)
            | Button::DigitAdd(value)
            | Button::DigitSub(value) => *value = value.saturating_add(delta),
            Button::Sub(value) => *value = value.saturating_sub(delta),
            Button::Cut(pattern) => {
                if let Ok(current) = pattern.parse::<i64>() {
                    *pattern = current.saturating_add(delta).to_string();
                }
            }
            _ => {}
        }
    }

    /// Whether `adjust` can change this button.
    pub fn is_adjustable(&self) -> bool {
        matches!(
            self,
            Button::Add(_)
                | Button::Sub(_)
                | Button::Mul(_)
                | Button::Div(_)
                | Button::Num(_)
                | Button::Insert(_)
                | Button::DigitAdd(_)
                | Button::DigitSub(_)
                | Button::Cut(_)
        )
    }

    /// Delta this button broadcasts to the set when pressed.
    pub fn broadcast(&self) -> Option<i64> {
        match self {
            Button::Change(delta) => Some(*delta),
            _ => None,
        }
    }

    /// Value held by a Store-family button.
    pub fn captured(&self) -> Option<i64> {
        match self {
            Button::Store(value) | Button::StoreV2 { value, .. } => *value,
            _ => None,
        }
    }

    /// Whether this trial exists to change state rather than the total.
    ///
    /// Such trials are never pruned as redundant steps.
    pub fn keeps_total(&self, trial: &Trial) -> bool {
        match self {
            Button::Change(_) | Button::Lock => true,
            Button::Store(_) | Button::StoreV2 { .. } => *trial == Trial::LongPress,
            _ => false,
        }
    }
}

fn position(trial: &Trial) -> Result<usize, CalcError> {
    match trial {
        Trial::At(pos) => Ok(*pos),
        _ => Err(CalcError::UnknownAction),
    }
}

fn append_captured(total: i64, captured: Option<i64>) -> Result<i64, CalcError> {
    match captured {
        None => Err(CalcError::StoreEmpty),
        Some(value) if value < 0 => Err(CalcError::StoreNegative),
        Some(value) => digits::append(total, value),
    }
}

/// Replace the first occurrence of `from` in the signed decimal text.
fn substitute(total: i64, from: &str, to: &str) -> Result<i64, CalcError> {
    let text = total.to_string();
    if !text.contains(from) {
        return Err(CalcError::PatternNotFound);
    }
    digits::parse_total(&text.replacen(from, to, 1))
}

/// Run a rotation plan of `<` and `>` steps.
fn rotate(total: i64, plan: &str) -> Result<i64, CalcError> {
    plan.chars().try_fold(total, |total, step| match step {
        '<' => digits::rotate_left(total),
        '>' => digits::rotate_right(total),
        ' ' | ',' | ';' => Ok(total),
        other => {
            tracing::trace!(step = %other, "unknown rotation step");
            Err(CalcError::UnknownAction)
        }
    })
}
