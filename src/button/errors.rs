// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for pressing and building buttons.

use std::num::ParseIntError;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};
use thiserror::Error;

/// Why a single trial was rejected.
///
/// A `CalcError` is local to one trial: the search drops the trial and
/// moves on to the next one. The display strings are the diagnostic reasons
/// reported in logs.
#[derive(
    Error, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, IntoStaticStr,
)]
#[repr(u8)]
pub enum CalcError {
    /// Division would leave a remainder (or divides by zero).
    #[error("aliquant")]
    Aliquant,

    /// The Convert/Cut pattern does not occur in the total's text.
    #[error("pattern not found")]
    PatternNotFound,

    /// The result would leave the display range.
    #[error("overflow")]
    Overflow,

    /// The result was already visited on the current branch.
    #[error("redundant step")]
    RedundantStep,

    /// A Store button was pressed before anything was captured.
    #[error("store is empty")]
    StoreEmpty,

    /// The captured value is negative and cannot be appended.
    #[error("store is < 0")]
    StoreNegative,

    /// A Lock is already active on this branch.
    #[error("already locked")]
    AlreadyLocked,

    /// A long press would capture the value the store already holds.
    #[error("total already stored")]
    AlreadyStored,

    /// A trial does not fit the button (including unknown rotation steps).
    #[error("unknown action")]
    UnknownAction,

    /// A position parameter lies outside the total's digits.
    #[error("no such digit")]
    NoSuchDigit,

    /// An operand cannot be written as digits (negative digit text, negative
    /// exponent, or a substitution result that is not a number).
    #[error("invalid operand")]
    InvalidOperand,
}

/// Failure to build a button from its text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ButtonParseError {
    #[error("unknown button {0}")]
    Unknown(String),

    #[error("invalid button {text}: {source}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid button {0}: empty pattern")]
    EmptyPattern(String),
}
