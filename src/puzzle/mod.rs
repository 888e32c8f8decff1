// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Puzzle configuration: start, goal, move budget and portal.

use crate::digits::MAX_TOTAL;
use crate::modifiers::Portal;
use std::str::FromStr;
use thiserror::Error;

/// Invalid run configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("portal must keep at least one digit")]
    EmptyPortal,

    #[error("portal exit 10^{right_exponent} does not fit in {left_digits} digits")]
    PortalOutOfRange { left_digits: usize, right_exponent: u32 },

    #[error("total {0} is outside the display range")]
    OutOfRange(i64),

    #[error("password {0:?} must consist of letters only")]
    InvalidPassword(String),

    #[error("password goal needs a move to enter but no moves are available")]
    NoMoveForPassword,
}

/// One solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub start: i64,
    pub goal: i64,
    pub moves: u32,
    pub portal: Option<Portal>,
}

impl Puzzle {
    pub fn new(start: i64, goal: i64, moves: u32, portal: Option<Portal>) -> Result<Self, PuzzleError> {
        for total in [start, goal] {
            if total.abs() > MAX_TOTAL {
                return Err(PuzzleError::OutOfRange(total));
            }
        }
        Ok(Self {
            start,
            goal,
            moves,
            portal,
        })
    }
}

/// A goal as written on the command line: a number, or a password spelled
/// on the phone keypad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Goal {
    Number(i64),
    Password(String),
}

impl Goal {
    /// Numeric goal and remaining move budget.
    ///
    /// Entering a password costs one move.
    pub fn resolve(&self, moves: u32) -> Result<(i64, u32), PuzzleError> {
        match self {
            Goal::Number(goal) => Ok((*goal, moves)),
            Goal::Password(word) => {
                let moves = moves.checked_sub(1).ok_or(PuzzleError::NoMoveForPassword)?;
                Ok((translate_password(word)?, moves))
            }
        }
    }
}

impl FromStr for Goal {
    type Err = PuzzleError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if let Ok(goal) = text.parse() {
            return Ok(Goal::Number(goal));
        }
        translate_password(text)?;
        Ok(Goal::Password(text.to_string()))
    }
}

/// Decode a password: letter `c` becomes `(c - 'a') / 3 + 1`.
///
/// Three letters per digit, starting at `abc` → 1.
pub fn translate_password(word: &str) -> Result<i64, PuzzleError> {
    let invalid = || PuzzleError::InvalidPassword(word.to_string());
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(invalid());
    }
    let digits: String = word
        .bytes()
        .map(|b| char::from(b'0' + (b.to_ascii_lowercase() - b'a') / 3 + 1))
        .collect();
    let goal: i64 = digits.parse().map_err(|_| invalid())?;
    if goal > MAX_TOTAL {
        return Err(PuzzleError::OutOfRange(goal));
    }
    Ok(goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_password() {
        assert_eq!(translate_password("abc"), Ok(111));
        assert_eq!(translate_password("Dog"), Ok(253));
        assert_eq!(translate_password("xyz"), Ok(899));
        assert!(translate_password("a1").is_err());
        assert!(translate_password("").is_err());
    }

    #[test]
    fn test_goal_parse_and_resolve() {
        assert_eq!("42".parse::<Goal>(), Ok(Goal::Number(42)));
        assert_eq!("-7".parse::<Goal>(), Ok(Goal::Number(-7)));
        assert_eq!("dog".parse::<Goal>(), Ok(Goal::Password("dog".into())));
        assert!("d0g".parse::<Goal>().is_err());

        assert_eq!(Goal::Number(42).resolve(3), Ok((42, 3)));
        assert_eq!(Goal::Password("dog".into()).resolve(3), Ok((253, 2)));
        assert_eq!(
            Goal::Password("dog".into()).resolve(0),
            Err(PuzzleError::NoMoveForPassword)
        );
    }

    #[test]
    fn test_puzzle_range() {
        assert!(Puzzle::new(0, 22, 2, None).is_ok());
        assert_eq!(
            Puzzle::new(0, 1_000_000, 2, None),
            Err(PuzzleError::OutOfRange(1_000_000))
        );
    }
}
