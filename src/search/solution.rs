// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The result of a successful search.

use crate::button::{Button, Trial};
use std::fmt;
use thiserror::Error;

/// No sequence within the move budget reaches the goal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no solution found")]
pub struct SearchFailed;

/// A plain Store button captured `value` before a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongPress {
    pub index: usize,
    pub value: i64,
}

/// One button press on the path from start to goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub before: i64,
    /// Index of the button in the set.
    pub index: usize,
    /// The button as it was just before the press.
    pub button: Button,
    pub trial: Trial,
    pub after: i64,
    /// Store captures made in the frame before this press.
    pub long_presses: Vec<LongPress>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{} -> {}", self.before, self.button, self.trial, self.after)
    }
}

/// Moves from start to goal, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub start: i64,
    pub goal: i64,
    pub steps: Vec<Step>,
}

impl Solution {
    /// Number of moves used.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Totals visited, starting with `start` and ending with `goal`.
    pub fn totals(&self) -> Vec<i64> {
        std::iter::once(self.start)
            .chain(self.steps.iter().map(|step| step.after))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_display() {
        let step = Step {
            before: 0,
            index: 0,
            button: Button::Add(11),
            trial: Trial::Press,
            after: 11,
            long_presses: Vec::new(),
        };
        assert_eq!(step.to_string(), "0 +11 -> 11");

        let step = Step {
            before: 120,
            index: 1,
            button: Button::Delete,
            trial: Trial::At(1),
            after: 10,
            long_presses: Vec::new(),
        };
        assert_eq!(step.to_string(), "120 DELETE[pos 1] -> 10");
    }
}
