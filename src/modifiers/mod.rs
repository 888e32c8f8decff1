// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Global modifiers applied after every successful press.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. Overflow: the total must stay within ±[`MAX_TOTAL`].
//! 2. Lock: an active [`Lock`] forces its digit back into place.
//! 3. Portal: a [`Portal`] folds excess leading digits back into the total.
//! 4. Redundancy: a result already visited on the current branch is
//!    rejected, unless the trial exists to change state rather than the
//!    total.

use crate::button::CalcError;
use crate::digits::{self, MAX_TOTAL};
use crate::puzzle::PuzzleError;

/// A digit pinned in place for the rest of a search branch.
///
/// Created by the Lock button; never mutated. Children of the frame that
/// created it inherit it by value, so backtracking drops it implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lock {
    pub pos: usize,
    pub digit: u8,
}

impl Lock {
    /// Capture the digit of `total` at `pos`.
    ///
    /// Fails when a lock is already active on this branch.
    pub fn capture(total: i64, pos: usize, active: Option<Lock>) -> Result<Lock, CalcError> {
        if active.is_some() {
            return Err(CalcError::AlreadyLocked);
        }
        let digit = digits::digit_at(total, pos).ok_or(CalcError::NoSuchDigit)?;
        Ok(Lock { pos, digit })
    }

    /// Force the locked digit into `total`, zero-padding short totals.
    pub fn overwrite(&self, total: i64) -> Result<i64, CalcError> {
        let text = format!("{:0>width$}", digits::digits(total), width = self.pos + 1);
        let index = text.len() - self.pos - 1;
        let locked = format!(
            "{}{}{}",
            &text[..index],
            char::from(b'0' + self.digit),
            &text[index + 1..]
        );
        digits::signed(digits::sign(total), &locked)
    }
}

/// Digit-folding portal, constant for a whole run.
///
/// While the total has more than `left_digits` digits, the leading digit is
/// removed and added back at `10^right_exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portal {
    left_digits: usize,
    right_exponent: u32,
}

impl Portal {
    pub fn new(left_digits: usize, right_exponent: u32) -> Result<Self, PuzzleError> {
        if left_digits == 0 {
            return Err(PuzzleError::EmptyPortal);
        }
        // Each fold must shrink the total, or folding never ends.
        if right_exponent as usize >= left_digits {
            return Err(PuzzleError::PortalOutOfRange {
                left_digits,
                right_exponent,
            });
        }
        Ok(Self {
            left_digits,
            right_exponent,
        })
    }

    pub fn left_digits(&self) -> usize {
        self.left_digits
    }

    pub fn right_exponent(&self) -> u32 {
        self.right_exponent
    }

    /// Fold `total` until it fits in `left_digits` digits.
    pub fn fold(&self, total: i64) -> Result<i64, CalcError> {
        let weight = 10i64
            .checked_pow(self.right_exponent)
            .ok_or(CalcError::Overflow)?;
        let mut text = digits::digits(total);
        let mut current = digits::signed(1, &text)?;
        while text.len() > self.left_digits {
            let lead = i64::from(text.as_bytes()[0] - b'0');
            let rest = digits::signed(1, &text[1..])?;
            let folded = lead
                .checked_mul(weight)
                .and_then(|carry| rest.checked_add(carry))
                .ok_or(CalcError::Overflow)?;
            if folded >= current {
                return Err(CalcError::Overflow);
            }
            current = folded;
            text = folded.to_string();
        }
        digits::signed(digits::sign(total), &text)
    }
}

/// Run overflow, lock and portal on a freshly pressed total.
pub fn settle(total: i64, lock: Option<Lock>, portal: Option<Portal>) -> Result<i64, CalcError> {
    if total.abs() > MAX_TOTAL {
        return Err(CalcError::Overflow);
    }
    let total = match lock {
        Some(lock) => lock.overwrite(total)?,
        None => total,
    };
    match portal {
        Some(portal) => portal.fold(total),
        None => Ok(total),
    }
}

/// Reject a result already visited on this branch.
pub fn check_redundant(total: i64, visited: &[i64]) -> Result<i64, CalcError> {
    if visited.contains(&total) {
        Err(CalcError::RedundantStep)
    } else {
        Ok(total)
    }
}
