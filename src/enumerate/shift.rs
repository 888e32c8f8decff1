// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotation plans for the Shift button.
//!
//! Rotating a total whose digits contain zeros can drop those zeros: once a
//! zero reaches the front it disappears as a leading zero. Rotating without
//! dropping anything just permutes the digits cyclically, so the useful
//! plans are the ones that drop some zeros and then settle on one of the
//! remaining rotations.
//!
//! For every split of the zeros into `right` (trailing zeros removed by
//! right rotations) and `left` (leading zeros removed by left rotations),
//! a plan is
//!
//! ```text
//! '>' * right_moves + '<' * left_moves + residual
//! ```
//!
//! where the residual is a signed rotation bounded so that it never brings
//! another zero to the front. Residuals are tried smallest first.
//!
//! A run of adjacent zeros drops together when rotating left, so left
//! counts that would split a run are skipped.

use crate::digits;

/// Number of rotation steps per space-separated group in a plan.
const GROUP: usize = 5;

/// Candidate rotation plans for `total`, in trial order.
///
/// Single-digit totals have no plans. Plans are grouped in fives for
/// readability (`>>>>> <<`); the separators are ignored when the plan runs.
pub fn rotation_plans(total: i64) -> Vec<String> {
    if (-9..=9).contains(&total) {
        return Vec::new();
    }

    let text = digits::digits(total);
    let len = text.len() as i64;
    let zeros: Vec<i64> = text
        .bytes()
        .enumerate()
        .filter(|(_, b)| *b == b'0')
        .map(|(i, _)| i as i64)
        .collect();
    let n = zeros.len() as i64;
    let zero = |i: i64| zeros[i as usize];

    let mut plans = Vec::new();
    for right in 0..=n {
        let right_moves = if right == 0 { 0 } else { len - zero(n - right) };
        for left in 0..(n - right).max(1) {
            if left >= 1 && left < n && zero(left) == zero(left - 1) + 1 {
                continue;
            }

            let left_moves = if left == 0 {
                0
            } else {
                (right_moves - right) + (zero(left - 1) - left + 1)
            };

            // Net rotation that puts the surviving digits back in order.
            let offset = left_moves - (right_moves - right);

            let (left_bound, right_bound) = if right + left == n {
                let left_bound = (len - n) / 2 + offset;
                (left_bound, len - n - left_bound - 1)
            } else {
                (
                    zero(left) - left - 1,
                    len - zero(n - right - 1) - right - 1,
                )
            };

            let mut residuals: Vec<i64> = (offset - left_bound..=offset + right_bound).collect();
            residuals.sort_by_key(|shift| shift.abs());

            for shift in residuals {
                let plan = compose(right_moves, left_moves, shift);
                if !plan.is_empty() {
                    plans.push(plan);
                }
            }
        }
    }
    plans
}

fn compose(right_moves: i64, left_moves: i64, shift: i64) -> String {
    let steps: Vec<char> = std::iter::repeat('>')
        .take(right_moves.max(0) as usize)
        .chain(std::iter::repeat('<').take(left_moves.max(0) as usize))
        .chain(std::iter::repeat(if shift > 0 { '>' } else { '<' }).take(shift.unsigned_abs() as usize))
        .collect();
    steps
        .chunks(GROUP)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
