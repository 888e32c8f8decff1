// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parameter enumeration.
//!
//! For a given total, lists every `(button, trial)` pair the search should
//! attempt, in button order. This order is the search's tie-break rule.
//!
//! - Digit position kinds (Delete, DigitAdd, DigitSub, Replace, Lock): one
//!   trial per digit position.
//! - Insert: one trial per insertion point, including in front of the
//!   leading digit.
//! - Round: positions `1..len` (rounding at the ones place changes nothing
//!   useful).
//! - Store V2: a long press, then a normal press.
//! - Shift: one trial per rotation plan from [`shift::rotation_plans`].
//! - Everything else: a single plain press.

pub mod shift;

use crate::button::{Button, Trial};
use crate::digits;

/// Trials for one button at `total`.
pub fn trials_for(button: &Button, total: i64) -> Vec<Trial> {
    let len = digits::digit_count(total);
    match button {
        Button::Delete
        | Button::DigitAdd(_)
        | Button::DigitSub(_)
        | Button::Replace(_)
        | Button::Lock => (0..len).map(Trial::At).collect(),
        Button::Insert(_) => (0..=len).map(Trial::At).collect(),
        Button::Round => (1..len).map(Trial::At).collect(),
        Button::StoreV2 { .. } => vec![Trial::LongPress, Trial::Press],
        Button::Shift => shift::rotation_plans(total)
            .into_iter()
            .map(Trial::Rotate)
            .collect(),
        _ => vec![Trial::Press],
    }
}

/// All `(button index, trial)` pairs at `total`, in trial order.
pub fn trials(buttons: &[Button], total: i64) -> Vec<(usize, Trial)> {
    buttons
        .iter()
        .enumerate()
        .flat_map(|(index, button)| {
            trials_for(button, total)
                .into_iter()
                .map(move |trial| (index, trial))
        })
        .collect()
}
