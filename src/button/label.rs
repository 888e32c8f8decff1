// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical short labels, as printed in solutions.
//!
//! These strings are compared against golden output, so they must not drift.

use super::Button;
use std::fmt;

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::Add(value) => write!(f, "+{value}"),
            Button::Sub(value) | Button::Num(value) => write!(f, "{value}"),
            Button::Mul(value) => write!(f, "x{value}"),
            Button::Div(value) => write!(f, "/{value}"),
            Button::Pow(value) => write!(f, "^{value}"),
            Button::Backspace => write!(f, "<<"),
            Button::Convert { from, to } => write!(f, "{from}=>{to}"),
            Button::Cut(pattern) => write!(f, "Cut{pattern}"),
            Button::Sign => write!(f, "+/-"),
            Button::Reverse => write!(f, "Reverse"),
            Button::Sum => write!(f, "SUM"),
            Button::ShiftLeft => write!(f, "<Shift"),
            Button::ShiftRight => write!(f, "Shift>"),
            Button::Mirror => write!(f, "Mirror"),
            Button::Inv10 => write!(f, "Inv10"),
            Button::Sort { descending } => write!(f, "Sort{}", if *descending { '<' } else { '>' }),
            Button::Change(value) => write!(f, "[+]{value}"),
            Button::Store(value) | Button::StoreV2 { value, .. } => match value {
                Some(value) => write!(f, "Store({value})"),
                None => write!(f, "Store"),
            },
            Button::Delete => write!(f, "DELETE"),
            Button::Insert(value) => write!(f, "INSERT{value}"),
            Button::Round => write!(f, "ROUND"),
            Button::DigitAdd(value) => write!(f, "(blue)digit+{value}"),
            Button::DigitSub(value) => write!(f, "(blue)digit{value}"),
            Button::Replace(value) => write!(f, "(blue)REPLACE{value}"),
            Button::Lock => write!(f, "LOCK"),
            Button::Shift => write!(f, "Shift"),
        }
    }
}
