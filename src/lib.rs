// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking solver for *Calculator: The Game* puzzles.
//!
//! Given a start total, a goal, a move budget and a set of buttons, find a
//! sequence of button presses that turns the start into the goal.
//!
//! # Architecture
//!
//! ## Immutable data
//!
//! - [`puzzle::Puzzle`]: start, goal, budget and the optional portal
//! - [`digits`]: decimal digit manipulation shared by every button
//!
//! ## Mutable data
//!
//! Search state that changes during search, tracked on the trail:
//! - [`trail::Trail`] records the old form of every button that changes
//! - [`state::ButtonSet`] owns the buttons and routes all mutation through
//!   the trail, so any checkpoint can be restored exactly
//!
//! # Search algorithm
//!
//! [`search::Solver`] runs a depth-first search bounded by the move budget.
//! Each frame enumerates trials ([`enumerate`]), presses the button, applies
//! the modifiers ([`modifiers`]) and recurses. The first solution found in
//! trial order is returned, with every button back in its original state.

pub mod button;
pub mod digits;
pub mod enumerate;
pub mod modifiers;
pub mod puzzle;
pub mod search;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use button::{Button, ButtonParseError, CalcError, Trial};
pub use puzzle::{Goal, Puzzle, PuzzleError};
pub use search::{solve, SearchFailed, Solution, Solver, Step};
pub use state::ButtonSet;
pub use trail::Trail;
