// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-bounded backtracking search.
//!
//! Each recursion frame sees a total and the moves left:
//!
//! 1. If the total is the goal, the frame succeeds.
//! 2. If no moves are left, the frame fails.
//! 3. Otherwise the frame explores its trials. The first trial whose
//!    child frame succeeds wins; if none does, the frame fails.
//!
//! Trials are ordered by Store switch combination (outer loop) and then by
//! [`enumerate::trials`] (inner loop). The first solution in this order is
//! returned, which is not necessarily the shortest one.
//!
//! # State restoration
//!
//! Button state is the only shared mutable resource. Each frame and each
//! trial holds a [`Rewind`] guard on the [`ButtonSet`]; dropping the guard
//! reverts the pressed button and rewinds the trail to the guard's
//! checkpoint, on every exit path. After `solve` returns, the set is back in
//! its original state whatever the outcome.
//!
//! # Example
//!
//! ```
//! use calc_solver::puzzle::Puzzle;
//! use calc_solver::search::Solver;
//! use calc_solver::state::ButtonSet;
//!
//! let mut buttons = ButtonSet::parse(&["+11", "x2"]).unwrap();
//! let puzzle = Puzzle::new(0, 22, 2, None).unwrap();
//!
//! let solution = Solver::new(puzzle).solve(&mut buttons).unwrap();
//! assert_eq!(solution.totals(), vec![0, 11, 22]);
//! ```

pub mod solution;

pub use solution::{LongPress, SearchFailed, Solution, Step};

use crate::button::{Button, CalcError, Trial};
use crate::enumerate;
use crate::modifiers::{self, Lock};
use crate::puzzle::Puzzle;
use crate::state::statistics::{Counters, Statistics};
use crate::state::ButtonSet;
use std::ops::{Deref, DerefMut};
use tracing::{debug, info, trace};

/// Solve `puzzle` with `buttons`.
pub fn solve(buttons: &mut ButtonSet, puzzle: &Puzzle) -> Result<Solution, SearchFailed> {
    Solver::new(*puzzle).solve(buttons)
}

/// Why a single trial did not lead to the goal.
enum TrialFailure {
    /// The press or a modifier rejected the trial.
    Rejected(CalcError),
    /// The child frame ran out of trials.
    Exhausted,
}

impl From<CalcError> for TrialFailure {
    fn from(reason: CalcError) -> Self {
        TrialFailure::Rejected(reason)
    }
}

impl From<SearchFailed> for TrialFailure {
    fn from(_: SearchFailed) -> Self {
        TrialFailure::Exhausted
    }
}

/// Restores a [`ButtonSet`] when dropped.
///
/// Reverts the recorded press, if any, then rewinds to the checkpoint taken
/// at construction.
struct Rewind<'a> {
    set: &'a mut ButtonSet,
    checkpoint: usize,
    pressed: Option<(usize, i64, Trial)>,
}

impl<'a> Rewind<'a> {
    fn new(set: &'a mut ButtonSet) -> Self {
        let checkpoint = set.checkpoint();
        Self {
            set,
            checkpoint,
            pressed: None,
        }
    }

    /// Back to the state at construction, keeping the guard armed.
    fn reset(&mut self) {
        self.set.rewind_to(self.checkpoint);
    }
}

impl Deref for Rewind<'_> {
    type Target = ButtonSet;

    fn deref(&self) -> &ButtonSet {
        self.set
    }
}

impl DerefMut for Rewind<'_> {
    fn deref_mut(&mut self) -> &mut ButtonSet {
        self.set
    }
}

impl Drop for Rewind<'_> {
    fn drop(&mut self) {
        if let Some((index, total, trial)) = self.pressed.take() {
            self.set.release(index, total, &trial);
        }
        self.set.rewind_to(self.checkpoint);
    }
}

/// Per-frame inputs shared by all of the frame's trials.
struct Frame {
    total: i64,
    moves: u32,
    lock: Option<Lock>,
    long_presses: Vec<LongPress>,
}

/// Backtracking solver for one puzzle.
#[derive(Debug)]
pub struct Solver {
    puzzle: Puzzle,
    /// Totals on the current branch, root first.
    visited: Vec<i64>,
    statistics: Statistics,
}

impl Solver {
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            visited: Vec::new(),
            statistics: Statistics::new(),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Counters from the most recent `solve`.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Find the first sequence of at most `moves` presses reaching the goal.
    ///
    /// `buttons` is restored to its entry state before returning.
    pub fn solve(&mut self, buttons: &mut ButtonSet) -> Result<Solution, SearchFailed> {
        self.visited.clear();
        self.statistics = Statistics::new();

        let result = {
            let mut set = Rewind::new(buttons);
            self.explore(&mut set, self.puzzle.start, self.puzzle.moves, None)
        };

        match result {
            Ok(mut steps) => {
                steps.reverse();
                self.statistics.increment(Counters::Solutions);
                info!(
                    start = self.puzzle.start,
                    goal = self.puzzle.goal,
                    moves = steps.len(),
                    stats = %self.statistics,
                    "solved"
                );
                Ok(Solution {
                    start: self.puzzle.start,
                    goal: self.puzzle.goal,
                    steps,
                })
            }
            Err(failed) => {
                info!(
                    start = self.puzzle.start,
                    goal = self.puzzle.goal,
                    budget = self.puzzle.moves,
                    rejected = self.statistics.total_failures(),
                    stats = %self.statistics,
                    "no solution within budget"
                );
                Err(failed)
            }
        }
    }

    /// One recursion frame. Returns the winning steps deepest first.
    fn explore(
        &mut self,
        set: &mut ButtonSet,
        total: i64,
        moves: u32,
        lock: Option<Lock>,
    ) -> Result<Vec<Step>, SearchFailed> {
        self.statistics.increment(Counters::Frames);
        if total == self.puzzle.goal {
            return Ok(Vec::new());
        }
        if moves == 0 {
            return Err(SearchFailed);
        }

        self.visited.push(total);
        let result = self.explore_trials(set, total, moves, lock);
        self.visited.pop();

        if result.is_err() {
            self.statistics.increment(Counters::Exhausted);
            debug!(total, moves, "frame exhausted");
        }
        result
    }

    fn explore_trials(
        &mut self,
        set: &mut ButtonSet,
        total: i64,
        moves: u32,
        lock: Option<Lock>,
    ) -> Result<Vec<Step>, SearchFailed> {
        let mut set = Rewind::new(set);

        // Negative totals cannot be captured.
        let stores = if total >= 0 {
            set.store_indices()
        } else {
            Vec::new()
        };
        let switches = stores.len();
        let combos = 1usize.checked_shl(switches as u32).unwrap_or(usize::MAX);

        'combos: for combo in 0..combos {
            set.reset();

            // The first store is the most significant switch, so all-off
            // comes first and each store's "on" follows its "off".
            let mut long_presses = Vec::new();
            for (j, &index) in stores.iter().enumerate() {
                if (combo >> (switches - 1 - j)) & 1 == 0 {
                    continue;
                }
                // Capturing the value already held repeats an earlier combo.
                if set.get(index).and_then(Button::captured) == Some(total) {
                    continue 'combos;
                }
                set.capture(index, total);
                long_presses.push(LongPress { index, value: total });
            }

            let frame = Frame {
                total,
                moves,
                lock,
                long_presses,
            };
            for (index, trial) in enumerate::trials(set.buttons(), total) {
                self.statistics.increment(Counters::Trials);
                match self.attempt(&mut set, &frame, index, trial) {
                    Ok(steps) => return Ok(steps),
                    Err(TrialFailure::Rejected(reason)) => {
                        self.statistics.record_failure(reason);
                        let kind: &'static str = set.get(index).map_or("", |b| b.kind().into());
                        trace!(total, index, kind, %reason, "trial rejected");
                    }
                    Err(TrialFailure::Exhausted) => {}
                }
            }
        }

        Err(SearchFailed)
    }

    /// Press one button and search on from the result.
    fn attempt(
        &mut self,
        set: &mut ButtonSet,
        frame: &Frame,
        index: usize,
        trial: Trial,
    ) -> Result<Vec<Step>, TrialFailure> {
        let total = frame.total;
        let button = set.get(index).cloned().ok_or(CalcError::UnknownAction)?;

        let new_lock = match (&button, &trial) {
            (Button::Lock, Trial::At(pos)) => Some(Lock::capture(total, *pos, frame.lock)?),
            _ => None,
        };

        let mut set = Rewind::new(set);
        let pressed = set.press(index, total, &trial)?;
        set.pressed = Some((index, total, trial.clone()));

        let after = modifiers::settle(pressed, frame.lock, self.puzzle.portal)?;
        if !button.keeps_total(&trial) {
            modifiers::check_redundant(after, &self.visited)?;
        }

        let mut steps = self.explore(&mut set, after, frame.moves - 1, new_lock.or(frame.lock))?;
        debug!(before = total, button = %button, trial = %trial, after, "step");
        steps.push(Step {
            before: total,
            index,
            button,
            trial,
            after,
            long_presses: frame.long_presses.clone(),
        });
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(labels: &[&str], start: i64, goal: i64, moves: u32) -> Result<Solution, SearchFailed> {
        let mut set = ButtonSet::parse(labels).unwrap();
        let puzzle = Puzzle::new(start, goal, moves, None).unwrap();
        solve(&mut set, &puzzle)
    }

    #[test]
    fn test_add_then_multiply() {
        let solution = run(&["+11", "x2"], 0, 22, 2).unwrap();
        assert_eq!(solution.totals(), vec![0, 11, 22]);
        assert_eq!(solution.steps[0].button, Button::Add(11));
        assert_eq!(solution.steps[1].button, Button::Mul(2));
    }

    #[test]
    fn test_start_is_goal() {
        let solution = run(&["+1"], 5, 5, 0).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn test_budget_exhausted() {
        assert_eq!(run(&["+1"], 0, 3, 2), Err(SearchFailed));
        assert!(run(&["+1"], 0, 3, 3).is_ok());
    }

    #[test]
    fn test_redundant_steps_are_pruned() {
        let mut set = ButtonSet::parse(&["+1", "-1"]).unwrap();
        let puzzle = Puzzle::new(0, 5, 4, None).unwrap();
        let mut solver = Solver::new(puzzle);
        assert!(solver.solve(&mut set).is_err());
        assert!(solver.statistics().failures(CalcError::RedundantStep) > 0);
    }

    #[test]
    fn test_first_solution_in_button_order() {
        let solution = run(&["+1", "+2"], 0, 2, 2).unwrap();
        // +1 +1 is tried before +2 on its own
        assert_eq!(solution.len(), 2);
        assert!(solution.steps.iter().all(|step| step.button == Button::Add(1)));
    }

    #[test]
    fn test_buttons_restored_after_solve() {
        let mut set = ButtonSet::parse(&["+1", "[+]2", "store", "storev2"]).unwrap();
        let before = set.buttons().to_vec();
        let puzzle = Puzzle::new(1, 31, 3, None).unwrap();
        let _ = solve(&mut set, &puzzle);
        assert_eq!(set.buttons(), before.as_slice());
        assert_eq!(set.trail_len(), 0);
    }

    #[test]
    fn test_statistics_are_reset_per_solve() {
        let mut set = ButtonSet::parse(&["+1"]).unwrap();
        let mut solver = Solver::new(Puzzle::new(0, 2, 2, None).unwrap());
        solver.solve(&mut set).unwrap();
        let frames = solver.statistics().get(Counters::Frames);
        solver.solve(&mut set).unwrap();
        assert_eq!(solver.statistics().get(Counters::Frames), frames);
        assert_eq!(solver.statistics().get(Counters::Solutions), 1);
    }
}
