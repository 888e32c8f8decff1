// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use calc_solver::modifiers::{self, Lock, Portal};
use calc_solver::{Button, ButtonSet, Puzzle, Solution, SearchFailed, Trial};

/// Build a button set from text, panicking on bad input.
pub fn buttons(labels: &[&str]) -> ButtonSet {
    ButtonSet::parse(labels).unwrap_or_else(|e| panic!("bad buttons {labels:?}: {e}"))
}

/// Solve and return the solution along with the set, for later inspection.
pub fn solve(
    labels: &[&str],
    start: i64,
    goal: i64,
    moves: u32,
    portal: Option<Portal>,
) -> (ButtonSet, Result<Solution, SearchFailed>) {
    let mut set = buttons(labels);
    let puzzle = Puzzle::new(start, goal, moves, portal).unwrap();
    let result = calc_solver::solve(&mut set, &puzzle);
    (set, result)
}

/// Step lines as the command line prints them.
pub fn lines(solution: &Solution) -> Vec<String> {
    solution.steps.iter().map(|step| step.to_string()).collect()
}

/// Press the solution's buttons on a copy of `set` and return the totals.
///
/// Follows the same long presses, Change broadcasts, lock and portal as the
/// search, so the last total must be the goal.
pub fn replay(set: &ButtonSet, solution: &Solution, portal: Option<Portal>) -> Vec<i64> {
    let mut set = set.clone();
    let mut lock: Option<Lock> = None;
    let mut totals = vec![solution.start];
    let mut total = solution.start;
    for step in &solution.steps {
        assert_eq!(step.before, total, "steps must chain");
        for press in &step.long_presses {
            set.capture(press.index, press.value);
        }
        assert_eq!(set.get(step.index), Some(&step.button));

        let mut new_lock = None;
        if let (Button::Lock, Trial::At(pos)) = (&step.button, &step.trial) {
            new_lock = Some(Lock::capture(total, *pos, lock).unwrap());
        }
        let pressed = set.press(step.index, total, &step.trial).unwrap();
        total = modifiers::settle(pressed, lock, portal).unwrap();
        lock = new_lock.or(lock);

        assert_eq!(step.after, total);
        totals.push(total);
    }
    totals
}
