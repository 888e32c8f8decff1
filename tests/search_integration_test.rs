// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end searches over small puzzles with known answers.

mod common;

use calc_solver::modifiers::Portal;
use calc_solver::search::LongPress;
use calc_solver::state::statistics::Counters;
use calc_solver::{Button, CalcError, Goal, Puzzle, SearchFailed, Solver, Trial};
use common::{buttons, lines, replay, solve};

#[test]
fn test_add_and_multiply() {
    let (set, result) = solve(&["+11", "x2"], 0, 22, 2, None);
    let solution = result.unwrap();
    assert_eq!(lines(&solution), vec!["0 +11 -> 11", "11 x2 -> 22"]);
    assert_eq!(replay(&set, &solution, None), vec![0, 11, 22]);
}

#[test]
fn test_unsolvable_puzzle() {
    let (_, result) = solve(&["+2", "x4", "-3"], 0, 28, 3, None);
    assert_eq!(result, Err(SearchFailed));
}

#[test]
fn test_solution_uses_at_most_the_budget() {
    let (set, result) = solve(&["x4", "+10"], 4, 1024, 4, None);
    let solution = result.unwrap();
    assert_eq!(solution.totals(), vec![4, 16, 64, 256, 1024]);
    assert_eq!(replay(&set, &solution, None).last(), Some(&1024));

    let (_, result) = solve(&["x4", "+10"], 4, 1024, 3, None);
    assert!(result.is_err());
}

#[test]
fn test_change_adjusts_later_presses() {
    let (set, result) = solve(&["x2", "[+]1"], 3, 9, 2, None);
    let solution = result.unwrap();
    assert_eq!(lines(&solution), vec!["3 [+]1 -> 3", "3 x3 -> 9"]);
    assert_eq!(solution.steps[1].button, Button::Mul(3));

    // the broadcast is rolled back after the search
    assert_eq!(set.buttons()[0], Button::Mul(2));
    assert_eq!(replay(&set, &solution, None), vec![3, 3, 9]);
}

#[test]
fn test_delete_then_insert() {
    let (set, result) = solve(&["delete", "insert1", "+90"], 120, 210, 2, None);
    let solution = result.unwrap();
    assert_eq!(
        lines(&solution),
        vec!["120 DELETE[pos 2] -> 20", "20 INSERT1[pos 1] -> 210"]
    );
    assert_eq!(replay(&set, &solution, None), vec![120, 20, 210]);
}

#[test]
fn test_store_long_press_is_reported() {
    let (set, result) = solve(&["+1", "store"], 12, 1212, 1, None);
    let solution = result.unwrap();
    assert_eq!(lines(&solution), vec!["12 Store(12) -> 1212"]);
    assert_eq!(
        solution.steps[0].long_presses,
        vec![LongPress { index: 1, value: 12 }]
    );

    // the capture does not outlive the search
    assert_eq!(set.buttons()[1], Button::Store(None));
    assert_eq!(replay(&set, &solution, None), vec![12, 1212]);
}

#[test]
fn test_store_switches_run_in_product_order() {
    let (_, result) = solve(&["store", "store"], 5, 55, 1, None);
    let solution = result.unwrap();
    // the second store is the least significant switch, so it is captured first
    assert_eq!(
        solution.steps[0].long_presses,
        vec![LongPress { index: 1, value: 5 }]
    );
    assert_eq!(lines(&solution), vec!["5 Store(5) -> 55"]);
}

#[test]
fn test_empty_store_is_skipped() {
    let (_, result) = solve(&["store", "+1"], 1, 3, 3, None);
    let solution = result.unwrap();
    assert_eq!(lines(&solution), vec!["1 +1 -> 2", "2 +1 -> 3"]);
    assert!(solution.steps.iter().all(|step| step.long_presses.is_empty()));
}

#[test]
fn test_store_v2_long_press_costs_a_move() {
    let (set, result) = solve(&["storev2", "x2"], 1, 11, 3, None);
    let solution = result.unwrap();
    assert_eq!(
        lines(&solution),
        vec!["1 Store[long press] -> 1", "1 Store(1) -> 11"]
    );
    assert_eq!(solution.steps[0].trial, Trial::LongPress);
    assert_eq!(set.buttons()[0], Button::store_v2());
}

#[test]
fn test_lock_holds_a_digit() {
    let (set, result) = solve(&["lock", "+3"], 9, 19, 2, None);
    let solution = result.unwrap();
    assert_eq!(lines(&solution), vec!["9 LOCK[pos 0] -> 9", "9 +3 -> 19"]);
    assert_eq!(replay(&set, &solution, None), vec![9, 9, 19]);

    let (_, result) = solve(&["+3"], 9, 19, 2, None);
    assert!(result.is_err());
}

#[test]
fn test_portal_folds_overflowing_digits() {
    let portal = Portal::new(2, 0).unwrap();
    let (set, result) = solve(&["+1"], 99, 1, 1, Some(portal));
    let solution = result.unwrap();
    assert_eq!(lines(&solution), vec!["99 +1 -> 1"]);
    assert_eq!(replay(&set, &solution, Some(portal)), vec![99, 1]);
}

#[test]
fn test_portal_must_shrink_the_total() {
    assert!(Portal::new(1, 1).is_err());

    // 95 + 7 = 102 -> 02 + 1 * 10 = 12
    let portal = Portal::new(2, 1).unwrap();
    let (set, result) = solve(&["+7"], 95, 19, 2, Some(portal));
    let solution = result.unwrap();
    assert_eq!(replay(&set, &solution, Some(portal)), vec![95, 12, 19]);
}

#[test]
fn test_password_goal() {
    let goal: Goal = "dog".parse().unwrap();
    let (target, moves) = goal.resolve(5).unwrap();
    assert_eq!((target, moves), (253, 4));

    let (_, result) = solve(&["2", "5", "3"], 0, target, moves, None);
    let solution = result.unwrap();
    assert_eq!(solution.totals(), vec![0, 2, 25, 253]);
}

#[test]
fn test_solver_counts_rejections() {
    let mut set = buttons(&["/3", "+1"]);
    let mut solver = Solver::new(Puzzle::new(1, 3, 2, None).unwrap());
    let solution = solver.solve(&mut set).unwrap();

    assert_eq!(solution.totals(), vec![1, 2, 3]);
    let stats = solver.statistics();
    assert_eq!(stats.get(Counters::Solutions), 1);
    assert!(stats.failures(CalcError::Aliquant) >= 2);
    assert!(stats.get(Counters::Trials) >= stats.total_failures());
}

#[test]
fn test_set_is_reusable_across_goals() {
    let mut set = buttons(&["x2", "[+]1", "store", "storev2"]);
    let original = set.buttons().to_vec();
    for goal in [4, 9, 33, 66] {
        let puzzle = Puzzle::new(3, goal, 3, None).unwrap();
        if let Ok(solution) = calc_solver::solve(&mut set, &puzzle) {
            assert_eq!(replay(&set, &solution, None).last(), Some(&goal));
        }
        assert_eq!(set.buttons(), original.as_slice());
        assert_eq!(set.trail_len(), 0);
    }
}
