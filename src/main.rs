// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line front end: solve one or more goals with one set of buttons.

use anyhow::{Context, Result};
use calc_solver::modifiers::Portal;
use calc_solver::puzzle::translate_password;
use calc_solver::{Button, ButtonSet, Goal, Puzzle, PuzzleError, Solution};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Solve a Calculator: The Game level.
///
/// Example: calc -g 22 -m 2 -b +11 x2
#[derive(Parser, Debug)]
#[command(name = "calc", version, about)]
struct Args {
    /// Goal totals, or letter passwords spelled on the phone keypad
    #[arg(short, long, num_args = 1.., required = true, allow_negative_numbers = true)]
    goals: Vec<Goal>,

    /// Move budget
    #[arg(short, long)]
    moves: u32,

    /// Starting total
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    total: i64,

    /// Buttons, in the order they should be tried
    #[arg(short, long, num_args = 1.., required = true, allow_negative_numbers = true)]
    buttons: Vec<String>,

    /// Portal: digits kept on the left, and the power of ten re-entered on the right
    #[arg(short, long, num_args = 2, value_names = ["LEFT", "RIGHT"])]
    portals: Option<Vec<u32>>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn portal(values: Option<&[u32]>) -> Result<Option<Portal>> {
    let Some(values) = values else {
        return Ok(None);
    };
    let [left, right] = values else {
        anyhow::bail!("--portals takes LEFT and RIGHT");
    };
    Ok(Some(Portal::new(*left as usize, *right)?))
}

/// Print `solution`, replaying plain Store captures from `buttons`.
fn print_solution(
    out: &mut impl Write,
    buttons: &ButtonSet,
    solution: &Solution,
) -> io::Result<()> {
    let mut stores: Vec<Option<i64>> = buttons.buttons().iter().map(Button::captured).collect();
    for step in &solution.steps {
        for press in &step.long_presses {
            let old = stores[press.index];
            writeln!(
                out,
                "long press {} to {}",
                Button::Store(old),
                Button::Store(Some(press.value))
            )?;
            stores[press.index] = Some(press.value);
        }
        writeln!(out, "{step}")?;
    }
    Ok(())
}

/// Solve and print one goal, followed by a blank line.
///
/// A password goal with no move left to enter it is reported as unsolved.
fn run_goal(
    out: &mut impl Write,
    buttons: &mut ButtonSet,
    goal: &Goal,
    start: i64,
    moves: u32,
    portal: Option<Portal>,
) -> Result<()> {
    match goal {
        Goal::Number(target) => writeln!(out, "goal: {target}")?,
        Goal::Password(word) => {
            let target = translate_password(word)?;
            writeln!(out, "goal: {word} => {target} (use 1 move)")?;
        }
    }

    let solved = match goal.resolve(moves) {
        Ok((target, moves)) => {
            let puzzle = Puzzle::new(start, target, moves, portal)?;
            match calc_solver::solve(buttons, &puzzle) {
                Ok(solution) => {
                    print_solution(out, buttons, &solution)?;
                    true
                }
                Err(_) => false,
            }
        }
        Err(PuzzleError::NoMoveForPassword) => false,
        Err(e) => return Err(e.into()),
    };
    if !solved {
        writeln!(out, "no solution found!")?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut buttons = ButtonSet::parse(&args.buttons).context("invalid button")?;
    let portal = portal(args.portals.as_deref())?;

    let mut out = io::stdout().lock();
    for goal in &args.goals {
        run_goal(&mut out, &mut buttons, goal, args.total, args.moves, portal)?;
    }
    Ok(())
}
