// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the solver during one run, plus one failure counter per
//! [`CalcError`] reason.

use crate::button::CalcError;
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Search frames entered.
    Frames,
    /// Trials attempted.
    Trials,
    /// Frames that ran out of trials.
    Exhausted,
    /// Successful solves.
    Solutions,
}

const COUNT: usize = Counters::COUNT + CalcError::COUNT;

#[derive(Debug, Clone, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one trial rejected for `reason`.
    pub fn record_failure(&mut self, reason: CalcError) {
        self.stats[Counters::COUNT + reason as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of trials rejected for `reason`.
    pub fn failures(&self, reason: CalcError) -> u64 {
        self.stats[Counters::COUNT + reason as usize]
    }

    /// Total number of rejected trials.
    pub fn total_failures(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

/// Every counter, then the failure reasons seen at least once.
impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counters =
            Counters::iter().map(|counter| (<&'static str>::from(counter), self.get(counter)));
        let failures = CalcError::iter()
            .map(|reason| (<&'static str>::from(reason), self.failures(reason)))
            .filter(|(_, count)| *count > 0);

        let mut separator = "";
        for (name, count) in counters.chain(failures) {
            write!(f, "{separator}{name}={count}")?;
            separator = " ";
        }
        Ok(())
    }
}
