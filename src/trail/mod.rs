// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based checkpoint and restore for button state.
//!
//! Every mutation of a button during search first records the button's old
//! record on the trail. A checkpoint is just the trail length; rewinding to
//! it restores the recorded records newest first, which leaves every button
//! exactly as it was when the checkpoint was taken.
//!
//! Rewinding is idempotent: rewinding to a checkpoint that has already been
//! reached does nothing.

use crate::button::Button;

/// A single entry in the trail, recording one button before it changed.
#[derive(Debug, Clone)]
struct TrailEntry {
    /// Index of the button in its set.
    slot: usize,
    /// The button record before the change.
    old: Button,
}

/// The trail of saved button records.
///
/// # Example
///
/// ```
/// use calc_solver::button::Button;
/// use calc_solver::trail::Trail;
///
/// let mut buttons = vec![Button::Add(1)];
/// let mut trail = Trail::new();
///
/// let checkpoint = trail.checkpoint();
/// trail.record(0, &buttons[0]);
/// buttons[0].adjust(2);
/// assert_eq!(buttons[0], Button::Add(3));
///
/// trail.rewind_to(checkpoint, &mut buttons);
/// assert_eq!(buttons[0], Button::Add(1));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the current position for a later [`Trail::rewind_to`].
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record `button` (the record in `slot`) before it is changed.
    pub fn record(&mut self, slot: usize, button: &Button) {
        self.entries.push(TrailEntry {
            slot,
            old: button.clone(),
        });
    }

    /// Restore every record saved since `checkpoint`, newest first.
    pub fn rewind_to(&mut self, checkpoint: usize, buttons: &mut [Button]) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                buttons[entry.slot] = entry.old;
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
