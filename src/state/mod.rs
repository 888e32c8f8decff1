// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state: the button arena and its trail.
//!
//! A [`ButtonSet`] owns the buttons in trial order together with the
//! [`Trail`] that saves each button before it changes. All mutation during
//! search goes through the set so that [`ButtonSet::rewind_to`] can restore
//! any earlier checkpoint exactly.

pub mod statistics;

use crate::button::{Button, ButtonParseError, CalcError, Trial};
use crate::trail::Trail;

/// Ordered buttons plus the trail that checkpoints them.
///
/// Insertion order is both the trial order and the tie-break order.
#[derive(Debug, Clone, Default)]
pub struct ButtonSet {
    buttons: Vec<Button>,
    trail: Trail,
}

impl ButtonSet {
    pub fn new(buttons: Vec<Button>) -> Self {
        Self {
            buttons,
            trail: Trail::new(),
        }
    }

    /// Build a set from button text, failing on the first malformed entry.
    pub fn parse<S: AsRef<str>>(labels: &[S]) -> Result<Self, ButtonParseError> {
        let buttons = labels
            .iter()
            .map(|label| label.as_ref().parse())
            .collect::<Result<Vec<Button>, _>>()?;
        Ok(Self::new(buttons))
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn get(&self, index: usize) -> Option<&Button> {
        self.buttons.get(index)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Indices of the plain Store buttons, whose long press is driven by the
    /// search rather than by a trial.
    pub fn store_indices(&self) -> Vec<usize> {
        self.buttons
            .iter()
            .enumerate()
            .filter(|(_, button)| matches!(button, Button::Store(_)))
            .map(|(index, _)| index)
            .collect()
    }

    /// Mark the current state for a later [`ButtonSet::rewind_to`].
    pub fn checkpoint(&self) -> usize {
        self.trail.checkpoint()
    }

    /// Restore the state at `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.buttons);
    }

    /// Number of saved records not yet rewound.
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Long-press a plain Store button: capture `total`.
    pub fn capture(&mut self, index: usize, total: i64) {
        if let Some(Button::Store(value)) = self.buttons.get(index) {
            if *value != Some(total) {
                self.trail.record(index, &self.buttons[index]);
                self.buttons[index] = Button::Store(Some(total));
            }
        }
    }

    /// Press button `index` with `trial`, broadcasting a Change.
    ///
    /// On failure the set is unchanged.
    pub fn press(&mut self, index: usize, total: i64, trial: &Trial) -> Result<i64, CalcError> {
        let button = self
            .buttons
            .get_mut(index)
            .ok_or(CalcError::UnknownAction)?;
        let saved = button.clone();
        let result = button.apply(total, trial)?;
        if *button != saved {
            self.trail.record(index, &saved);
        }
        if let Some(delta) = self.buttons[index].broadcast() {
            self.adjust_all(delta);
        }
        Ok(result)
    }

    /// Undo the effect of a successful `press(index, total, trial)`.
    pub fn release(&mut self, index: usize, total: i64, trial: &Trial) {
        let Some(button) = self.buttons.get_mut(index) else {
            return;
        };
        button.revert(total, trial);
        if let Some(delta) = button.broadcast() {
            self.adjust_all(-delta);
        }
    }

    /// Adjust every adjustable button by `delta`.
    pub fn adjust_all(&mut self, delta: i64) {
        for index in 0..self.buttons.len() {
            if self.buttons[index].is_adjustable() {
                self.trail.record(index, &self.buttons[index]);
                self.buttons[index].adjust(delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let set = ButtonSet::parse(&["+1", "store", "[+]2"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.store_indices(), vec![1]);
        assert!(ButtonSet::parse(&["+1", "bogus"]).is_err());
    }

    #[test]
    fn test_change_broadcasts_and_rewinds() {
        let mut set = ButtonSet::new(vec![Button::Add(1), Button::sub(2), Button::Change(3)]);
        let checkpoint = set.checkpoint();

        assert_eq!(set.press(2, 10, &Trial::Press), Ok(10));
        assert_eq!(set.buttons()[0], Button::Add(4));
        assert_eq!(set.buttons()[1], Button::Sub(-5));
        assert_eq!(set.buttons()[2], Button::Change(3));

        set.rewind_to(checkpoint);
        assert_eq!(set.buttons()[0], Button::Add(1));
        assert_eq!(set.buttons()[1], Button::Sub(-2));
        assert_eq!(set.trail_len(), 0);
    }

    #[test]
    fn test_release_undoes_change() {
        let mut set = ButtonSet::new(vec![Button::Mul(2), Button::Change(1)]);
        set.press(1, 5, &Trial::Press).unwrap();
        assert_eq!(set.buttons()[0], Button::Mul(3));
        set.release(1, 5, &Trial::Press);
        assert_eq!(set.buttons()[0], Button::Mul(2));
    }

    #[test]
    fn test_failed_press_leaves_set_unchanged() {
        let mut set = ButtonSet::new(vec![Button::store_v2()]);
        set.press(0, 4, &Trial::LongPress).unwrap();
        let before = set.buttons().to_vec();
        let trail = set.trail_len();

        assert_eq!(set.press(0, 4, &Trial::LongPress), Err(CalcError::AlreadyStored));
        assert_eq!(set.buttons(), before.as_slice());
        assert_eq!(set.trail_len(), trail);
    }

    #[test]
    fn test_capture_records_only_changes() {
        let mut set = ButtonSet::new(vec![Button::Store(None)]);
        let checkpoint = set.checkpoint();
        set.capture(0, 7);
        assert_eq!(set.buttons()[0], Button::Store(Some(7)));
        set.capture(0, 7);
        assert_eq!(set.trail_len(), 1);

        set.rewind_to(checkpoint);
        assert_eq!(set.buttons()[0], Button::Store(None));
    }
}
