//! Picker - source of random choices for demo data

use std::collections::VecDeque;

/// Picks an index in `0..len`
pub trait Picker {
    /// `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random picks
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::random_range(0..len.max(1))
    }
}

/// Replays a fixed list of picks, then keeps returning 0
#[derive(Debug, Default, Clone)]
pub struct SequencePicker {
    picks: VecDeque<usize>,
}

impl SequencePicker {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl Picker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        self.picks
            .pop_front()
            .unwrap_or(0)
            .min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picks_stay_in_range() {
        let mut picker = RandomPicker;
        for _ in 0..200 {
            assert!(picker.pick(3) < 3);
        }
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn test_sequence_picker_clamps_and_drains() {
        let mut picker = SequencePicker::new([2, 9]);
        assert_eq!(picker.pick(3), 2);
        assert_eq!(picker.pick(5), 4);
        assert_eq!(picker.pick(5), 0);
    }
}
