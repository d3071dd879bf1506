//! Insertion sort with a fixed two-steps-per-key cadence: one step when a key
//! is picked up, one when it lands. Shifts in between are silent.

use crate::dataset::Dataset;
use crate::highlight::{Color, Highlight};
use crate::steps::{StepGenerator, StepResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Select,
    Place,
}

#[derive(Debug)]
pub struct InsertionSort {
    len: usize,
    /// Index of the key currently being inserted.
    i: usize,
    phase: Phase,
    steps: usize,
}

impl InsertionSort {
    pub fn new(data: &Dataset) -> Self {
        Self {
            len: data.len(),
            i: 1,
            phase: Phase::Select,
            steps: 0,
        }
    }
}

impl StepGenerator for InsertionSort {
    fn resume(&mut self, data: &mut Dataset) -> StepResult {
        if self.i >= self.len {
            return StepResult::Done;
        }
        let highlight = match self.phase {
            Phase::Select => {
                self.phase = Phase::Place;
                Highlight::new().with(self.i, Color::RED)
            }
            Phase::Place => {
                let key = data.at(self.i);
                let mut j = self.i;
                while j > 0 && key < data.at(j - 1) {
                    data.set(j, data.at(j - 1));
                    j -= 1;
                }
                data.set(j, key);
                self.i += 1;
                self.phase = Phase::Select;
                Highlight::new().with(j, Color::GREEN)
            }
        };
        self.steps += 1;
        StepResult::Continue(highlight)
    }

    fn steps(&self) -> usize {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_step_does_not_mutate() {
        let mut ds = Dataset::replace(vec![2, 1]).unwrap();
        let mut gen = InsertionSort::new(&ds);
        assert_eq!(
            gen.resume(&mut ds),
            StepResult::Continue(Highlight::new().with(1, Color::RED))
        );
        assert_eq!(ds.values(), &[2, 1]);
        assert_eq!(
            gen.resume(&mut ds),
            StepResult::Continue(Highlight::new().with(0, Color::GREEN))
        );
        assert_eq!(ds.values(), &[1, 2]);
        assert_eq!(gen.resume(&mut ds), StepResult::Done);
    }

    #[test]
    fn equal_keys_do_not_shift() {
        let mut ds = Dataset::replace(vec![4, 4]).unwrap();
        let mut gen = InsertionSort::new(&ds);
        gen.resume(&mut ds);
        assert_eq!(
            gen.resume(&mut ds),
            StepResult::Continue(Highlight::new().with(1, Color::GREEN))
        );
    }
}
