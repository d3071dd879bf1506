//! Iterative quicksort over an explicit range stack.
//!
//! Each resume pops one sub-range, runs a full Lomuto partition on it (the
//! scan itself is silent) and yields `{high: red, pivot_index: green}`. The
//! red marker is the bound of the range that was just partitioned, not where
//! the pivot landed. Children are pushed left then right, so the right part is
//! partitioned first.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::highlight::Highlight;
use crate::steps::{StepGenerator, StepResult};

/// Inclusive `[low, high]` index span awaiting partitioning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRange {
    pub low: usize,
    pub high: usize,
}

#[derive(Debug)]
pub struct QuickSort {
    stack: Vec<SubRange>,
    steps: usize,
    /// Pivot value of every partition performed, in order.
    pivots: Vec<i64>,
}

impl QuickSort {
    pub fn new(data: &Dataset) -> Self {
        let mut stack = Vec::new();
        if !data.is_empty() {
            stack.push(SubRange {
                low: 0,
                high: data.len() - 1,
            });
        }
        Self {
            stack,
            steps: 0,
            pivots: Vec::new(),
        }
    }

    /// Ranges still waiting on the stack, bottom first.
    pub fn pending(&self) -> &[SubRange] {
        &self.stack
    }

    pub fn pivots(&self) -> &[i64] {
        &self.pivots
    }
}

/// Lomuto partition of `[low, high]` around `data[high]`; returns the pivot's
/// final index.
fn partition(data: &mut Dataset, low: usize, high: usize) -> usize {
    let pivot = data.at(high);
    let mut store = low;
    for j in low..high {
        if data.at(j) <= pivot {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, high);
    store
}

impl StepGenerator for QuickSort {
    fn resume(&mut self, data: &mut Dataset) -> StepResult {
        let Some(SubRange { low, high }) = self.stack.pop() else {
            return StepResult::Done;
        };
        self.pivots.push(data.at(high));
        let p = partition(data, low, high);

        if p > low + 1 {
            self.stack.push(SubRange { low, high: p - 1 });
        }
        if p + 1 < high {
            self.stack.push(SubRange { low: p + 1, high });
        }

        self.steps += 1;
        log::trace!("quick: partitioned [{low}, {high}] pivot at {p}");
        StepResult::Continue(Highlight::pair(high, p))
    }

    fn steps(&self) -> usize {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_places_pivot() {
        let mut ds = Dataset::replace(vec![5, 3, 8, 1, 9, 2]).unwrap();
        let p = partition(&mut ds, 0, 5);
        assert_eq!(p, 1);
        assert_eq!(ds.values(), &[1, 2, 8, 5, 9, 3]);
    }

    #[test]
    fn right_range_is_on_top_after_first_step() {
        let mut ds = Dataset::replace(vec![5, 3, 8, 1, 9, 2]).unwrap();
        let mut gen = QuickSort::new(&ds);
        assert_eq!(gen.pending(), &[SubRange { low: 0, high: 5 }]);
        gen.resume(&mut ds);
        // Left [0, 0] is a single element and is never pushed.
        assert_eq!(gen.pending(), &[SubRange { low: 2, high: 5 }]);
    }

    #[test]
    fn single_element_takes_one_step() {
        let mut ds = Dataset::replace(vec![42]).unwrap();
        let mut gen = QuickSort::new(&ds);
        assert!(!gen.resume(&mut ds).is_done());
        assert!(gen.resume(&mut ds).is_done());
        assert_eq!(gen.steps(), 1);
    }
}
