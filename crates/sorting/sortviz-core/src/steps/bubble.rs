//! Adjacent-exchange sort. Only swaps yield; clean comparisons are silent, so
//! the step count equals the number of inversions resolved.

use crate::dataset::Dataset;
use crate::highlight::Highlight;
use crate::steps::{StepGenerator, StepResult};

#[derive(Debug)]
pub struct BubbleSort {
    len: usize,
    /// Completed outer passes; the last `pass` elements are settled.
    pass: usize,
    /// Next left index to compare within the current pass.
    j: usize,
    steps: usize,
}

impl BubbleSort {
    pub fn new(data: &Dataset) -> Self {
        Self {
            len: data.len(),
            pass: 0,
            j: 0,
            steps: 0,
        }
    }
}

impl StepGenerator for BubbleSort {
    fn resume(&mut self, data: &mut Dataset) -> StepResult {
        let passes = self.len.saturating_sub(1);
        while self.pass < passes {
            let inner = self.len - self.pass - 1;
            while self.j < inner {
                let j = self.j;
                self.j += 1;
                if data.at(j) > data.at(j + 1) {
                    data.swap(j, j + 1);
                    self.steps += 1;
                    return StepResult::Continue(Highlight::pair(j, j + 1));
                }
            }
            self.pass += 1;
            self.j = 0;
        }
        StepResult::Done
    }

    fn steps(&self) -> usize {
        self.steps
    }
}
