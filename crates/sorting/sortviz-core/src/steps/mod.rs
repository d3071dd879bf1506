//! Resumable sort generators.
//!
//! A generator keeps its own cursors and mutates the [`Dataset`] passed to each
//! [`StepGenerator::resume`] call. It returns after every visualizable step, so
//! the caller decides when (and whether) the sort continues. Dropping a
//! generator abandons the sort; there is no other cancellation path.
//!
//! Resuming after [`StepResult::Done`] is a caller bug. The generators here
//! answer `Done` again instead of panicking.

mod bubble;
mod insertion;
mod quick;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::highlight::Highlight;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use quick::{QuickSort, SubRange};

/// Outcome of one resume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// One step was performed; more may remain.
    Continue(Highlight),
    /// No work left. Nothing was mutated by this call.
    Done,
}

impl StepResult {
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, StepResult::Done)
    }
}

pub trait StepGenerator: std::fmt::Debug {
    /// Perform at most one visualizable step on `data`.
    ///
    /// `data` must be the dataset the generator was created over; its length
    /// must not change between calls.
    fn resume(&mut self, data: &mut Dataset) -> StepResult;

    /// Steps yielded so far.
    fn steps(&self) -> usize;

    /// Run to completion, returning the total number of steps yielded.
    fn drain(&mut self, data: &mut Dataset) -> usize {
        while !self.resume(data).is_done() {}
        self.steps()
    }
}

/// User-selectable algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Quick];

    /// Title text shown by the render surface.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Fresh generator over the current contents of `data`.
    pub fn generator(self, data: &Dataset) -> Box<dyn StepGenerator> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort::new(data)),
            Algorithm::Insertion => Box::new(InsertionSort::new(data)),
            Algorithm::Quick => Box::new(QuickSort::new(data)),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
