//! The sequence being sorted plus the bounds used for layout scaling.
//!
//! Bounds are recomputed only when the values are replaced wholesale. Step
//! generators permute elements through the crate-private `swap`/`set`
//! primitives, which never change the multiset and so never move the bounds.

use rand::Rng;
use serde::Serialize;

use crate::error::DatasetError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dataset {
    values: Vec<i64>,
    min: i64,
    max: i64,
}

impl Dataset {
    /// Generate `n` independent uniform integers in `[min_val, max_val]`.
    pub fn load<R: Rng>(
        rng: &mut R,
        n: usize,
        min_val: i64,
        max_val: i64,
    ) -> Result<Self, DatasetError> {
        Self::check_range(n, min_val, max_val)?;
        let values = (0..n).map(|_| rng.gen_range(min_val..=max_val)).collect();
        Self::replace(values)
    }

    /// Reject an empty length or an inverted value range.
    pub fn check_range(n: usize, min_val: i64, max_val: i64) -> Result<(), DatasetError> {
        if n == 0 || min_val > max_val {
            return Err(DatasetError::InvalidRange {
                n,
                min: min_val,
                max: max_val,
            });
        }
        Ok(())
    }

    /// Wrap externally supplied values, recomputing bounds.
    pub fn replace(values: Vec<i64>) -> Result<Self, DatasetError> {
        let (min, max) = bounds(&values).ok_or(DatasetError::Empty)?;
        Ok(Self { values, min, max })
    }

    #[inline]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    #[inline]
    pub(crate) fn set(&mut self, index: usize, value: i64) {
        self.values[index] = value;
    }

    /// Unchecked read for generators that already bounded their cursors.
    #[inline]
    pub(crate) fn at(&self, index: usize) -> i64 {
        self.values[index]
    }
}

fn bounds(values: &[i64]) -> Option<(i64, i64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
