//! The permutation being shuffled and sorted
//!
//! Every mutation is applied directly to the backing vector so readers see it
//! as soon as the mutating call returns. Between step events the values always
//! form a permutation of `1..=N`; a positional write may transiently duplicate
//! a value, which is why sort engines only notify observers after a write run
//! has been completed.

use crate::io::error::{Result, VisualizerError, out_of_bounds};
use rand::Rng;
use rand::seq::SliceRandom;

/// Mutable sequence of the values `1..=N`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayModel {
    values: Vec<u32>,
    swaps: usize,
    writes: usize,
}

impl ArrayModel {
    /// Create the sorted sequence `1..=len`
    ///
    /// # Errors
    ///
    /// Returns an error if `len` does not fit the value type
    pub fn sorted(len: usize) -> Result<Self> {
        let top = u32::try_from(len).map_err(|_overflow| VisualizerError::InvalidValues {
            reason: format!("{len} values exceed the supported range"),
        })?;
        Ok(Self {
            values: (1..=top).collect(),
            swaps: 0,
            writes: 0,
        })
    }

    /// Wrap explicit values after checking they form a permutation of `1..=N`
    ///
    /// # Errors
    ///
    /// Returns an error if a value is zero, larger than the length, or repeated
    pub fn from_values(values: Vec<u32>) -> Result<Self> {
        let mut seen = vec![false; values.len()];
        for &value in &values {
            let slot = (value as usize)
                .checked_sub(1)
                .and_then(|index| seen.get_mut(index))
                .ok_or_else(|| VisualizerError::InvalidValues {
                    reason: format!("{value} is outside 1..={}", values.len()),
                })?;
            if *slot {
                return Err(VisualizerError::InvalidValues {
                    reason: format!("{value} appears more than once"),
                });
            }
            *slot = true;
        }

        Ok(Self {
            values,
            swaps: 0,
            writes: 0,
        })
    }

    /// Number of values
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the model holds no values
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, if it exists
    pub fn get(&self, index: usize) -> Option<u32> {
        self.values.get(index).copied()
    }

    /// Read-only view of all values in position order
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Exchange the values at `i` and `j`
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of bounds
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.values.len();
        for index in [i, j] {
            if index >= len {
                return Err(out_of_bounds(index, len));
            }
        }
        self.values.swap(i, j);
        self.swaps += 1;
        Ok(())
    }

    /// Overwrite the value at `index`
    ///
    /// The caller restores the permutation before the next step event.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds
    pub fn set(&mut self, index: usize, value: u32) -> Result<()> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(index, len))?;
        *slot = value;
        self.writes += 1;
        Ok(())
    }

    /// Apply a uniform random permutation in one move
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.values.shuffle(rng);
    }

    /// Whether the values are currently a permutation of `1..=N`
    pub fn is_permutation(&self) -> bool {
        Self::from_values(self.values.clone()).is_ok()
    }

    /// Whether the values are in strictly ascending order
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|pair| pair.first() < pair.get(1))
    }

    /// Swaps performed since the last counter reset
    pub const fn swap_count(&self) -> usize {
        self.swaps
    }

    /// Positional writes performed since the last counter reset
    pub const fn write_count(&self) -> usize {
        self.writes
    }

    /// Zero the swap and write counters
    pub const fn reset_counters(&mut self) {
        self.swaps = 0;
        self.writes = 0;
    }

    pub(crate) fn read(&self, index: usize) -> Result<u32> {
        self.get(index)
            .ok_or_else(|| out_of_bounds(index, self.values.len()))
    }

    pub(crate) fn copy_range(&self, start: usize, end_inclusive: usize) -> Result<Vec<u32>> {
        self.values
            .get(start..=end_inclusive)
            .map(<[u32]>::to_vec)
            .ok_or_else(|| out_of_bounds(end_inclusive, self.values.len()))
    }
}
