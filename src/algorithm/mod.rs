//! Instrumented sort engines that report every observable mutation

use crate::io::error::Result;
use crate::model::ArrayModel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Adjacent compare-and-swap sorting
pub mod bubble;
/// Sorted-prefix insertion by leftward shifts
pub mod insertion;
/// Top-down merge sort with in-place write-back
pub mod merge;
/// Step notification capability shared by all engines
pub mod observer;
/// Quicksort with Lomuto partitioning
pub mod quick;

pub use observer::{StepCounter, StepObserver};

/// Sorting algorithm driven by the animation loop
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum SortType {
    /// Bubble sort
    #[default]
    Bubble,
    /// Merge sort
    Merge,
    /// Insertion sort
    Insertion,
    /// Quick sort
    Quick,
}

impl SortType {
    /// Every supported algorithm
    pub const ALL: [Self; 4] = [Self::Bubble, Self::Merge, Self::Insertion, Self::Quick];

    /// Human-readable name, matching the persisted settings value
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble",
            Self::Merge => "Merge",
            Self::Insertion => "Insertion",
            Self::Quick => "Quick",
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sort `array` in ascending order with the selected engine
///
/// # Errors
///
/// Propagates the first error returned by `observer`
pub fn run_sort<O>(sort_type: SortType, array: &mut ArrayModel, observer: &mut O) -> Result<()>
where
    O: StepObserver + ?Sized,
{
    match sort_type {
        SortType::Bubble => bubble::bubble_sort(array, observer),
        SortType::Merge => merge::merge_sort(array, observer),
        SortType::Insertion => insertion::insertion_sort(array, observer),
        SortType::Quick => quick::quick_sort(array, observer),
    }
}
