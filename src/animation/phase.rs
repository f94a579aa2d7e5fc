//! States of the shuffle, sort and pause cycle

use std::fmt;

/// Where the animation loop currently is
///
/// [`AnimationDriver`](crate::animation::AnimationDriver) moves through
/// `Idle → Shuffling → Sorting → Pausing → Shuffling → …` and only leaves the
/// cycle for `Stopped` when cancelled from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Initial draw before the first cycle
    #[default]
    Idle,
    /// Animated random swaps
    Shuffling,
    /// A sort engine is running
    Sorting,
    /// Fixed rest after a completed sort
    Pausing,
    /// Cancelled; no further mutation happens
    Stopped,
}

impl Phase {
    /// Whether a sort is in progress
    pub const fn is_sorting(self) -> bool {
        matches!(self, Self::Sorting)
    }

    /// Whether renderers should show the transient shuffling label
    pub const fn shows_shuffle_label(self) -> bool {
        matches!(self, Self::Shuffling)
    }

    /// Lowercase name for status lines
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Shuffling => "shuffling",
            Self::Sorting => "sorting",
            Self::Pausing => "pausing",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
