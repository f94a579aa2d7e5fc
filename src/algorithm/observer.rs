//! Step notification capability handed to sort engines

use crate::io::error::Result;
use crate::model::ArrayModel;

/// Receives control after every observable mutation of the array
///
/// Engines call [`StepObserver::on_step`] synchronously and do not mutate the
/// array again until it returns. Returning an error aborts the sort at that
/// point, with the array left as a valid permutation.
pub trait StepObserver {
    /// Handle one step event
    ///
    /// # Errors
    ///
    /// Implementations return an error to stop the running algorithm,
    /// typically a render failure or [`crate::VisualizerError::Interrupted`]
    fn on_step(&mut self, array: &ArrayModel) -> Result<()>;
}

impl<F> StepObserver for F
where
    F: FnMut(&ArrayModel) -> Result<()>,
{
    fn on_step(&mut self, array: &ArrayModel) -> Result<()> {
        self(array)
    }
}

/// Observer that only counts step events
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    steps: usize,
}

impl StepCounter {
    /// Create a counter at zero
    pub const fn new() -> Self {
        Self { steps: 0 }
    }

    /// Steps seen so far
    pub const fn steps(&self) -> usize {
        self.steps
    }
}

impl StepObserver for StepCounter {
    fn on_step(&mut self, _array: &ArrayModel) -> Result<()> {
        self.steps += 1;
        Ok(())
    }
}
