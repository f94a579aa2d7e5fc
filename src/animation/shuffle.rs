use crate::algorithm::StepObserver;
use crate::io::error::Result;
use crate::model::ArrayModel;
use rand::Rng;

/// Shuffle the array so the mixing is visible
///
/// A uniform permutation is applied in one move, followed by one random swap
/// per position, each of which is reported as a step.
///
/// # Errors
///
/// Propagates the first error returned by `observer`
pub fn animate_shuffle<R, O>(array: &mut ArrayModel, rng: &mut R, observer: &mut O) -> Result<()>
where
    R: Rng + ?Sized,
    O: StepObserver + ?Sized,
{
    array.shuffle(rng);
    let len = array.len();
    for i in 0..len {
        let j = rng.random_range(0..len);
        array.swap(i, j)?;
        observer.on_step(array)?;
    }
    Ok(())
}
