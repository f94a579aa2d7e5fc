use crate::algorithm::observer::StepObserver;
use crate::io::error::Result;
use crate::model::ArrayModel;

/// Adjacent compare-and-swap passes, shrinking from the right
///
/// Emits a step after every swap and a final step once the array is sorted.
/// Comparisons that leave the array unchanged emit nothing.
///
/// # Errors
///
/// Propagates the first error returned by `observer`
pub fn bubble_sort<O>(array: &mut ArrayModel, observer: &mut O) -> Result<()>
where
    O: StepObserver + ?Sized,
{
    let len = array.len();
    if len < 2 {
        return Ok(());
    }

    for pass in 0..len {
        for j in 0..len - pass - 1 {
            if array.read(j)? > array.read(j + 1)? {
                array.swap(j, j + 1)?;
                observer.on_step(array)?;
            }
        }
    }

    observer.on_step(array)
}
