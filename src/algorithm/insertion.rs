use crate::algorithm::observer::StepObserver;
use crate::io::error::Result;
use crate::model::ArrayModel;

/// Grows a sorted prefix by sliding each key left into place
///
/// Every leftward move of a larger element is one step. The key travels with
/// each move (an adjacent swap), so the array stays a permutation at every
/// step. After the key settles a further step is emitted, even when it did not
/// move; already-sorted input therefore still animates one step per key.
///
/// # Errors
///
/// Propagates the first error returned by `observer`
pub fn insertion_sort<O>(array: &mut ArrayModel, observer: &mut O) -> Result<()>
where
    O: StepObserver + ?Sized,
{
    for i in 1..array.len() {
        let key = array.read(i)?;
        let mut j = i;
        while j > 0 && key < array.read(j - 1)? {
            array.swap(j - 1, j)?;
            j -= 1;
            observer.on_step(array)?;
        }
        observer.on_step(array)?;
    }
    Ok(())
}
