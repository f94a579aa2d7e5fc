use crate::algorithm::observer::StepObserver;
use crate::io::error::Result;
use crate::model::ArrayModel;

/// Recursive quicksort over Lomuto partitions
///
/// # Errors
///
/// Propagates the first error returned by `observer`
pub fn quick_sort<O>(array: &mut ArrayModel, observer: &mut O) -> Result<()>
where
    O: StepObserver + ?Sized,
{
    match array.len() {
        0 | 1 => Ok(()),
        len => sort_range(array, 0, len - 1, observer),
    }
}

fn sort_range<O>(array: &mut ArrayModel, low: usize, high: usize, observer: &mut O) -> Result<()>
where
    O: StepObserver + ?Sized,
{
    if low < high {
        let pivot_index = partition(array, low, high, observer)?;
        if pivot_index > low {
            sort_range(array, low, pivot_index - 1, observer)?;
        }
        sort_range(array, pivot_index + 1, high, observer)?;
    }
    Ok(())
}

/// Lomuto partition of `[low, high]` around the last element
///
/// Emits a step after every swap in the scan (including swaps of an element
/// with itself) and one after moving the pivot into place. Returns the
/// pivot's final index.
///
/// # Errors
///
/// Propagates the first error returned by `observer`, or an out-of-bounds
/// error if `high` lies outside the array
pub fn partition<O>(array: &mut ArrayModel, low: usize, high: usize, observer: &mut O) -> Result<usize>
where
    O: StepObserver + ?Sized,
{
    let pivot = array.read(high)?;
    let mut store = low;

    for j in low..high {
        if array.read(j)? < pivot {
            array.swap(store, j)?;
            observer.on_step(array)?;
            store += 1;
        }
    }

    array.swap(store, high)?;
    observer.on_step(array)?;
    Ok(store)
}
