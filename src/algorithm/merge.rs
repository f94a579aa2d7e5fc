use crate::algorithm::observer::StepObserver;
use crate::io::error::Result;
use crate::model::ArrayModel;

/// Top-down merge sort writing back into the array in place
///
/// One step is emitted after each merge, never during one, so `N - 1` steps
/// for `N > 0`.
///
/// # Errors
///
/// Propagates the first error returned by `observer`
pub fn merge_sort<O>(array: &mut ArrayModel, observer: &mut O) -> Result<()>
where
    O: StepObserver + ?Sized,
{
    match array.len() {
        0 | 1 => Ok(()),
        len => sort_range(array, 0, len - 1, observer),
    }
}

fn sort_range<O>(array: &mut ArrayModel, left: usize, right: usize, observer: &mut O) -> Result<()>
where
    O: StepObserver + ?Sized,
{
    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(array, left, mid, observer)?;
        sort_range(array, mid + 1, right, observer)?;
        merge(array, left, mid, right)?;
        observer.on_step(array)?;
    }
    Ok(())
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`
///
/// Both runs are copied out first and the result is written back over
/// `[left, right]`. Ties keep the left run's element first.
///
/// # Errors
///
/// Returns an error if the range lies outside the array
pub fn merge(array: &mut ArrayModel, left: usize, mid: usize, right: usize) -> Result<()> {
    let mut left_run = array.copy_range(left, mid)?.into_iter().peekable();
    let mut right_run = array.copy_range(mid + 1, right)?.into_iter().peekable();

    let mut target = left;
    loop {
        let next = match (left_run.peek(), right_run.peek()) {
            (Some(l), Some(r)) if r < l => right_run.next(),
            (Some(_), _) => left_run.next(),
            (None, _) => right_run.next(),
        };
        let Some(value) = next else {
            break;
        };
        array.set(target, value)?;
        target += 1;
    }

    Ok(())
}
