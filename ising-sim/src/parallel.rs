use rayon::prelude::*;

/// Apply `body` to every item, optionally in parallel, collecting results in
/// input order.
///
/// When `sequential` is true the items are processed on the current thread
/// (no rayon overhead, best when the caller already parallelizes at an outer
/// level). Each item is touched by exactly one task.
pub fn par_over<T, U>(
    items: &mut [T],
    sequential: bool,
    body: impl Fn(&mut T) -> U + Send + Sync,
) -> Vec<U>
where
    T: Send,
    U: Send,
{
    if sequential {
        items.iter_mut().map(body).collect()
    } else {
        items.par_iter_mut().map(body).collect()
    }
}
