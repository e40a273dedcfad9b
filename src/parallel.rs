//! Rayon helpers that fall back to sequential execution on request.
//!
//! Results are always collected in input order, so switching modes never
//! changes the output.

use rayon::prelude::*;

/// Maps a slice and collects the results, in parallel when `parallel` is set.
pub(crate) fn parallel_collect<T, F, R>(source: &[T], parallel: bool, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    if parallel {
        source.par_iter().map(map_op).collect()
    } else {
        source.iter().map(map_op).collect()
    }
}

/// Consumes a vector, maps it and collects the results, in parallel when
/// `parallel` is set.
pub(crate) fn parallel_into_collect<T, F, R>(source: Vec<T>, parallel: bool, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(T) -> R + Sync + Send,
    R: Send,
{
    if parallel {
        source.into_par_iter().map(map_op).collect()
    } else {
        source.into_iter().map(map_op).collect()
    }
}

/// Runs two closures, potentially in parallel.
pub(crate) fn join<A, B, RA, RB>(parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if parallel {
        rayon::join(a, b)
    } else {
        (a(), b())
    }
}
