//! The FTCS interior update.
//!
//! ```text
//! next[i] = prev[i] + r * (prev[i+1] - 2*prev[i] + prev[i-1])    for 1 <= i <= n-2
//! ```
//!
//! `next` is computed entirely from `prev`; boundary slots of `next` are left
//! for the caller to set. The sequential and parallel paths evaluate the same
//! expression per point, so their results are bit-identical.

/// Grids with fewer points than this are always stepped sequentially.
///
/// Below it, thread overhead exceeds the gain.
pub const PARALLEL_THRESHOLD: usize = 50_000;

#[inline]
fn stencil(prev: &[f64], i: usize, ratio: f64) -> f64 {
    prev[i] + ratio * (prev[i + 1] - 2.0 * prev[i] + prev[i - 1])
}

/// Computes the interior of `next` from `prev`.
///
/// Uses the parallel path for large grids when the `parallel` feature is
/// enabled.
///
/// # Panics
///
/// Panics if `prev` and `next` differ in length.
pub fn update_interior(prev: &[f64], next: &mut [f64], ratio: f64) {
    #[cfg(feature = "parallel")]
    {
        if prev.len() >= PARALLEL_THRESHOLD {
            update_interior_parallel(prev, next, ratio);
            return;
        }
    }

    update_interior_sequential(prev, next, ratio);
}

/// Computes the interior of `next` from `prev` on the current thread.
///
/// # Panics
///
/// Panics if `prev` and `next` differ in length.
pub fn update_interior_sequential(prev: &[f64], next: &mut [f64], ratio: f64) {
    assert_eq!(prev.len(), next.len(), "fields must be the same length");

    let last = prev.len() - 1;
    for (i, value) in next.iter_mut().enumerate().take(last).skip(1) {
        *value = stencil(prev, i, ratio);
    }
}

/// Computes the interior of `next` from `prev` across the rayon thread pool.
///
/// # Panics
///
/// Panics if `prev` and `next` differ in length.
#[cfg(feature = "parallel")]
pub fn update_interior_parallel(prev: &[f64], next: &mut [f64], ratio: f64) {
    use rayon::prelude::*;

    assert_eq!(prev.len(), next.len(), "fields must be the same length");

    let last = prev.len() - 1;
    next[1..last]
        .par_iter_mut()
        .enumerate()
        .for_each(|(k, value)| *value = stencil(prev, k + 1, ratio));
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn leaves_boundary_slots_untouched() {
        let prev = [100.0, 0.0, 0.0, 0.0, 0.0];
        let mut next = [-1.0; 5];

        update_interior_sequential(&prev, &mut next, 0.32);

        assert_eq!(next[0], -1.0);
        assert_eq!(next[4], -1.0);
    }

    #[test]
    fn reads_only_the_previous_field() {
        // An in-place sweep would let the updated index 1 leak into index 2.
        let prev = [100.0, 0.0, 0.0, 0.0, 0.0];
        let mut next = [0.0; 5];

        update_interior_sequential(&prev, &mut next, 0.32);

        assert_relative_eq!(next[1], 32.0);
        assert_eq!(next[2], 0.0);
        assert_eq!(next[3], 0.0);
    }

    #[test]
    fn linear_field_is_unchanged() {
        let prev = [0.0, 1.0, 2.0, 3.0, 4.0];
        let mut next = prev;

        update_interior(&prev, &mut next, 0.4);

        for (a, b) in prev.iter().zip(next.iter()) {
            assert_relative_eq!(*a, *b);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential_bitwise() {
        #[allow(clippy::cast_precision_loss)]
        let prev: Vec<f64> = (0..1001).map(|i| ((i * 37) % 101) as f64 * 0.73).collect();
        let mut seq = vec![0.0; prev.len()];
        let mut par = vec![0.0; prev.len()];

        update_interior_sequential(&prev, &mut seq, 0.31);
        update_interior_parallel(&prev, &mut par, 0.31);

        let seq_bits: Vec<u64> = seq.iter().map(|v| v.to_bits()).collect();
        let par_bits: Vec<u64> = par.iter().map(|v| v.to_bits()).collect();
        assert_eq!(seq_bits, par_bits);
    }
}
