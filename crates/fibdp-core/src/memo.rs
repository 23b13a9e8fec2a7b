//! Top-down memoized recursion over a process-wide cache.
//!
//! The cache is private to this module. It is append-only: an index, once
//! inserted, keeps its value for the lifetime of the process. Only indices
//! `>= 2` are stored; F(0) and F(1) are answered by definition.
//!
//! The mutex is never held across a recursive call, so concurrent callers
//! cannot deadlock. Two threads racing on the same missing index may both
//! compute it; the first insertion wins and the second caller reads it back.

use std::collections::BTreeMap;

use parking_lot::{const_mutex, Mutex};
use tracing::{debug, trace};

use crate::constants::MEMO_RECURSION_STRIDE;
use crate::error::{check_index, FibError};

static CACHE: Mutex<BTreeMap<u32, i32>> = const_mutex(BTreeMap::new());

/// Compute F(n) by memoized recursion.
///
/// The first call for a given `n` inserts every missing index in `2..=n`;
/// later calls are a single lookup. Values past F(46) wrap around in
/// two's complement, exactly like [`crate::fib_bottom_up`] and
/// [`crate::fib_optimized`].
///
/// # Example
/// ```
/// assert_eq!(fibdp_core::fib_memo(10), Ok(55));
/// assert!(fibdp_core::fib_memo(-1).is_err());
/// ```
pub fn fib_memo(n: i32) -> Result<i32, FibError> {
    let n = check_index(n)?;
    let before = cached_len();

    // Fill the cache in bounded strides so the final call recurses at most
    // MEMO_RECURSION_STRIDE frames deep.
    let mut k = MEMO_RECURSION_STRIDE;
    while k < n {
        memo(k);
        k += MEMO_RECURSION_STRIDE;
    }
    let value = memo(n);

    let inserted = cached_len().saturating_sub(before);
    if inserted > 0 {
        debug!(n, inserted, "memo cache extended");
    }
    Ok(value)
}

fn memo(n: u32) -> i32 {
    let cached = CACHE.lock().get(&n).copied();
    if let Some(value) = cached {
        trace!(n, "memo cache hit");
        return value;
    }
    if n <= 1 {
        return n as i32;
    }

    let value = memo(n - 1).wrapping_add(memo(n - 2));
    *CACHE.lock().entry(n).or_insert(value)
}

/// Return a copy of the memo cache, keyed by index.
///
/// Mutating the returned map has no effect on later [`fib_memo`] calls.
pub fn cache_snapshot() -> BTreeMap<u32, i32> {
    CACHE.lock().clone()
}

/// Number of indices currently memoized.
pub fn cached_len() -> usize {
    CACHE.lock().len()
}
