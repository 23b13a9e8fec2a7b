//! Closed-form approximation via Binet's formula.
//!
//! F(n) = (phi^n - (-phi)^-n) / sqrt(5), with phi = (1 + sqrt(5)) / 2.
//!
//! Evaluated in `f64`, the truncated value equals the exact Fibonacci number
//! up to [`BINET_EXACT_MAX_N`] and drifts above it from there on. Since the
//! `i32` result range ends at [`MAX_EXACT_N`], [`fib_binet`] is exact for
//! every representable value and saturates at `i32::MAX` past it.

use tracing::debug;

use crate::constants::{BINET_EXACT_MAX_N, MAX_EXACT_N};
use crate::error::{check_index, FibError};

/// Raw, untruncated Binet value for index `n`.
pub fn binet_approx(n: i32) -> Result<f64, FibError> {
    let n = check_index(n)?;
    if n > BINET_EXACT_MAX_N {
        debug!(n, limit = BINET_EXACT_MAX_N, "binet past exact limit");
    }

    let sqrt5 = 5f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    let n = f64::from(n);
    Ok((phi.powf(n) - (-phi).powf(-n)) / sqrt5)
}

/// Approximate F(n) with Binet's formula, truncated toward zero.
///
/// Exact for `n <= MAX_EXACT_N`; saturates at `i32::MAX` beyond.
///
/// # Example
/// ```
/// assert_eq!(fibdp_core::fib_binet(10), Ok(55));
/// ```
pub fn fib_binet(n: i32) -> Result<i32, FibError> {
    let value = binet_approx(n)?;
    if n > MAX_EXACT_N {
        debug!(n, "binet result saturated to i32::MAX");
    }
    // Float-to-int `as` truncates toward zero and saturates.
    Ok(value as i32)
}
