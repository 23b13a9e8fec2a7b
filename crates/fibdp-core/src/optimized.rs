//! Constant-space iteration with two rolling accumulators.

use crate::error::{check_index, FibError};

/// Compute F(n) keeping only the last two values.
///
/// # Example
/// ```
/// assert_eq!(fibdp_core::fib_optimized(10), Ok(55));
/// ```
pub fn fib_optimized(n: i32) -> Result<i32, FibError> {
    let n = check_index(n)?;
    if n == 0 {
        return Ok(0);
    }

    let mut prev: i32 = 0;
    let mut res: i32 = 1;
    for _ in 2..=n {
        let next = prev.wrapping_add(res);
        prev = std::mem::replace(&mut res, next);
    }

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIB_TABLE, MAX_EXACT_N};

    #[test]
    fn small_values() {
        assert_eq!(fib_optimized(0), Ok(0));
        assert_eq!(fib_optimized(1), Ok(1));
        assert_eq!(fib_optimized(2), Ok(1));
        assert_eq!(fib_optimized(10), Ok(55));
        assert_eq!(fib_optimized(20), Ok(6765));
    }

    #[test]
    fn matches_table_in_range() {
        for n in 0..=MAX_EXACT_N {
            assert_eq!(fib_optimized(n).unwrap() as u64, FIB_TABLE[n as usize]);
        }
    }

    #[test]
    fn negative_input_rejected() {
        assert_eq!(fib_optimized(-1), Err(FibError::InvalidArgument(-1)));
    }
}
