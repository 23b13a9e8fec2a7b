//! Bottom-up tabulation.

use crate::error::{check_index, FibError};

/// Compute F(n) by filling a fresh table of F(0)..=F(n).
///
/// The table lives only for the duration of the call; nothing is shared
/// between invocations.
pub fn fib_bottom_up(n: i32) -> Result<i32, FibError> {
    let n = check_index(n)? as usize;

    let mut table: Vec<i32> = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let f = if i <= 1 {
            i as i32
        } else {
            table[i - 1].wrapping_add(table[i - 2])
        };
        table.push(f);
    }

    Ok(table[n])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIB_TABLE, MAX_EXACT_N};

    #[test]
    fn small_values() {
        assert_eq!(fib_bottom_up(0), Ok(0));
        assert_eq!(fib_bottom_up(1), Ok(1));
        assert_eq!(fib_bottom_up(2), Ok(1));
        assert_eq!(fib_bottom_up(10), Ok(55));
    }

    #[test]
    fn largest_exact_value() {
        assert_eq!(
            fib_bottom_up(MAX_EXACT_N).unwrap() as u64,
            FIB_TABLE[MAX_EXACT_N as usize]
        );
    }

    #[test]
    fn wraps_past_i32_range() {
        // F(47) = 2971215073 reinterpreted as i32.
        assert_eq!(fib_bottom_up(47), Ok(2_971_215_073u32 as i32));
    }

    #[test]
    fn negative_input_rejected() {
        assert_eq!(fib_bottom_up(-5), Err(FibError::InvalidArgument(-5)));
    }
}
