//! Constants for result ranges, precision limits and recursion tuning.

/// Largest index whose Fibonacci number fits in an `i32`.
/// F(46) = 1836311903, F(47) = 2971215073 overflows `i32::MAX`.
pub const MAX_EXACT_N: i32 = 46;

/// Largest index for which Binet's formula in `f64`, truncated toward zero,
/// still yields the exact Fibonacci number. From n = 72 on the rounding error
/// of `powf` exceeds one unit.
pub const BINET_EXACT_MAX_N: u32 = 71;

/// Number of indices the memoized variant fills per warm-up step.
/// Bounds the recursion depth of a single call regardless of `n`.
pub const MEMO_RECURSION_STRIDE: u32 = 1024;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_endpoints() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[MAX_FIB_U64 as usize], 12_200_160_415_121_876_738);
    }

    #[test]
    fn max_exact_n_is_i32_boundary() {
        let last = FIB_TABLE[MAX_EXACT_N as usize];
        let next = FIB_TABLE[MAX_EXACT_N as usize + 1];
        assert!(i32::try_from(last).is_ok());
        assert!(i32::try_from(next).is_err());
    }
}
