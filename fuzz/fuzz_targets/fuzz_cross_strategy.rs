#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdp_core::{FibError, Method, MAX_EXACT_N};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // First 4 bytes as a signed n; non-negative values capped at 20000 for speed
    let raw = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let n = if raw < 0 { raw } else { raw % 20_000 };

    let memo = Method::Memo.compute(n);
    let bottom_up = Method::BottomUp.compute(n);
    let optimized = Method::Optimized.compute(n);
    let binet = Method::Binet.compute(n);

    if n < 0 {
        for result in [memo, bottom_up, optimized, binet] {
            assert_eq!(result, Err(FibError::InvalidArgument(n)));
        }
        return;
    }

    assert_eq!(memo, bottom_up, "memo != bottom-up at n={n}");
    assert_eq!(memo, optimized, "memo != optimized at n={n}");
    if n <= MAX_EXACT_N {
        assert_eq!(memo, binet, "memo != binet at n={n}");
    }
});
