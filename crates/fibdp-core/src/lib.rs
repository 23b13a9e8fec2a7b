//! # fibdp-core
//!
//! Four independent ways to compute the n-th Fibonacci number over `i32`:
//! memoized recursion, bottom-up tabulation, constant-space iteration and
//! Binet's closed-form approximation.
//!
//! Every strategy rejects a negative index with [`FibError::InvalidArgument`]
//! before doing any work. The exact strategies agree for every `n >= 0`,
//! wrapping in two's complement past F(46); see [`constants`] for the
//! precision limits of the closed form.

pub mod binet;
pub mod bottom_up;
pub mod constants;
pub mod error;
pub mod memo;
pub mod method;
pub mod optimized;

// Re-exports
pub use binet::{binet_approx, fib_binet};
pub use bottom_up::fib_bottom_up;
pub use constants::{BINET_EXACT_MAX_N, FIB_TABLE, MAX_EXACT_N};
pub use error::FibError;
pub use memo::{cache_snapshot, cached_len, fib_memo};
pub use method::Method;
pub use optimized::fib_optimized;
