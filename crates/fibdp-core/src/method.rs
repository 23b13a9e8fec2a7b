//! Strategy names and dispatch.
//!
//! The four strategies stay independent functions; `Method` only lets
//! callers pick one from configuration data or a command-line string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FibError;

/// One of the Fibonacci strategies provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Top-down recursion over the shared memo cache.
    Memo,
    /// Tabulation into a per-call table.
    BottomUp,
    /// Two rolling accumulators.
    Optimized,
    /// Binet's closed form in `f64`.
    Binet,
}

impl Method {
    /// All strategies, in declaration order.
    pub const ALL: [Method; 4] = [
        Method::Memo,
        Method::BottomUp,
        Method::Optimized,
        Method::Binet,
    ];

    /// Canonical name, as accepted by `FromStr` and serde.
    pub fn name(self) -> &'static str {
        match self {
            Method::Memo => "memo",
            Method::BottomUp => "bottom-up",
            Method::Optimized => "optimized",
            Method::Binet => "binet",
        }
    }

    /// Whether the strategy is exact for every index (modulo `i32` wrapping).
    pub fn is_exact(self) -> bool {
        !matches!(self, Method::Binet)
    }

    /// Compute F(n) with this strategy.
    pub fn compute(self, n: i32) -> Result<i32, FibError> {
        match self {
            Method::Memo => crate::memo::fib_memo(n),
            Method::BottomUp => crate::bottom_up::fib_bottom_up(n),
            Method::Optimized => crate::optimized::fib_optimized(n),
            Method::Binet => crate::binet::fib_binet(n),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memo" | "memoized" => Ok(Method::Memo),
            "bottom-up" | "bottomup" | "tabulation" => Ok(Method::BottomUp),
            "optimized" | "iterative" => Ok(Method::Optimized),
            "binet" | "closed-form" => Ok(Method::Binet),
            _ => Err(FibError::UnknownMethod(s.to_string())),
        }
    }
}
