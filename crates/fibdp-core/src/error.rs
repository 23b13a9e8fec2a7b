//! Error type shared by every Fibonacci strategy.

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested index was negative.
    #[error("input n must be non-negative, got {0}")]
    InvalidArgument(i32),

    /// A strategy name did not match any known method.
    #[error("unknown method: {0}")]
    UnknownMethod(String),
}

/// Validate `n` and convert it to an unsigned index.
///
/// Every public strategy calls this before touching any state.
pub(crate) fn check_index(n: i32) -> Result<u32, FibError> {
    u32::try_from(n).map_err(|_| FibError::InvalidArgument(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_error_display() {
        let err = FibError::InvalidArgument(-3);
        assert_eq!(err.to_string(), "input n must be non-negative, got -3");

        let err = FibError::UnknownMethod("lucas".into());
        assert_eq!(err.to_string(), "unknown method: lucas");
    }

    #[test]
    fn check_index_accepts_non_negative() {
        assert_eq!(check_index(0), Ok(0));
        assert_eq!(check_index(i32::MAX), Ok(i32::MAX as u32));
    }

    #[test]
    fn check_index_rejects_negative() {
        assert_eq!(check_index(-1), Err(FibError::InvalidArgument(-1)));
        assert_eq!(
            check_index(i32::MIN),
            Err(FibError::InvalidArgument(i32::MIN))
        );
    }
}
