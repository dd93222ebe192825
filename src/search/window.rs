/// Caller-contract violation for a bounded search window.
///
/// A non-empty window `[left, right]` must lie entirely inside the sequence
/// (`right < length`). Violations surface as this error instead of being
/// clamped, so the caller's indexing bug is visible at the call site. An
/// empty window (`left > right`) is not an error; it is an ordinary
/// not-found result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// The right bound points past the end of the sequence.
    OutOfBounds { right: usize, length: usize },
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { right, length } => {
                write!(
                    f,
                    "search window right bound {right} exceeds sequence length {length}"
                )
            }
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_bounds() {
        let err = WindowError::OutOfBounds {
            right: 9,
            length: 5,
        };
        let rendered = err.to_string();
        assert!(rendered.contains('9'));
        assert!(rendered.contains('5'));
    }
}
