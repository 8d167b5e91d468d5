use thiserror::Error;

use crate::SHR_FILE_SIZE;

/// Errors raised while splitting an SHR file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input is not exactly [`SHR_FILE_SIZE`] bytes long.
    #[error(
        "invalid Super Hi-Res image size: {actual} bytes (expected exactly {expected})",
        expected = SHR_FILE_SIZE
    )]
    TruncatedOrOversized { actual: usize },
}

impl FormatError {
    /// True when the input was shorter than a full screen.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        match self {
            Self::TruncatedOrOversized { actual } => *actual < SHR_FILE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_expected_size() {
        let err = FormatError::TruncatedOrOversized { actual: 100 };
        let msg = err.to_string();
        assert!(msg.contains("32768"), "{msg}");
        assert!(msg.contains("100 bytes"), "{msg}");
    }

    #[test]
    fn truncated_vs_oversized() {
        assert!(FormatError::TruncatedOrOversized { actual: 0 }.is_truncated());
        assert!(!FormatError::TruncatedOrOversized { actual: 40_000 }.is_truncated());
    }
}
