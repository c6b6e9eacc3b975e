use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The version marker does not match [`FORMAT_VERSION`](crate::format::FORMAT_VERSION).
    #[error("format version mismatch: expected {expected}, found {found}")]
    FormatVersionMismatch {
        expected: u64,
        found: u64,
    },

    #[error("truncated input: needed {needed} bytes, {available} available")]
    TruncatedInput {
        needed: usize,
        available: usize,
    },

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CodecError {
    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        Self::TruncatedInput { needed, available }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = CodecError::FormatVersionMismatch { expected: 1, found: 7 };
        assert_eq!(err.to_string(), "format version mismatch: expected 1, found 7");

        let err = CodecError::truncated(16, 3);
        assert_eq!(err.to_string(), "truncated input: needed 16 bytes, 3 available");
    }
}
