use thiserror::Error;

/// Error raised by a stack query or persistent update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack is empty")]
    Empty,

    #[error("requested {requested} elements from a stack of size {available}")]
    InsufficientElements { requested: usize, available: usize },

    #[error("index {index} out of bounds for stack of size {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Error raised while encoding or decoding the serialized form of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("header needs {expected} bytes, got {actual}")]
    ShortHeader { expected: usize, actual: usize },

    #[error("unsupported serialization version {0}")]
    UnsupportedVersion(i64),

    #[error("negative element count {0}")]
    NegativeCount(i32),

    #[error("payload needs {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("{0} unexpected bytes after payload")]
    TrailingBytes(usize),

    #[error("{0} elements do not fit the 32-bit count field")]
    TooManyElements(usize),
}
