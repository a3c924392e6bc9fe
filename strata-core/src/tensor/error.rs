/// Represents a number of different errors that can occur from creating tensors,
/// configuring layers, or launching tensor operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Device is out of memory
    OutOfMemory,
    /// Not enough elements were provided when creating a tensor
    WrongNumElements,
    /// An index or copy range does not fit inside a buffer or dimension.
    OutOfBounds { index: usize, len: usize },
    /// A layer or operator was configured with something it does not support,
    /// or used before it was configured.
    InvalidConfiguration(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "InvalidConfiguration: {msg}"),
            Self::OutOfBounds { index, len } => {
                write!(f, "OutOfBounds: index {index} is out of bounds for length {len}")
            }
            _ => write!(f, "{self:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
