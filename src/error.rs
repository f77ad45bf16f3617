use thiserror::Error;

/// Errors returned when configuring a sponge or addressing the state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Rate and capacity do not add up to the Keccak-f[1600] width.
    #[error("rate ({rate}) + capacity ({capacity}) must equal the state width of 1600 bits")]
    InvalidWidth { rate: usize, capacity: usize },

    /// The rate cannot be processed by the byte-oriented sponge.
    #[error("rate of {0} bits is not a positive multiple of 8")]
    InvalidRate(usize),

    /// No SHA-3 preset exists for this digest size.
    #[error("unknown digest variant: {0} bits")]
    UnknownVariant(usize),

    /// No SHA-3 preset matches this name.
    #[error("unknown digest variant name: {0:?}")]
    UnknownVariantName(String),

    /// A coordinate outside the 5x5x64 state cube.
    #[error("coordinate ({x}, {y}, {z}) lies outside the 5x5x64 state")]
    OutOfBounds { x: usize, y: usize, z: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
