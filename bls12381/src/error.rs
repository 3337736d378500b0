//! Error types.

use core::fmt;

/// Result type with the `bls12381` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by group, field and encoding operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Malformed input: wrong length, unknown flag byte or bad digits.
    Format,
    /// The operation is undefined for its inputs.
    Domain,
    /// The element is not invertible.
    NoInverse,
    /// The identity point has no affine coordinates.
    NoAffineCoordinate,
    /// The operands belong to the wrong groups.
    TypeMismatch,
    /// A negative value was exported as an unsigned magnitude.
    Sign,
    /// The decoded value is not a valid group element: a coordinate is out of
    /// range, the point is not on the curve, or the element is outside the
    /// prime order subgroup.
    Validation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "malformed encoding"),
            Self::Domain => write!(f, "operation undefined for the given operands"),
            Self::NoInverse => write!(f, "element is not invertible"),
            Self::NoAffineCoordinate => write!(f, "the identity has no affine coordinates"),
            Self::TypeMismatch => write!(f, "operands belong to the wrong groups"),
            Self::Sign => write!(f, "cannot encode a negative number as a magnitude"),
            Self::Validation => write!(f, "not a valid element of the prime order group"),
        }
    }
}

impl std::error::Error for Error {}

impl From<bignum::Error> for Error {
    fn from(err: bignum::Error) -> Error {
        match err {
            bignum::Error::Format => Error::Format,
            bignum::Error::Domain => Error::Domain,
            bignum::Error::NoInverse => Error::NoInverse,
            bignum::Error::Sign => Error::Sign,
        }
    }
}
