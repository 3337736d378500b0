//! Error types.

use core::fmt;

/// Result type with the `bignum` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by [`Bn`](crate::Bn) operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Malformed textual or binary input.
    Format,
    /// The operation is undefined for its inputs, e.g. a zero modulus or a
    /// negative exponent without a modulus.
    Domain,
    /// The element has no inverse under the given modulus.
    NoInverse,
    /// A negative value was exported as an unsigned magnitude.
    Sign,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "malformed number encoding"),
            Self::Domain => write!(f, "operation undefined for the given operands"),
            Self::NoInverse => write!(f, "no inverse exists under the given modulus"),
            Self::Sign => write!(f, "cannot encode a negative number as a magnitude"),
        }
    }
}

impl std::error::Error for Error {}
