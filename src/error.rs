//! Crate-wide error type

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Dividing a `BigInt` by zero.
    DivisionByZero,
    /// Converting a `BigInt` to a native integer that cannot hold it.
    DoesNotFit,
    /// `gcd(value, modulus) != 1`, so no multiplicative inverse exists.
    NoModularInverse,
    /// Point-addition inputs with equal x that are neither equal nor negations.
    InvalidPointPair,
    /// Coordinates that do not satisfy the curve equation.
    PointNotOnCurve,
    /// Curve parameters with a vanishing discriminant.
    SingularCurve,
    /// Malformed domain parameters or an out-of-range scalar.
    InvalidParameter(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::DoesNotFit => write!(f, "value does not fit in the native integer range"),
            Error::NoModularInverse => write!(f, "no modular inverse exists"),
            Error::InvalidPointPair => write!(f, "points do not form a valid addition pair"),
            Error::PointNotOnCurve => write!(f, "point is not on the curve"),
            Error::SingularCurve => write!(f, "curve is singular (discriminant is zero)"),
            Error::InvalidParameter(s) => write!(f, "invalid parameter: {}", s),
        }
    }
}

impl std::error::Error for Error {}
