//! Definitions.

use core::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of significant decimal digits of a new context.
pub const DEFAULT_DIGITS: usize = 34;

/// Maximum number of significant decimal digits a caller can request from the arbitrary-precision family.
pub const MAX_DIGITS: usize = 128;

/// Maximum adjusted exponent of the arbitrary-precision family.
pub const EMAX: isize = 999_999;

/// Minimum adjusted exponent of the arbitrary-precision family.
pub const EMIN: isize = -999_999;

/// Iteration cap of the Newton and Taylor loops.
pub const MAX_ITER: usize = 1000;

/// Extra digits carried by internal computations.
pub(crate) const GUARD_DIGITS: usize = 10;

/// Natural logarithm of 2.
pub(crate) const LN2_DIGITS: &str = "0.69314718055994530941723212145817656807550013436025525412068000949339362196969471560586332699641868754200148102057068573368552023575813055703267075163507596193072757082837143519030703862389167347112335011536449795523912047517268157493206515552473413952588295045300709532636664265410423915781495204374043038550080194417064";

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested number of digits is not supported by the kernel.
    InvalidPrecision(usize),

    /// Requested exponent range is not supported by the kernel.
    InvalidExponentRange,

    /// Text does not represent a decimal number.
    Parse,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidPrecision(d) => write!(f, "unsupported number of digits: {}", d),
            Error::InvalidExponentRange => f.write_str("unsupported exponent range"),
            Error::Parse => f.write_str("invalid decimal number"),
        }
    }
}

/// Rounding modes of decimal arithmetic.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round toward positive infinity.
    Ceiling,

    /// Round away from zero.
    Up,

    /// Round half away from zero.
    HalfUp,

    /// Round half to even.
    HalfEven,

    /// Round half toward zero.
    HalfDown,

    /// Round toward zero.
    Down,

    /// Round toward negative infinity.
    Floor,

    /// Round toward zero, unless the last digit is 0 or 5, then away from zero.
    ZeroFiveUp,
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::HalfEven
    }
}

/// Unit of angles taken and returned by the trigonometric functions.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    /// Full circle is 2π.
    #[default]
    Radians,

    /// Full circle is 360.
    Degrees,

    /// Full circle is 400.
    Gradians,
}

impl AngleUnit {
    /// Returns the full circle in units, or `None` for radians.
    pub(crate) fn circle(&self) -> Option<u32> {
        match self {
            AngleUnit::Radians => None,
            AngleUnit::Degrees => Some(360),
            AngleUnit::Gradians => Some(400),
        }
    }
}

/// Precision family of a context.
///
/// The arbitrary-precision family lets the caller choose the number of digits.
/// Fixed families follow the IEEE 754 decimal interchange formats and keep their digits.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Family {
    /// Caller-selected number of digits up to `MAX_DIGITS`.
    #[default]
    Arbitrary,

    /// 7 digits, exponents -95..=96.
    Decimal32,

    /// 16 digits, exponents -383..=384.
    Decimal64,

    /// 34 digits, exponents -6143..=6144.
    Decimal128,
}

impl Family {
    /// Returns the fixed number of digits of the family, or `None` for the arbitrary-precision family.
    pub fn fixed_digits(&self) -> Option<usize> {
        match self {
            Family::Arbitrary => None,
            Family::Decimal32 => Some(7),
            Family::Decimal64 => Some(16),
            Family::Decimal128 => Some(34),
        }
    }

    /// Returns the adjusted exponent range `(emin, emax)` of the family.
    pub fn exponent_range(&self) -> (isize, isize) {
        match self {
            Family::Arbitrary => (EMIN, EMAX),
            Family::Decimal32 => (-95, 96),
            Family::Decimal64 => (-383, 384),
            Family::Decimal128 => (-6143, 6144),
        }
    }
}

/// Sticky status flags raised by the kernel.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
pub struct Status {
    /// The result was rounded and is not exact.
    pub inexact: bool,

    /// The result exceeded the largest exponent.
    pub overflow: bool,

    /// The result was subnormal and inexact.
    pub underflow: bool,

    /// A finite number was divided by zero.
    pub division_by_zero: bool,

    /// The operation has no meaningful result.
    pub invalid_operation: bool,
}

impl Status {
    /// Returns true if no flag is raised.
    pub fn is_clear(&self) -> bool {
        *self == Status::default()
    }
}
