//! Decimath is a library of elementary and special functions over arbitrary-precision decimal numbers.
//!
//! Functions are evaluated by a [`Context`], which holds the number of significant digits,
//! the rounding mode, the angle unit of the trigonometric functions, and a cache of constants.
//! Results are rounded to the digits of the context with its rounding mode.
//!
//! The primitive decimal arithmetic is provided by a [`Kernel`]. The crate binds the kernel to
//! libdecNumber through the `dec` crate, see [`DecContext`].
//!
//! Functions never fail: arguments outside of the domain give NaN, poles give infinity,
//! and overflow or underflow give infinity or zero. The kernel status flags record what happened.
//!
//! ## Examples
//!
//! ```
//! use decimath::AngleUnit;
//! use decimath::DecContext;
//!
//! let mut cx = DecContext::new();
//! cx.digits(40);
//!
//! let two = cx.from_i64(2);
//! let r = cx.sqrt(&two);
//! assert_eq!(r.to_string(), "1.414213562373095048801688724209698078570");
//!
//! cx.digits(20).angle_unit(AngleUnit::Degrees);
//! let x = cx.parse("30").unwrap();
//! let half = cx.parse("0.5").unwrap();
//! assert_eq!(cx.sin(&x), half);
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::wrong_self_convention)]

mod common;
mod ctx;
mod defs;
mod num;
mod ops;

pub use crate::ctx::Context;
pub use crate::ctx::Settings;
pub use crate::defs::AngleUnit;
pub use crate::defs::Error;
pub use crate::defs::Family;
pub use crate::defs::RoundingMode;
pub use crate::defs::Status;
pub use crate::num::Kernel;
pub use crate::num::Value;

pub use crate::defs::DEFAULT_DIGITS;
pub use crate::defs::EMAX;
pub use crate::defs::EMIN;
pub use crate::defs::MAX_DIGITS;
pub use crate::defs::MAX_ITER;

/// Decimal number of the libdecNumber kernel, 300 digits of storage.
pub type HDecimal = dec::Decimal<100>;

/// Context over the libdecNumber kernel.
pub type DecContext = Context<dec::Context<HDecimal>>;
