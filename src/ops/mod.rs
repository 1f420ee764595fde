//! Elementary and special functions.

mod acos;
mod acosh;
mod asin;
mod asinh;
mod atan;
mod atanh;
mod cbrt;
pub(crate) mod consts;
mod cos;
mod cosh;
mod erf;
mod gamma;
mod ln;
mod log;
mod other;
mod pow;
mod series;
mod sin;
mod sinh;
mod sqrt;
mod tan;
mod tanh;
mod trig;
mod util;
