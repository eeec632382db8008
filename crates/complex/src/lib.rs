#![deny(clippy::suspicious, clippy::complexity, clippy::perf, clippy::style)]
#![deny(missing_docs)]
//! A [`Complex`] number value type, with real and imaginary [`f64`] components.
//!
//! Supports:
//!
//! - arithmetic with other [`Complex`] values and with any primitive scalar, with the scalar
//!   on either side (`c + 2`, `2.0 - c`, `c * 3u8`),
//! - division by a scalar (there is intentionally no `Complex / Complex`),
//! - compound assignment (`+=`, `-=`, `*=`, `/=`),
//! - the magnitude via [`Complex::abs`], and the explicit scalar projection
//!   [`Complex::into_magnitude`],
//! - text output (`3+4i`) through [`std::fmt::Display`], and text input in the whitespace
//!   separated stream form (`3 4 i`) through [`std::str::FromStr`] and [`ComplexReader`],
//! - [`serde`] support, and [`num_traits::Zero`]/[`num_traits::One`].
//!
//! Floating point anomalies are never trapped: dividing by zero or overflowing the magnitude
//! yields infinities or NaN, exactly like plain [`f64`] math.
//!
//! ```
//! use complex::Complex;
//!
//! let a = Complex::new(3.0, 4.0);
//!
//! assert_eq!(a.abs(), 5.0);
//! assert_eq!(a * Complex::new(1.0, 2.0), Complex::new(-5.0, 10.0));
//! assert_eq!(5.0_f64 - Complex::new(2.0, 3.0), Complex::new(3.0, -3.0));
//! assert_eq!(a.to_string(), "3+4i");
//! assert_eq!("3 -4 i".parse::<Complex>().unwrap(), Complex::new(3.0, -4.0));
//! ```

mod complex;
mod de;
pub mod error;
mod num;
mod ops;
pub mod read;
mod ser;

pub use crate::complex::Complex;
pub use crate::error::ReadError;
pub use crate::read::{ComplexReader, read_complex};
