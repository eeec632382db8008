//! The [`Complex`] value type, its constructors and text output.
use std::fmt;
use std::io;

/// A complex number, with a real and imaginary [`f64`] component.
///
/// Equality is structural and follows [`f64`] semantics, so a value with a `NaN` component is
/// never equal to anything (itself included). There is no ordering.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `1 + 0i`
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// The imaginary unit, `0 + 1i`.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Assembles a [`Complex`] from its real and imaginary parts.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Builds a purely real [`Complex`], with a zero imaginary part.
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Returns the real part.
    #[inline]
    pub const fn re(&self) -> f64 {
        self.re
    }

    /// Returns the imaginary part.
    #[inline]
    pub const fn im(&self) -> f64 {
        self.im
    }

    /// Returns the real and imaginary parts as a pair.
    #[inline]
    pub const fn as_parts(&self) -> (f64, f64) {
        (self.re, self.im)
    }

    /// Overwrites both components. No checks are performed, `NaN` and infinities are stored
    /// as given.
    #[inline]
    pub fn set(&mut self, re: f64, im: f64) {
        self.re = re;
        self.im = im;
    }

    /// Replaces `self` with a purely real value, discarding the current imaginary part even
    /// if it was nonzero. Equivalent to `*self = Complex::from(scalar)`.
    #[inline]
    pub fn assign_real(&mut self, scalar: f64) -> &mut Self {
        *self = Self::from_real(scalar);
        self
    }

    /// `re² + im²`
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// The magnitude, `sqrt(re² + im²)`.
    ///
    /// This is the direct formula, so squaring very large components can overflow to
    /// infinity even when the true magnitude is representable. See [`Complex::hypot`] for
    /// the overflow-safe version. A `NaN` in either component gives a `NaN` magnitude.
    #[inline]
    pub fn abs(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// The magnitude computed with [`f64::hypot`], which avoids the intermediate overflow
    /// and underflow of [`Complex::abs`] at the cost of speed.
    #[inline]
    pub fn hypot(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Projects this value down to a scalar, its magnitude. The phase is lost.
    ///
    /// Identical to [`Complex::abs`]. There is deliberately no `From<Complex> for f64`, so
    /// this lossy conversion is always spelled out.
    #[inline]
    pub fn into_magnitude(self) -> f64 {
        self.abs()
    }

    /// Writes the same text as the [`fmt::Display`] impl to a byte stream.
    pub fn write_to<W>(&self, mut writer: W) -> io::Result<()>
    where
        W: io::Write,
    {
        write!(writer, "{self}")
    }
}

impl fmt::Display for Complex {
    /// Formats as `<re><sign><im>i`. The sign is a '+' unless the imaginary part is negative,
    /// in which case the '-' of the imaginary part itself is used (`3+4i`, `3-4i`, `3+0i`).
    ///
    /// A precision, if given (`{:.2}`), applies to both components.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im < 0.0 { "" } else { "+" };

        match formatter.precision() {
            Some(prec) => write!(formatter, "{:.prec$}{sign}{:.prec$}i", self.re, self.im),
            None => write!(formatter, "{}{sign}{}i", self.re, self.im),
        }
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(c: Complex) -> Self {
        c.as_parts()
    }
}

macro_rules! impl_from_scalar {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl From<$scalar> for Complex {
                #[inline]
                fn from(scalar: $scalar) -> Self {
                    Self::from_real(scalar as f64)
                }
            }
        )*
    };
}

impl_from_scalar!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

#[cfg(any(test, feature = "rand"))]
mod complex_rand_impls {
    use rand::Rng;
    use rand::distr::{Distribution, StandardUniform};

    use super::Complex;

    /// Samples both components uniformly from `[-1, 1)`.
    impl Distribution<Complex> for StandardUniform {
        fn sample<R>(&self, rng: &mut R) -> Complex
        where
            R: Rng + ?Sized,
        {
            Complex::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
        }
    }

    impl Complex {
        /// Identical to calling [`rand::random::<Complex>`]. Use [`Complex::random_from`] to
        /// generate one from an existing [`rand::Rng`].
        pub fn random() -> Self {
            rand::random()
        }

        /// Generates a random [`Complex`] from an existing source of [`rand::Rng`].
        pub fn random_from<R>(rng: &mut R) -> Self
        where
            R: Rng,
        {
            rng.random()
        }
    }
}
