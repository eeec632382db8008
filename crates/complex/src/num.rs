//! [`num_traits`] and [`std::iter`] integration.
use std::iter::{Product, Sum};

use num_traits::{One, Zero};

use crate::Complex;

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    /// True if both components are zero (either sign).
    #[inline]
    fn is_zero(&self) -> bool {
        self.re() == 0.0 && self.im() == 0.0
    }

    #[inline]
    fn set_zero(&mut self) {
        self.set(0.0, 0.0);
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl Sum for Complex {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::ZERO, |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Complex>,
    {
        iter.copied().sum()
    }
}

impl Product for Complex {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::ONE, |acc, c| acc * c)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Complex>,
    {
        iter.copied().product()
    }
}
