//! Arithmetic operator impls for [`Complex`].
//!
//! Scalars are any primitive number, widened to [`f64`] with `as`. Scalar impls are generated
//! for both operand orders, except division, which only exists as `Complex / scalar`.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Complex;

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re() + rhs.re(), self.im() + rhs.im())
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.add(rhs);
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re() - rhs.re(), self.im() - rhs.im())
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.sub(rhs);
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = self.as_parts();
        let (c, d) = rhs.as_parts();

        Self::new(a * c - b * d, a * d + b * c)
    }
}

impl MulAssign for Complex {
    // goes through 'mul' on the copied receiver, so the imaginary part is always computed
    // from the old real part.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul(rhs);
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.re(), -self.im())
    }
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Add<$scalar> for Complex {
                type Output = Self;

                #[inline]
                fn add(self, rhs: $scalar) -> Self::Output {
                    Self::new(self.re() + rhs as f64, self.im())
                }
            }

            impl AddAssign<$scalar> for Complex {
                #[inline]
                fn add_assign(&mut self, rhs: $scalar) {
                    *self = self.add(rhs);
                }
            }

            impl Sub<$scalar> for Complex {
                type Output = Self;

                #[inline]
                fn sub(self, rhs: $scalar) -> Self::Output {
                    Self::new(self.re() - rhs as f64, self.im())
                }
            }

            impl SubAssign<$scalar> for Complex {
                #[inline]
                fn sub_assign(&mut self, rhs: $scalar) {
                    *self = self.sub(rhs);
                }
            }

            impl Mul<$scalar> for Complex {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: $scalar) -> Self::Output {
                    let rhs = rhs as f64;
                    Self::new(self.re() * rhs, self.im() * rhs)
                }
            }

            impl MulAssign<$scalar> for Complex {
                #[inline]
                fn mul_assign(&mut self, rhs: $scalar) {
                    *self = self.mul(rhs);
                }
            }

            impl Div<$scalar> for Complex {
                type Output = Self;

                #[inline]
                fn div(self, rhs: $scalar) -> Self::Output {
                    let rhs = rhs as f64;
                    Self::new(self.re() / rhs, self.im() / rhs)
                }
            }

            impl DivAssign<$scalar> for Complex {
                #[inline]
                fn div_assign(&mut self, rhs: $scalar) {
                    *self = self.div(rhs);
                }
            }

            impl Add<Complex> for $scalar {
                type Output = Complex;

                #[inline]
                fn add(self, rhs: Complex) -> Self::Output {
                    Complex::new(self as f64 + rhs.re(), rhs.im())
                }
            }

            // 's - c' negates the imaginary part, unlike 'c - s'.
            impl Sub<Complex> for $scalar {
                type Output = Complex;

                #[inline]
                fn sub(self, rhs: Complex) -> Self::Output {
                    Complex::new(self as f64 - rhs.re(), -rhs.im())
                }
            }

            impl Mul<Complex> for $scalar {
                type Output = Complex;

                #[inline]
                fn mul(self, rhs: Complex) -> Self::Output {
                    let lhs = self as f64;
                    Complex::new(lhs * rhs.re(), lhs * rhs.im())
                }
            }
        )*
    };
}

impl_scalar_ops!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

#[cfg(test)]
mod tests {
    use super::Complex;

    const THRESH: f64 = 1e-9;

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr $(,)?) => {{
            let delta = ($a - $b).abs();
            if !(delta <= THRESH) {
                panic!(
                    concat!(
                        "|",
                        stringify!($a),
                        " - ",
                        stringify!($b),
                        "| > 1e-9 ({} vs {}, delta = {})"
                    ),
                    $a, $b, delta,
                );
            }
        }};
    }

    #[test]
    fn test_complex_ops() {
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, 2.0);

        assert_eq!(a + b, Complex::new(4.0, 6.0));
        assert_eq!(a - b, Complex::new(2.0, 2.0));
        assert_eq!(a * b, Complex::new(-5.0, 10.0));
        assert_eq!(-a, Complex::new(-3.0, -4.0));

        // operands are copies, and left untouched
        assert_eq!(a, Complex::new(3.0, 4.0));
        assert_eq!(b, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_scalar_ops() {
        let c = Complex::new(2.0, 3.0);

        assert_eq!(c + 1.5_f64, Complex::new(3.5, 3.0));
        assert_eq!(c - 1u32, Complex::new(1.0, 3.0));
        assert_eq!(c * 2i8, Complex::new(4.0, 6.0));
        assert_eq!(c / 2.0f32, Complex::new(1.0, 1.5));

        assert_eq!(1.5_f64 + c, Complex::new(3.5, 3.0));
        assert_eq!(5_i32 - c, Complex::new(3.0, -3.0));
        assert_eq!(2usize * c, Complex::new(4.0, 6.0));
    }

    #[test]
    fn test_compound_assign() {
        let mut c = Complex::new(1.0, 2.0);

        c += Complex::new(1.0, 1.0);
        assert_eq!(c, Complex::new(2.0, 3.0));

        c -= Complex::new(0.5, 0.5);
        assert_eq!(c, Complex::new(1.5, 2.5));

        c += 0.5_f64;
        assert_eq!(c, Complex::new(2.0, 2.5));

        c -= 1_i32;
        assert_eq!(c, Complex::new(1.0, 2.5));

        c *= 2.0_f64;
        assert_eq!(c, Complex::new(2.0, 5.0));

        c /= 4u16;
        assert_eq!(c, Complex::new(0.5, 1.25));

        c *= Complex::I;
        assert_eq!(c, Complex::new(-1.25, 0.5));
    }

    #[test]
    fn test_mul_assign_uses_old_real_part() {
        let mut a = Complex::new(1.0, 2.0);
        a *= Complex::new(3.0, 4.0);

        assert_eq!(a, Complex::new(-5.0, 10.0));

        let mut squared = Complex::new(2.0, 7.0);
        let copy = squared;
        squared *= copy;

        assert_eq!(squared, copy * copy);
    }

    #[test]
    fn test_divide_by_zero_propagates() {
        let c = Complex::new(1.0, -1.0) / 0.0_f64;
        assert_eq!(c.re(), f64::INFINITY);
        assert_eq!(c.im(), f64::NEG_INFINITY);

        let c = Complex::ZERO / 0_i32;
        assert!(c.re().is_nan());
        assert!(c.im().is_nan());

        let mut c = Complex::new(2.0, 0.0);
        c /= 0.0_f64;
        assert_eq!(c.re(), f64::INFINITY);
        assert!(c.im().is_nan());
    }

    #[test]
    fn test_add_sub_inverse() {
        let mut rng = rand::rng();

        for _ in 0..256 {
            let a = Complex::random_from(&mut rng) * 1e3_f64;
            let b = Complex::random_from(&mut rng) * 1e3_f64;
            let back = (a + b) - b;

            assert_almost_eq!(back.re(), a.re());
            assert_almost_eq!(back.im(), a.im());
        }
    }

    #[test]
    fn test_scalar_mul_div_inverse() {
        let mut rng = rand::rng();

        for _ in 0..256 {
            let a = Complex::random_from(&mut rng);
            let b = Complex::random_from(&mut rng);

            if b.re() == 0.0 {
                continue;
            }

            let back = (a * b.re()) / b.re();

            assert_almost_eq!(back.re(), a.re());
            assert_almost_eq!(back.im(), a.im());
        }
    }
}
