//! Exact rationals for offset arithmetic.
//!
//! The per-cell gap delta is a gap divided by a cell count. Keeping it exact
//! means `col * delta` never drifts, however many columns a grid has, and
//! rounding happens exactly once per offset.

use std::ops::{Add, Mul, Sub};

/// A reduced fraction with a positive denominator.
///
/// ```
/// use gutter::Fraction;
///
/// // 30px of gap spread over 4 columns
/// let delta = Fraction::new(30, 4);
/// assert_eq!(delta.round(), 8); // 7.5 rounds up
/// assert_eq!((delta * Fraction::from(2)).round(), 15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { num: 0, den: 1 };

    const HALF: Fraction = Fraction { num: 1, den: 2 };

    /// Reduce `num / den`. A zero denominator yields [`Fraction::ZERO`].
    pub fn new(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self::ZERO;
        }
        let divisor = gcd(num, den) * den.signum();
        Self {
            num: num / divisor,
            den: den / divisor,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    /// Largest integer not greater than the fraction.
    pub fn floor(&self) -> i64 {
        self.num.div_euclid(self.den)
    }

    /// Nearest integer; halves go toward positive infinity (`-2.5 -> -2`).
    pub fn round(&self) -> i64 {
        (*self + Self::HALF).floor()
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                fn from(n: $t) -> Self {
                    Fraction { num: n as i64, den: 1 }
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, usize);

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Fraction::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + Fraction {
            num: -rhs.num,
            den: rhs.den,
        }
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
