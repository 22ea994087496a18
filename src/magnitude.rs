//! Large-magnitude number type.
//!
//! Enemy hit-points grow as `50 * PHI^(5 * stage)` and leave `f64` range
//! within a few hundred stages, so values are stored as a normalized
//! mantissa in `[1, 10)` plus a decimal exponent.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;

/// Exponent gap beyond which the smaller operand vanishes in subtraction.
const ALIGN_LIMIT: i64 = 17;

/// A non-negative number as `mantissa * 10^exponent`, mantissa in `[1, 10)`
/// (or exactly zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Magnitude {
    mantissa: f64,
    exponent: i64,
}

impl Magnitude {
    pub const ZERO: Magnitude = Magnitude {
        mantissa: 0.0,
        exponent: 0,
    };

    /// Builds from a plain `f64`. Values `<= 0` collapse to zero.
    pub fn new(value: f64) -> Self {
        if value <= 0.0 || !value.is_finite() {
            return Self::ZERO;
        }
        Self::from_parts(value, 0)
    }

    /// Builds from an unnormalized mantissa/exponent pair.
    pub fn from_parts(mantissa: f64, exponent: i64) -> Self {
        if mantissa <= 0.0 || !mantissa.is_finite() {
            return Self::ZERO;
        }
        let shift = mantissa.log10().floor();
        let mut m = mantissa / 10f64.powf(shift);
        let mut e = exponent + shift as i64;
        // log10/powf rounding can land a hair outside [1, 10)
        if m >= 10.0 {
            m /= 10.0;
            e += 1;
        } else if m < 1.0 {
            m *= 10.0;
            e -= 1;
        }
        Self {
            mantissa: m,
            exponent: e,
        }
    }

    /// `base^exp` for `base > 1`, computed in log10 space so the result may
    /// exceed `f64` range.
    pub fn pow(base: f64, exp: f64) -> Self {
        let log = exp * base.log10();
        let whole = log.floor();
        Self::from_parts(10f64.powf(log - whole), whole as i64)
    }

    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    /// Decimal exponent; the mantissa is normalized to `[1, 10)`.
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    /// `log10` of the value. Zero yields negative infinity.
    pub fn log10(&self) -> f64 {
        if self.is_zero() {
            return f64::NEG_INFINITY;
        }
        self.exponent as f64 + self.mantissa.log10()
    }

    /// Lossy conversion; saturates to infinity outside `f64` range.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        self.mantissa * 10f64.powi(self.exponent.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    /// Scales by a plain factor. Factors `<= 0` collapse to zero.
    pub fn mul_f64(&self, factor: f64) -> Self {
        if self.is_zero() || factor <= 0.0 {
            return Self::ZERO;
        }
        Self::from_parts(self.mantissa * factor, self.exponent)
    }

    /// Subtraction clamped at zero.
    pub fn saturating_sub(&self, other: Magnitude) -> Self {
        if other.is_zero() {
            return *self;
        }
        if self.is_zero() || *self <= other {
            return Self::ZERO;
        }
        let gap = self.exponent - other.exponent;
        if gap >= ALIGN_LIMIT {
            return *self;
        }
        let aligned = other.mantissa / 10f64.powi(gap as i32);
        Self::from_parts(self.mantissa - aligned, self.exponent)
    }

    /// Ratio `self / other` as a plain `f64`; saturates to infinity when the
    /// exponent gap is too wide. `other` must be non-zero.
    pub fn ratio(&self, other: Magnitude) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let gap = self.exponent - other.exponent;
        if gap > 300 {
            return f64::INFINITY;
        }
        if gap < -300 {
            return 0.0;
        }
        (self.mantissa / other.mantissa) * 10f64.powi(gap as i32)
    }
}

impl Mul for Magnitude {
    type Output = Magnitude;

    fn mul(self, rhs: Magnitude) -> Magnitude {
        if self.is_zero() || rhs.is_zero() {
            return Magnitude::ZERO;
        }
        Magnitude::from_parts(self.mantissa * rhs.mantissa, self.exponent + rhs.exponent)
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Magnitude) -> Option<Ordering> {
        if self.is_zero() && other.is_zero() {
            return Some(Ordering::Equal);
        }
        if self.is_zero() {
            return Some(Ordering::Less);
        }
        if other.is_zero() {
            return Some(Ordering::Greater);
        }
        match self.exponent.cmp(&other.exponent) {
            Ordering::Equal => self.mantissa.partial_cmp(&other.mantissa),
            ord => Some(ord),
        }
    }
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self {
        Magnitude::new(value)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.exponent.abs() < 6 {
            write!(f, "{}", self.to_f64())
        } else {
            write!(f, "{:.2}e{}", self.mantissa, self.exponent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes() {
        let m = Magnitude::new(1234.5);
        assert!((m.mantissa() - 1.2345).abs() < 1e-9);
        assert_eq!(m.exponent(), 3);
    }

    #[test]
    fn test_new_nonpositive_is_zero() {
        assert!(Magnitude::new(0.0).is_zero());
        assert!(Magnitude::new(-5.0).is_zero());
    }

    #[test]
    fn test_from_parts_rolls_over() {
        let m = Magnitude::from_parts(25.0, 3);
        assert!((m.mantissa() - 2.5).abs() < 1e-9);
        assert_eq!(m.exponent(), 4);

        let m = Magnitude::from_parts(0.5, 3);
        assert!((m.mantissa() - 5.0).abs() < 1e-9);
        assert_eq!(m.exponent(), 2);
    }

    #[test]
    fn test_pow_exceeds_f64_range() {
        // 1.618^2000 overflows f64; log10 ~ 417.9
        let m = Magnitude::pow(1.618, 2000.0);
        assert_eq!(m.exponent(), 417);
        assert!(m.mantissa() >= 1.0 && m.mantissa() < 10.0);
    }

    #[test]
    fn test_pow_small_matches_f64() {
        let m = Magnitude::pow(2.0, 10.0);
        assert!((m.to_f64() - 1024.0).abs() < 1e-6);
    }

    #[test]
    fn test_mul() {
        let a = Magnitude::new(3.0);
        let b = Magnitude::new(4.0);
        assert!(((a * b).to_f64() - 12.0).abs() < 1e-9);

        let big = Magnitude::from_parts(5.0, 400) * Magnitude::from_parts(4.0, 400);
        assert_eq!(big.exponent(), 801);
        assert!((big.mantissa() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_saturating_sub() {
        let a = Magnitude::new(100.0);
        let b = Magnitude::new(30.0);
        assert!((a.saturating_sub(b).to_f64() - 70.0).abs() < 1e-9);
        assert!(b.saturating_sub(a).is_zero());
        assert!(a.saturating_sub(a).is_zero());
    }

    #[test]
    fn test_saturating_sub_wide_gap() {
        let big = Magnitude::from_parts(1.0, 100);
        let tiny = Magnitude::new(1.0);
        assert_eq!(big.saturating_sub(tiny), big);
    }

    #[test]
    fn test_ordering() {
        let small = Magnitude::new(999.0);
        let large = Magnitude::from_parts(1.0, 5);
        assert!(small < large);
        assert!(large > Magnitude::ZERO);
        assert!(Magnitude::ZERO < small);
    }

    #[test]
    fn test_ratio() {
        let a = Magnitude::new(800.0);
        let b = Magnitude::new(100.0);
        assert!((a.ratio(b) - 8.0).abs() < 1e-9);

        let huge = Magnitude::from_parts(1.0, 500);
        assert_eq!(huge.ratio(b), f64::INFINITY);
    }

    #[test]
    fn test_log10() {
        let m = Magnitude::new(1000.0);
        assert!((m.log10() - 3.0).abs() < 1e-9);
    }
}
