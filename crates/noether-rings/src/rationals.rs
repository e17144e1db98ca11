//! The field of rational numbers Q.

use num_traits::{One, Zero};

use noether_integers::{Integer, Rational};

use crate::descriptor::RingDescriptor;
use crate::error::AlgebraError;
use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};

/// The field of rational numbers.
///
/// This is a wrapper around `noether_integers::Rational` that implements
/// the algebraic traits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_int(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        self.0.numerator()
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> Integer {
        self.0.denominator()
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    type Context = ();

    fn context(&self) -> Self::Context {}

    fn zero(_: &Self::Context) -> Self {
        Self(Rational::zero())
    }

    fn one(_: &Self::Context) -> Self {
        Self(Rational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn descriptor(_: &Self::Context) -> RingDescriptor {
        RingDescriptor::Rationals
    }

    fn from_integer(_: &Self::Context, value: i64) -> Self {
        Self::from_int(value)
    }

    fn from_rational(_: &Self::Context, value: &Rational) -> Result<Self, AlgebraError> {
        Ok(Self(value.clone()))
    }

    fn unit_inverse(&self) -> Option<Self> {
        self.inv()
    }
}

impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        // In a field, division is exact, so the remainder is always zero
        (Self(self.0.clone() / other.0.clone()), Self::zero(&()))
    }

    fn gcd(&self, other: &Self) -> Self {
        // In a field, the gcd of any two non-zero elements is 1
        if self.is_zero() && other.is_zero() {
            Self::zero(&())
        } else {
            Self::one(&())
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        if self.is_zero() && other.is_zero() {
            return (Self::zero(&()), Self::zero(&()), Self::zero(&()));
        }

        if self.is_zero() {
            // gcd = 1 = self * 0 + other * (1/other)
            (Self::one(&()), Self::zero(&()), Self(other.0.recip()))
        } else {
            // gcd = 1 = self * (1/self) + other * 0
            (Self::one(&()), Self(self.0.recip()), Self::zero(&()))
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.recip()))
        }
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_laws() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);

        // 2/3 + 3/4 = 17/12
        assert_eq!(a.clone() + b.clone(), Q::new(17, 12));

        // 2/3 * 3/4 = 1/2
        assert_eq!(a * b, Q::new(1, 2));
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(3, 5);
        let inv = a.inv().unwrap();
        assert!((a * inv).is_one());
        assert_eq!(Q::zero(&()).inv(), None);
    }

    #[test]
    fn test_division() {
        let a = Q::new(1, 2);
        let b = Q::new(1, 3);
        assert_eq!(a.field_div(&b), Q::new(3, 2));
    }

    #[test]
    fn test_descriptor() {
        let d = Q::descriptor(&());
        assert!(d.is_field());
        assert!(d.is_euclidean_domain());
        assert_eq!(d.characteristic(), 0);
    }
}
