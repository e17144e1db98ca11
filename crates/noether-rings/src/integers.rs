//! The ring of integers Z.

use num_traits::{One, Zero};

use noether_integers::{Integer, Rational};

use crate::descriptor::RingDescriptor;
use crate::error::AlgebraError;
use crate::traits::{CommutativeRing, EuclideanDomain, IntegralDomain, Ring};

/// The ring of integers.
///
/// This is a wrapper around `noether_integers::Integer` that implements
/// the algebraic traits. Division truncates toward zero.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub Integer);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(Integer::new(value))
    }

    /// Returns the inner Integer.
    #[must_use]
    pub fn into_inner(self) -> Integer {
        self.0
    }

    /// Returns a reference to the inner Integer.
    #[must_use]
    pub fn as_inner(&self) -> &Integer {
        &self.0
    }

    /// Attempts to convert to an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }
}

/// Computes the inverse of `n` modulo `modulus`, renormalized into
/// `[0, modulus)`.
///
/// This is the first Bezout coefficient of `extended_gcd(n, modulus)`;
/// `None` when `n` and the modulus are not coprime. The modulus must be
/// positive.
#[must_use]
pub fn inverse_mod(n: &Z, modulus: &Z) -> Option<Z> {
    let (g, s, _) = n.extended_gcd(modulus);
    let (g, s) = if g.0.is_negative() { (-g, -s) } else { (g, s) };
    if !g.is_one() {
        return None;
    }

    let mut coeff = s.rem(modulus);
    if coeff.0.is_negative() {
        coeff = coeff + modulus.clone();
    }
    Some(coeff)
}

impl Ring for Z {
    type Context = ();

    fn context(&self) -> Self::Context {}

    fn zero(_: &Self::Context) -> Self {
        Self(Integer::zero())
    }

    fn one(_: &Self::Context) -> Self {
        Self(Integer::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn descriptor(_: &Self::Context) -> RingDescriptor {
        RingDescriptor::Integers
    }

    fn from_integer(_: &Self::Context, value: i64) -> Self {
        Self::new(value)
    }

    fn from_rational(_: &Self::Context, value: &Rational) -> Result<Self, AlgebraError> {
        value
            .to_integer()
            .map(Self)
            .ok_or_else(|| AlgebraError::NonIntegerCoefficient(value.clone()))
    }
}

impl CommutativeRing for Z {}
impl IntegralDomain for Z {}

impl EuclideanDomain for Z {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        let q = &self.0 / &other.0;
        let r = &self.0 % &other.0;
        (Self(q), Self(r))
    }

    fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }
}

impl std::ops::Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Z {
    fn from(value: Integer) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Z {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
