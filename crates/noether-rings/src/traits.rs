//! Algebraic structure traits.
//!
//! This module defines the core algebraic traits that form the foundation
//! of the type system for polynomials, finite fields, and curves.
//!
//! Every ring type carries a `Context`: the runtime parameters an element
//! needs to name its ring. Context-free rings (Z, Q, polynomial rings over
//! them) use `()`; finite-field elements carry a shared handle to their
//! field. Identities and descriptors are derived from the context, so the
//! same generic code serves both statically and dynamically parameterized
//! rings.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

use noether_integers::Rational;

use crate::descriptor::RingDescriptor;
use crate::error::AlgebraError;

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero`
/// - Multiplication is associative with identity `one`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Sized
    + Clone
    + Eq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Runtime parameters of the ring an element belongs to.
    type Context: Clone + Eq + Hash + Debug;

    /// Returns the context of this element's ring.
    fn context(&self) -> Self::Context;

    /// The additive identity of the ring described by `ctx`.
    fn zero(ctx: &Self::Context) -> Self;

    /// The multiplicative identity of the ring described by `ctx`.
    fn one(ctx: &Self::Context) -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// The structural classification of the ring described by `ctx`.
    fn descriptor(ctx: &Self::Context) -> RingDescriptor;

    /// Casts a machine integer into the ring.
    fn from_integer(ctx: &Self::Context, value: i64) -> Self;

    /// Coerces an exact rational into the ring.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the value has no image in the ring,
    /// e.g. a proper fraction coerced into the integers.
    fn from_rational(ctx: &Self::Context, value: &Rational) -> Result<Self, AlgebraError>;

    /// The multiplicative inverse, when this element is a unit of its ring.
    ///
    /// The default declines. Fields override it, so generic code that
    /// inverts only where the ring classification allows (polynomial
    /// division by a non-monic divisor) can stay ring-agnostic.
    fn unit_inverse(&self) -> Option<Self> {
        None
    }

    /// Computes self + self + ... (n times).
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero(&self.context());
        }

        let mut result = self.clone();
        let abs_n = n.unsigned_abs();

        for _ in 1..abs_n {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n by binary exponentiation.
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one(&self.context());
        if n == 0 {
            return result;
        }

        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A commutative ring where multiplication is commutative.
///
/// Every ring in this crate family is commutative; the marker exists so
/// polynomial rings can require it.
pub trait CommutativeRing: Ring {}

/// An integral domain is a commutative ring with no zero divisors.
///
/// If a * b = 0, then a = 0 or b = 0.
pub trait IntegralDomain: CommutativeRing {}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0, there exist q, r such that:
/// - a = b*q + r
/// - Either r = 0 or φ(r) < φ(b) for some Euclidean function φ
pub trait EuclideanDomain: IntegralDomain {
    /// Computes the quotient and remainder of division.
    ///
    /// # Panics
    ///
    /// May panic if `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Computes the quotient of division.
    fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// Computes the remainder of division.
    fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Computes the greatest common divisor by the remainder loop.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }

        a
    }

    /// Computes the least common multiple.
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero(&self.context());
        }
        let g = self.gcd(other);
        self.div(&g) * other.clone()
    }

    /// The generalized extended Euclidean algorithm.
    ///
    /// Maintains the paired sequences (old_r, r), (old_s, s), (old_t, t),
    /// advancing all three by `(old_x, x) ← (x, old_x − q·x)` until the
    /// remainder reaches zero. Returns `(g, s, t)` such that
    /// `g = gcd(self, other)` and `g = self*s + other*t`.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let ctx = self.context();
        let mut old_r = self.clone();
        let mut r = other.clone();
        let mut old_s = Self::one(&ctx);
        let mut s = Self::zero(&ctx);
        let mut old_t = Self::zero(&ctx);
        let mut t = Self::one(&ctx);

        while !r.is_zero() {
            let (q, rem) = old_r.div_rem(&r);
            old_r = r;
            r = rem;

            let new_s = old_s - q.clone() * s.clone();
            old_s = s;
            s = new_s;

            let new_t = old_t - q * t.clone();
            old_t = t;
            t = new_t;
        }

        (old_r, old_s, old_t)
    }
}

/// A field is a ring where every non-zero element has a multiplicative
/// inverse.
pub trait Field: EuclideanDomain {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}

#[cfg(test)]
mod tests {
    use crate::integers::Z;
    use crate::traits::EuclideanDomain;

    #[test]
    fn test_extended_gcd_bezout() {
        let a = Z::new(12);
        let b = Z::new(18);
        let (g, s, t) = a.extended_gcd(&b);
        assert_eq!(g, Z::new(6));
        assert_eq!(a * s + b * t, Z::new(6));
    }

    #[test]
    fn test_extended_gcd_coprime() {
        let a = Z::new(5);
        let b = Z::new(7);
        let (g, s, t) = a.extended_gcd(&b);
        assert_eq!(g, Z::new(1));
        assert_eq!(a * s + b * t, Z::new(1));
    }
}
