//! The library-wide error taxonomy.
//!
//! Three families of failure, distinguishable by variant:
//!
//! - **Domain/value errors** — the input is invalid for the requested
//!   operation (all-zero coordinates, non-monic integer division, ...).
//!   Constructors fail before an invalid value can be observed.
//! - **Ring-mismatch errors** — operands belong to differently-keyed rings;
//!   raised at the operation boundary, never coerced.
//! - **Unsupported-combination errors** — the operation is not implemented
//!   for the ring's classification, as opposed to the input being invalid.
//!
//! There is no retry or recovery layer: every failure is terminal to the
//! requested operation.

use thiserror::Error;

use crate::descriptor::RingDescriptor;
use noether_integers::Rational;

/// Errors produced by the algebra core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A projective point was constructed from coordinates that are all
    /// equal to the field's additive identity.
    #[error("all projective coordinates are zero")]
    AllCoordinatesZero,

    /// A `^` in a polynomial expression was not followed by digits.
    #[error("dangling exponent in polynomial expression")]
    DanglingExponent,

    /// A polynomial expression contained a character outside the grammar.
    #[error("unexpected character {0:?} in polynomial expression")]
    UnexpectedCharacter(char),

    /// Integer-coefficient polynomial division was attempted with a divisor
    /// whose leading coefficient is not one.
    #[error("integer polynomial division requires a monic divisor")]
    NonMonicDivisor,

    /// The bounded irreducible-polynomial search was exhausted.
    #[error("no irreducible polynomial of degree {degree} found over F_{characteristic}")]
    NoIrreduciblePolynomial {
        /// Characteristic of the prime field searched over.
        characteristic: u64,
        /// Requested extension degree.
        degree: u32,
    },

    /// A defining polynomial for an extension field had the wrong shape.
    #[error("defining polynomial must be monic of degree {expected}, found degree {found}")]
    InvalidModulus {
        /// The requested extension degree.
        expected: u32,
        /// Degree of the polynomial actually supplied (-1 for zero).
        found: i64,
    },

    /// The additive identity was inverted or used as a divisor.
    #[error("cannot invert the additive identity")]
    DivisionByZero,

    /// A rational coefficient was coerced into the integers but is not a
    /// whole number.
    #[error("coefficient {0} is not an integer")]
    NonIntegerCoefficient(Rational),

    /// An elliptic curve was requested over a field of characteristic 2
    /// or 3, where the short Weierstrass addition law degenerates.
    #[error("the curve requires characteristic not 2 or 3, got {0}")]
    SmallCharacteristic(u64),

    /// Curve points from two different curves were combined.
    #[error("points lie on different curves")]
    CurveMismatch,

    /// Operands belong to differently-keyed rings.
    #[error("ring mismatch: {0} vs {1}")]
    RingMismatch(RingDescriptor, RingDescriptor),

    /// A gcd was requested over a ring that is neither Euclidean nor the
    /// recognized integer-polynomial case.
    #[error("gcd is not supported over {0}")]
    UnsupportedRing(RingDescriptor),
}
