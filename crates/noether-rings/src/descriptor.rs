//! Structural ring classification.
//!
//! A `RingDescriptor` is a value-level description of a coefficient ring,
//! carried alongside runtime-parameterized values and compared structurally.
//! Every component that must pick an algorithm by ring kind (gcd dispatch,
//! division legality, curve characteristic checks) consults these
//! predicates instead of inspecting type names.

use std::fmt;

use crate::error::AlgebraError;

/// A structural description of a coefficient ring.
///
/// Two descriptors compare equal exactly when elements of the described
/// rings are interoperable; for finite fields that means equal
/// characteristic, extension degree, and defining polynomial.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RingDescriptor {
    /// The ring of integers Z.
    Integers,
    /// The field of rational numbers Q.
    Rationals,
    /// A prime or prime-power finite field.
    FiniteField {
        /// The characteristic p.
        characteristic: u64,
        /// The extension degree n (1 for a prime field).
        degree: u32,
        /// Residues of the defining polynomial in ascending degree order;
        /// empty for a prime field.
        modulus: Vec<u64>,
    },
    /// A univariate polynomial ring over the given base ring.
    Polynomial(Box<RingDescriptor>),
}

/// The gcd algorithm selected for a ring by [`RingDescriptor::gcd_strategy`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GcdStrategy {
    /// The generalized extended-Euclidean algorithm applies directly.
    Euclidean,
    /// Integer-coefficient polynomials: split into content and primitive
    /// part, and compute the primitive gcd over the rationals.
    IntegerPolynomial,
}

impl RingDescriptor {
    /// Returns true if every nonzero element has a multiplicative inverse.
    #[must_use]
    pub fn is_field(&self) -> bool {
        matches!(
            self,
            RingDescriptor::Rationals | RingDescriptor::FiniteField { .. }
        )
    }

    /// Returns true if the ring supports division with remainder usable by
    /// the generalized Euclidean algorithm.
    ///
    /// A polynomial ring over a field is always Euclidean.
    #[must_use]
    pub fn is_euclidean_domain(&self) -> bool {
        match self {
            RingDescriptor::Integers => true,
            RingDescriptor::Polynomial(base) => base.is_field(),
            _ => self.is_field(),
        }
    }

    /// Returns true if elements factor uniquely into irreducibles.
    ///
    /// A polynomial ring over a UFD is always a UFD.
    #[must_use]
    pub fn is_ufd(&self) -> bool {
        match self {
            RingDescriptor::Integers => true,
            RingDescriptor::Polynomial(base) => base.is_ufd(),
            _ => self.is_field(),
        }
    }

    /// Returns true if this is a polynomial ring.
    #[must_use]
    pub fn is_polynomial_ring(&self) -> bool {
        matches!(self, RingDescriptor::Polynomial(_))
    }

    /// Returns the coefficient ring of a polynomial ring.
    #[must_use]
    pub fn base_ring(&self) -> Option<&RingDescriptor> {
        match self {
            RingDescriptor::Polynomial(base) => Some(base),
            _ => None,
        }
    }

    /// Returns the ring characteristic, with 0 for characteristic zero.
    ///
    /// A polynomial ring inherits the characteristic of its base ring.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        match self {
            RingDescriptor::Integers | RingDescriptor::Rationals => 0,
            RingDescriptor::FiniteField { characteristic, .. } => *characteristic,
            RingDescriptor::Polynomial(base) => base.characteristic(),
        }
    }

    /// Selects the gcd algorithm for this ring.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::UnsupportedRing`] when the ring is neither
    /// Euclidean nor the recognized integer-polynomial case, so callers can
    /// tell an unsupported combination apart from invalid input.
    pub fn gcd_strategy(&self) -> Result<GcdStrategy, AlgebraError> {
        if self.is_euclidean_domain() {
            return Ok(GcdStrategy::Euclidean);
        }
        if let RingDescriptor::Polynomial(base) = self {
            if **base == RingDescriptor::Integers {
                return Ok(GcdStrategy::IntegerPolynomial);
            }
        }
        Err(AlgebraError::UnsupportedRing(self.clone()))
    }
}

impl fmt::Display for RingDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingDescriptor::Integers => write!(f, "Z"),
            RingDescriptor::Rationals => write!(f, "Q"),
            RingDescriptor::FiniteField {
                characteristic,
                degree,
                ..
            } => {
                if *degree == 1 {
                    write!(f, "F_{characteristic}")
                } else if let Some(order) = characteristic.checked_pow(*degree) {
                    write!(f, "F_{order}")
                } else {
                    write!(f, "F_{characteristic}^{degree}")
                }
            }
            RingDescriptor::Polynomial(base) => write!(f, "{base}[x]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(base: RingDescriptor) -> RingDescriptor {
        RingDescriptor::Polynomial(Box::new(base))
    }

    fn f7() -> RingDescriptor {
        RingDescriptor::FiniteField {
            characteristic: 7,
            degree: 1,
            modulus: vec![],
        }
    }

    #[test]
    fn test_base_predicates() {
        assert!(!RingDescriptor::Integers.is_field());
        assert!(RingDescriptor::Integers.is_euclidean_domain());
        assert!(RingDescriptor::Integers.is_ufd());

        assert!(RingDescriptor::Rationals.is_field());
        assert!(f7().is_field());
        assert_eq!(f7().characteristic(), 7);
        assert_eq!(RingDescriptor::Rationals.characteristic(), 0);
    }

    #[test]
    fn test_polynomial_over_field_is_euclidean() {
        assert!(poly(RingDescriptor::Rationals).is_euclidean_domain());
        assert!(poly(f7()).is_euclidean_domain());
        assert!(!poly(RingDescriptor::Integers).is_euclidean_domain());
    }

    #[test]
    fn test_polynomial_over_ufd_is_ufd() {
        assert!(poly(RingDescriptor::Integers).is_ufd());
        assert!(poly(poly(RingDescriptor::Integers)).is_ufd());
    }

    #[test]
    fn test_base_ring() {
        let zx = poly(RingDescriptor::Integers);
        assert_eq!(zx.base_ring(), Some(&RingDescriptor::Integers));
        assert_eq!(RingDescriptor::Integers.base_ring(), None);
        assert!(zx.is_polynomial_ring());
    }

    #[test]
    fn test_gcd_strategy_dispatch() {
        assert_eq!(
            RingDescriptor::Integers.gcd_strategy(),
            Ok(GcdStrategy::Euclidean)
        );
        assert_eq!(
            poly(RingDescriptor::Rationals).gcd_strategy(),
            Ok(GcdStrategy::Euclidean)
        );
        assert_eq!(
            poly(RingDescriptor::Integers).gcd_strategy(),
            Ok(GcdStrategy::IntegerPolynomial)
        );

        // Z[x][y] is a UFD but not a supported gcd domain.
        let nested = poly(poly(RingDescriptor::Integers));
        assert_eq!(
            nested.gcd_strategy(),
            Err(AlgebraError::UnsupportedRing(nested.clone()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RingDescriptor::Integers.to_string(), "Z");
        assert_eq!(poly(RingDescriptor::Rationals).to_string(), "Q[x]");
        assert_eq!(f7().to_string(), "F_7");
        let f343 = RingDescriptor::FiniteField {
            characteristic: 7,
            degree: 3,
            modulus: vec![4, 0, 0, 1],
        };
        assert_eq!(f343.to_string(), "F_343");
    }

    #[test]
    fn test_finite_field_descriptor_equality_includes_modulus() {
        let a = RingDescriptor::FiniteField {
            characteristic: 7,
            degree: 3,
            modulus: vec![4, 0, 0, 1],
        };
        let b = RingDescriptor::FiniteField {
            characteristic: 7,
            degree: 3,
            modulus: vec![3, 1, 0, 1],
        };
        assert_ne!(a, b);
    }
}
