//! # noether
//!
//! A commutative-algebra core written in Rust.
//!
//! noether provides generic arithmetic over commutative rings and fields:
//! integers, rationals, prime and prime-power finite fields, univariate
//! polynomial rings over any coefficient ring, projective points, and the
//! elliptic-curve group law built on them. The same division, gcd, and
//! inversion machinery serves every supported ring, and operands from
//! differently-keyed rings are rejected instead of silently miscomputed.
//!
//! ## Quick Start
//!
//! ```
//! use noether::prelude::*;
//!
//! let f = FiniteField::prime(101);
//! let curve = EllipticCurve::<FieldElement>::from_integers(&f, 2, 3).unwrap();
//! let p = curve.point(13, 2).unwrap();
//! assert_eq!(p.clone() * 5, curve.point(81, 89).unwrap());
//!
//! let poly: Polynomial<Q> = Polynomial::parse((), "x^2 - 1/2x + 3").unwrap();
//! assert_eq!(poly.degree(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use noether_curves as curves;
pub use noether_fields as fields;
pub use noether_integers as integers;
pub use noether_poly as poly;
pub use noether_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use noether_curves::{CurvePoint, EllipticCurve, ProjectivePoint};
    pub use noether_fields::{FieldElement, FiniteField};
    pub use noether_integers::{Integer, Rational};
    pub use noether_poly::Polynomial;
    pub use noether_rings::{
        AlgebraError, EuclideanDomain, Field, Ring, RingDescriptor, Q, Z,
    };
}
