//! # noether-curves
//!
//! Projective points and the elliptic-curve group law.
//!
//! This crate provides:
//! - [`ProjectivePoint`], homogeneous coordinates over any field with
//!   equality up to a nonzero scalar
//! - [`EllipticCurve`] and [`CurvePoint`], the chord-and-tangent group law
//!   for short Weierstrass curves y² = x³ + ax + b over fields of
//!   characteristic other than 2 and 3
//!
//! Both are generic over the field, so the same group law serves curves
//! over the rationals and over finite fields.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod elliptic;
pub mod projective;

pub use elliptic::{CurvePoint, EllipticCurve};
pub use projective::ProjectivePoint;
