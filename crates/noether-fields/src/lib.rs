//! # noether-fields
//!
//! Prime and prime-power finite fields.
//!
//! This crate provides:
//! - [`FiniteField`], a field description built once per canonical key
//!   (characteristic, degree, defining polynomial) and interned in a
//!   process-wide registry
//! - [`FieldElement`], an immutable value carrying a shared handle to its
//!   field; elements of differently-keyed fields refuse to combine
//! - The bounded irreducible-polynomial search used when no defining
//!   polynomial is supplied
//! - A standalone radix-2 Fourier transform over a prime field
//!
//! Extension-field elements are reduced polynomials over the prime field,
//! and their inversion runs the extended Euclidean algorithm inside the
//! base-field polynomial ring.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod irreducible;
pub mod transform;

#[cfg(test)]
mod proptests;

pub use finite_field::{FieldElement, FiniteField};
pub use irreducible::{find_irreducible, is_irreducible};
pub use transform::{find_primitive_root, fourier_transform, is_primitive_root};
