//! # noether-rings
//!
//! Algebraic structures for the noether algebra core.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`
//! - The structural `RingDescriptor` classification consulted by gcd and
//!   division dispatch
//! - Concrete implementations: Z, Q
//! - The library-wide error taxonomy
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//!                 └── Field
//! ```
//!
//! Rings whose parameters are only known at runtime (finite fields) thread
//! those parameters through the `Ring::Context` associated type; for Z, Q,
//! and polynomial rings over them the context is `()` and the traits read
//! like plain constructors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod descriptor;
pub mod error;
pub mod integers;
pub mod rationals;
pub mod traits;

pub use descriptor::{GcdStrategy, RingDescriptor};
pub use error::AlgebraError;
pub use integers::{inverse_mod, Z};
pub use rationals::Q;
pub use traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};
