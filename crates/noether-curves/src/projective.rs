//! Projective points over a field.
//!
//! A projective point is an equivalence class of nonzero coordinate tuples
//! under nonzero scalar multiplication. Points normalize at construction
//! (every coordinate is divided by the last nonzero one), so equality is
//! plain tuple equality, hashing is the hash of the normalized tuple, and
//! no caller ever observes raw coordinates.

use std::fmt;

use noether_rings::{AlgebraError, Field, Ring};

/// A point of projective space over the field `F`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ProjectivePoint<F: Field> {
    field: F::Context,
    coords: Vec<F>,
}

impl<F: Field> ProjectivePoint<F> {
    /// Creates a point from homogeneous coordinates, inferring the field
    /// from the coordinates themselves.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::AllCoordinatesZero`] when the sequence is empty
    ///   or every coordinate is the field's additive identity
    /// - [`AlgebraError::RingMismatch`] when the coordinates belong to
    ///   differently-keyed fields
    pub fn new(coords: Vec<F>) -> Result<Self, AlgebraError> {
        let Some(first) = coords.first() else {
            return Err(AlgebraError::AllCoordinatesZero);
        };
        let field = first.context();
        for c in &coords {
            if c.context() != field {
                return Err(AlgebraError::RingMismatch(
                    F::descriptor(&field),
                    F::descriptor(&c.context()),
                ));
            }
        }

        let Some(scale) = coords.iter().rev().find(|c| !c.is_zero()) else {
            return Err(AlgebraError::AllCoordinatesZero);
        };
        let inv = scale.inv().ok_or(AlgebraError::DivisionByZero)?;
        let coords = coords.iter().map(|c| c.clone() * inv.clone()).collect();

        Ok(Self { field, coords })
    }

    /// Creates a point by casting machine integers into the given field.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ProjectivePoint::new`].
    pub fn from_integers(field: &F::Context, coords: &[i64]) -> Result<Self, AlgebraError> {
        if coords.is_empty() {
            return Err(AlgebraError::AllCoordinatesZero);
        }
        Self::new(
            coords
                .iter()
                .map(|&c| F::from_integer(field, c))
                .collect(),
        )
    }

    /// The number of homogeneous coordinates.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// The field the coordinates live in.
    pub fn field(&self) -> &F::Context {
        &self.field
    }

    /// The normalized coordinates.
    #[must_use]
    pub fn coords(&self) -> &[F] {
        &self.coords
    }

    /// Multiplies every coordinate by a nonzero field element.
    ///
    /// The result re-normalizes, so it compares equal to the original
    /// point, as projective equivalence demands.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::AllCoordinatesZero`] for a zero scalar
    /// - [`AlgebraError::RingMismatch`] when the scalar belongs to another
    ///   field
    pub fn scale(&self, c: &F) -> Result<Self, AlgebraError> {
        if c.context() != self.field {
            return Err(AlgebraError::RingMismatch(
                F::descriptor(&self.field),
                F::descriptor(&c.context()),
            ));
        }
        if c.is_zero() {
            return Err(AlgebraError::AllCoordinatesZero);
        }
        Self::new(self.coords.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Divides every coordinate by a nonzero field element.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::DivisionByZero`] for a zero scalar
    /// - [`AlgebraError::RingMismatch`] when the scalar belongs to another
    ///   field
    pub fn unscale(&self, c: &F) -> Result<Self, AlgebraError> {
        let inv = c.inv().ok_or(AlgebraError::DivisionByZero)?;
        self.scale(&inv)
    }
}

impl<F: Field + fmt::Display> fmt::Display for ProjectivePoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.coords.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", parts.join(" : "))
    }
}
