//! A standalone Fourier transform over a prime field.
//!
//! Structurally independent of the algebra core: the transform consumes a
//! finite field and a primitive root of unity and produces the
//! order-significant transform of a coefficient sequence. The recursion is
//! the classic radix-2 split over the even- and odd-index subsequences.

use std::sync::Arc;

use noether_rings::{AlgebraError, Ring};

use crate::finite_field::{FieldElement, FiniteField};

/// Tests whether a prime-field element generates the whole multiplicative
/// group F_p*.
///
/// Extension-field elements and zero are never reported primitive.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn is_primitive_root(x: &FieldElement) -> bool {
    let field = x.field();
    if field.degree() != 1 || x.is_zero() {
        return false;
    }

    let p = field.characteristic();
    for i in 2..p.saturating_sub(1) {
        let power = match x.pow(i as i64) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        };
        if power.is_one() {
            return false;
        }
    }
    !x.is_one() || p == 2
}

/// Finds the smallest primitive root of a prime field.
///
/// Returns `None` for extension fields and for fields with no generator
/// in `[2, p)`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn find_primitive_root(field: &Arc<FiniteField>) -> Option<FieldElement> {
    if field.degree() != 1 {
        return None;
    }
    (2..field.characteristic())
        .map(|i| field.element(i as i64))
        .find(is_primitive_root)
}

/// Computes the Fourier transform of a coefficient sequence with respect
/// to a root of unity.
///
/// Entry `i` of the result is the input polynomial evaluated at `root^i`.
/// The root must have multiplicative order equal to the sequence length.
///
/// # Errors
///
/// Returns a ring mismatch when a value and the root belong to
/// differently-keyed fields.
///
/// # Panics
///
/// Panics if the sequence length is not a power of two.
pub fn fourier_transform(
    values: &[FieldElement],
    root: &FieldElement,
) -> Result<Vec<FieldElement>, AlgebraError> {
    if values.is_empty() {
        return Ok(Vec::new());
    }
    assert!(
        values.len().is_power_of_two(),
        "transform length must be a power of two"
    );

    for value in values {
        if value.field() != root.field() {
            return Err(AlgebraError::RingMismatch(
                root.field().descriptor(),
                value.field().descriptor(),
            ));
        }
    }

    recurse(values, root)
}

#[allow(clippy::cast_possible_wrap)]
fn recurse(
    values: &[FieldElement],
    root: &FieldElement,
) -> Result<Vec<FieldElement>, AlgebraError> {
    let k = values.len();
    if k == 1 {
        return Ok(values.to_vec());
    }

    let even: Vec<FieldElement> = values.iter().step_by(2).cloned().collect();
    let odd: Vec<FieldElement> = values.iter().skip(1).step_by(2).cloned().collect();

    let root_squared = root.try_mul(root)?;
    let low = recurse(&even, &root_squared)?;
    let high = recurse(&odd, &root_squared)?;

    let half = k / 2;
    let mut result = Vec::with_capacity(k);
    for i in 0..half {
        let twiddle = root.pow(i as i64)?;
        result.push(low[i].try_add(&twiddle.try_mul(&high[i])?)?);
    }
    for i in 0..half {
        let twiddle = root.pow((i + half) as i64)?;
        result.push(low[i].try_add(&twiddle.try_mul(&high[i])?)?);
    }

    Ok(result)
}
