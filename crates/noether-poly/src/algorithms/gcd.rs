//! Polynomial GCD algorithms.
//!
//! The algorithm is selected by the coefficient ring's classification
//! ([`RingDescriptor::gcd_strategy`]):
//!
//! - `Euclidean` (field coefficients): [`poly_gcd`] / [`poly_extended_gcd`],
//!   the remainder loop with monic normalization.
//! - `IntegerPolynomial` (Z coefficients, a UFD that is not Euclidean):
//!   [`integer_poly_gcd`], which splits into content and primitive part and
//!   computes the primitive gcd by lifting into Q[x].
//! - Any other classification is an unsupported-combination error, reported
//!   by `gcd_strategy` itself.

use noether_rings::{AlgebraError, EuclideanDomain, Field, Ring, RingDescriptor, Z};

use crate::poly::Polynomial;

/// Computes the monic gcd of two polynomials over a field.
///
/// # Errors
///
/// Returns a ring mismatch when the coefficient-ring tags differ.
pub fn poly_gcd<F: Field>(
    a: &Polynomial<F>,
    b: &Polynomial<F>,
) -> Result<Polynomial<F>, AlgebraError> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = p.div_rem(&q)?;
        p = q;
        q = r;
    }

    Ok(p.monic().unwrap_or(p))
}

/// Extended polynomial gcd over a field.
///
/// Returns `(g, s, t)` such that `g = gcd(a, b) = s*a + t*b`, with `g`
/// monic unless both inputs are zero.
///
/// # Errors
///
/// Returns a ring mismatch when the coefficient-ring tags differ.
pub fn poly_extended_gcd<F: Field>(
    a: &Polynomial<F>,
    b: &Polynomial<F>,
) -> Result<(Polynomial<F>, Polynomial<F>, Polynomial<F>), AlgebraError> {
    let ctx = a.context();
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_s = Polynomial::one(&ctx);
    let mut s = Polynomial::zero(&ctx);
    let mut old_t = Polynomial::zero(&ctx);
    let mut t = Polynomial::one(&ctx);

    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r)?;

        old_r = r;
        r = rem;

        let new_s = old_s.try_sub(&q.try_mul(&s)?)?;
        old_s = s;
        s = new_s;

        let new_t = old_t.try_sub(&q.try_mul(&t)?)?;
        old_t = t;
        t = new_t;
    }

    if old_r.is_zero() {
        return Ok((old_r, old_s, old_t));
    }

    // Normalize the gcd to monic and adjust the Bezout coefficients so the
    // identity still holds.
    let lead_inv = old_r
        .leading_coeff()
        .and_then(Field::inv)
        .ok_or(AlgebraError::DivisionByZero)?;
    Ok((
        old_r.scale(&lead_inv)?,
        old_s.scale(&lead_inv)?,
        old_t.scale(&lead_inv)?,
    ))
}

/// Computes the gcd of two integer-coefficient polynomials.
///
/// Z[x] is a UFD but not Euclidean, so the gcd splits multiplicatively:
/// `gcd = gcd(content(a), content(b)) * primitive_gcd`, where the
/// primitive gcd is computed by lifting both primitive parts into Q[x],
/// running the Euclidean algorithm there, and pulling the (monic) result
/// back to coprime integer coefficients.
///
/// # Errors
///
/// Propagates coefficient-coercion failures from the lift back out of
/// Q[x]; these do not occur for well-formed inputs.
pub fn integer_poly_gcd(
    a: &Polynomial<Z>,
    b: &Polynomial<Z>,
) -> Result<Polynomial<Z>, AlgebraError> {
    if a.is_zero() {
        return Ok(b.clone());
    }
    if b.is_zero() {
        return Ok(a.clone());
    }

    let content = a.content().gcd(&b.content());

    let lifted_a = a.primitive_part().lift_to_rationals();
    let lifted_b = b.primitive_part().lift_to_rationals();
    let rational_gcd = poly_gcd(&lifted_a, &lifted_b)?;

    rational_gcd.primitive_part()?.scale(&content)
}

/// Returns the gcd strategy for the polynomial ring over `base`.
///
/// # Errors
///
/// Returns [`AlgebraError::UnsupportedRing`] for coefficient rings that
/// are neither fields nor the integers.
pub fn strategy_over(
    base: &RingDescriptor,
) -> Result<noether_rings::GcdStrategy, AlgebraError> {
    RingDescriptor::Polynomial(Box::new(base.clone())).gcd_strategy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use noether_rings::{GcdStrategy, Q};

    fn qp(input: &str) -> Polynomial<Q> {
        Polynomial::parse((), input).unwrap()
    }

    fn zp(input: &str) -> Polynomial<Z> {
        Polynomial::parse((), input).unwrap()
    }

    #[test]
    fn test_poly_gcd() {
        // gcd(x^2 - 1, x^2 - 2x + 1) = x - 1
        let g = poly_gcd(&qp("x^2 - 1"), &qp("x^2 - 2x + 1")).unwrap();
        assert_eq!(g, qp("x - 1"));
    }

    #[test]
    fn test_poly_gcd_is_monic() {
        let g = poly_gcd(&qp("2x^2 - 2"), &qp("4x - 4")).unwrap();
        assert_eq!(g, qp("x - 1"));
    }

    #[test]
    fn test_poly_extended_gcd_bezout() {
        let a = qp("x^2 - 1");
        let b = qp("x - 1");
        let (g, s, t) = poly_extended_gcd(&a, &b).unwrap();

        assert_eq!(g, qp("x - 1"));
        let check = s.try_mul(&a).unwrap().try_add(&t.try_mul(&b).unwrap()).unwrap();
        assert_eq!(check, g);
    }

    #[test]
    fn test_poly_extended_gcd_coprime() {
        let a = qp("x^2 + 1");
        let b = qp("x - 1");
        let (g, s, t) = poly_extended_gcd(&a, &b).unwrap();

        assert!(g.is_one());
        let check = s.try_mul(&a).unwrap().try_add(&t.try_mul(&b).unwrap()).unwrap();
        assert_eq!(check, g);
    }

    #[test]
    fn test_poly_extended_gcd_zero_operand() {
        let a = qp("2x + 2");
        let zero = Polynomial::zero(&());
        let (g, s, _) = poly_extended_gcd(&a, &zero).unwrap();
        assert_eq!(g, qp("x + 1"));
        assert_eq!(s.try_mul(&a).unwrap(), g);
    }

    #[test]
    fn test_integer_poly_gcd() {
        // contents 2 and 4, primitive parts x+1 and x+1
        let g = integer_poly_gcd(&zp("2x + 2"), &zp("4x + 4")).unwrap();
        assert_eq!(g, zp("2x + 2"));
    }

    #[test]
    fn test_integer_poly_gcd_primitive_split() {
        // gcd((x-1)(x+1), (x-1)^2) = x - 1
        let g = integer_poly_gcd(&zp("x^2 - 1"), &zp("x^2 - 2x + 1")).unwrap();
        assert_eq!(g, zp("x - 1"));
    }

    #[test]
    fn test_integer_poly_gcd_with_zero() {
        let a = zp("6x^2 + 3");
        assert_eq!(
            integer_poly_gcd(&a, &Polynomial::zero(&())).unwrap(),
            a
        );
    }

    #[test]
    fn test_strategy_dispatch() {
        assert_eq!(
            strategy_over(&RingDescriptor::Rationals),
            Ok(GcdStrategy::Euclidean)
        );
        assert_eq!(
            strategy_over(&RingDescriptor::Integers),
            Ok(GcdStrategy::IntegerPolynomial)
        );
        assert!(matches!(
            strategy_over(&RingDescriptor::Polynomial(Box::new(
                RingDescriptor::Integers
            ))),
            Err(AlgebraError::UnsupportedRing(_))
        ));
    }
}
