//! Irreducibility testing and the bounded irreducible-polynomial search.
//!
//! The test is Rabin's: a monic f of degree n over F_p is irreducible iff
//! `x^(p^n) ≡ x (mod f)` and `gcd(x^(p^(n/q)) - x, f) = 1` for every prime
//! divisor q of n. The power `x^(p^i)` is built iteratively (h → h^p mod f)
//! so p^n never has to fit a machine word.
//!
//! The search scans a fixed candidate shape per characteristic: for p = 2,
//! trinomials `x^n + x^k + 1` and then pentanomials
//! `x^n + x^a + x^b + x^c + 1`; for odd p, trinomials `x^n + ax + b` over
//! all residue pairs. Exhausting the shapes is a typed "not found" error,
//! not an unbounded search — this is a documented best-effort limitation.

use std::sync::Arc;

use noether_poly::Polynomial;
use noether_rings::{AlgebraError, EuclideanDomain, Ring};

use crate::finite_field::{FieldElement, FiniteField};

/// Computes `base^exp mod modulus` by repeated squaring.
fn powmod(
    base: &Polynomial<FieldElement>,
    exp: u64,
    modulus: &Polynomial<FieldElement>,
) -> Polynomial<FieldElement> {
    let mut result = Polynomial::one(&base.context());
    let mut b = EuclideanDomain::rem(base, modulus);
    let mut e = exp;

    while e > 0 {
        if e & 1 == 1 {
            result = EuclideanDomain::rem(&(result * b.clone()), modulus);
        }
        b = EuclideanDomain::rem(&(b.clone() * b.clone()), modulus);
        e >>= 1;
    }

    result
}

/// Finds all prime divisors of n.
fn prime_divisors(mut n: usize) -> Vec<usize> {
    let mut primes = Vec::new();
    let mut d = 2;

    while d <= n / d {
        if n % d == 0 {
            primes.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }

    if n > 1 {
        primes.push(n);
    }

    primes
}

/// Tests whether a polynomial over a prime field is irreducible.
///
/// Constant and zero polynomials are not irreducible; linear polynomials
/// always are. The test works on the monic associate, which preserves
/// irreducibility.
#[must_use]
pub fn is_irreducible(f: &Polynomial<FieldElement>) -> bool {
    let n = match usize::try_from(f.degree()) {
        Err(_) | Ok(0) => return false,
        Ok(1) => return true,
        Ok(d) => d,
    };

    let Some(f) = f.monic() else { return false };
    let p = f.ring().characteristic();
    let x = Polynomial::x(f.ring().clone());

    let divisors = prime_divisors(n);
    let mut h = x.clone();

    for i in 1..=n {
        // h = x^(p^i) mod f
        h = powmod(&h, p, &f);

        for &q in &divisors {
            if n == i * q {
                let g = EuclideanDomain::gcd(&(h.clone() - x.clone()), &f);
                if g.degree() != 0 {
                    return false;
                }
            }
        }
    }

    (h - x).is_zero()
}

/// Builds a candidate from (degree, residue) pairs over the prime field.
fn candidate(
    base: &Arc<FiniteField>,
    terms: &[(usize, u64)],
) -> Polynomial<FieldElement> {
    let pairs = terms
        .iter()
        .map(|&(degree, residue)| (degree, base.element_from_residue(residue)));
    match Polynomial::from_map(base.clone(), pairs) {
        Ok(poly) => poly,
        Err(e) => panic!("{e}"),
    }
}

/// Searches for a monic irreducible polynomial of the given degree over
/// the prime field.
///
/// # Errors
///
/// Returns [`AlgebraError::NoIrreduciblePolynomial`] when every candidate
/// shape is exhausted.
pub fn find_irreducible(
    base: &Arc<FiniteField>,
    degree: u32,
) -> Result<Polynomial<FieldElement>, AlgebraError> {
    let p = base.characteristic();
    let n = degree as usize;

    if p == 2 {
        if n == 2 {
            return Ok(candidate(base, &[(0, 1), (1, 1), (2, 1)]));
        }

        // x^n + x^k + 1
        for k in 1..n {
            let f = candidate(base, &[(0, 1), (k, 1), (n, 1)]);
            if is_irreducible(&f) {
                return Ok(f);
            }
        }

        // x^n + x^a + x^b + x^c + 1
        for a in 1..n {
            for b in 1..a {
                for c in 1..b {
                    let f = candidate(base, &[(0, 1), (c, 1), (b, 1), (a, 1), (n, 1)]);
                    if is_irreducible(&f) {
                        return Ok(f);
                    }
                }
            }
        }
    } else {
        // x^n + ax + b
        for a in 0..p {
            for b in 0..p {
                let f = candidate(base, &[(0, b), (1, a), (n, 1)]);
                if is_irreducible(&f) {
                    return Ok(f);
                }
            }
        }
    }

    Err(AlgebraError::NoIrreduciblePolynomial {
        characteristic: p,
        degree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(p: u64, expr: &str) -> Polynomial<FieldElement> {
        Polynomial::parse(FiniteField::prime(p), expr).unwrap()
    }

    #[test]
    fn test_linear_is_irreducible() {
        assert!(is_irreducible(&poly(7, "x + 3")));
    }

    #[test]
    fn test_constants_are_not_irreducible() {
        assert!(!is_irreducible(&poly(7, "5")));
        assert!(!is_irreducible(&poly(7, "0")));
    }

    #[test]
    fn test_quadratics_over_f17() {
        // 3 is not a quadratic residue mod 17, 4 is
        assert!(is_irreducible(&poly(17, "x^2 - 3")));
        assert!(!is_irreducible(&poly(17, "x^2 - 4")));
    }

    #[test]
    fn test_cubic_over_f7() {
        // cubes mod 7 are {0, 1, 6}, so x^3 - 3 has no root and, being a
        // cubic, no factorization at all
        assert!(is_irreducible(&poly(7, "x^3 - 3")));
        assert!(!is_irreducible(&poly(7, "x^3 - 1")));
    }

    #[test]
    fn test_non_monic_is_normalized() {
        assert!(is_irreducible(&poly(17, "2x^2 - 6")));
    }

    #[test]
    fn test_reducible_without_roots() {
        // (x^2 + 1)^2 has no roots in F_3 but is reducible
        let f = poly(3, "x^4 + 2x^2 + 1");
        assert!(!is_irreducible(&f));
    }

    #[test]
    fn test_find_irreducible_char_two() {
        let base = FiniteField::prime(2);
        assert_eq!(
            find_irreducible(&base, 2).unwrap(),
            poly(2, "x^2 + x + 1")
        );

        for degree in [3, 4, 8] {
            let f = find_irreducible(&base, degree).unwrap();
            assert_eq!(f.degree(), i64::from(degree));
            assert!(is_irreducible(&f));
        }
    }

    #[test]
    fn test_find_irreducible_odd_char() {
        for (p, degree) in [(3, 2), (5, 3), (7, 2), (101, 2)] {
            let base = FiniteField::prime(p);
            let f = find_irreducible(&base, degree).unwrap();
            assert_eq!(f.degree(), i64::from(degree));
            assert!(is_irreducible(&f));
            assert!(f.leading_coeff().unwrap().is_one());
        }
    }
}
