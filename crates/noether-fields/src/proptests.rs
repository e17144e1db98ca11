//! Property-based tests for finite-field arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use noether_rings::Ring;

    use crate::finite_field::FiniteField;

    fn residue() -> impl Strategy<Value = i64> {
        -500i64..500i64
    }

    proptest! {
        // Field axioms in F_101

        #[test]
        fn prime_add_commutative(a in residue(), b in residue()) {
            let f = FiniteField::prime(101);
            prop_assert_eq!(
                f.element(a).try_add(&f.element(b)).unwrap(),
                f.element(b).try_add(&f.element(a)).unwrap()
            );
        }

        #[test]
        fn prime_add_associative(a in residue(), b in residue(), c in residue()) {
            let f = FiniteField::prime(101);
            let left = f.element(a) + f.element(b) + f.element(c);
            let right = f.element(a) + (f.element(b) + f.element(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prime_additive_inverse(a in residue()) {
            let f = FiniteField::prime(101);
            prop_assert!((f.element(a) + (-f.element(a))).is_zero());
        }

        #[test]
        fn prime_distributive(a in residue(), b in residue(), c in residue()) {
            let f = FiniteField::prime(101);
            let left = f.element(a) * (f.element(b) + f.element(c));
            let right = f.element(a) * f.element(b) + f.element(a) * f.element(c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prime_multiplicative_inverse(a in 1i64..101i64) {
            let f = FiniteField::prime(101);
            let x = f.element(a);
            prop_assert_eq!(x.clone() * x.inverse().unwrap(), f.element(1));
        }

        #[test]
        fn prime_pow_matches_repeated_multiplication(a in residue(), e in 0u32..12u32) {
            let f = FiniteField::prime(101);
            let x = f.element(a);

            let mut expected = f.element(1);
            for _ in 0..e {
                expected = expected * x.clone();
            }
            prop_assert_eq!(x.pow(i64::from(e)).unwrap(), expected);
        }

        // Extension field F_343 = F_7[x]/(x^3 - 3)

        #[test]
        fn extension_multiplicative_inverse(c0 in 0i64..7i64, c1 in 0i64..7i64, c2 in 0i64..7i64) {
            let field = FiniteField::with_modulus(7, 3, "x^3 - 3").unwrap();
            let base = field.base_field().unwrap().clone();
            let value = field
                .from_polynomial(noether_poly::Polynomial::new(
                    base.clone(),
                    vec![base.element(c0), base.element(c1), base.element(c2)],
                ))
                .unwrap();

            if value.is_zero() {
                prop_assert!(value.inverse().is_err());
            } else {
                prop_assert_eq!(value.clone() * value.inverse().unwrap(), field.element(1));
            }
        }

        #[test]
        fn extension_frobenius_is_additive(
            a0 in 0i64..7i64, a1 in 0i64..7i64,
            b0 in 0i64..7i64, b1 in 0i64..7i64
        ) {
            // (a + b)^p = a^p + b^p in characteristic p
            let field = FiniteField::with_modulus(7, 3, "x^3 - 3").unwrap();
            let base = field.base_field().unwrap().clone();
            let make = |c0: i64, c1: i64| {
                field
                    .from_polynomial(noether_poly::Polynomial::new(
                        base.clone(),
                        vec![base.element(c0), base.element(c1)],
                    ))
                    .unwrap()
            };

            let a = make(a0, a1);
            let b = make(b0, b1);
            let left = (a.clone() + b.clone()).pow(7).unwrap();
            let right = a.pow(7).unwrap() + b.pow(7).unwrap();
            prop_assert_eq!(left, right);
        }
    }
}
