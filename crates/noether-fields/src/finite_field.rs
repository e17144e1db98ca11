//! Finite fields F_p and F_{p^n}.
//!
//! A [`FiniteField`] describes a field; a [`FieldElement`] is a value in
//! one. Field descriptions are interned process-wide by canonical key, so
//! two requests for "the same field" yield interoperable elements, and the
//! irreducible-polynomial search runs at most once per key. Compatibility
//! between elements is decided by structural descriptor equality, never by
//! handle identity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock};

use hashbrown::HashMap;

use noether_integers::{Integer, Rational};
use noether_poly::algorithms::gcd::poly_extended_gcd;
use noether_poly::Polynomial;
use noether_rings::{
    AlgebraError, CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring, RingDescriptor,
};

use crate::irreducible;

/// A prime or prime-power finite field.
///
/// For degree 1 the field is Z/pZ; for degree n > 1 it is
/// F_p[x]/(m(x)) for a monic irreducible m of degree n. The characteristic
/// is trusted to be prime, as documented by the factory functions.
pub struct FiniteField {
    characteristic: u64,
    degree: u32,
    /// The defining polynomial over the prime field; `None` for degree 1.
    modulus: Option<Polynomial<FieldElement>>,
}

/// Registry key: auto-searched fields memoize on (p, n) so the search runs
/// once; explicitly-defined fields memoize on the supplied polynomial.
#[derive(Clone, PartialEq, Eq, Hash)]
enum FieldKey {
    Auto { characteristic: u64, degree: u32 },
    Explicit {
        characteristic: u64,
        degree: u32,
        modulus: Vec<u64>,
    },
}

fn registry() -> &'static Mutex<HashMap<FieldKey, Arc<FiniteField>>> {
    static REGISTRY: OnceLock<Mutex<HashMap<FieldKey, Arc<FiniteField>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

fn lock_registry() -> std::sync::MutexGuard<'static, HashMap<FieldKey, Arc<FiniteField>>> {
    match registry().lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl FiniteField {
    /// Returns the prime field Z/pZ.
    ///
    /// The characteristic is expected to be prime and is not verified.
    ///
    /// # Panics
    ///
    /// Panics if `p < 2`.
    #[must_use]
    pub fn prime(p: u64) -> Arc<Self> {
        assert!(p >= 2, "field characteristic must be at least 2");
        let key = FieldKey::Auto {
            characteristic: p,
            degree: 1,
        };
        lock_registry()
            .entry(key)
            .or_insert_with(|| {
                Arc::new(Self {
                    characteristic: p,
                    degree: 1,
                    modulus: None,
                })
            })
            .clone()
    }

    /// Returns the field F_{p^n}, searching for a defining irreducible
    /// polynomial when `n > 1`.
    ///
    /// The search is a best-effort scan of trinomials (and pentanomials in
    /// characteristic 2); the registry guarantees it runs at most once per
    /// (p, n).
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NoIrreduciblePolynomial`] when the search
    /// space is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `p < 2` or `n == 0`.
    pub fn extension(p: u64, n: u32) -> Result<Arc<Self>, AlgebraError> {
        assert!(n >= 1, "extension degree must be at least 1");
        if n == 1 {
            return Ok(Self::prime(p));
        }

        let base = Self::prime(p);
        let key = FieldKey::Auto {
            characteristic: p,
            degree: n,
        };

        let mut fields = lock_registry();
        if let Some(field) = fields.get(&key) {
            return Ok(field.clone());
        }

        let modulus = irreducible::find_irreducible(&base, n)?;
        let field = Arc::new(Self {
            characteristic: p,
            degree: n,
            modulus: Some(modulus),
        });
        fields.insert(key, field.clone());
        Ok(field)
    }

    /// Returns the field F_{p^n} defined by the given polynomial
    /// expression over F_p, e.g. `"x^3 - 3"`.
    ///
    /// # Errors
    ///
    /// Returns a parse error for input outside the grammar, or
    /// [`AlgebraError::InvalidModulus`] when the polynomial is not monic
    /// of degree `n`. Irreducibility is trusted, matching the trusted
    /// characteristic; a composite modulus surfaces later as an inversion
    /// invariant violation.
    ///
    /// # Panics
    ///
    /// Panics if `p < 2` or `n < 2`.
    pub fn with_modulus(p: u64, n: u32, modulus: &str) -> Result<Arc<Self>, AlgebraError> {
        assert!(n >= 2, "an explicit modulus requires extension degree >= 2");
        let base = Self::prime(p);
        let poly = Polynomial::parse(base, modulus)?;

        if poly.degree() != i64::from(n) || !poly.leading_coeff().is_some_and(|c: &FieldElement| c.is_one()) {
            return Err(AlgebraError::InvalidModulus {
                expected: n,
                found: poly.degree(),
            });
        }

        let key = FieldKey::Explicit {
            characteristic: p,
            degree: n,
            modulus: residues_of(&poly),
        };
        Ok(lock_registry()
            .entry(key)
            .or_insert_with(|| {
                Arc::new(Self {
                    characteristic: p,
                    degree: n,
                    modulus: Some(poly),
                })
            })
            .clone())
    }

    /// The characteristic p.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        self.characteristic
    }

    /// The extension degree n (1 for a prime field).
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// The number of elements p^n, when it fits a u64.
    #[must_use]
    pub fn order(&self) -> Option<u64> {
        self.characteristic.checked_pow(self.degree)
    }

    /// The defining polynomial, or `None` for a prime field.
    #[must_use]
    pub fn modulus(&self) -> Option<&Polynomial<FieldElement>> {
        self.modulus.as_ref()
    }

    /// The prime field this extension is built over, or `None` for a
    /// prime field itself.
    #[must_use]
    pub fn base_field(&self) -> Option<&Arc<FiniteField>> {
        self.modulus.as_ref().map(Polynomial::ring)
    }

    /// The structural descriptor of this field, used for compatibility
    /// checks and error reporting.
    #[must_use]
    pub fn descriptor(&self) -> RingDescriptor {
        RingDescriptor::FiniteField {
            characteristic: self.characteristic,
            degree: self.degree,
            modulus: self.modulus.as_ref().map(residues_of).unwrap_or_default(),
        }
    }

    /// Casts a signed integer into the field.
    #[must_use]
    pub fn element(self: &Arc<Self>, value: i64) -> FieldElement {
        let residue = reduce_signed(value, self.characteristic);
        self.element_from_residue(residue)
    }

    pub(crate) fn element_from_residue(self: &Arc<Self>, residue: u64) -> FieldElement {
        match &self.modulus {
            None => FieldElement {
                field: self.clone(),
                repr: Repr::Residue(residue % self.characteristic),
            },
            Some(modulus) => {
                let base = modulus.ring();
                let constant = Polynomial::constant(base.element_from_residue(residue));
                FieldElement {
                    field: self.clone(),
                    repr: Repr::Extension(constant),
                }
            }
        }
    }

    /// Parses a field element from a polynomial expression over the prime
    /// field, reducing modulo the defining polynomial.
    ///
    /// For a prime field the expression must be constant.
    ///
    /// # Errors
    ///
    /// Returns a parse error for input outside the grammar, and a domain
    /// error when a coefficient's denominator vanishes modulo p or a
    /// non-constant expression targets a prime field.
    pub fn parse(self: &Arc<Self>, input: &str) -> Result<FieldElement, AlgebraError> {
        match &self.modulus {
            None => {
                let poly = Polynomial::parse(self.clone(), input)?;
                if poly.degree() > 0 {
                    return Err(AlgebraError::UnexpectedCharacter('x'));
                }
                Ok(poly.coeff(0))
            }
            Some(modulus) => {
                let poly = Polynomial::parse(modulus.ring().clone(), input)?;
                self.from_polynomial(poly)
            }
        }
    }

    /// Wraps a polynomial over the prime field as a field element,
    /// reducing it modulo the defining polynomial at construction.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when the polynomial's coefficients do not
    /// belong to this field's prime field, or a domain error when a
    /// non-constant polynomial targets a prime field.
    pub fn from_polynomial(
        self: &Arc<Self>,
        value: Polynomial<FieldElement>,
    ) -> Result<FieldElement, AlgebraError> {
        match &self.modulus {
            None => {
                if value.ring() != self {
                    return Err(AlgebraError::RingMismatch(
                        self.descriptor(),
                        value.ring().descriptor(),
                    ));
                }
                if value.degree() > 0 {
                    return Err(AlgebraError::UnexpectedCharacter('x'));
                }
                Ok(value.coeff(0))
            }
            Some(modulus) => {
                if value.ring() != modulus.ring() {
                    return Err(AlgebraError::RingMismatch(
                        modulus.ring().descriptor(),
                        value.ring().descriptor(),
                    ));
                }
                let reduced = value.modulo(modulus)?;
                Ok(FieldElement {
                    field: self.clone(),
                    repr: Repr::Extension(reduced),
                })
            }
        }
    }
}

impl PartialEq for FiniteField {
    fn eq(&self, other: &Self) -> bool {
        self.characteristic == other.characteristic
            && self.degree == other.degree
            && self.modulus == other.modulus
    }
}

impl Eq for FiniteField {}

impl Hash for FiniteField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.characteristic.hash(state);
        self.degree.hash(state);
        self.modulus.hash(state);
    }
}

impl fmt::Debug for FiniteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor())
    }
}

/// Residues of a prime-field polynomial in ascending degree order,
/// including interior zeros.
fn residues_of(poly: &Polynomial<FieldElement>) -> Vec<u64> {
    poly.coeffs()
        .iter()
        .map(|c| match c.repr {
            Repr::Residue(v) => v,
            Repr::Extension(_) => unreachable!("prime-field coefficient expected"),
        })
        .collect()
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn reduce_signed(value: i64, p: u64) -> u64 {
    let m = i128::from(p);
    let r = (i128::from(value) % m + m) % m;
    r as u64
}

fn reduce_integer(value: &Integer, p: u64) -> u64 {
    let m = Integer::from(p);
    let r = value.clone() % m.clone();
    let r = if r.is_negative() { r + m } else { r };
    r.to_u64().unwrap_or(0)
}

#[allow(clippy::cast_possible_truncation)]
fn mod_mul(a: u64, b: u64, p: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(p)) as u64
}

fn mod_pow(base: u64, mut exp: u64, p: u64) -> u64 {
    let mut base = base % p;
    let mut result = 1 % p;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, base, p);
        }
        base = mod_mul(base, base, p);
        exp >>= 1;
    }
    result
}

/// Modular inverse by the extended Euclidean algorithm, renormalized into
/// `[0, p)`. `None` when the value and modulus are not coprime.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn mod_inverse(value: u64, p: u64) -> Option<u64> {
    if value == 0 {
        return None;
    }

    let mut t = 0i128;
    let mut new_t = 1i128;
    let mut r = i128::from(p);
    let mut new_r = i128::from(value);

    while new_r != 0 {
        let quotient = r / new_r;
        (t, new_t) = (new_t, t - quotient * new_t);
        (r, new_r) = (new_r, r - quotient * new_r);
    }

    if r > 1 {
        return None;
    }

    let mut t = t % i128::from(p);
    if t < 0 {
        t += i128::from(p);
    }
    Some(t as u64)
}

/// An immutable element of a finite field.
///
/// Degree-1 elements are integer residues in `[0, p)`; higher-degree
/// elements are polynomials over the prime field, reduced modulo the
/// field's defining polynomial at construction.
#[derive(Clone)]
pub struct FieldElement {
    field: Arc<FiniteField>,
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Residue(u64),
    Extension(Polynomial<FieldElement>),
}

impl FieldElement {
    /// The field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &Arc<FiniteField> {
        &self.field
    }

    /// The residue in `[0, p)` of a prime-field element.
    #[must_use]
    pub fn residue(&self) -> Option<u64> {
        match &self.repr {
            Repr::Residue(v) => Some(*v),
            Repr::Extension(_) => None,
        }
    }

    /// The reduced polynomial representation of an extension element.
    #[must_use]
    pub fn polynomial(&self) -> Option<&Polynomial<FieldElement>> {
        match &self.repr {
            Repr::Residue(_) => None,
            Repr::Extension(p) => Some(p),
        }
    }

    fn check(&self, other: &Self) -> Result<(), AlgebraError> {
        if self.field == other.field {
            Ok(())
        } else {
            Err(AlgebraError::RingMismatch(
                self.field.descriptor(),
                other.field.descriptor(),
            ))
        }
    }

    /// Adds two elements of the same field.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when the fields' keys differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check(other)?;
        let repr = match (&self.repr, &other.repr) {
            (Repr::Residue(a), Repr::Residue(b)) => {
                let p = self.field.characteristic;
                let sum = (u128::from(*a) + u128::from(*b)) % u128::from(p);
                #[allow(clippy::cast_possible_truncation)]
                let sum = sum as u64;
                Repr::Residue(sum)
            }
            (Repr::Extension(a), Repr::Extension(b)) => Repr::Extension(a.try_add(b)?),
            _ => unreachable!("elements of equal fields share a representation"),
        };
        Ok(Self {
            field: self.field.clone(),
            repr,
        })
    }

    /// Subtracts two elements of the same field.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when the fields' keys differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.try_add(&other.negated())
    }

    /// The additive inverse.
    #[must_use]
    pub fn negated(&self) -> Self {
        let repr = match &self.repr {
            Repr::Residue(v) => {
                let p = self.field.characteristic;
                Repr::Residue(if *v == 0 { 0 } else { p - v })
            }
            Repr::Extension(p) => Repr::Extension(p.negated()),
        };
        Self {
            field: self.field.clone(),
            repr,
        }
    }

    /// Multiplies two elements of the same field.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when the fields' keys differ.
    pub fn try_mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check(other)?;
        match (&self.repr, &other.repr) {
            (Repr::Residue(a), Repr::Residue(b)) => Ok(Self {
                field: self.field.clone(),
                repr: Repr::Residue(mod_mul(*a, *b, self.field.characteristic)),
            }),
            (Repr::Extension(a), Repr::Extension(b)) => {
                self.field.from_polynomial(a.try_mul(b)?)
            }
            _ => unreachable!("elements of equal fields share a representation"),
        }
    }

    /// Divides by another element of the same field.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when the fields' keys differ, and
    /// [`AlgebraError::DivisionByZero`] for a zero divisor.
    pub fn try_div(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.try_mul(&other.inverse()?)
    }

    /// The multiplicative inverse.
    ///
    /// Prime-field elements invert through the extended Euclidean
    /// algorithm on integers; extension elements run it against the
    /// defining polynomial inside the base-field polynomial ring and scale
    /// the Bezout coefficient by the inverse of the terminal constant.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] for the additive identity.
    ///
    /// # Panics
    ///
    /// Panics if the field's defining polynomial turns out not to be
    /// irreducible; that is an invariant violation of the field itself,
    /// not an input error.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        match &self.repr {
            Repr::Residue(v) => {
                let inv = mod_inverse(*v, self.field.characteristic)
                    .ok_or(AlgebraError::DivisionByZero)?;
                Ok(Self {
                    field: self.field.clone(),
                    repr: Repr::Residue(inv),
                })
            }
            Repr::Extension(value) => {
                if value.is_zero() {
                    return Err(AlgebraError::DivisionByZero);
                }
                let modulus = self
                    .field
                    .modulus()
                    .expect("extension element in a field without a modulus");
                let (g, _, t) = poly_extended_gcd(modulus, value)?;
                assert!(
                    g.degree() == 0,
                    "defining polynomial of {} is not irreducible",
                    self.field.descriptor()
                );
                Ok(Self {
                    field: self.field.clone(),
                    repr: Repr::Extension(t),
                })
            }
        }
    }

    /// Raises the element to a signed integer power.
    ///
    /// A negative exponent inverts first; the exponentiation itself is
    /// square-and-multiply, recursing on halved exponents for extension
    /// elements.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DivisionByZero`] when zero is raised to a
    /// negative power.
    pub fn pow(&self, exponent: i64) -> Result<Self, AlgebraError> {
        if exponent < 0 {
            self.inverse()?.pow_unsigned(exponent.unsigned_abs())
        } else {
            self.pow_unsigned(exponent.unsigned_abs())
        }
    }

    fn pow_unsigned(&self, exponent: u64) -> Result<Self, AlgebraError> {
        match &self.repr {
            Repr::Residue(v) => Ok(Self {
                field: self.field.clone(),
                repr: Repr::Residue(mod_pow(*v, exponent, self.field.characteristic)),
            }),
            Repr::Extension(_) => {
                if exponent == 0 {
                    return Ok(Self::one(&self.field));
                }
                let squared = self.try_mul(self)?;
                if exponent % 2 == 0 {
                    squared.pow_unsigned(exponent / 2)
                } else {
                    self.try_mul(&squared.pow_unsigned((exponent - 1) / 2)?)
                }
            }
        }
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        if self.field != other.field {
            return false;
        }
        match (&self.repr, &other.repr) {
            (Repr::Residue(a), Repr::Residue(b)) => a == b,
            (Repr::Extension(a), Repr::Extension(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for FieldElement {}

impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        match &self.repr {
            Repr::Residue(v) => v.hash(state),
            Repr::Extension(p) => p.hash(state),
        }
    }
}

impl Ring for FieldElement {
    type Context = Arc<FiniteField>;

    fn context(&self) -> Self::Context {
        self.field.clone()
    }

    fn zero(ctx: &Self::Context) -> Self {
        ctx.element_from_residue(0)
    }

    fn one(ctx: &Self::Context) -> Self {
        ctx.element_from_residue(1)
    }

    fn is_zero(&self) -> bool {
        match &self.repr {
            Repr::Residue(v) => *v == 0,
            Repr::Extension(p) => p.is_zero(),
        }
    }

    fn is_one(&self) -> bool {
        match &self.repr {
            Repr::Residue(v) => *v == 1,
            Repr::Extension(p) => p.is_one(),
        }
    }

    fn descriptor(ctx: &Self::Context) -> RingDescriptor {
        ctx.descriptor()
    }

    fn from_integer(ctx: &Self::Context, value: i64) -> Self {
        ctx.element(value)
    }

    fn from_rational(ctx: &Self::Context, value: &Rational) -> Result<Self, AlgebraError> {
        let p = ctx.characteristic;
        let numerator = reduce_integer(&value.numerator(), p);
        let denominator = reduce_integer(&value.denominator(), p);
        let denominator_inv = mod_inverse(denominator, p).ok_or(AlgebraError::DivisionByZero)?;
        Ok(ctx.element_from_residue(mod_mul(numerator, denominator_inv, p)))
    }

    fn unit_inverse(&self) -> Option<Self> {
        self.inverse().ok()
    }
}

impl CommutativeRing for FieldElement {}
impl IntegralDomain for FieldElement {}

impl EuclideanDomain for FieldElement {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        // In a field, division is exact
        match self.try_div(other) {
            Ok(q) => (q, Self::zero(&self.field)),
            Err(e) => panic!("{e}"),
        }
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero(&self.field)
        } else {
            Self::one(&self.field)
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let zero = Self::zero(&self.field);
        if self.is_zero() && other.is_zero() {
            return (zero.clone(), zero.clone(), zero);
        }

        let invert = |x: &Self| match x.inverse() {
            Ok(inv) => inv,
            Err(e) => panic!("{e}"),
        };
        if self.is_zero() {
            (Self::one(&self.field), zero, invert(other))
        } else {
            (Self::one(&self.field), invert(self), zero)
        }
    }
}

impl Field for FieldElement {
    fn inv(&self) -> Option<Self> {
        self.inverse().ok()
    }
}

impl std::ops::Add for FieldElement {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on mismatched fields; the checked form is
    /// [`FieldElement::try_add`].
    fn add(self, rhs: Self) -> Self::Output {
        match self.try_add(&rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Sub for FieldElement {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on mismatched fields; the checked form is
    /// [`FieldElement::try_sub`].
    fn sub(self, rhs: Self) -> Self::Output {
        match self.try_sub(&rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Mul for FieldElement {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on mismatched fields; the checked form is
    /// [`FieldElement::try_mul`].
    fn mul(self, rhs: Self) -> Self::Output {
        match self.try_mul(&rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Div for FieldElement {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on mismatched fields or a zero divisor; the checked form is
    /// [`FieldElement::try_div`].
    fn div(self, rhs: Self) -> Self::Output {
        match self.try_div(&rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Residue(v) => write!(f, "{v}"),
            Repr::Extension(p) => write!(f, "{p}"),
        }
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.field.descriptor(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f7() -> Arc<FiniteField> {
        FiniteField::prime(7)
    }

    fn f343() -> Arc<FiniteField> {
        FiniteField::with_modulus(7, 3, "x^3 - 3").unwrap()
    }

    #[test]
    fn test_construction_from_int() {
        let f = f7();
        assert_eq!(f.element(3).residue(), Some(3));
        assert_eq!(f.element(30).residue(), Some(2));
        assert_eq!(f.element(-4).residue(), Some(3));
    }

    #[test]
    fn test_eq_duplicate_field() {
        let a = FiniteField::prime(7);
        let b = FiniteField::prime(7);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.element(3), b.element(3));
        assert_eq!(a.element(3).try_add(&b.element(5)).unwrap(), a.element(1));
    }

    #[test]
    fn test_arithmetic() {
        let f = f7();
        assert_eq!(f.element(3) + f.element(2), f.element(5));
        assert_eq!(f.element(3) + f.element(4), f.element(0));
        assert_eq!(-f.element(3), f.element(4));
        assert_eq!(f.element(3) - f.element(4), f.element(6));
        assert_eq!(f.element(2) * f.element(3), f.element(6));
        assert_eq!(f.element(3) * f.element(4), f.element(5));
    }

    #[test]
    fn test_inverse() {
        let f = f7();
        assert_eq!(f.element(3).inverse().unwrap(), f.element(5));
        assert_eq!(
            f.element(0).inverse().unwrap_err(),
            AlgebraError::DivisionByZero
        );

        for v in 1..7 {
            let x = f.element(v);
            assert_eq!(x.clone() * x.inverse().unwrap(), f.element(1));
        }
    }

    #[test]
    fn test_division() {
        let f = f7();
        assert_eq!(f.element(3) / f.element(4), f.element(6));
    }

    #[test]
    fn test_pow() {
        let f = f7();
        assert_eq!(f.element(3).pow(5).unwrap(), f.element(5));
        assert_eq!(f.element(3).pow(0).unwrap(), f.element(1));
        assert_eq!(f.element(3).pow(-1).unwrap(), f.element(5));
        // Fermat: a^(p-1) = 1
        for v in 1..7 {
            assert_eq!(f.element(v).pow(6).unwrap(), f.element(1));
        }
    }

    #[test]
    fn test_mismatched_fields_error() {
        let a = FiniteField::prime(3).element(2);
        let b = FiniteField::prime(7).element(4);

        for result in [
            a.try_add(&b),
            a.try_sub(&b),
            a.try_mul(&b),
            a.try_div(&b),
        ] {
            assert!(matches!(result, Err(AlgebraError::RingMismatch(_, _))));
        }
    }

    #[test]
    fn test_rational_coercion() {
        let f = f7();
        // 1/2 = inverse of 2 = 4 (mod 7)
        assert_eq!(f.parse("1/2").unwrap(), f.element(4));
        // denominator divisible by p has no image
        assert_eq!(
            f.parse("1/7").unwrap_err(),
            AlgebraError::DivisionByZero
        );
    }

    #[test]
    fn test_prime_field_parse_rejects_variable() {
        assert_eq!(
            f7().parse("x + 1").unwrap_err(),
            AlgebraError::UnexpectedCharacter('x')
        );
    }

    #[test]
    fn test_extension_construction_from_expression() {
        let field = f343();
        let base = field.base_field().unwrap().clone();

        let value = field.parse("x^2 + 1").unwrap();
        assert_eq!(
            value.polynomial().unwrap(),
            &Polynomial::parse(base.clone(), "x^2 + 1").unwrap()
        );

        // the modulus itself reduces to zero
        assert!(field.parse("x^3 - 3").unwrap().is_zero());

        // x^4 + 2 = x * x^3 + 2 = 3x + 2 (mod x^3 - 3)
        assert_eq!(
            field.parse("x^4 + 2").unwrap(),
            field.parse("3x + 2").unwrap()
        );
    }

    #[test]
    fn test_extension_inverse() {
        let field = f343();
        let x = field.parse("x^2 + 1").unwrap();
        let inv = x.inverse().unwrap();
        assert_eq!(inv, field.parse("2x^2 + x + 5").unwrap());
        assert_eq!(x * inv, field.element(1));
    }

    #[test]
    fn test_extension_inverse_roundtrip() {
        let field = f343();
        for expr in ["1", "x", "x + 1", "2x^2 + 4", "x^2 + x + 1"] {
            let v = field.parse(expr).unwrap();
            assert_eq!(v.clone() * v.inverse().unwrap(), field.element(1));
        }
    }

    #[test]
    fn test_extension_pow() {
        let field = f343();
        let x = field.parse("x + 1").unwrap();
        assert_eq!(x.pow(0).unwrap(), field.element(1));
        assert_eq!(x.pow(2).unwrap(), x.clone() * x.clone());
        assert_eq!(x.pow(-2).unwrap(), (x.clone() * x).inverse().unwrap());
    }

    #[test]
    fn test_extension_order_of_multiplicative_group() {
        // Fermat in F_343: a^(342) = 1 for nonzero a
        let field = f343();
        let a = field.parse("x^2 + 2x + 1").unwrap();
        assert_eq!(a.pow(342).unwrap(), field.element(1));
    }

    #[test]
    fn test_explicit_modulus_memoized() {
        let a = FiniteField::with_modulus(7, 3, "x^3 - 3").unwrap();
        let b = FiniteField::with_modulus(7, 3, "x^3 - 3").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.parse("x").unwrap(), b.parse("x").unwrap());
    }

    #[test]
    fn test_invalid_modulus() {
        assert_eq!(
            FiniteField::with_modulus(7, 3, "x^2 + 1").unwrap_err(),
            AlgebraError::InvalidModulus {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            FiniteField::with_modulus(7, 3, "2x^3 + 1").unwrap_err(),
            AlgebraError::InvalidModulus {
                expected: 3,
                found: 3
            }
        );
    }

    #[test]
    fn test_auto_extension() {
        let field = FiniteField::extension(7, 2).unwrap();
        assert_eq!(field.degree(), 2);
        assert_eq!(field.order(), Some(49));

        let x = field.parse("x").unwrap();
        assert_eq!(x.clone() * x.inverse().unwrap(), field.element(1));

        // memoized: the search runs once and later requests see the same key
        let again = FiniteField::extension(7, 2).unwrap();
        assert!(Arc::ptr_eq(&field, &again));
    }

    #[test]
    fn test_auto_extension_char_two() {
        let field = FiniteField::extension(2, 2).unwrap();
        let base = field.base_field().unwrap().clone();
        // degree 2 over F_2 uses x^2 + x + 1 directly
        assert_eq!(
            field.modulus().unwrap(),
            &Polynomial::parse(base, "x^2 + x + 1").unwrap()
        );
    }

    #[test]
    fn test_descriptor() {
        let d = f343().descriptor();
        assert_eq!(
            d,
            RingDescriptor::FiniteField {
                characteristic: 7,
                degree: 3,
                modulus: vec![4, 0, 0, 1],
            }
        );
        assert!(d.is_field());
        assert_eq!(d.characteristic(), 7);
    }

    #[test]
    fn test_display() {
        let f = f7();
        assert_eq!(f.element(5).to_string(), "5");
        assert_eq!(format!("{:?}", f.element(5)), "F_7(5)");

        let e = f343().parse("3x + 2").unwrap();
        assert_eq!(e.to_string(), "2 + 3x");
    }

    #[test]
    fn test_field_trait_impls() {
        let f = f7();
        let a = f.element(3);
        assert_eq!(a.inv(), Some(f.element(5)));
        let (g, s, t) = a.extended_gcd(&f.element(0));
        assert!(g.is_one());
        assert_eq!(a * s + f.element(0) * t, f.element(1));
    }
}
