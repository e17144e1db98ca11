//! Univariate polynomials over a coefficient ring.
//!
//! A polynomial owns the context of its coefficient ring (the "ring tag"),
//! so two polynomials combine only when their tags compare equal. For Z and
//! Q the tag is `()` and compatibility is purely a type-system fact; for
//! finite-field coefficients the tag names the field and is checked at
//! every binary operation.

use std::fmt;

use num_traits::Zero;

use noether_integers::Rational;
use noether_rings::{
    AlgebraError, CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring, RingDescriptor, Q,
    Z,
};

use crate::parser;

/// A univariate polynomial with coefficients in the ring `R`.
///
/// Coefficients are stored in ascending degree order with trailing zeros
/// trimmed; the zero polynomial stores no coefficients at all, giving it
/// the sentinel degree −1.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial<R: CommutativeRing> {
    ring: R::Context,
    coeffs: Vec<R>,
}

impl<R: CommutativeRing> Polynomial<R> {
    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// Trailing zeros are removed. Every coefficient must belong to the
    /// ring described by `ring`.
    #[must_use]
    pub fn new(ring: R::Context, mut coeffs: Vec<R>) -> Self {
        debug_assert!(
            coeffs.iter().all(|c| c.context() == ring),
            "coefficients must belong to the coefficient ring"
        );
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        Self { ring, coeffs }
    }

    /// Creates a constant polynomial; the ring tag is taken from the
    /// constant itself.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(c.context(), vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x(ring: R::Context) -> Self {
        let coeffs = vec![R::zero(&ring), R::one(&ring)];
        Self { ring, coeffs }
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let ring = c.context();
        if c.is_zero() {
            return Self {
                ring,
                coeffs: Vec::new(),
            };
        }
        let mut coeffs = vec![R::zero(&ring); n + 1];
        coeffs[n] = c;
        Self { ring, coeffs }
    }

    /// Creates a polynomial from (degree, coefficient) pairs, summing
    /// coefficients given for the same degree.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when a coefficient belongs to a ring other
    /// than `ring`.
    pub fn from_map<I>(ring: R::Context, terms: I) -> Result<Self, AlgebraError>
    where
        I: IntoIterator<Item = (usize, R)>,
    {
        let mut coeffs: Vec<R> = Vec::new();
        for (degree, c) in terms {
            if c.context() != ring {
                return Err(AlgebraError::RingMismatch(
                    R::descriptor(&c.context()),
                    R::descriptor(&ring),
                ));
            }
            if coeffs.len() <= degree {
                coeffs.resize(degree + 1, R::zero(&ring));
            }
            coeffs[degree] = coeffs[degree].clone() + c;
        }
        Ok(Self::new(ring, coeffs))
    }

    /// Parses a polynomial expression such as `"x^2 - 3x + 1/2"`.
    ///
    /// Coefficients are coerced into `R` through the ring's rational
    /// constructor; degrees repeated across terms are summed before the
    /// coercion; empty input parses to the zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns a domain error for input outside the grammar (dangling
    /// exponent, unexpected character) or for coefficients with no image
    /// in `R`.
    pub fn parse(ring: R::Context, input: &str) -> Result<Self, AlgebraError> {
        let terms = parser::parse_terms(input, 'x')?;
        let mut coeffs: Vec<R> = Vec::new();
        for (degree, value) in terms {
            if value.is_zero() {
                continue;
            }
            let c = R::from_rational(&ring, &value)?;
            if c.is_zero() {
                continue;
            }
            if coeffs.len() <= degree {
                coeffs.resize(degree + 1, R::zero(&ring));
            }
            coeffs[degree] = c;
        }
        Ok(Self::new(ring, coeffs))
    }

    /// Returns the context of the coefficient ring.
    pub fn ring(&self) -> &R::Context {
        &self.ring
    }

    /// Returns the degree, or −1 for the zero polynomial.
    ///
    /// No valid degree is negative, so the sentinel is unambiguous.
    #[must_use]
    pub fn degree(&self) -> i64 {
        self.coeffs.len() as i64 - 1
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.coeffs.last()
    }

    /// Returns the coefficient of x^i (zero beyond the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs
            .get(i)
            .cloned()
            .unwrap_or_else(|| R::zero(&self.ring))
    }

    /// Returns all stored coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    fn check_ring(&self, other: &Self) -> Result<(), AlgebraError> {
        if self.ring == other.ring {
            Ok(())
        } else {
            Err(AlgebraError::RingMismatch(
                <Self as Ring>::descriptor(&self.ring),
                <Self as Ring>::descriptor(&other.ring),
            ))
        }
    }

    /// Adds two polynomials pointwise.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when the coefficient-ring tags differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_ring(other)?;
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            result.push(self.coeff(i) + other.coeff(i));
        }

        Ok(Self::new(self.ring.clone(), result))
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn negated(&self) -> Self {
        let coeffs = self.coeffs.iter().map(|c| -c.clone()).collect();
        Self {
            ring: self.ring.clone(),
            coeffs,
        }
    }

    /// Subtracts two polynomials pointwise.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when the coefficient-ring tags differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.try_add(&other.negated())
    }

    /// Multiplies two polynomials by discrete convolution.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when the coefficient-ring tags differ.
    pub fn try_mul(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.check_ring(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(<Self as Ring>::zero(&self.ring));
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(&self.ring); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                result[i + j] =
                    result[i + j].clone() + self.coeffs[i].clone() * other.coeffs[j].clone();
            }
        }

        Ok(Self::new(self.ring.clone(), result))
    }

    /// Multiplies every coefficient by a scalar from the base ring.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when the scalar belongs to another ring.
    pub fn scale(&self, c: &R) -> Result<Self, AlgebraError> {
        if c.context() != self.ring {
            return Err(AlgebraError::RingMismatch(
                R::descriptor(&self.ring),
                R::descriptor(&c.context()),
            ));
        }
        let coeffs = self.coeffs.iter().map(|x| x.clone() * c.clone()).collect();
        Ok(Self::new(self.ring.clone(), coeffs))
    }

    /// Evaluates the polynomial at a point of the coefficient ring using
    /// Horner's method.
    ///
    /// # Errors
    ///
    /// Returns a ring mismatch when the point belongs to another ring.
    pub fn eval(&self, point: &R) -> Result<R, AlgebraError> {
        if point.context() != self.ring {
            return Err(AlgebraError::RingMismatch(
                R::descriptor(&self.ring),
                R::descriptor(&point.context()),
            ));
        }
        let mut result = R::zero(&self.ring);
        for c in self.coeffs.iter().rev() {
            result = result * point.clone() + c.clone();
        }
        Ok(result)
    }

    /// Division with remainder by repeated leading-term elimination.
    ///
    /// Returns `(quotient, remainder)` with
    /// `self = divisor * quotient + remainder` and
    /// `remainder.degree() < divisor.degree()`. Legal when the coefficient
    /// ring is a field, or when the divisor is monic (in particular the
    /// integer-coefficient case).
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::DivisionByZero`] for a zero divisor
    /// - [`AlgebraError::NonMonicDivisor`] when the divisor's leading
    ///   coefficient is not one and the ring is not a field
    /// - [`AlgebraError::RingMismatch`] when the tags differ
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), AlgebraError> {
        self.check_ring(divisor)?;
        let lead = divisor
            .coeffs
            .last()
            .cloned()
            .ok_or(AlgebraError::DivisionByZero)?;

        let lead_inv = if lead.is_one() {
            None
        } else if R::descriptor(&self.ring).is_field() {
            Some(lead.unit_inverse().ok_or(AlgebraError::DivisionByZero)?)
        } else {
            return Err(AlgebraError::NonMonicDivisor);
        };

        let divisor_deg = divisor.coeffs.len() - 1;
        let mut remainder = self.coeffs.clone();
        let quotient_len = remainder.len().saturating_sub(divisor_deg);
        let mut quotient = vec![R::zero(&self.ring); quotient_len];

        loop {
            while remainder.last().is_some_and(|c| c.is_zero()) {
                remainder.pop();
            }
            if remainder.len() <= divisor_deg {
                break;
            }

            let rem_deg = remainder.len() - 1;
            let shift = rem_deg - divisor_deg;
            let factor = match &lead_inv {
                Some(inv) => remainder[rem_deg].clone() * inv.clone(),
                None => remainder[rem_deg].clone(),
            };

            for (k, dc) in divisor.coeffs.iter().enumerate() {
                remainder[shift + k] = remainder[shift + k].clone() - factor.clone() * dc.clone();
            }
            quotient[shift] = factor;
        }

        Ok((
            Self::new(self.ring.clone(), quotient),
            Self::new(self.ring.clone(), remainder),
        ))
    }

    /// The quotient component of [`Polynomial::div_rem`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Polynomial::div_rem`].
    pub fn floor_div(&self, divisor: &Self) -> Result<Self, AlgebraError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// The remainder component of [`Polynomial::div_rem`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Polynomial::div_rem`].
    pub fn modulo(&self, divisor: &Self) -> Result<Self, AlgebraError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
}

impl<F: Field> Polynomial<F> {
    /// Scales the polynomial so its leading coefficient is one.
    ///
    /// Returns `None` for the zero polynomial.
    #[must_use]
    pub fn monic(&self) -> Option<Self> {
        let inv = self.coeffs.last()?.inv()?;
        self.scale(&inv).ok()
    }
}

impl Polynomial<Z> {
    /// The gcd of all coefficients: 0 for no terms, the coefficient itself
    /// for a single term.
    #[must_use]
    pub fn content(&self) -> Z {
        let nonzero: Vec<&Z> = self.coeffs.iter().filter(|c| !c.is_zero()).collect();
        match nonzero.len() {
            0 => Z::new(0),
            1 => nonzero[0].clone(),
            _ => nonzero[1..]
                .iter()
                .fold(nonzero[0].clone(), |acc, c| acc.gcd(c)),
        }
    }

    /// Divides every coefficient by the content, yielding coprime integer
    /// coefficients.
    #[must_use]
    pub fn primitive_part(&self) -> Self {
        let content = self.content();
        if content.is_zero() || content.is_one() {
            return self.clone();
        }
        let coeffs = self.coeffs.iter().map(|c| c.div(&content)).collect();
        Self::new((), coeffs)
    }

    /// Reinterprets the coefficients in the rational field, lifting the
    /// polynomial into Q[x] where the Euclidean algorithm applies.
    #[must_use]
    pub fn lift_to_rationals(&self) -> Polynomial<Q> {
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| Q(Rational::from_integer(c.0.clone())))
            .collect();
        Polynomial::new((), coeffs)
    }
}

impl Polynomial<Q> {
    /// The content of a rational-coefficient polynomial: scale by the
    /// largest denominator to an integer polynomial, take its content, and
    /// divide back by that denominator.
    #[must_use]
    pub fn content(&self) -> Q {
        if self.is_zero() {
            return Q::zero(&());
        }

        let max_den = self
            .coeffs
            .iter()
            .filter(|c| !c.is_zero())
            .map(Q::denominator)
            .max()
            .unwrap_or_else(num_traits::One::one);

        let scaled: Vec<Z> = self
            .coeffs
            .iter()
            .map(|c| {
                let v = c.0.clone() * Rational::from_integer(max_den.clone());
                Z(v.numerator())
            })
            .collect();
        let int_content = Polynomial::new((), scaled).content();

        Q(Rational::new(int_content.into_inner(), max_den))
    }

    /// Divides every coefficient by the content, pulling the polynomial
    /// back to integer coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NonIntegerCoefficient`] when a scaled
    /// coefficient is not a whole number; this surfaces instead of a
    /// silent truncation.
    pub fn primitive_part(&self) -> Result<Polynomial<Z>, AlgebraError> {
        if self.is_zero() {
            return Ok(<Polynomial<Z> as Ring>::zero(&()));
        }
        let inv = self.content().inv().ok_or(AlgebraError::DivisionByZero)?;
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| Z::from_rational(&(), &(c.clone() * inv.clone()).0))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polynomial::new((), coeffs))
    }
}

/* ---- algebraic trait implementations ---- */

impl<R: CommutativeRing> Ring for Polynomial<R> {
    type Context = R::Context;

    fn context(&self) -> Self::Context {
        self.ring.clone()
    }

    fn zero(ctx: &Self::Context) -> Self {
        Self {
            ring: ctx.clone(),
            coeffs: Vec::new(),
        }
    }

    fn one(ctx: &Self::Context) -> Self {
        Self {
            ring: ctx.clone(),
            coeffs: vec![R::one(ctx)],
        }
    }

    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    fn descriptor(ctx: &Self::Context) -> RingDescriptor {
        RingDescriptor::Polynomial(Box::new(R::descriptor(ctx)))
    }

    fn from_integer(ctx: &Self::Context, value: i64) -> Self {
        Self::constant(R::from_integer(ctx, value))
    }

    fn from_rational(ctx: &Self::Context, value: &Rational) -> Result<Self, AlgebraError> {
        R::from_rational(ctx, value).map(Self::constant)
    }
}

impl<R: CommutativeRing> CommutativeRing for Polynomial<R> {}
impl<R: IntegralDomain> IntegralDomain for Polynomial<R> {}

/// A polynomial ring over a field is Euclidean.
impl<F: Field> EuclideanDomain for Polynomial<F> {
    /// # Panics
    ///
    /// Panics on a zero divisor or mismatched ring tags; the checked form
    /// is [`Polynomial::div_rem`].
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        match Polynomial::div_rem(self, other) {
            Ok(pair) => pair,
            Err(e) => panic!("{e}"),
        }
    }

    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = EuclideanDomain::rem(&a, &b);
            a = b;
            b = r;
        }

        // Normalize so the gcd is canonical among its associates.
        a.monic().unwrap_or(a)
    }
}

/* ---- operators ---- */

impl<R: CommutativeRing> std::ops::Add for Polynomial<R> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on mismatched ring tags; the checked form is
    /// [`Polynomial::try_add`].
    fn add(self, rhs: Self) -> Self::Output {
        match self.try_add(&rhs) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<R: CommutativeRing> std::ops::Sub for Polynomial<R> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on mismatched ring tags; the checked form is
    /// [`Polynomial::try_sub`].
    fn sub(self, rhs: Self) -> Self::Output {
        match self.try_sub(&rhs) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<R: CommutativeRing> std::ops::Mul for Polynomial<R> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on mismatched ring tags; the checked form is
    /// [`Polynomial::try_mul`].
    fn mul(self, rhs: Self) -> Self::Output {
        match self.try_mul(&rhs) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Scalar multiplication by an element of the base ring.
impl<R: CommutativeRing> std::ops::Mul<R> for Polynomial<R> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when the scalar belongs to another ring; the checked form is
    /// [`Polynomial::scale`].
    fn mul(self, rhs: R) -> Self::Output {
        match self.scale(&rhs) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<R: CommutativeRing> std::ops::Neg for Polynomial<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl<F: Field> std::ops::Div for Polynomial<F> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on a zero divisor or mismatched ring tags; the checked form
    /// is [`Polynomial::floor_div`].
    fn div(self, rhs: Self) -> Self::Output {
        match self.floor_div(&rhs) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<F: Field> std::ops::Rem for Polynomial<F> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on a zero divisor or mismatched ring tags; the checked form
    /// is [`Polynomial::modulo`].
    fn rem(self, rhs: Self) -> Self::Output {
        match self.modulo(&rhs) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<R: CommutativeRing + fmt::Display> fmt::Display for Polynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut out = String::new();
        for (degree, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let mut body = c.to_string();
            let negative = body.starts_with('-');
            if negative {
                body.remove(0);
            }
            let unit = body == "1";

            let term = match degree {
                0 => body,
                1 if unit => "x".to_string(),
                1 => format!("{body}x"),
                _ if unit => format!("x^{degree}"),
                _ => format!("{body}x^{degree}"),
            };

            if out.is_empty() {
                if negative {
                    out.push('-');
                }
            } else {
                out.push_str(if negative { " - " } else { " + " });
            }
            out.push_str(&term);
        }

        write!(f, "{out}")
    }
}
