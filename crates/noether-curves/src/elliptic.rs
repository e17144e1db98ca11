//! The elliptic-curve group law.
//!
//! Curves are in short Weierstrass form y² = x³ + ax + b over a field of
//! characteristic other than 2 and 3. Points are projective with the
//! distinguished point at infinity (0 : 1 : 0); finite points carry
//! affine coordinates (x : y : 1). Membership on the curve is a
//! caller-enforced invariant, not checked by the type.

use std::fmt;
use std::sync::Arc;

use noether_rings::{AlgebraError, Field, Ring};

use crate::projective::ProjectivePoint;

/// An elliptic curve y² = x³ + ax + b with an optional base point.
#[derive(Clone, Debug)]
pub struct EllipticCurve<F: Field> {
    field: F::Context,
    a: F,
    b: F,
    generator: Option<ProjectivePoint<F>>,
}

impl<F: Field> EllipticCurve<F> {
    /// Creates a curve from its constants, which must share a field of
    /// characteristic other than 2 and 3.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::SmallCharacteristic`] over characteristic 2 or 3,
    ///   where the chord-and-tangent formulas degenerate
    /// - [`AlgebraError::RingMismatch`] when the constants or the
    ///   generator disagree about the field
    pub fn new(
        a: F,
        b: F,
        generator: Option<ProjectivePoint<F>>,
    ) -> Result<Arc<Self>, AlgebraError> {
        let field = a.context();
        if b.context() != field {
            return Err(AlgebraError::RingMismatch(
                F::descriptor(&field),
                F::descriptor(&b.context()),
            ));
        }
        if let Some(g) = &generator {
            if *g.field() != field {
                return Err(AlgebraError::RingMismatch(
                    F::descriptor(&field),
                    F::descriptor(g.field()),
                ));
            }
        }

        let characteristic = F::descriptor(&field).characteristic();
        if characteristic == 2 || characteristic == 3 {
            return Err(AlgebraError::SmallCharacteristic(characteristic));
        }

        Ok(Arc::new(Self {
            field,
            a,
            b,
            generator,
        }))
    }

    /// Creates a curve by casting integer constants into the field.
    ///
    /// # Errors
    ///
    /// Same conditions as [`EllipticCurve::new`].
    pub fn from_integers(field: &F::Context, a: i64, b: i64) -> Result<Arc<Self>, AlgebraError> {
        Self::new(F::from_integer(field, a), F::from_integer(field, b), None)
    }

    /// The curve constant a.
    pub fn a(&self) -> &F {
        &self.a
    }

    /// The curve constant b.
    pub fn b(&self) -> &F {
        &self.b
    }

    /// The field the curve is defined over.
    pub fn field(&self) -> &F::Context {
        &self.field
    }

    /// The point at infinity (0 : 1 : 0), the group identity.
    #[must_use]
    pub fn identity(self: &Arc<Self>) -> CurvePoint<F> {
        let coords = vec![
            F::zero(&self.field),
            F::one(&self.field),
            F::zero(&self.field),
        ];
        let point = match ProjectivePoint::new(coords) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        };
        CurvePoint {
            curve: self.clone(),
            point,
        }
    }

    /// The configured base point, if any.
    #[must_use]
    pub fn generator(self: &Arc<Self>) -> Option<CurvePoint<F>> {
        self.generator.clone().map(|point| CurvePoint {
            curve: self.clone(),
            point,
        })
    }

    /// The finite point with the given affine integer coordinates, cast
    /// into the curve's field.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::AllCoordinatesZero`] when both casts are
    /// the field's additive identity and the point degenerates.
    pub fn point(self: &Arc<Self>, x: i64, y: i64) -> Result<CurvePoint<F>, AlgebraError> {
        let coords = vec![
            F::from_integer(&self.field, x),
            F::from_integer(&self.field, y),
            F::one(&self.field),
        ];
        Ok(CurvePoint {
            curve: self.clone(),
            point: ProjectivePoint::new(coords)?,
        })
    }

    /// Wraps an existing projective point as a point of this curve.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::RingMismatch`] when the point's field
    /// differs from the curve's.
    ///
    /// # Panics
    ///
    /// Panics if the point is not three-dimensional.
    pub fn point_from(
        self: &Arc<Self>,
        point: ProjectivePoint<F>,
    ) -> Result<CurvePoint<F>, AlgebraError> {
        assert!(point.dim() == 3, "curve points are three-dimensional");
        if *point.field() != self.field {
            return Err(AlgebraError::RingMismatch(
                F::descriptor(&self.field),
                F::descriptor(point.field()),
            ));
        }
        Ok(CurvePoint {
            curve: self.clone(),
            point,
        })
    }
}

/// Curves compare by field and constants; the optional base point does
/// not affect which group the points live in.
impl<F: Field> PartialEq for EllipticCurve<F> {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.a == other.a && self.b == other.b
    }
}

impl<F: Field> Eq for EllipticCurve<F> {}

/// A point of an elliptic curve.
#[derive(Clone, Debug)]
pub struct CurvePoint<F: Field> {
    curve: Arc<EllipticCurve<F>>,
    point: ProjectivePoint<F>,
}

impl<F: Field> CurvePoint<F> {
    /// The curve this point belongs to.
    pub fn curve(&self) -> &Arc<EllipticCurve<F>> {
        &self.curve
    }

    /// The underlying projective point.
    pub fn projective(&self) -> &ProjectivePoint<F> {
        &self.point
    }

    /// Tests projective equality against the point at infinity.
    #[must_use]
    pub fn is_infinity(&self) -> bool {
        self.point == self.curve.identity().point
    }

    /// The group negation: (x : y : z) → (x : −y : z), with infinity
    /// fixed.
    #[must_use]
    pub fn negated(&self) -> Self {
        if self.is_infinity() {
            return self.clone();
        }

        let c = self.point.coords();
        let coords = vec![c[0].clone(), -c[1].clone(), c[2].clone()];
        let point = match ProjectivePoint::new(coords) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        };
        Self {
            curve: self.curve.clone(),
            point,
        }
    }

    /// The chord-and-tangent addition law.
    ///
    /// Infinity is the identity; mirror-image points cancel; equal x with
    /// equal y doubles along the tangent; otherwise the secant through
    /// both points is used.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::CurveMismatch`] when the operands lie on
    /// different curves.
    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        if self.curve != other.curve {
            return Err(AlgebraError::CurveMismatch);
        }

        if self.is_infinity() {
            return Ok(other.clone());
        }
        if other.is_infinity() {
            return Ok(self.clone());
        }

        let field = &self.curve.field;
        let (x1, y1) = (&self.point.coords()[0], &self.point.coords()[1]);
        let (x2, y2) = (&other.point.coords()[0], &other.point.coords()[1]);

        let slope = if x1 == x2 {
            if *y1 == -y2.clone() {
                return Ok(self.curve.identity());
            }

            // tangent line
            let numerator = F::from_integer(field, 3) * x1.clone() * x1.clone()
                + self.curve.a.clone();
            let denominator = F::from_integer(field, 2) * y1.clone();
            numerator * denominator.inv().ok_or(AlgebraError::DivisionByZero)?
        } else {
            // secant line
            let denominator = x1.clone() - x2.clone();
            (y1.clone() - y2.clone())
                * denominator.inv().ok_or(AlgebraError::DivisionByZero)?
        };

        let x = slope.clone() * slope.clone() - x1.clone() - x2.clone();
        let y = -y1.clone() + slope * (x1.clone() - x.clone());

        let point = ProjectivePoint::new(vec![x, y, F::one(field)])?;
        Ok(Self {
            curve: self.curve.clone(),
            point,
        })
    }

    /// Scalar multiplication by a signed integer.
    ///
    /// Negative multiples negate first; the recursion halves even
    /// multiples and peels one addition off odd ones, so the work is
    /// logarithmic in the multiplier.
    ///
    /// # Errors
    ///
    /// Propagates [`CurvePoint::try_add`] failures, which cannot occur
    /// for a point multiplied against itself.
    pub fn multiply(&self, n: i64) -> Result<Self, AlgebraError> {
        if n < 0 {
            self.negated().multiply_unsigned(n.unsigned_abs())
        } else {
            self.multiply_unsigned(n.unsigned_abs())
        }
    }

    fn multiply_unsigned(&self, n: u64) -> Result<Self, AlgebraError> {
        if n == 0 {
            return Ok(self.curve.identity());
        }
        if n % 2 == 0 {
            self.try_add(self)?.multiply_unsigned(n / 2)
        } else {
            self.try_add(&self.multiply_unsigned(n - 1)?)
        }
    }
}

impl<F: Field> PartialEq for CurvePoint<F> {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.point == other.point
    }
}

impl<F: Field> Eq for CurvePoint<F> {}

impl<F: Field> std::ops::Add for CurvePoint<F> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics when the operands lie on different curves; the checked form
    /// is [`CurvePoint::try_add`].
    fn add(self, rhs: Self) -> Self::Output {
        match self.try_add(&rhs) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<F: Field> std::ops::Neg for CurvePoint<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl<F: Field> std::ops::Mul<i64> for CurvePoint<F> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics only on internal addition failures, which cannot occur for
    /// well-formed points; the checked form is [`CurvePoint::multiply`].
    fn mul(self, n: i64) -> Self::Output {
        match self.multiply(n) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<F: Field + fmt::Display> fmt::Display for CurvePoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noether_fields::{FieldElement, FiniteField};
    use noether_rings::Q;

    fn curve() -> Arc<EllipticCurve<FieldElement>> {
        // y^2 = x^3 + 2x + 3 over F_101
        EllipticCurve::from_integers(&FiniteField::prime(101), 2, 3).unwrap()
    }

    #[test]
    fn test_identity_is_neutral() {
        let ec = curve();
        let p = ec.point(13, 2).unwrap();
        assert_eq!(p.try_add(&ec.identity()).unwrap(), p);
        assert_eq!(ec.identity().try_add(&p).unwrap(), p);
        assert!(ec.identity().is_infinity());
    }

    #[test]
    fn test_mirror_points_cancel() {
        let ec = curve();
        let p = ec.point(13, 2).unwrap();
        let q = ec.point(13, -2).unwrap();
        assert_eq!(p + q, ec.identity());
    }

    #[test]
    fn test_secant_addition() {
        let ec = curve();
        let sum = ec.point(13, 2).unwrap() + ec.point(3, 95).unwrap();
        assert_eq!(sum, ec.point(21, 32).unwrap());
    }

    #[test]
    fn test_tangent_doubling() {
        let ec = curve();
        let p = ec.point(13, 2).unwrap();
        assert_eq!(p.clone() + p, ec.point(76, 36).unwrap());
    }

    #[test]
    fn test_scalar_multiplication() {
        let ec = curve();
        let p = ec.point(13, 2).unwrap();

        assert_eq!(p.clone() * 5, ec.point(81, 89).unwrap());
        assert_eq!(p.clone() * 0, ec.identity());
        assert_eq!(p.clone() * 1, p);
        assert_eq!(p.clone() * -1, ec.point(13, 99).unwrap());
        assert_eq!(p.clone() * -1, p.negated());
    }

    #[test]
    fn test_scalar_multiplication_is_repeated_addition() {
        let ec = curve();
        let p = ec.point(13, 2).unwrap();

        let mut accumulated = ec.identity();
        for n in 0..10 {
            assert_eq!(p.clone() * n, accumulated);
            accumulated = accumulated + p.clone();
        }
    }

    #[test]
    fn test_negation_of_infinity() {
        let ec = curve();
        assert_eq!(-ec.identity(), ec.identity());
    }

    #[test]
    fn test_small_characteristic_rejected() {
        for p in [2u64, 3] {
            let result = EllipticCurve::<FieldElement>::from_integers(&FiniteField::prime(p), 1, 1);
            assert_eq!(
                result.unwrap_err(),
                AlgebraError::SmallCharacteristic(p)
            );
        }
    }

    #[test]
    fn test_points_on_distinct_curves_refuse_to_add() {
        let ec = curve();
        let other = EllipticCurve::from_integers(&FiniteField::prime(101), 5, 1).unwrap();
        let result = ec.point(13, 2).unwrap().try_add(&other.point(0, 1).unwrap());
        assert_eq!(result.unwrap_err(), AlgebraError::CurveMismatch);
    }

    #[test]
    fn test_curve_over_rationals() {
        // y^2 = x^3 + 1, doubling (2, 3) lands on (0, 1)
        let ec = EllipticCurve::<Q>::from_integers(&(), 0, 1).unwrap();
        let p = ec.point(2, 3).unwrap();
        assert_eq!(p.clone() + p, ec.point(0, 1).unwrap());
    }

    #[test]
    fn test_doubling_with_zero_ordinate() {
        // (0, 0) lies on y^2 = x^3 - x; its tangent is vertical
        let ec = EllipticCurve::<Q>::from_integers(&(), -1, 0).unwrap();
        let p = ec.point(0, 0).unwrap();
        assert_eq!(p.clone() + p, ec.identity());
    }

    #[test]
    fn test_generator() {
        let field = FiniteField::prime(101);
        let base = ProjectivePoint::from_integers(&field, &[13, 2, 1]).unwrap();
        let ec = EllipticCurve::new(field.element(2), field.element(3), Some(base)).unwrap();
        let g = ec.generator().unwrap();
        assert_eq!(g, ec.point(13, 2).unwrap());
        assert_eq!(g * 5, ec.point(81, 89).unwrap());
    }

    #[test]
    fn test_point_from_projective() {
        let ec = curve();
        let field = FiniteField::prime(101);
        // scaled coordinates describe the same projective point
        let raw = ProjectivePoint::new(vec![
            field.element(26),
            field.element(4),
            field.element(2),
        ])
        .unwrap();
        let p = ec.point_from(raw).unwrap();
        assert_eq!(p, ec.point(13, 2).unwrap());
    }

    #[test]
    fn test_point_from_wrong_field() {
        let ec = curve();
        let raw = ProjectivePoint::from_integers(&FiniteField::prime(7), &[1, 2, 1]).unwrap();
        assert!(matches!(
            ec.point_from(raw),
            Err(AlgebraError::RingMismatch(_, _))
        ));
    }
}
