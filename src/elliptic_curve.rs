//! Elliptic curve point groups over prime fields.
//!
//! Curves are in short Weierstrass form y² = x³ + ax + b, with the group
//! identity represented by an explicit `Point::Infinity` variant rather than
//! any sentinel coordinate pair.

use crate::bigint::BigInt;
use crate::error::Error;
use crate::field::FieldElement;
use std::fmt;

/// A point on an elliptic curve
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Point {
    /// The point at infinity (identity element)
    Infinity,
    /// A point with affine coordinates (x, y)
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "infinity"),
            Point::Affine { x, y } => write!(f, "({}, {})", x.value(), y.value()),
        }
    }
}

/// An elliptic curve in short Weierstrass form: y² = x³ + ax + b
#[derive(Clone, Debug)]
pub struct EllipticCurve {
    a: FieldElement,
    b: FieldElement,
}

impl EllipticCurve {
    /// Create a curve, validating that the coefficients share a modulus and
    /// that the discriminant 4a³ + 27b² is nonzero.
    pub fn new(a: FieldElement, b: FieldElement) -> Result<Self, Error> {
        if a.modulus() != b.modulus() {
            return Err(Error::InvalidParameter(
                "curve coefficients must share a modulus".to_string(),
            ));
        }
        let four = FieldElement::from_u64(4, a.modulus().clone());
        let twenty_seven = FieldElement::from_u64(27, a.modulus().clone());
        let a_cubed = &(&a * &a) * &a;
        let b_squared = &b * &b;
        let discriminant = &(&four * &a_cubed) + &(&twenty_seven * &b_squared);
        if discriminant.is_zero() {
            return Err(Error::SingularCurve);
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// The field modulus p
    pub fn modulus(&self) -> &BigInt {
        self.a.modulus()
    }

    pub fn identity(&self) -> Point {
        Point::Infinity
    }

    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let lhs = y.clone() * y.clone();
                let x_cubed = x.clone() * x.clone() * x.clone();
                let rhs = x_cubed + self.a.clone() * x.clone() + self.b.clone();
                lhs == rhs
            }
        }
    }

    /// Checked point constructor
    pub fn point(&self, x: FieldElement, y: FieldElement) -> Result<Point, Error> {
        if x.modulus() != self.modulus() || y.modulus() != self.modulus() {
            return Err(Error::InvalidParameter(
                "point coordinates must use the curve's modulus".to_string(),
            ));
        }
        let p = Point::Affine { x, y };
        if !self.is_on_curve(&p) {
            return Err(Error::PointNotOnCurve);
        }
        Ok(p)
    }

    pub fn negate(&self, p: &Point) -> Point {
        match p {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: -y.clone(),
            },
        }
    }

    /// Point addition over the chord-and-tangent rule.
    ///
    /// Handles the identity on either side, doubling (with the vertical
    /// tangent at y = 0 mapping to the identity), and P + (-P). Two points
    /// sharing an x coordinate without being equal or negations of each other
    /// cannot both lie on the curve; such input yields
    /// `Error::InvalidPointPair` instead of a bogus coordinate pair.
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point, Error> {
        match (p, q) {
            (Point::Infinity, _) => Ok(q.clone()),
            (_, Point::Infinity) => Ok(p.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                if x1 == x2 && y1 != y2 {
                    if *y2 == -y1.clone() {
                        return Ok(Point::Infinity);
                    }
                    return Err(Error::InvalidPointPair);
                }
                let lambda = if x1 == x2 {
                    // Doubling; when y = 0 the tangent is vertical and 2P = O
                    if y1.is_zero() {
                        return Ok(Point::Infinity);
                    }
                    let three = FieldElement::from_u64(3, self.modulus().clone());
                    let two = FieldElement::from_u64(2, self.modulus().clone());
                    let numerator = three * x1.clone() * x1.clone() + self.a.clone();
                    let denominator = (two * y1.clone()).inv()?;
                    numerator * denominator
                } else {
                    let numerator = y2.clone() - y1.clone();
                    let denominator = (x2.clone() - x1.clone()).inv()?;
                    numerator * denominator
                };
                let x3 = lambda.clone() * lambda.clone() - x1.clone() - x2.clone();
                let y3 = lambda * (x1.clone() - x3.clone()) - y1.clone();
                Ok(Point::Affine { x: x3, y: y3 })
            }
        }
    }

    pub fn double(&self, p: &Point) -> Result<Point, Error> {
        self.add(p, p)
    }

    /// Scalar multiplication by double-and-add over the bits of `k`, least
    /// significant first. `k = 0` yields the identity.
    pub fn scalar_mul(&self, p: &Point, k: &BigInt) -> Result<Point, Error> {
        let mut acc = Point::Infinity;
        let mut addend = p.clone();
        for bit in k.bits_le() {
            if bit {
                acc = self.add(&acc, &addend)?;
            }
            addend = self.double(&addend)?;
        }
        Ok(acc)
    }

    /// Square root in the field by exhaustive scan, returning the smallest
    /// root. O(p) field multiplications; intended for small demonstration and
    /// test curves only.
    pub fn sqrt(&self, value: &FieldElement) -> Option<FieldElement> {
        let one = BigInt::one();
        let mut i = BigInt::zero();
        while &i < self.modulus() {
            let candidate = FieldElement::new(i.clone(), self.modulus().clone());
            if &candidate * &candidate == *value {
                return Some(candidate);
            }
            i = &i + &one;
        }
        None
    }

    /// Find a curve point with the given x coordinate, if one exists. Uses
    /// [`sqrt`](Self::sqrt), so it shares its small-curve restriction.
    pub fn lift_x(&self, x: &FieldElement) -> Option<Point> {
        let rhs = x.clone() * x.clone() * x.clone() + self.a.clone() * x.clone() + self.b.clone();
        self.sqrt(&rhs).map(|y| Point::Affine { x: x.clone(), y })
    }

    /// Enumerate every point on the curve, identity first. O(p²) field work;
    /// intended for small demonstration and test curves only.
    pub fn enumerate_points(&self) -> Vec<Point> {
        let mut points = vec![Point::Infinity];
        let one = BigInt::one();
        let mut x = BigInt::zero();
        while &x < self.modulus() {
            let xe = FieldElement::new(x.clone(), self.modulus().clone());
            if let Some(Point::Affine { x: px, y }) = self.lift_x(&xe) {
                let negated = -y.clone();
                let has_distinct_negation = !y.is_zero();
                points.push(Point::Affine { x: px.clone(), y });
                if has_distinct_negation {
                    points.push(Point::Affine { x: px, y: negated });
                }
            }
            x = &x + &one;
        }
        points
    }
}
