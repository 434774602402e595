//! Triangle value object.
//!
//! Purpose
//! - Hold three positive side lengths together with the interior angles
//!   (degrees) and the classification derived from them.
//! - Area is computed on demand with Heron's formula.
//!
//! Invariants
//! - Every stored side is strictly positive; `set_sides` rejects anything else
//!   and leaves the triangle untouched.
//! - `angles` and `kind` always describe the current `sides`: they are derived
//!   at construction and again on every successful `set_sides`.
//! - The triangle inequality is not enforced. Sides that violate it produce
//!   NaN angles and area; `satisfies_triangle_inequality` reports it.

mod cfg;
mod types;
mod util;

pub use cfg::SIDE_EQ_EPS;
pub use types::{TriangleError, TriangleType};
pub use util::{heron_area, hypotenuse, law_of_cosines, vertex_area};

use nalgebra::Vector2;

/// A triangle given by its three side lengths `[a, b, c]`.
///
/// Angle `i` is the interior angle opposite side `i`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    sides: [f64; 3],
    angles: [f64; 3],
    kind: TriangleType,
}

impl Triangle {
    /// Right triangle from its two legs. Sides are `[height, width, hypotenuse]`.
    pub fn from_legs(width: f64, height: f64) -> Result<Self, TriangleError> {
        Self::from_array([height, width, hypotenuse(width, height)])
    }

    /// Triangle from three explicit side lengths.
    pub fn from_sides(a: f64, b: f64, c: f64) -> Result<Self, TriangleError> {
        Self::from_array([a, b, c])
    }

    /// Triangle from three vertices in the plane; side `a` is opposite `p`,
    /// `b` opposite `q`, `c` opposite `r`.
    pub fn from_vertices(
        p: Vector2<f64>,
        q: Vector2<f64>,
        r: Vector2<f64>,
    ) -> Result<Self, TriangleError> {
        Self::from_array([(q - r).norm(), (p - r).norm(), (p - q).norm()])
    }

    fn from_array(sides: [f64; 3]) -> Result<Self, TriangleError> {
        check_positive(sides)?;
        let mut t = Self {
            sides,
            angles: [0.0; 3],
            kind: TriangleType::Scalene,
        };
        t.refresh();
        Ok(t)
    }

    /// Replace the sides and recompute angles and classification.
    ///
    /// Fails if any value is not strictly positive; the triangle keeps its
    /// previous state in that case.
    pub fn set_sides(&mut self, sides: [f64; 3]) -> Result<(), TriangleError> {
        check_positive(sides)?;
        self.sides = sides;
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        self.angles = self.compute_angles();
        self.kind = self.classify();
    }

    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }

    /// Interior angles in degrees, derived from the current sides.
    #[inline]
    pub fn angles(&self) -> [f64; 3] {
        self.angles
    }

    #[inline]
    pub fn triangle_type(&self) -> TriangleType {
        self.kind
    }

    /// Interior angles via the law of cosines, in degrees.
    pub fn compute_angles(&self) -> [f64; 3] {
        let [a, b, c] = self.sides;
        [
            law_of_cosines(a, b, c),
            law_of_cosines(b, a, c),
            law_of_cosines(c, a, b),
        ]
    }

    /// Classify with the default tolerance `SIDE_EQ_EPS`.
    pub fn classify(&self) -> TriangleType {
        self.classify_eps(SIDE_EQ_EPS)
    }

    /// Classify with an explicit tolerance; the first matching rule wins.
    pub fn classify_eps(&self, eps: f64) -> TriangleType {
        let [a, b, c] = self.sides;
        let eq = |x: f64, y: f64| (x - y).abs() < eps;
        if eq(a, b) && eq(b, c) {
            TriangleType::Equilateral
        } else if eq(a, b) || eq(b, c) || eq(a, c) {
            TriangleType::Isosceles
        } else {
            TriangleType::Scalene
        }
    }

    /// Heron's formula on the current sides.
    pub fn area(&self) -> f64 {
        heron_area(self.sides)
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.sides.iter().sum()
    }

    #[inline]
    pub fn semiperimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }

    /// Strict triangle inequality: every side shorter than the other two combined.
    pub fn satisfies_triangle_inequality(&self) -> bool {
        let [a, b, c] = self.sides;
        a < b + c && b < a + c && c < a + b
    }
}

fn check_positive(sides: [f64; 3]) -> Result<(), TriangleError> {
    // NaN fails the comparison.
    if sides.iter().all(|&v| v > 0.0) {
        Ok(())
    } else {
        Err(TriangleError::NonPositiveSides { sides })
    }
}
