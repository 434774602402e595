//! Classification enum and validation error.

use std::fmt;

/// Triangle classification by side equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleType {
    Equilateral,
    Isosceles,
    Scalene,
}

impl TriangleType {
    pub const ALL: [TriangleType; 3] = [
        TriangleType::Equilateral,
        TriangleType::Isosceles,
        TriangleType::Scalene,
    ];

    /// Stable symbolic name, used as a label lookup key.
    #[inline]
    pub fn key(self) -> &'static str {
        match self {
            TriangleType::Equilateral => "Equilateral",
            TriangleType::Isosceles => "Isosceles",
            TriangleType::Scalene => "Scalene",
        }
    }
}

impl fmt::Display for TriangleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Errors surfaced when assigning sides.
#[derive(Clone, Debug, PartialEq)]
pub enum TriangleError {
    /// At least one of the supplied values is zero, negative or NaN.
    NonPositiveSides { sides: [f64; 3] },
}

impl fmt::Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriangleError::NonPositiveSides { sides } => write!(
                f,
                "attempted to assign non-positive value(s) to sides {:?}; all values must be greater than 0",
                sides
            ),
        }
    }
}

impl std::error::Error for TriangleError {}
