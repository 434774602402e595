//! Triangle properties: sides, interior angles, area and classification.
//!
//! Layout
//! - `triangle`: the `Triangle` value object and its derived quantities.
//! - `labels`: label lookup and the text report (presentation only; the core
//!   never depends on it).
//! - `rand`: reproducible sample triangles for tests, benches and the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod labels;
pub mod rand;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use labels::{Catalog, Field, Labels, Locale, Report};
pub use triangle::{Triangle, TriangleError, TriangleType};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::labels::{Catalog, Field, Labels, Locale, Report};
    pub use crate::rand::{draw_triangle, ReplayToken, SampleCfg};
    pub use crate::triangle::{hypotenuse, Triangle, TriangleError, TriangleType};
    pub use nalgebra::Vector2 as Vec2;
}
