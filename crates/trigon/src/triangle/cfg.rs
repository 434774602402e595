//! Tolerance defaults for triangle classification.
//!
//! Policy
//! - Fixed constants; callers that need another tolerance go through
//!   `Triangle::classify_eps` instead of changing these.

/// Two sides are considered equal when they differ by less than this.
pub const SIDE_EQ_EPS: f64 = 1e-12;
