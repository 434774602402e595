//! Reproducible random triangles (side-angle-side + replay tokens).
//!
//! Model
//! - Draw two sides uniformly from `[side_min, side_max]` and their included
//!   angle from `[angle_min_deg, angle_max_deg]`, then close the triangle with
//!   the law of cosines. The result always satisfies the triangle inequality.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `i` of a batch can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::triangle::{Triangle, TriangleError};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub side_min: f64,
    pub side_max: f64,
    /// Included angle bounds in degrees, inside the open interval (0, 180).
    pub angle_min_deg: f64,
    pub angle_max_deg: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            side_min: 1.0,
            side_max: 10.0,
            angle_min_deg: 10.0,
            angle_max_deg: 170.0,
        }
    }
}

impl SampleCfg {
    pub fn validate(&self) -> Result<(), SampleError> {
        if !(self.side_min.is_finite() && self.side_max.is_finite()) {
            return Err(SampleError::invalid("side bounds must be finite"));
        }
        if self.side_min <= 0.0 {
            return Err(SampleError::invalid("side_min must be > 0"));
        }
        if self.side_min > self.side_max {
            return Err(SampleError::invalid("side_min <= side_max required"));
        }
        if !(self.angle_min_deg > 0.0 && self.angle_max_deg < 180.0) {
            return Err(SampleError::invalid("angle bounds must lie in (0, 180)"));
        }
        if self.angle_min_deg > self.angle_max_deg {
            return Err(SampleError::invalid("angle_min_deg <= angle_max_deg required"));
        }
        Ok(())
    }
}

/// Errors from the sampler.
#[derive(Debug)]
pub enum SampleError {
    InvalidParams { reason: String },
    Triangle(TriangleError),
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
            Self::Triangle(e) => write!(f, "sampled triangle rejected: {e}"),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Triangle(e) => Some(e),
            Self::InvalidParams { .. } => None,
        }
    }
}

impl From<TriangleError> for SampleError {
    fn from(e: TriangleError) -> Self {
        Self::Triangle(e)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one triangle for `tok`. Side `a` is opposite the sampled angle.
pub fn draw_triangle(cfg: SampleCfg, tok: ReplayToken) -> Result<Triangle, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let b = rng.gen_range(cfg.side_min..=cfg.side_max);
    let c = rng.gen_range(cfg.side_min..=cfg.side_max);
    let alpha = rng
        .gen_range(cfg.angle_min_deg..=cfg.angle_max_deg)
        .to_radians();
    let a = (b * b + c * c - 2.0 * b * c * alpha.cos()).sqrt();
    Ok(Triangle::from_sides(a, b, c)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_triangle() {
        let cfg = SampleCfg::default();
        let t1 = draw_triangle(cfg, ReplayToken::new(7, 3)).unwrap();
        let t2 = draw_triangle(cfg, ReplayToken::new(7, 3)).unwrap();
        assert_eq!(t1, t2);
        let t3 = draw_triangle(cfg, ReplayToken::new(7, 4)).unwrap();
        assert_ne!(t1.sides(), t3.sides());
    }

    #[test]
    fn draws_respect_bounds_and_close() {
        let cfg = SampleCfg {
            side_min: 2.0,
            side_max: 3.0,
            angle_min_deg: 30.0,
            angle_max_deg: 60.0,
        };
        for i in 0..64 {
            let t = draw_triangle(cfg, ReplayToken::new(42, i)).unwrap();
            let [_, b, c] = t.sides();
            assert!((2.0..=3.0).contains(&b) && (2.0..=3.0).contains(&c));
            assert!(t.satisfies_triangle_inequality());
            let alpha = t.angles()[0];
            assert!((30.0 - 1e-9..=60.0 + 1e-9).contains(&alpha), "alpha = {alpha}");
            let sum: f64 = t.angles().iter().sum();
            assert!((sum - 180.0).abs() < 1e-9);
        }
    }

    #[test]
    fn invalid_params_are_rejected() {
        let bad = SampleCfg {
            side_min: 0.0,
            ..SampleCfg::default()
        };
        assert!(matches!(
            draw_triangle(bad, ReplayToken::new(0, 0)),
            Err(SampleError::InvalidParams { .. })
        ));
        let flat = SampleCfg {
            angle_max_deg: 180.0,
            ..SampleCfg::default()
        };
        assert!(flat.validate().is_err());
    }
}
