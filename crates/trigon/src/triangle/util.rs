use nalgebra::Vector2;

/// Pythagorean hypotenuse `sqrt(height² + width²)`.
#[inline]
pub fn hypotenuse(width: f64, height: f64) -> f64 {
    (height.powi(2) + width.powi(2)).sqrt()
}

/// Angle in degrees opposite `opposite`, enclosed by `s1` and `s2`.
///
/// `acos((s1² + s2² − opposite²) / (2·s1·s2))`, unclamped: side lengths that
/// violate the triangle inequality give NaN.
#[inline]
pub fn law_of_cosines(opposite: f64, s1: f64, s2: f64) -> f64 {
    let cos = (s1.powi(2) + s2.powi(2) - opposite.powi(2)) / (2.0 * s1 * s2);
    cos.acos().to_degrees()
}

/// Heron's formula `sqrt(s(s−a)(s−b)(s−c))` with `s` the semiperimeter.
#[inline]
pub fn heron_area([a, b, c]: [f64; 3]) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Unsigned area of the triangle `pqr` from the 2D cross product.
#[inline]
pub fn vertex_area(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    let u = q - p;
    let v = r - p;
    0.5 * (u.x * v.y - u.y * v.x).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn hypotenuse_of_3_4() {
        assert!((hypotenuse(3.0, 4.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn law_of_cosines_right_angle() {
        // 5 is opposite the right angle in a 3-4-5 triangle.
        assert!((law_of_cosines(5.0, 3.0, 4.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn law_of_cosines_out_of_domain_is_nan() {
        assert!(law_of_cosines(10.0, 1.0, 1.0).is_nan());
    }

    #[test]
    fn heron_matches_cross_product() {
        let (p, q, r) = (vector![0.0, 0.0], vector![4.0, 0.0], vector![1.0, 3.0]);
        let sides = [(q - r).norm(), (p - r).norm(), (p - q).norm()];
        assert!((heron_area(sides) - vertex_area(p, q, r)).abs() < 1e-9);
        assert!((vertex_area(p, q, r) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn heron_negative_radicand_is_nan() {
        assert!(heron_area([1.0, 1.0, 5.0]).is_nan());
    }
}
