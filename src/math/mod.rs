pub mod distance_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Linearly interpolates between `a` and `b` at parameter `t`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Normalizes an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

/// Returns the unsigned difference between two directions in degrees,
/// folded into `[0, 180]`.
#[must_use]
pub fn direction_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn lerp_endpoints_and_middle() {
        assert!((lerp(2.0, 6.0, 0.0) - 2.0).abs() < TOL);
        assert!((lerp(2.0, 6.0, 1.0) - 6.0).abs() < TOL);
        assert!((lerp(2.0, 6.0, 0.5) - 4.0).abs() < TOL);
    }

    #[test]
    fn normalize_degrees_wraps() {
        assert!((normalize_degrees(370.0) - 10.0).abs() < TOL);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < TOL);
        assert!(normalize_degrees(360.0).abs() < TOL);
        assert!(normalize_degrees(0.0).abs() < TOL);
    }

    #[test]
    fn direction_difference_folds() {
        assert!((direction_difference(0.0, 60.0) - 60.0).abs() < TOL);
        assert!((direction_difference(350.0, 10.0) - 20.0).abs() < TOL);
        assert!((direction_difference(120.0, 120.0)).abs() < TOL);
    }
}
