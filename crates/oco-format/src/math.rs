//! Small numeric helpers shared by the generators and the geometry code.

/// Maps `value` from the range `[min, max]` to `[target_min, target_max]`.
///
/// The result is not clamped. Degenerate ranges are handled explicitly:
/// an empty source range maps everything to `target_min`, and an empty target
/// range always returns `target_min`.
///
/// # Example
/// ```
/// use oco_format::math::linear_interpolation;
///
/// assert_eq!(linear_interpolation(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
/// assert_eq!(linear_interpolation(0.0, 0.0, 4.0, -0.54, -0.38), -0.54);
/// ```
pub fn linear_interpolation(value: f64, min: f64, max: f64, target_min: f64, target_max: f64) -> f64 {
    if min == target_min && max == target_max {
        return value;
    }
    if min == max || target_min == target_max {
        return target_min;
    }
    if value == min {
        return target_min;
    }
    if value == max {
        return target_max;
    }
    ((value - min) / (max - min)) * (target_max - target_min) + target_min
}

/// Euclidean distance between two points.
pub fn length(a: [f64; 2], b: [f64; 2]) -> f64 {
    (b[0] - a[0]).hypot(b[1] - a[1])
}
