//! Scalar helpers shared by the vector and primitive types.

/// Returns `true` when `a` and `b` differ by strictly less than `tolerance`.
#[must_use]
pub fn is_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Returns `true` when `value` is within `tolerance` of zero.
#[must_use]
pub fn is_zero(value: f64, tolerance: f64) -> bool {
    is_equal(value, 0.0, tolerance)
}

/// Negates `value`, never producing a negative zero.
#[must_use]
pub fn opposite(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        -value
    }
}

/// Maps `-0.0` to `0.0` and returns every other value unchanged.
#[must_use]
pub fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
