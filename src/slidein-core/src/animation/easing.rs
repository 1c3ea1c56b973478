//! Easing curves and interpolation.

/// Quadratic ease-out: fast start, decelerating to rest.
///
/// `f(t) = 1 - (1 - t)²`, with `t` clamped to `[0, 1]`.
///
/// # Example
/// ```
/// use slidein_core::animation::ease_out_quad;
///
/// assert_eq!(ease_out_quad(0.0), 0.0);
/// assert_eq!(ease_out_quad(0.5), 0.75);
/// assert_eq!(ease_out_quad(1.0), 1.0);
/// ```
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv
}

/// Linear interpolation between `from` (t = 0) and `to` (t = 1).
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}
