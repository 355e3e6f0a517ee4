use num_traits::Float;

/// Linearly remaps `value` from the interval `[in_min, in_max]` onto
/// `[out_min, out_max]`. The input interval must not be degenerate.
pub fn map_range<T: Float>(value: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}
