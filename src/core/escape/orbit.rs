use num_traits::Float;

use crate::core::data::complex::Complex;
use crate::core::util::float_cast::float_from_f64;

// Escape radius of 2, compared in squared form to skip the square root.
const BAILOUT_MAGNITUDE_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OrbitClass<T> {
    /// The orbit left the bailout radius after `iterations` steps; `magnitude`
    /// is `|z|` at the step that escaped, always at least 2.
    Escaped { iterations: u32, magnitude: T },
    /// The orbit stayed bounded for the whole iteration budget.
    Inside,
}

/// Iterates `z ← z² + c` from `z = 0` and classifies the orbit of `c`.
///
/// An escape is only ever reported for iteration counts in
/// `[1, max_iterations - 1]`; exhausting the budget classifies the point as
/// inside the set.
pub fn escape_time<T: Float>(c: Complex<T>, max_iterations: u32) -> OrbitClass<T> {
    let bailout = float_from_f64::<T>(BAILOUT_MAGNITUDE_SQUARED);
    let mut z = Complex {
        real: T::zero(),
        imag: T::zero(),
    };

    for iteration in 1..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() >= bailout {
            return OrbitClass::Escaped {
                iterations: iteration,
                magnitude: z.magnitude(),
            };
        }
    }

    OrbitClass::Inside
}
