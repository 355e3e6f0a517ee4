use num_traits::Float;

/// Converts an `f64` constant into the working float precision.
///
/// Conversion from `f64` into any primitive float cannot fail, so the panic
/// path is unreachable for the precisions this crate is instantiated with.
pub fn float_from_f64<T: Float>(value: f64) -> T {
    T::from(value).expect("f64 converts into every primitive float precision")
}

/// Widens a value of the working float precision back into `f64`.
pub fn float_to_f64<T: Float>(value: T) -> f64 {
    value
        .to_f64()
        .expect("every primitive float precision converts into f64")
}
