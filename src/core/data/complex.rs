use num_traits::Float;
use std::ops::{Add, Mul};

// hand-rolled complex arithmetic, generic over the working float precision
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex<T> {
    pub real: T,
    pub imag: T,
}

impl<T: Float> Complex<T> {
    #[must_use]
    pub fn magnitude_squared(&self) -> T {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
