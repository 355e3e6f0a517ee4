use num_traits::Float;
use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::util::float_cast::{float_from_f64, float_to_f64};
use crate::core::util::map_range::map_range;

pub const DEFAULT_CENTER_REAL: f64 = -1.2461;
pub const DEFAULT_CENTER_IMAG: f64 = -0.0765;
pub const ZOOM_FACTOR: f64 = 1.5;

// The unscaled view window is asymmetric on the real axis. That framing is
// deliberate and the colouring depends on it, so it is pinned here.
const REAL_WINDOW_MIN: f64 = -2.0;
const REAL_WINDOW_MAX: f64 = 1.0;
const IMAG_WINDOW_MIN: f64 = -1.0;
const IMAG_WINDOW_MAX: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidScale { scale: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be positive and finite: {}", scale)
            }
        }
    }
}

impl Error for ViewportError {}

/// The mapping from pixel coordinates onto the complex plane, defined by a
/// center point and a magnification scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport<T> {
    center: Complex<T>,
    scale: T,
}

impl<T: Float> Viewport<T> {
    #[allow(dead_code)]
    pub fn new(center: Complex<T>, scale: T) -> Result<Self, ViewportError> {
        if !scale.is_finite() || scale <= T::zero() {
            return Err(ViewportError::InvalidScale {
                scale: float_to_f64(scale),
            });
        }

        Ok(Self { center, scale })
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn center(&self) -> Complex<T> {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> T {
        self.scale
    }

    /// Advances the viewport to the next zoom level. The scale grows strictly
    /// monotonically and is never reset.
    pub fn zoom_in(&mut self) {
        self.scale = self.scale * float_from_f64(ZOOM_FACTOR);
    }

    /// Maps the pixel `(x, y)` of a `width × height` raster onto the complex
    /// plane under the current center and scale.
    #[must_use]
    pub fn project(&self, x: u32, y: u32, width: u32, height: u32) -> Complex<T> {
        let real_offset = map_range(
            float_from_f64(f64::from(x)),
            T::zero(),
            float_from_f64(f64::from(width)),
            float_from_f64::<T>(REAL_WINDOW_MIN) / self.scale,
            float_from_f64::<T>(REAL_WINDOW_MAX) / self.scale,
        );
        let imag_offset = map_range(
            float_from_f64(f64::from(y)),
            T::zero(),
            float_from_f64(f64::from(height)),
            float_from_f64::<T>(IMAG_WINDOW_MIN) / self.scale,
            float_from_f64::<T>(IMAG_WINDOW_MAX) / self.scale,
        );

        Complex {
            real: self.center.real + real_offset,
            imag: self.center.imag + imag_offset,
        }
    }
}

impl<T: Float> Default for Viewport<T> {
    fn default() -> Self {
        Self {
            center: Complex {
                real: float_from_f64(DEFAULT_CENTER_REAL),
                imag: float_from_f64(DEFAULT_CENTER_IMAG),
            },
            scale: T::one(),
        }
    }
}
