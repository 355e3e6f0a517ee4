use num_traits::Float;

use crate::core::data::colour::Colour;
use crate::core::data::viewport::Viewport;
use crate::core::escape::colouring::{ColouringError, colour_escaped_pixel};
use crate::core::escape::orbit::{OrbitClass, escape_time};
use crate::core::render::ports::pixel_kernel::PixelKernel;
use crate::core::util::float_cast::float_to_f64;

/// Maps raster coordinates through the viewport, runs the escape-time orbit
/// and colours the outcome. Interior points are black, escaped points go
/// through the seeded palette.
#[derive(Debug, Copy, Clone)]
pub struct EscapeTimeKernel<T> {
    viewport: Viewport<T>,
    width: u32,
    height: u32,
    max_iterations: u32,
    seed: Colour,
}

impl<T: Float> EscapeTimeKernel<T> {
    pub fn new(
        viewport: Viewport<T>,
        width: u32,
        height: u32,
        max_iterations: u32,
        seed: Colour,
    ) -> Self {
        Self {
            viewport,
            width,
            height,
            max_iterations,
            seed,
        }
    }
}

impl<T: Float> PixelKernel for EscapeTimeKernel<T> {
    type Failure = ColouringError;

    fn compute(&self, x: u32, y: u32) -> Result<Colour, ColouringError> {
        let c = self.viewport.project(x, y, self.width, self.height);

        match escape_time(c, self.max_iterations) {
            OrbitClass::Inside => Ok(Colour::BLACK),
            OrbitClass::Escaped {
                iterations,
                magnitude,
            } => colour_escaped_pixel(iterations, float_to_f64(magnitude), self.seed),
        }
    }
}
