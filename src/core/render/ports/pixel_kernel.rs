use std::error::Error;

use crate::core::data::colour::Colour;

/// The per-pixel computation a tile job runs for every pixel it owns.
pub trait PixelKernel {
    type Failure: Error;

    fn compute(&self, x: u32, y: u32) -> Result<Colour, Self::Failure>;
}
