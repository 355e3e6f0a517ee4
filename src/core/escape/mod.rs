//! The escape-time pixel pipeline.
//!
//! `orbit` iterates `z ← z² + c` against the bailout radius, `colouring`
//! turns escape data into a palette colour, and `kernel` composes the two
//! behind the [`PixelKernel`] port.
//!
//! [`PixelKernel`]: crate::core::render::ports::pixel_kernel::PixelKernel

pub mod colouring;
pub mod kernel;
pub mod orbit;
