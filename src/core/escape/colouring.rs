use std::error::Error;
use std::fmt;

use crate::core::data::colour::Colour;

// Fractional escape-count correction and the fixed phase/frequency of the
// cosine palette.
const SMOOTH_OFFSET: f64 = 4.0;
const PALETTE_PHASE: f64 = 3.0;
const PALETTE_FREQUENCY: f64 = 0.15;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ColouringError {
    MagnitudeNotAboveOne { magnitude: f64 },
}

impl fmt::Display for ColouringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MagnitudeNotAboveOne { magnitude } => {
                write!(
                    f,
                    "smooth colouring needs an escape magnitude above one, got {}",
                    magnitude
                )
            }
        }
    }
}

impl Error for ColouringError {}

/// Colours an escaped orbit through the seeded cosine palette.
///
/// The fractional escape count `iterations - ln(ln |z|) + 4` keeps colour
/// bands continuous; each seed channel scales the palette frequency of the
/// matching output channel. The double logarithm needs `|z| > 1`, which every
/// magnitude reported past the bailout radius satisfies.
pub fn colour_escaped_pixel(
    iterations: u32,
    magnitude: f64,
    seed: Colour,
) -> Result<Colour, ColouringError> {
    if magnitude <= 1.0 {
        return Err(ColouringError::MagnitudeNotAboveOne { magnitude });
    }

    let smooth = f64::from(iterations) - magnitude.ln().ln() + SMOOTH_OFFSET;

    Ok(Colour {
        r: palette_channel(smooth, seed.r),
        g: palette_channel(smooth, seed.g),
        b: palette_channel(smooth, seed.b),
    })
}

fn palette_channel(smooth: f64, seed_channel: f32) -> f32 {
    let phase = PALETTE_PHASE + smooth * PALETTE_FREQUENCY * f64::from(seed_channel);
    (0.5 + 0.5 * phase.cos()) as f32
}
