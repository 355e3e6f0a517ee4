use std::error::Error;

use rand::Rng;

use zoombrot::{Colour, DEFAULT_MAX_ITERATIONS, FractalField};

const FRAME_WIDTH: u32 = 256;
const FRAME_HEIGHT: u32 = 256;
const FRAME_COUNT: u32 = 12;

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::rng();
    let seed = Colour {
        r: rng.random_range(0.0..=1.0),
        g: rng.random_range(0.0..=1.0),
        b: rng.random_range(0.0..=1.0),
    };

    let mut field = FractalField::<f64>::new(FRAME_WIDTH, FRAME_HEIGHT, DEFAULT_MAX_ITERATIONS)?;
    field.set_colour(seed);

    println!(
        "zooming a {}x{} field, seed colour ({:.3}, {:.3}, {:.3})",
        field.width(),
        field.height(),
        seed.r,
        seed.g,
        seed.b,
    );

    for _ in 0..FRAME_COUNT {
        field.generate()?;

        if let Some(stats) = field.last_frame_stats() {
            println!(
                "frame {:>2}: scale {:>9.2}, {:>4} iterations, {:.1?}",
                stats.frame, stats.scale, stats.max_iterations, stats.render_duration,
            );
            if let Some(adjustment) = stats.adjustment {
                println!("Adjusted max iterations to {}", adjustment.max_iterations);
            }
        }

        if field.is_ready() {
            println!(
                "          interior {:.1}% of {} pixels",
                100.0 * interior_fraction(field.buffer()),
                field.buffer().len(),
            );
        }
    }

    Ok(())
}

/// Share of pixels classified as inside the set, which render black.
fn interior_fraction(pixels: &[Colour]) -> f64 {
    if pixels.is_empty() {
        return 0.0;
    }

    let interior = pixels
        .iter()
        .filter(|&&pixel| pixel == Colour::BLACK)
        .count();

    interior as f64 / pixels.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }

    #[test]
    fn test_interior_fraction_of_an_empty_buffer_is_zero() {
        assert_eq!(interior_fraction(&[]), 0.0);
    }

    #[test]
    fn test_interior_fraction_counts_black_pixels() {
        let white = Colour {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        };
        let pixels = [Colour::BLACK, white, Colour::BLACK, white];

        assert_eq!(interior_fraction(&pixels), 0.5);
    }
}
