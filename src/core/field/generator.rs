use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use num_traits::Float;

use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::tile_rect::TileRectError;
use crate::core::data::viewport::Viewport;
use crate::core::escape::colouring::ColouringError;
use crate::core::escape::kernel::EscapeTimeKernel;
use crate::core::field::frame_stats::FrameStats;
use crate::core::field::params::{FieldParams, FieldParamsError};
use crate::core::field::policy::IterationPolicy;
use crate::core::render::ports::pixel_kernel::PixelKernel;
use crate::core::render::render_tiles::render_tiles;
use crate::core::render::tile_job::TileJob;
use crate::core::util::float_cast::float_to_f64;
use crate::core::util::tile_grid::{TILE_GRID_PER_AXIS, tile_grid};

/// Error type for whole-frame generation.
///
/// Any tile or blit failure aborts the frame; the buffer then still holds the
/// previous complete frame and the readiness flag stays false.
#[derive(Debug)]
pub enum GenerateFrameError {
    /// The raster could not be partitioned into tiles.
    Grid(TileRectError),
    /// A tile kernel reported a failure.
    Tile(ColouringError),
    /// A finished patch did not fit the frame buffer.
    Buffer(FrameBufferError),
}

impl fmt::Display for GenerateFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "tile partitioning failed: {}", e),
            Self::Tile(e) => write!(f, "tile computation failed: {}", e),
            Self::Buffer(e) => write!(f, "patch blitting failed: {}", e),
        }
    }
}

impl Error for GenerateFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Tile(e) => Some(e),
            Self::Buffer(e) => Some(e),
        }
    }
}

impl From<TileRectError> for GenerateFrameError {
    fn from(source: TileRectError) -> Self {
        Self::Grid(source)
    }
}

impl From<ColouringError> for GenerateFrameError {
    fn from(source: ColouringError) -> Self {
        Self::Tile(source)
    }
}

impl From<FrameBufferError> for GenerateFrameError {
    fn from(source: FrameBufferError) -> Self {
        Self::Buffer(source)
    }
}

/// A zooming Mandelbrot field.
///
/// Each `generate` call renders one full frame into the owned buffer, then
/// advances the zoom and steps the iteration budget for the next frame. The
/// readiness flag is written with release ordering by `generate` only and
/// read with acquire ordering; it starts false and flips true once a frame
/// has completed.
///
/// `generate` takes `&mut self`, so a second in-flight `generate` or a buffer
/// read during generation cannot compile.
#[derive(Debug)]
pub struct FractalField<T> {
    width: u32,
    height: u32,
    max_iterations: u32,
    seed: Colour,
    viewport: Viewport<T>,
    policy: IterationPolicy,
    buffer: FrameBuffer,
    ready: AtomicBool,
    frames_completed: u64,
    last_frame_stats: Option<FrameStats>,
}

impl<T: Float + Send> FractalField<T> {
    /// Creates a field over the home viewport with the given raster size and
    /// initial iteration budget. Zero dimensions or a zero budget are
    /// rejected. The seed colour starts at black; use [`set_colour`] to pick
    /// a palette before the first frame.
    ///
    /// [`set_colour`]: Self::set_colour
    pub fn new(width: u32, height: u32, max_iterations: u32) -> Result<Self, FieldParamsError> {
        let params = FieldParams::new(width, height, max_iterations)?;

        Ok(Self {
            width: params.width(),
            height: params.height(),
            max_iterations: params.max_iterations(),
            seed: Colour::BLACK,
            viewport: Viewport::default(),
            policy: IterationPolicy::default(),
            buffer: FrameBuffer::new(params.width(), params.height()),
            ready: AtomicBool::new(false),
            frames_completed: 0,
            last_frame_stats: None,
        })
    }

    /// Replaces the palette seed colour, taking effect from the next frame.
    pub fn set_colour(&mut self, seed: Colour) {
        self.seed = seed;
    }

    /// Renders one full frame, blocking until every tile has completed.
    ///
    /// The raster is split into a tile grid, one job per tile runs on the
    /// rayon pool, and the finished patches are blitted back on this thread
    /// once all jobs have joined. On success the viewport zooms in, the
    /// budget policy steps, and the field becomes ready. On failure the
    /// buffer still holds the previous complete frame, the viewport and
    /// budget stay put, and the field reads as not ready.
    pub fn generate(&mut self) -> Result<(), GenerateFrameError> {
        let kernel = EscapeTimeKernel::new(
            self.viewport,
            self.width,
            self.height,
            self.max_iterations,
            self.seed,
        );

        self.generate_with(kernel)
    }

    /// Frame pass behind [`generate`], taking the pixel kernel as a port so
    /// tests can inject failing kernels. Owns the readiness protocol: the
    /// flag drops on entry and rises again only once a complete frame has
    /// been blitted and the zoom and budget have advanced.
    ///
    /// [`generate`]: Self::generate
    pub(crate) fn generate_with<K>(&mut self, kernel: K) -> Result<(), GenerateFrameError>
    where
        K: PixelKernel<Failure = ColouringError> + Copy + Send,
    {
        self.ready.store(false, Ordering::Release);

        let render_scale = float_to_f64(self.viewport.scale());
        let budget = self.max_iterations;

        let started = Instant::now();

        let jobs: Vec<TileJob<K>> = tile_grid(self.width, self.height, TILE_GRID_PER_AXIS)?
            .into_iter()
            .map(|rect| TileJob::new(rect, kernel))
            .collect();

        let patches = render_tiles(jobs)?;

        for patch in &patches {
            self.buffer.blit_tile(patch.rect(), patch.pixels())?;
        }

        let render_duration = started.elapsed();

        self.viewport.zoom_in();
        let adjustment = self
            .policy
            .adjust(float_to_f64(self.viewport.scale()), self.max_iterations);
        if let Some(adjustment) = adjustment {
            self.max_iterations = adjustment.max_iterations;
        }

        self.frames_completed += 1;
        self.last_frame_stats = Some(FrameStats {
            frame: self.frames_completed,
            scale: render_scale,
            max_iterations: budget,
            adjustment,
            render_duration,
        });

        self.ready.store(true, Ordering::Release);

        Ok(())
    }

    /// True once a frame has completed and no `generate` call has started
    /// since.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// The finished frame as row-major RGB triples with a row stride equal
    /// to the width. Meaningful only while [`is_ready`] returns true.
    ///
    /// [`is_ready`]: Self::is_ready
    #[must_use]
    pub fn buffer(&self) -> &[Colour] {
        self.buffer.as_slice()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The iteration budget the next frame will render with.
    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// The zoom scale the next frame will render at.
    #[must_use]
    pub fn scale(&self) -> T {
        self.viewport.scale()
    }

    #[must_use]
    pub fn frames_completed(&self) -> u64 {
        self.frames_completed
    }

    #[must_use]
    pub fn last_frame_stats(&self) -> Option<&FrameStats> {
        self.last_frame_stats.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: Colour = Colour {
        r: 0.9,
        g: 0.4,
        b: 0.7,
    };

    #[derive(Debug, Copy, Clone)]
    struct FailingKernel {}

    impl PixelKernel for FailingKernel {
        type Failure = ColouringError;

        fn compute(&self, _: u32, _: u32) -> Result<Colour, ColouringError> {
            Err(ColouringError::MagnitudeNotAboveOne { magnitude: 0.5 })
        }
    }

    #[test]
    fn test_new_rejects_zero_dimensions_and_budget() {
        assert_eq!(
            FractalField::<f64>::new(0, 16, 80).unwrap_err(),
            FieldParamsError::InvalidDimensions {
                width: 0,
                height: 16
            }
        );
        assert_eq!(
            FractalField::<f64>::new(16, 0, 80).unwrap_err(),
            FieldParamsError::InvalidDimensions {
                width: 16,
                height: 0
            }
        );
        assert_eq!(
            FractalField::<f64>::new(16, 16, 0).unwrap_err(),
            FieldParamsError::ZeroMaxIterations
        );
    }

    #[test]
    fn test_new_field_starts_not_ready_and_black() {
        let field = FractalField::<f64>::new(8, 8, 80).unwrap();

        assert!(!field.is_ready());
        assert_eq!(field.width(), 8);
        assert_eq!(field.height(), 8);
        assert_eq!(field.max_iterations(), 80);
        assert_eq!(field.scale(), 1.0);
        assert_eq!(field.frames_completed(), 0);
        assert!(field.last_frame_stats().is_none());
        assert!(field.buffer().iter().all(|&pixel| pixel == Colour::BLACK));
    }

    #[test]
    fn test_generate_completes_and_flips_ready() {
        let mut field = FractalField::<f64>::new(8, 8, 80).unwrap();

        field.generate().unwrap();

        assert!(field.is_ready());
        assert_eq!(field.frames_completed(), 1);
    }

    #[test]
    fn test_failed_frame_leaves_readiness_false_and_buffer_untouched() {
        let mut field = FractalField::<f64>::new(6, 4, 80).unwrap();
        field.set_colour(SEED);
        field.generate().unwrap();
        let previous = field.buffer().to_vec();

        let result = field.generate_with(FailingKernel {});

        assert!(matches!(result, Err(GenerateFrameError::Tile(_))));
        assert!(!field.is_ready());
        assert_eq!(field.buffer(), previous.as_slice());
    }

    #[test]
    fn test_failed_frame_keeps_the_zoom_budget_and_stats() {
        let mut field = FractalField::<f64>::new(4, 4, 80).unwrap();
        field.generate().unwrap();

        field.generate_with(FailingKernel {}).unwrap_err();

        assert_eq!(field.scale(), 1.5);
        assert_eq!(field.max_iterations(), 80);
        assert_eq!(field.frames_completed(), 1);
        assert_eq!(field.last_frame_stats().map(|stats| stats.frame), Some(1));
    }

    #[test]
    fn test_field_recovers_after_a_failed_frame() {
        let mut field = FractalField::<f64>::new(4, 4, 80).unwrap();
        field.generate().unwrap();
        field.generate_with(FailingKernel {}).unwrap_err();

        field.generate().unwrap();

        assert!(field.is_ready());
        assert_eq!(field.frames_completed(), 2);
        assert!((field.scale() - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_each_frame_zooms_in_by_half() {
        let mut field = FractalField::<f64>::new(8, 8, 80).unwrap();

        field.generate().unwrap();
        field.generate().unwrap();

        assert!((field.scale() - 2.25).abs() < 1e-12);
        assert_eq!(field.frames_completed(), 2);
    }

    #[test]
    fn test_frame_matches_the_kernel_at_every_pixel() {
        let mut field = FractalField::<f64>::new(8, 8, 80).unwrap();
        field.set_colour(SEED);

        field.generate().unwrap();

        let kernel = EscapeTimeKernel::new(Viewport::<f64>::default(), 8, 8, 80, SEED);
        for y in 0..8 {
            for x in 0..8 {
                let expected = kernel.compute(x, y).unwrap();
                assert_eq!(
                    field.buffer()[(y * 8 + x) as usize],
                    expected,
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_buffer_stride_equals_the_width() {
        // a non-square raster catches any width/height mix-up in the stride
        let mut field = FractalField::<f64>::new(8, 4, 80).unwrap();
        field.set_colour(SEED);

        field.generate().unwrap();

        let kernel = EscapeTimeKernel::new(Viewport::<f64>::default(), 8, 4, 80, SEED);
        let expected = kernel.compute(5, 2).unwrap();

        assert_eq!(field.buffer().len(), 32);
        assert_eq!(field.buffer()[2 * 8 + 5], expected);
    }

    #[test]
    fn test_second_frame_renders_through_the_zoomed_viewport() {
        use crate::core::data::complex::Complex;

        let mut field = FractalField::<f64>::new(4, 4, 80).unwrap();
        field.set_colour(SEED);

        field.generate().unwrap();
        assert!(field.is_ready());
        assert!((field.scale() - 1.5).abs() < 1e-12);

        field.generate().unwrap();

        // after one frame the scale is 1.5, so pixel (0, 0) of the second
        // frame projects onto center + (-2/1.5, -1/1.5); spell the orbit and
        // palette out longhand here as an independent check
        let c = Complex {
            real: -1.2461 - 2.0 / 1.5,
            imag: -0.0765 - 1.0 / 1.5,
        };
        let mut z = Complex {
            real: 0.0,
            imag: 0.0,
        };
        let mut iterations = 0_u32;
        while z.magnitude_squared() < 4.0 && iterations + 1 < 80 {
            z = z * z + c;
            iterations += 1;
        }
        assert_eq!(iterations, 1, "this point escapes immediately");

        let smooth = f64::from(iterations) - z.magnitude().ln().ln() + 4.0;
        let channel =
            |seed: f32| (0.5 + 0.5 * (3.0 + smooth * 0.15 * f64::from(seed)).cos()) as f32;

        let actual = field.buffer()[0];
        assert!((actual.r - channel(SEED.r)).abs() < 1e-6);
        assert!((actual.g - channel(SEED.g)).abs() < 1e-6);
        assert!((actual.b - channel(SEED.b)).abs() < 1e-6);
    }

    #[test]
    fn test_identical_fields_render_identical_frames() {
        let mut first = FractalField::<f64>::new(12, 12, 60).unwrap();
        let mut second = FractalField::<f64>::new(12, 12, 60).unwrap();
        first.set_colour(SEED);
        second.set_colour(SEED);

        first.generate().unwrap();
        second.generate().unwrap();

        assert_eq!(first.buffer(), second.buffer());
    }

    #[test]
    fn test_seed_colour_changes_the_frame() {
        let mut plain = FractalField::<f64>::new(8, 8, 80).unwrap();
        let mut seeded = FractalField::<f64>::new(8, 8, 80).unwrap();
        seeded.set_colour(SEED);

        plain.generate().unwrap();
        seeded.generate().unwrap();

        assert_ne!(plain.buffer(), seeded.buffer());
    }

    #[test]
    fn test_budget_doubles_when_the_zoom_passes_twenty() {
        let mut field = FractalField::<f64>::new(8, 8, 80).unwrap();

        // scale reaches 1.5^8 ≈ 25.6 at the end of the eighth frame, the
        // first time it exceeds the first threshold of 20
        for frame in 1..=7 {
            field.generate().unwrap();
            let stats = field.last_frame_stats().unwrap();
            assert_eq!(stats.frame, frame);
            assert_eq!(stats.adjustment, None);
            assert_eq!(field.max_iterations(), 80);
        }

        field.generate().unwrap();
        let stats = field.last_frame_stats().unwrap();
        let adjustment = stats.adjustment.unwrap();

        assert_eq!(stats.max_iterations, 80);
        assert_eq!(adjustment.step, 0);
        assert_eq!(adjustment.threshold, 20.0);
        assert_eq!(adjustment.max_iterations, 160);
        assert_eq!(field.max_iterations(), 160);
    }

    #[test]
    fn test_second_doubling_waits_for_the_next_threshold() {
        let mut field = FractalField::<f64>::new(8, 8, 80).unwrap();

        for _ in 1..=11 {
            field.generate().unwrap();
        }
        // frames 9 through 11 sit between the first two thresholds
        assert_eq!(field.last_frame_stats().unwrap().adjustment, None);
        assert_eq!(field.max_iterations(), 160);

        // scale reaches 1.5^12 ≈ 129.7 at the end of the twelfth frame
        field.generate().unwrap();
        let adjustment = field.last_frame_stats().unwrap().adjustment.unwrap();

        assert_eq!(adjustment.step, 1);
        assert_eq!(adjustment.threshold, 100.0);
        assert_eq!(adjustment.max_iterations, 320);
        assert_eq!(field.max_iterations(), 320);
    }

    #[test]
    fn test_stats_report_the_scale_the_frame_rendered_at() {
        let mut field = FractalField::<f64>::new(8, 8, 80).unwrap();

        field.generate().unwrap();
        assert_eq!(field.last_frame_stats().unwrap().scale, 1.0);

        field.generate().unwrap();
        assert!((field.last_frame_stats().unwrap().scale - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_minimal_field_renders_a_single_black_pixel() {
        // with a budget of one the orbit never gets to iterate, so the lone
        // pixel classifies as inside
        let mut field = FractalField::<f64>::new(1, 1, 1).unwrap();

        field.generate().unwrap();

        assert_eq!(field.buffer(), &[Colour::BLACK]);
    }

    #[test]
    fn test_field_renders_in_single_precision() {
        let mut field = FractalField::<f32>::new(8, 8, 40).unwrap();
        field.set_colour(SEED);

        field.generate().unwrap();

        assert!(field.is_ready());
        assert_eq!(field.buffer().len(), 64);
        assert!((field.scale() - 1.5).abs() < 1e-6);
    }
}
