use crate::core::data::colour::Colour;
use crate::core::data::tile_rect::TileRect;
use crate::core::render::ports::pixel_kernel::PixelKernel;

/// The finished pixels of one tile, in row-major order relative to the tile's
/// own bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePatch {
    rect: TileRect,
    pixels: Vec<Colour>,
}

impl TilePatch {
    #[must_use]
    pub fn rect(&self) -> TileRect {
        self.rect
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }
}

/// One tile's worth of work, bundled with an immutable snapshot of the kernel
/// it renders with. Jobs own everything they touch, so a batch of them can be
/// handed to worker threads without sharing mutable state.
#[derive(Debug, Copy, Clone)]
pub struct TileJob<K> {
    rect: TileRect,
    kernel: K,
}

impl<K: PixelKernel> TileJob<K> {
    pub fn new(rect: TileRect, kernel: K) -> Self {
        Self { rect, kernel }
    }

    /// Renders every pixel of the tile. The first kernel failure aborts the
    /// tile and surfaces as the job's result.
    pub fn run(self) -> Result<TilePatch, K::Failure> {
        let mut pixels = Vec::with_capacity(self.rect.area());

        for y in self.rect.y0()..self.rect.y1() {
            for x in self.rect.x0()..self.rect.x1() {
                pixels.push(self.kernel.compute(x, y)?);
            }
        }

        Ok(TilePatch {
            rect: self.rect,
            pixels,
        })
    }
}
