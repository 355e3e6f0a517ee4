use std::error::Error;
use std::fmt;

use crate::core::data::colour::Colour;
use crate::core::data::tile_rect::TileRect;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    TileOutsideBounds {
        tile: TileRect,
        width: u32,
        height: u32,
    },
    PatchSizeMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileOutsideBounds {
                tile,
                width,
                height,
            } => {
                write!(
                    f,
                    "tile x [{}, {}), y [{}, {}) lies outside a {}x{} frame",
                    tile.x0(),
                    tile.x1(),
                    tile.y0(),
                    tile.y1(),
                    width,
                    height
                )
            }
            Self::PatchSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "tile patch holds {} pixels but its tile covers {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// A dense row-major pixel store for one frame. Pixel `(x, y)` lives at index
/// `y * width + x`; the row stride is always the frame width.
#[derive(Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let total = width as usize * height as usize;

        Self {
            width,
            height,
            pixels: vec![Colour::BLACK; total],
        }
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Colour] {
        &self.pixels
    }

    #[must_use]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Writes one tile's row-major pixels into the frame. The tile must lie
    /// inside the frame and the patch length must match the tile area.
    pub fn blit_tile(&mut self, tile: TileRect, pixels: &[Colour]) -> Result<(), FrameBufferError> {
        if tile.x1() > self.width || tile.y1() > self.height {
            return Err(FrameBufferError::TileOutsideBounds {
                tile,
                width: self.width,
                height: self.height,
            });
        }

        if pixels.len() != tile.area() {
            return Err(FrameBufferError::PatchSizeMismatch {
                expected: tile.area(),
                actual: pixels.len(),
            });
        }

        let tile_width = tile.width() as usize;
        for row in 0..tile.height() {
            let src_start = row as usize * tile_width;
            let dst_start = self.index_of(tile.x0(), tile.y0() + row);

            self.pixels[dst_start..dst_start + tile_width]
                .copy_from_slice(&pixels[src_start..src_start + tile_width]);
        }

        Ok(())
    }
}
