use std::num::NonZeroU32;

use crate::core::data::tile_rect::{TileRect, TileRectError};

/// Tile count per axis for frame generation, giving 16 concurrent tiles per
/// frame on rasters at least 4 pixels wide and tall.
pub const TILE_GRID_PER_AXIS: NonZeroU32 = NonZeroU32::new(4).unwrap();

/// Partitions a `width × height` raster into a grid of at most
/// `per_axis × per_axis` disjoint tiles that together cover every pixel
/// exactly once. The tile count per axis never exceeds the pixel extent.
pub fn tile_grid(
    width: u32,
    height: u32,
    per_axis: NonZeroU32,
) -> Result<Vec<TileRect>, TileRectError> {
    let columns = per_axis.get().min(width).max(1);
    let rows = per_axis.get().min(height).max(1);
    let base_width = width / columns;
    let base_height = height / rows;

    let mut tiles = Vec::with_capacity((columns * rows) as usize);

    for row in 0..rows {
        let y0 = row * base_height;
        let y1 = if row + 1 == rows {
            height // Last row takes any remainder pixels
        } else {
            y0 + base_height
        };

        for column in 0..columns {
            let x0 = column * base_width;
            let x1 = if column + 1 == columns {
                width // Last column takes any remainder pixels
            } else {
                x0 + base_width
            };

            tiles.push(TileRect::new(x0, y0, x1, y1)?);
        }
    }

    Ok(tiles)
}
