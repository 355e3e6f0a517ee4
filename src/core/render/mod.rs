//! Tiled fan-out and fan-in over the rayon pool.

pub mod ports;
pub mod render_tiles;
pub mod tile_job;
