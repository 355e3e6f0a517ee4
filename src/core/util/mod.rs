pub mod float_cast;
pub mod map_range;
pub mod tile_grid;
