pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod tile_rect;
pub mod viewport;
