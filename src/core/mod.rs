pub mod data;
pub mod escape;
pub mod field;
pub mod render;
pub mod util;
