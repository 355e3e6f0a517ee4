mod core;

pub use crate::core::data::colour::Colour;
pub use crate::core::field::frame_stats::FrameStats;
pub use crate::core::field::generator::{FractalField, GenerateFrameError};
pub use crate::core::field::params::{DEFAULT_MAX_ITERATIONS, FieldParamsError};
pub use crate::core::field::policy::IterationAdjustment;
