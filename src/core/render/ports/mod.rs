//! Port definitions for the tile renderer.
//!
//! The fan-out machinery is generic over these traits, which keeps it
//! testable with stub kernels.

pub mod pixel_kernel;
