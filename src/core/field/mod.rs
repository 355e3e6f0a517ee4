//! The zooming fractal field and its per-frame bookkeeping.
//!
//! `generator` owns the frame loop: render tiles, blit patches, zoom in,
//! step the iteration budget. `params` validates construction input,
//! `policy` holds the budget-doubling schedule and `frame_stats` records
//! what each frame did.

pub mod frame_stats;
pub mod generator;
pub mod params;
pub mod policy;
