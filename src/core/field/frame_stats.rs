use std::time::Duration;

use crate::core::field::policy::IterationAdjustment;

/// Observed facts about the most recently completed frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    /// Ordinal of the frame, starting at 1.
    pub frame: u64,
    /// Zoom scale the frame was rendered at.
    pub scale: f64,
    /// Iteration budget the frame was rendered with.
    pub max_iterations: u32,
    /// The budget doubling applied at the end of this frame, if any. It
    /// takes effect from the next frame onwards.
    pub adjustment: Option<IterationAdjustment>,
    /// Wall-clock time spent rendering and joining the tiles.
    pub render_duration: Duration,
}
