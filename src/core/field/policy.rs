// Zoom depths at which the iteration budget doubles, crossed strictly in
// order. Once the last threshold has been passed the budget stays fixed.
pub const ADJUSTMENT_THRESHOLDS: [f64; 4] = [20.0, 100.0, 1500.0, 5000.0];

/// Report of a single budget doubling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationAdjustment {
    /// Index of the threshold that was crossed.
    pub step: usize,
    /// The threshold value itself.
    pub threshold: f64,
    /// The doubled iteration budget.
    pub max_iterations: u32,
}

/// Steps the iteration budget as the zoom deepens.
///
/// The policy watches one threshold at a time. A frame whose scale has passed
/// the current threshold doubles the budget and advances to the next; a
/// single frame never doubles twice, even when the scale jumps several
/// thresholds at once.
#[derive(Debug, Default, Copy, Clone)]
pub struct IterationPolicy {
    step: usize,
}

impl IterationPolicy {
    /// Checks the current threshold against `scale` and reports the doubled
    /// budget if it was crossed.
    pub fn adjust(&mut self, scale: f64, max_iterations: u32) -> Option<IterationAdjustment> {
        let threshold = *ADJUSTMENT_THRESHOLDS.get(self.step)?;

        if scale <= threshold {
            return None;
        }

        let step = self.step;
        self.step += 1;

        Some(IterationAdjustment {
            step,
            threshold,
            max_iterations: max_iterations.saturating_mul(2),
        })
    }
}
