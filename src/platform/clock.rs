//! Fixed-step clock
//!
//! Converts variable frame times into a whole number of simulation ticks so
//! the simulation rate stays independent of the render rate.

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, TICK_MS};

/// Accumulates elapsed time and hands out ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step_ms: u32,
    accumulator_ms: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl FixedStep {
    pub fn new(step_ms: u32) -> Self {
        Self {
            step_ms: step_ms.max(1),
            accumulator_ms: 0,
        }
    }

    /// Add a frame's elapsed time and return how many ticks to run.
    ///
    /// Long frames are capped and at most `MAX_SUBSTEPS` ticks are returned;
    /// time that does not fit is dropped rather than carried forward.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulator_ms += elapsed_ms.min(MAX_FRAME_MS);

        let mut substeps = 0;
        while self.accumulator_ms >= self.step_ms && substeps < MAX_SUBSTEPS {
            self.accumulator_ms -= self.step_ms;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator_ms >= self.step_ms {
            log::trace!("Dropping {} ms of backlog", self.accumulator_ms);
            self.accumulator_ms %= self.step_ms;
        }
        substeps
    }

    /// Time carried into the next frame
    #[inline]
    pub fn pending_ms(&self) -> u32 {
        self.accumulator_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_step() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(10), 1);
        assert_eq!(clock.pending_ms(), 0);
    }

    #[test]
    fn test_carries_remainder() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(16), 1);
        assert_eq!(clock.pending_ms(), 6);
        assert_eq!(clock.advance(16), 2);
        assert_eq!(clock.pending_ms(), 2);
        assert_eq!(clock.advance(4), 0);
    }

    #[test]
    fn test_caps_substeps() {
        let mut clock = FixedStep::default();
        // 100 ms cap would allow 10 ticks, substep cap allows 8
        assert_eq!(clock.advance(5_000), MAX_SUBSTEPS);
        assert_eq!(clock.pending_ms(), 0);
    }
}
