//=========================================================================
// Frame Clock
//=========================================================================
//
// Measures real elapsed time between logic ticks.
//
// The fixed-rate loop only aims for its TPS; a tick can run late when the
// machine is busy or the event queue backs up. Simulation uses measured
// deltas so speed stays in world units per second regardless.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

//=== FrameClock ==========================================================

/// Monotonic tick clock.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
    max_delta: Duration,
}

impl FrameClock {
    /// Longest step ever reported. A debugger pause or a window drag
    /// should not teleport the character.
    pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_max_delta(Self::DEFAULT_MAX_DELTA)
    }

    pub fn with_max_delta(max_delta: Duration) -> Self {
        Self { last: Instant::now(), max_delta }
    }

    /// Seconds since the previous call (or construction), clamped.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        // `Instant` is monotonic, but saturate in case `now` came from elsewhere.
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed.min(self.max_delta).as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
