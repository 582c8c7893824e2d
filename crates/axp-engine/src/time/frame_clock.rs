use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at zero.
    pub frame_index: u64,
}

impl FrameTime {
    #[inline]
    pub fn is_first(&self) -> bool {
        self.frame_index == 0
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One clock per window, ticked once per presented frame.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { frame_index: 0 }
    }

    /// Starts counting frames from zero again.
    pub fn reset(&mut self) {
        self.frame_index = 0;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock as if the frame started at `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let ft = FrameTime { now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}
