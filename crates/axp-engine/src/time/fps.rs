use std::time::{Duration, Instant};

/// Counts presented frames and reports a frames-per-second figure once per
/// elapsed second.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Option<Instant>,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    const WINDOW: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self { window_start: None, frames: 0, fps: 0 }
    }

    /// Last reported figure; zero until the first full second has elapsed.
    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Records one frame at `now`. Returns the new figure when a measuring
    /// window closes.
    pub fn record(&mut self, now: Instant) -> Option<u32> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed < Self::WINDOW {
            return None;
        }

        self.fps = (self.frames as f64 / elapsed.as_secs_f64()).round() as u32;
        self.frames = 0;
        self.window_start = Some(now);
        Some(self.fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_until_a_second_passes() {
        let mut fps = FpsCounter::new();
        let t0 = Instant::now();
        assert_eq!(fps.record(t0), None);
        assert_eq!(fps.record(t0 + Duration::from_millis(500)), None);
        assert_eq!(fps.fps(), 0);
    }

    #[test]
    fn reports_frames_over_elapsed_window() {
        let mut fps = FpsCounter::new();
        let t0 = Instant::now();
        for i in 0..30 {
            assert_eq!(fps.record(t0 + Duration::from_millis(i * 33)), None);
        }
        // 31st frame lands at 1s: 31 frames over 1s.
        assert_eq!(fps.record(t0 + Duration::from_secs(1)), Some(31));
        assert_eq!(fps.fps(), 31);
    }
}
