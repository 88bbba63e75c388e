use std::time::{Duration, Instant};

/// Per-frame statistics handed to the renderer and its meta overlay.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameMeta {
    /// Smoothed frames per second.
    pub fps: f32,
    /// Simulation iterations performed for this frame.
    pub ipf: u32,
}

impl FrameMeta {
    #[inline]
    pub const fn new(fps: f32, ipf: u32) -> Self {
        Self { fps, ipf }
    }
}

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots and a smoothed fps estimate.
///
/// Delta time is clamped so a stalled loop (debugger, minimized host) does not
/// report absurd rates.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    fps: f32,
}

/// Weight of the newest sample in the fps moving average.
const FPS_SMOOTHING: f32 = 0.1;

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
            fps: 0.0,
        }
    }

    /// Resets the clock baseline, e.g. after the loop was paused.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.advance(dt, now)
    }

    /// Advances the clock by an explicit delta (fixed-step loops and tests).
    pub fn tick_by(&mut self, dt: Duration) -> FrameTime {
        let now = self.last + dt;
        self.advance(dt, now)
    }

    /// Current fps estimate paired with the caller's iteration count.
    #[inline]
    pub fn meta(&self, ipf: u32) -> FrameMeta {
        FrameMeta::new(self.fps, ipf)
    }

    fn advance(&mut self, dt: Duration, now: Instant) -> FrameTime {
        let dt = dt.clamp(self.dt_min, self.dt_max).as_secs_f32();
        let sample = 1.0 / dt;

        self.fps = if self.frame_index == 0 {
            sample
        } else {
            self.fps + (sample - self.fps) * FPS_SMOOTHING
        };

        self.last = now;

        let ft = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
