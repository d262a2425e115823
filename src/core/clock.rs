use std::time::Instant;

/// Frame clock - delta time per tick plus an FPS figure sampled over a fixed window
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frame_count: u64,
    window_frames: u32,
    window_elapsed: f32,
    sample_interval: f32,
    fps: f32,
}

impl FrameClock {
    /// Create new clock starting now, reporting FPS every `sample_interval` seconds
    pub fn new(sample_interval: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            frame_count: 0,
            window_frames: 0,
            window_elapsed: 0.0,
            sample_interval,
            fps: 0.0,
        }
    }

    /// Advance clock by one frame of wall time
    /// Returns the new FPS when a sample completes
    pub fn tick(&mut self) -> Option<f32> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.record(delta)
    }

    /// Account for a frame of the given length; returns the new FPS when a sample completes
    pub fn record(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.window_frames += 1;
        self.window_elapsed += delta;

        if self.window_elapsed >= self.sample_interval {
            self.fps = self.window_frames as f32 / self.window_elapsed;
            self.window_frames = 0;
            self.window_elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}
