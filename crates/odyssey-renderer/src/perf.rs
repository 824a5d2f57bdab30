//! Frame timing for animation steps and the debug panel's FPS readout.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Longest step handed to animation; a stall (window drag, breakpoint)
/// should not spin the camera half a turn.
const MAX_STEP: Duration = Duration::from_millis(100);

/// Rolling window of frame durations.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    max_samples: usize,
    frames: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::with_window(120)
    }

    pub fn with_window(max_samples: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            last_frame: Instant::now(),
            max_samples: max_samples.max(1),
            frames: 0,
        }
    }

    /// Mark the start of a frame and return the animation step in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.record(dt);
        dt.min(MAX_STEP).as_secs_f32()
    }

    fn record(&mut self, dt: Duration) {
        self.frames += 1;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
    }

    /// Average frames per second over the window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Frames since start.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_fps_is_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_ms(), 0.0);
        assert_eq!(timer.frames(), 0);
    }

    #[test]
    fn fps_after_frames() {
        let mut timer = FrameTimer::new();
        for _ in 0..10 {
            std::thread::sleep(Duration::from_millis(1));
            timer.tick();
        }
        assert!(timer.fps() > 0.0);
        assert!(timer.frame_time_ms() > 0.0);
        assert_eq!(timer.sample_count(), 10);
        assert_eq!(timer.frames(), 10);
    }

    #[test]
    fn window_size_respected() {
        let mut timer = FrameTimer::with_window(8);
        for _ in 0..50 {
            timer.tick();
        }
        assert_eq!(timer.sample_count(), 8);
        assert_eq!(timer.frames(), 50);
    }

    #[test]
    fn long_stalls_are_capped() {
        let mut timer = FrameTimer::new();
        timer.record(Duration::from_secs(5));
        if let Some(past) = Instant::now().checked_sub(Duration::from_secs(3)) {
            timer.last_frame = past;
        }
        let dt = timer.tick();
        assert!(dt <= MAX_STEP.as_secs_f32());
    }
}
