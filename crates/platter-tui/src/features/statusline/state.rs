use std::time::Duration;

/// Snapshot read by the renderer each frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusLine {
    pub fps: f32,
    /// Time spent drawing the previous frame, if one was drawn.
    pub render_ms: Option<f32>,
}

/// Mutable counters updated by the runtime.
#[derive(Debug)]
pub struct StatusLineAccumulator {
    fps_ema: f32,
    render_ms: Option<f32>,
}

impl Default for StatusLineAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLineAccumulator {
    pub fn new() -> Self {
        Self {
            fps_ema: 60.0,
            render_ms: None,
        }
    }

    /// Records the interval since the previous render, in milliseconds.
    pub fn on_frame(&mut self, frame_ms: u16) {
        let fps = if frame_ms > 0 {
            1000.0 / f32::from(frame_ms)
        } else {
            self.fps_ema
        };
        self.fps_ema += 0.1 * (fps - self.fps_ema);
    }

    /// Records how long the last draw took.
    pub fn on_render(&mut self, elapsed: Duration) {
        self.render_ms = Some(elapsed.as_secs_f32() * 1000.0);
    }

    pub fn snapshot(&self) -> StatusLine {
        StatusLine {
            fps: (self.fps_ema * 10.0).round() / 10.0,
            render_ms: self.render_ms.map(|ms| (ms * 100.0).round() / 100.0),
        }
    }
}
