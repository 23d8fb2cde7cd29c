//! Presentation collaborators
//!
//! A sink observes each finished tick; it never mutates simulation state.

use std::io::Write;

use glam::Vec2;
use serde::Serialize;

use crate::settings::{PaddleLayout, SimConfig};
use crate::sim::{Ball, Paddle};

/// Axis-aligned wall rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wall {
    pub min: Vec2,
    pub size: Vec2,
}

/// Fixed wall geometry for a config
pub fn wall_geometry(config: &SimConfig) -> Vec<Wall> {
    let t = config.wall_thickness;
    let w = config.window_width;
    let h = config.window_height;

    let mut walls = vec![
        Wall {
            min: Vec2::ZERO,
            size: Vec2::new(w, t),
        },
        Wall {
            min: Vec2::new(0.0, h - t),
            size: Vec2::new(w, t),
        },
    ];
    if config.paddle_layout == PaddleLayout::Single {
        walls.push(Wall {
            min: Vec2::new(w - t, 0.0),
            size: Vec2::new(t, h),
        });
    }
    walls
}

/// Snapshot handed to the sink once per tick
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Frame<'a> {
    pub tick: u64,
    pub paddles: &'a [Paddle],
    pub balls: &'a [Ball],
    pub walls: &'a [Wall],
}

/// Receives the final positions of every tick
pub trait PresentationSink {
    fn present(&mut self, frame: &Frame<'_>);

    /// Release resources; called exactly once when the session ends
    fn close(&mut self) {}
}

/// Writes frames to the `log` facade
#[derive(Debug, Default)]
pub struct LogSink {
    frames: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl PresentationSink for LogSink {
    fn present(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        log::debug!(
            "Tick {}: {} ball(s), paddles at {:?}",
            frame.tick,
            frame.balls.len(),
            frame.paddles.iter().map(|p| p.pos.y).collect::<Vec<_>>()
        );
        for (i, ball) in frame.balls.iter().enumerate() {
            log::trace!(
                "  ball {i}: pos ({:.1}, {:.1}) vel ({:.1}, {:.1})",
                ball.pos.x,
                ball.pos.y,
                ball.vel.x,
                ball.vel.y
            );
        }
    }

    fn close(&mut self) {
        log::info!("Presented {} frame(s)", self.frames);
    }
}

/// One JSON object per frame, newline separated
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
    failed: bool,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_frame(&mut self, frame: &Frame<'_>) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, frame)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write> PresentationSink for JsonLinesSink<W> {
    fn present(&mut self, frame: &Frame<'_>) {
        if self.failed {
            return;
        }
        // Observation must not stop the simulation; report once and go quiet
        if let Err(e) = self.write_frame(frame) {
            log::warn!("Frame output disabled: {e}");
            self.failed = true;
        }
    }

    fn close(&mut self) {
        if let Err(e) = self.writer.flush() {
            log::warn!("Failed to flush frame output: {e}");
        }
    }
}
