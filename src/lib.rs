//! Multiball Pong - fixed-timestep physics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, balls, collisions, termination)
//! - `platform`: Clock, input and presentation collaborators
//! - `settings`: Immutable playfield configuration
//! - `game`: The loop that ties a simulation to its collaborators

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{BallExitPolicy, ConfigError, PaddleLayout, SimConfig};

/// Game configuration constants
///
/// These are the compile-time defaults behind [`SimConfig::default`].
pub mod consts {
    /// Playfield dimensions
    pub const WINDOW_WIDTH: f32 = 1024.0;
    pub const WINDOW_HEIGHT: f32 = 768.0;
    /// Wall thickness; also the ball size and the ball-ball contact distance
    pub const WALL_THICKNESS: f32 = 15.0;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Distance of the paddle centre from its side of the window
    pub const PADDLE_INSET: f32 = 10.0;
    /// Capture band (distance from the paddle's side of the window)
    pub const PADDLE_BAND_NEAR: f32 = 20.0;
    pub const PADDLE_BAND_FAR: f32 = 25.0;

    /// Ball defaults
    pub const BALL_COUNT: u32 = 8;
    pub const BALL_MAX_SPEED_X: f32 = 300.0;
    /// Horizontal speed never drops below this at spawn
    pub const BALL_MIN_SPEED_X: f32 = 200.0;
    pub const BALL_MAX_SPEED_Y: f32 = 200.0;

    /// Target tick interval (~60 Hz)
    pub const TARGET_FRAME_TIME_MS: u64 = 16;
    /// Delta-time ceiling in seconds
    pub const MAX_DELTA_TIME: f32 = 0.05;

    /// Floor on the centre distance the pair resolver divides by and
    /// measures overlap from
    pub const MIN_SEPARATION_DISTANCE: f32 = 1.0;
}
