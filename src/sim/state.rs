//! Simulation state and core entity types
//!
//! Everything a tick reads or writes lives here; the state is plain data and
//! can be cloned or serialized for replay.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::{ConfigError, PaddleLayout, SimConfig};

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Whether the ball's x lies outside `[0, width]`
    #[inline]
    pub fn is_out_of_bounds(&self, width: f32) -> bool {
        self.pos.x < 0.0 || self.pos.x > width
    }
}

/// Directional paddle intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Idle,
    Down,
}

impl Direction {
    /// Map key states to an intent; pressing both cancels out
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => Direction::Up,
            (false, true) => Direction::Down,
            _ => Direction::Idle,
        }
    }

    /// -1, 0 or +1 (screen y grows downward)
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Idle => 0.0,
            Direction::Down => 1.0,
        }
    }
}

/// Which side of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleSide {
    Left,
    Right,
}

/// A player paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: PaddleSide,
    /// Centre position
    pub pos: Vec2,
    /// Intent applied on the most recent tick
    pub dir: Direction,
}

impl Paddle {
    /// Paddle at its starting position (vertically centred)
    pub fn new(side: PaddleSide, config: &SimConfig) -> Self {
        let x = match side {
            PaddleSide::Left => config.paddle_inset,
            PaddleSide::Right => config.window_width - config.paddle_inset,
        };
        Self {
            side,
            pos: Vec2::new(x, config.window_height / 2.0),
            dir: Direction::Idle,
        }
    }

    /// Capture band `[min_x, max_x]` for this paddle
    pub fn capture_band(&self, config: &SimConfig) -> (f32, f32) {
        match self.side {
            PaddleSide::Left => (config.paddle_band_near, config.paddle_band_far),
            PaddleSide::Right => (
                config.window_width - config.paddle_band_far,
                config.window_width - config.paddle_band_near,
            ),
        }
    }
}

/// Draw a spawn velocity
///
/// Horizontal speed is uniform in `[-max_x, max_x]` and snapped out to
/// `±min_x` when it lands too close to zero; vertical speed is uniform in
/// `[-max_y, max_y]`.
pub fn random_velocity(rng: &mut Pcg32, config: &SimConfig) -> Vec2 {
    let max_x = config.ball_max_speed_x;
    let max_y = config.ball_max_speed_y;

    let mut vx = rng.random_range(-max_x..=max_x);
    if vx.abs() < config.ball_min_speed_x {
        vx = if vx >= 0.0 {
            config.ball_min_speed_x
        } else {
            -config.ball_min_speed_x
        };
    }
    let vy = rng.random_range(-max_y..=max_y);
    Vec2::new(vx, vy)
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Spawn seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Paddles (left first)
    pub paddles: Vec<Paddle>,
    /// Active balls; order is significant for pair resolution
    pub balls: Vec<Ball>,
}

impl SimState {
    /// Create a new state with `config.ball_count` balls at the centre
    ///
    /// The config is validated first; spawn draws need well-formed ranges.
    pub fn new(config: &SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let center = Vec2::new(config.window_width / 2.0, config.window_height / 2.0);

        let balls = (0..config.ball_count)
            .map(|_| Ball::new(center, random_velocity(&mut rng, config)))
            .collect();

        Ok(Self::with_balls(config, seed, balls))
    }

    /// Create a state with explicit balls
    pub fn with_balls(config: &SimConfig, seed: u64, balls: Vec<Ball>) -> Self {
        let paddles = match config.paddle_layout {
            PaddleLayout::Single => vec![Paddle::new(PaddleSide::Left, config)],
            PaddleLayout::Dual => vec![
                Paddle::new(PaddleSide::Left, config),
                Paddle::new(PaddleSide::Right, config),
            ],
        };

        Self {
            seed,
            time_ticks: 0,
            paddles,
            balls,
        }
    }

    pub fn paddle(&self, side: PaddleSide) -> Option<&Paddle> {
        self.paddles.iter().find(|p| p.side == side)
    }

    pub fn paddle_mut(&mut self, side: PaddleSide) -> Option<&mut Paddle> {
        self.paddles.iter_mut().find(|p| p.side == side)
    }
}
