//! Paddle controller
//!
//! Discrete velocity model: a paddle moves at full speed while an intent is
//! held and stops dead when it is released.

use super::state::{Direction, Paddle};
use crate::settings::SimConfig;

/// Apply one tick of directional intent to a paddle
pub fn update_paddle(paddle: &mut Paddle, dir: Direction, config: &SimConfig, dt: f32) {
    paddle.dir = dir;
    if dir == Direction::Idle {
        return;
    }

    paddle.pos.y += dir.sign() * config.paddle_speed * dt;
    paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
}
