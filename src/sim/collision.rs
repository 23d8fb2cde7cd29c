//! Wall and paddle collision response
//!
//! Axis-aligned proximity tests with exact sign-flip reflection. Paddle
//! contact is only tested inside a thin capture band in front of each
//! paddle, so a ball fast enough to skip the band in one tick passes through.

use super::state::{Ball, Paddle, PaddleSide};
use crate::settings::{PaddleLayout, SimConfig};

/// Which surfaces a ball bounced off during one resolver pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub left_paddle: bool,
    pub right_paddle: bool,
    pub top_wall: bool,
    pub bottom_wall: bool,
    pub right_wall: bool,
}

impl Contacts {
    pub fn any(&self) -> bool {
        self.left_paddle
            || self.right_paddle
            || self.top_wall
            || self.bottom_wall
            || self.right_wall
    }
}

/// Test one paddle against a ball, flipping `vel.x` on contact
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle, config: &SimConfig) -> bool {
    let (band_min, band_max) = paddle.capture_band(config);
    let approaching = match paddle.side {
        PaddleSide::Left => ball.vel.x < 0.0,
        PaddleSide::Right => ball.vel.x > 0.0,
    };

    let hit = (paddle.pos.y - ball.pos.y).abs() <= config.paddle_height / 2.0
        && ball.pos.x >= band_min
        && ball.pos.x <= band_max
        && approaching;

    if hit {
        ball.vel.x = -ball.vel.x;
    }
    hit
}

/// Resolve paddle and wall contacts for a single ball
///
/// Order is fixed: left paddle, right paddle, then top/bottom wall (at most
/// one of the two), then the right wall when there is no right paddle.
pub fn resolve_walls_and_paddles(
    ball: &mut Ball,
    paddles: &[Paddle],
    config: &SimConfig,
) -> Contacts {
    let mut contacts = Contacts::default();

    for paddle in paddles {
        let hit = ball_paddle_collision(ball, paddle, config);
        match paddle.side {
            PaddleSide::Left => contacts.left_paddle |= hit,
            PaddleSide::Right => contacts.right_paddle |= hit,
        }
    }

    let thickness = config.wall_thickness;
    if ball.pos.y <= thickness && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        contacts.top_wall = true;
    } else if ball.pos.y >= config.window_height - thickness && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
        contacts.bottom_wall = true;
    }

    if config.paddle_layout == PaddleLayout::Single
        && ball.pos.x >= config.window_width - thickness
        && ball.vel.x > 0.0
    {
        ball.vel.x = -ball.vel.x;
        contacts.right_wall = true;
    }

    contacts
}
