//! Ball integrator
//!
//! Explicit Euler step plus horizontal bounds handling.

use super::state::Ball;
use crate::settings::BallExitPolicy;

/// Balls that left the horizontal bounds during one integration pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrateOutcome {
    pub escaped: usize,
}

/// Advance every ball by `vel * dt` and handle escapes according to `policy`
///
/// With [`BallExitPolicy::Despawn`] escaped balls are dropped in place,
/// keeping the survivors in their original relative order. With
/// [`BallExitPolicy::Terminate`] they stay in the collection and the caller
/// ends the run.
pub fn integrate_balls(
    balls: &mut Vec<Ball>,
    dt: f32,
    width: f32,
    policy: BallExitPolicy,
) -> IntegrateOutcome {
    let mut escaped = 0;

    balls.retain_mut(|ball| {
        ball.pos += ball.vel * dt;
        if !ball.is_out_of_bounds(width) {
            return true;
        }

        escaped += 1;
        log::debug!(
            "Ball left the playfield at ({:.1}, {:.1})",
            ball.pos.x,
            ball.pos.y
        );
        policy == BallExitPolicy::Terminate
    });

    IntegrateOutcome { escaped }
}
