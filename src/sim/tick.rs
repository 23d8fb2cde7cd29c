//! Simulation step
//!
//! Advances the state by one tick: paddles, ball integration, wall/paddle
//! contacts, ball-ball contacts, then the termination check.

use serde::{Deserialize, Serialize};

use super::collision::resolve_walls_and_paddles;
use super::integrate::integrate_balls;
use super::pairs::resolve_ball_pairs;
use super::paddle::update_paddle;
use super::state::{Direction, PaddleSide, SimState};
use crate::settings::{BallExitPolicy, SimConfig};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: Direction,
    pub right: Direction,
    /// Stop the loop; honoured at the loop boundary, never mid-tick
    pub quit: bool,
}

impl TickInput {
    pub fn direction_for(&self, side: PaddleSide) -> Direction {
        match side {
            PaddleSide::Left => self.left,
            PaddleSide::Right => self.right,
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// Every ball has left the playfield
    AllBallsLost,
    /// A ball left the playfield under [`BallExitPolicy::Terminate`]
    BallEscaped,
    /// The input source asked to stop
    QuitRequested,
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Running,
    Finished(FinishReason),
}

impl StepStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, StepStatus::Finished(_))
    }
}

/// Advance the simulation by one tick of `dt` seconds
///
/// `input.quit` is not consulted here; the caller checks it before stepping.
pub fn tick(state: &mut SimState, input: &TickInput, config: &SimConfig, dt: f32) -> StepStatus {
    state.time_ticks += 1;

    for paddle in &mut state.paddles {
        let dir = input.direction_for(paddle.side);
        update_paddle(paddle, dir, config, dt);
    }

    let outcome = integrate_balls(
        &mut state.balls,
        dt,
        config.window_width,
        config.ball_exit_policy,
    );

    for ball in &mut state.balls {
        let contacts = resolve_walls_and_paddles(ball, &state.paddles, config);
        if contacts.any() {
            log::trace!("Tick {}: {:?}", state.time_ticks, contacts);
        }
    }

    if config.ball_collisions {
        resolve_ball_pairs(&mut state.balls, config.ball_contact_distance());
    }

    if config.ball_exit_policy == BallExitPolicy::Terminate && outcome.escaped > 0 {
        return StepStatus::Finished(FinishReason::BallEscaped);
    }
    if state.balls.is_empty() {
        return StepStatus::Finished(FinishReason::AllBallsLost);
    }
    StepStatus::Running
}
