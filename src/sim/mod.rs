//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Caller-supplied delta-time only (no clock reads)
//! - Seeded RNG only, consumed at spawn
//! - Stable iteration order (ball collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod integrate;
pub mod paddle;
pub mod pairs;
pub mod state;
pub mod tick;

pub use collision::{Contacts, ball_paddle_collision, resolve_walls_and_paddles};
pub use integrate::{IntegrateOutcome, integrate_balls};
pub use paddle::update_paddle;
pub use pairs::{resolve_ball_pairs, resolve_pair};
pub use state::{Ball, Direction, Paddle, PaddleSide, SimState, random_velocity};
pub use tick::{FinishReason, StepStatus, TickInput, tick};
