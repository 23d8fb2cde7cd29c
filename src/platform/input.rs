//! Input collaborators
//!
//! Real keyboard polling belongs to the windowing layer; these sources cover
//! headless runs and replays.

use std::collections::VecDeque;

use crate::sim::{Direction, TickInput};

/// Polled once per tick
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Map raw key states to tick input
///
/// Left paddle: W up / S down. Right paddle: I up / K down.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    pub w: bool,
    pub s: bool,
    pub i: bool,
    pub k: bool,
    pub escape: bool,
    /// Window close requested
    pub close: bool,
}

impl KeyState {
    pub fn to_input(&self) -> TickInput {
        TickInput {
            left: Direction::from_keys(self.w, self.s),
            right: Direction::from_keys(self.i, self.k),
            quit: self.escape || self.close,
        }
    }
}

/// Paddles stay still; optionally asks to quit after a number of polls
#[derive(Debug, Clone, Default)]
pub struct IdleInput {
    polls: u64,
    quit_after: Option<u64>,
}

impl IdleInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request quit on the poll after `ticks` ticks have been handed out
    pub fn with_tick_limit(ticks: u64) -> Self {
        Self {
            polls: 0,
            quit_after: Some(ticks),
        }
    }
}

impl InputSource for IdleInput {
    fn poll(&mut self) -> TickInput {
        let quit = self.quit_after.is_some_and(|limit| self.polls >= limit);
        self.polls += 1;
        TickInput {
            quit,
            ..Default::default()
        }
    }
}

/// Replays a fixed sequence, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.queue.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let keys = KeyState {
            w: true,
            k: true,
            ..Default::default()
        };
        let input = keys.to_input();
        assert_eq!(input.left, Direction::Up);
        assert_eq!(input.right, Direction::Down);
        assert!(!input.quit);

        let keys = KeyState {
            s: true,
            w: true,
            escape: true,
            ..Default::default()
        };
        let input = keys.to_input();
        assert_eq!(input.left, Direction::Idle);
        assert!(input.quit);
    }

    #[test]
    fn test_idle_tick_limit() {
        let mut input = IdleInput::with_tick_limit(2);
        assert!(!input.poll().quit);
        assert!(!input.poll().quit);
        assert!(input.poll().quit);

        let mut forever = IdleInput::new();
        assert!((0..1000).all(|_| !forever.poll().quit));
    }

    #[test]
    fn test_scripted_then_idle() {
        let mut input = ScriptedInput::new([TickInput {
            left: Direction::Down,
            ..Default::default()
        }]);
        assert_eq!(input.poll().left, Direction::Down);
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.poll(), TickInput::default());
    }
}
