//! Game loop
//!
//! Owns one simulation plus its collaborators and drives
//! Input → Clock → Step → Present until the run finishes.

use crate::platform::{
    Frame, FrameClock, InputSource, MonotonicTime, PresentationSink, TimeSource, Wall,
    wall_geometry,
};
use crate::settings::{ConfigError, SimConfig};
use crate::sim::{FinishReason, SimState, StepStatus, tick};

/// A running simulation session
///
/// The presentation sink is closed exactly once: when the run finishes, or
/// when the session is dropped early.
pub struct Game<I: InputSource, P: PresentationSink, T: TimeSource = MonotonicTime> {
    config: SimConfig,
    state: SimState,
    clock: FrameClock<T>,
    input: I,
    sink: P,
    walls: Vec<Wall>,
    finished: Option<FinishReason>,
    closed: bool,
}

impl<I: InputSource, P: PresentationSink> Game<I, P, MonotonicTime> {
    /// Session driven by wall-clock time
    pub fn new(config: SimConfig, seed: u64, input: I, sink: P) -> Result<Self, ConfigError> {
        Self::with_time_source(config, seed, input, sink, MonotonicTime::new())
    }
}

impl<I: InputSource, P: PresentationSink, T: TimeSource> Game<I, P, T> {
    pub fn with_time_source(
        config: SimConfig,
        seed: u64,
        input: I,
        sink: P,
        time: T,
    ) -> Result<Self, ConfigError> {
        let state = SimState::new(&config, seed)?;
        Self::with_state(config, state, input, sink, time)
    }

    /// Session over a prepared state (replays, fixed scenarios)
    pub fn with_state(
        config: SimConfig,
        state: SimState,
        input: I,
        sink: P,
        time: T,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let clock = FrameClock::from_config(time, &config);
        let walls = wall_geometry(&config);
        log::info!(
            "Simulation ready: {} ball(s), seed {}, collisions {}, exit policy {}",
            state.balls.len(),
            state.seed,
            if config.ball_collisions { "on" } else { "off" },
            config.ball_exit_policy.as_str()
        );

        Ok(Self {
            config,
            state,
            clock,
            input,
            sink,
            walls,
            finished: None,
            closed: false,
        })
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn finished(&self) -> Option<FinishReason> {
        self.finished
    }

    /// Run one loop iteration
    ///
    /// A quit request is honoured before any physics runs for this iteration.
    pub fn step_once(&mut self) -> StepStatus {
        if let Some(reason) = self.finished {
            return StepStatus::Finished(reason);
        }

        let input = self.input.poll();
        if input.quit {
            return self.finish(FinishReason::QuitRequested);
        }

        let dt = self.clock.tick();
        let status = tick(&mut self.state, &input, &self.config, dt);

        self.sink.present(&Frame {
            tick: self.state.time_ticks,
            paddles: &self.state.paddles,
            balls: &self.state.balls,
            walls: &self.walls,
        });

        match status {
            StepStatus::Finished(reason) => self.finish(reason),
            StepStatus::Running => StepStatus::Running,
        }
    }

    /// Loop until the simulation finishes or a quit is requested
    pub fn run(&mut self) -> FinishReason {
        loop {
            if let StepStatus::Finished(reason) = self.step_once() {
                return reason;
            }
        }
    }

    fn finish(&mut self, reason: FinishReason) -> StepStatus {
        if self.finished.is_none() {
            log::info!(
                "Simulation finished after {} tick(s): {:?}",
                self.state.time_ticks,
                reason
            );
            self.finished = Some(reason);
        }
        self.close_sink();
        StepStatus::Finished(reason)
    }

    fn close_sink(&mut self) {
        if !self.closed {
            self.closed = true;
            self.sink.close();
        }
    }
}

impl<I: InputSource, P: PresentationSink, T: TimeSource> Drop for Game<I, P, T> {
    fn drop(&mut self) {
        self.close_sink();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{IdleInput, ManualTime, ScriptedInput};
    use crate::sim::{Ball, Direction, TickInput};
    use glam::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts frames and closes through shared cells so the test can inspect
    /// them after the session is gone
    #[derive(Default, Clone)]
    struct CountingSink {
        frames: Rc<Cell<u32>>,
        closes: Rc<Cell<u32>>,
    }

    impl PresentationSink for CountingSink {
        fn present(&mut self, _frame: &Frame<'_>) {
            self.frames.set(self.frames.get() + 1);
        }

        fn close(&mut self) {
            self.closes.set(self.closes.get() + 1);
        }
    }

    #[test]
    fn test_quit_skips_the_step() {
        let sink = CountingSink::default();
        let input = ScriptedInput::new([TickInput {
            left: Direction::Down,
            quit: true,
            ..Default::default()
        }]);
        let mut game = Game::with_time_source(
            SimConfig::default(),
            1,
            input,
            sink.clone(),
            ManualTime::new(),
        )
        .unwrap();
        let paddle_before = game.state().paddles[0].pos;

        assert_eq!(game.run(), FinishReason::QuitRequested);
        assert_eq!(game.state().time_ticks, 0);
        assert_eq!(game.state().paddles[0].pos, paddle_before);
        assert_eq!(sink.frames.get(), 0);
        assert_eq!(sink.closes.get(), 1);

        drop(game);
        assert_eq!(sink.closes.get(), 1);
    }

    #[test]
    fn test_runs_until_last_ball_lost() {
        let config = SimConfig::default();
        let ball = Ball::new(Vec2::new(30.0, 600.0), Vec2::new(-300.0, 0.0));
        let state = SimState::with_balls(&config, 0, vec![ball]);
        let sink = CountingSink::default();

        let mut game =
            Game::with_state(config, state, IdleInput::new(), sink.clone(), ManualTime::new())
                .unwrap();
        assert_eq!(game.run(), FinishReason::AllBallsLost);
        assert!(game.state().balls.is_empty());
        assert_eq!(sink.frames.get() as u64, game.state().time_ticks);
        assert_eq!(sink.closes.get(), 1);

        // Further steps are no-ops
        assert!(game.step_once().is_finished());
        assert_eq!(sink.closes.get(), 1);
    }

    #[test]
    fn test_drop_closes_sink() {
        let sink = CountingSink::default();
        {
            let mut game = Game::with_time_source(
                SimConfig::default(),
                9,
                IdleInput::new(),
                sink.clone(),
                ManualTime::new(),
            )
        .unwrap();
            assert_eq!(game.step_once(), StepStatus::Running);
        }
        assert_eq!(sink.frames.get(), 1);
        assert_eq!(sink.closes.get(), 1);
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = SimConfig {
            ball_max_speed_x: -1.0,
            ..Default::default()
        };
        let result = Game::with_time_source(
            config,
            1,
            IdleInput::new(),
            CountingSink::default(),
            ManualTime::new(),
        );
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "ball_max_speed_x",
                ..
            })
        ));

        // A prepared state does not bypass validation
        let config = SimConfig {
            max_delta_time: -0.5,
            ..Default::default()
        };
        let state = SimState::with_balls(&config, 0, Vec::new());
        let result = Game::with_state(
            config,
            state,
            IdleInput::new(),
            CountingSink::default(),
            ManualTime::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_clock_paces_the_loop() {
        let mut game = Game::with_time_source(
            SimConfig::default(),
            2,
            IdleInput::with_tick_limit(10),
            CountingSink::default(),
            ManualTime::new(),
        )
        .unwrap();
        game.run();
        assert_eq!(game.state().time_ticks, 10);
        assert_eq!(
            game.clock.source().now(),
            game.config().target_frame_time() * 10
        );
    }
}
