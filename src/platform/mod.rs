//! Platform abstraction layer
//!
//! Collaborators that sit outside the deterministic simulation:
//! - Time/ticks (frame clock)
//! - Input polling
//! - Presentation (frame output)

pub mod input;
pub mod present;
pub mod time;

pub use input::{IdleInput, InputSource, KeyState, ScriptedInput};
pub use present::{Frame, JsonLinesSink, LogSink, PresentationSink, Wall, wall_geometry};
pub use time::{FrameClock, ManualTime, MonotonicTime, TimeSource};
