//! Tick-driven timers
//!
//! [`TemporalTimer`] counts from a start value towards an end value, one
//! step per call to [`TemporalTimer::advance`]. The caller owns the loop;
//! nothing here reads the wall clock.
//!
//! # Usage
//!
//! ```rust
//! use frame_core::timing::{TemporalTimer, TickOutcome};
//!
//! let mut cooldown = TemporalTimer::builder(0u32, 3)
//!     .step(1)
//!     .looping(true)
//!     .build()
//!     .expect("fixed step supplied");
//!
//! assert_eq!(cooldown.advance(), TickOutcome::Running);
//! assert_eq!(cooldown.advance(), TickOutcome::Running);
//! assert_eq!(cooldown.advance(), TickOutcome::CycleEnded);
//! assert!(cooldown.is_active());
//! ```

mod timer;
mod value;

pub use timer::{
    Callback, Direction, SimpleTimer, StepProvider, TemporalTimer, TickOutcome, TimerBuilder,
    TimerError,
};
pub use value::TimerValue;
