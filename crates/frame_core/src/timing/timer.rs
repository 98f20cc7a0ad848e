//! Generic transition timer
//!
//! A timer owns a counter that moves by one step per [`TemporalTimer::advance`]
//! call. When the counter reaches or crosses `end` the cycle ends:
//!
//! 1. `on_end` fires
//! 2. the counter snaps back to `start` and `on_reset` fires
//! 3. non-looping timers deactivate and `on_stop` fires
//!
//! Overshoot past `end` is dropped on reset, so one tick ends at most one cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TimerValue;
use crate::config::TimerSettings;

/// Lifecycle callback invoked on a timer transition
pub type Callback = Box<dyn FnMut()>;

/// Supplies the step for the next tick; takes priority over the fixed step
pub type StepProvider<T> = Box<dyn FnMut() -> T>;

/// Errors that can occur while building a timer
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// A required constructor argument was missing or invalid
    #[error("Invalid timer argument: {0}")]
    InvalidArgument(String),
}

/// Which way the counter moves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `current += step`, ends when `current >= end`
    #[default]
    Increasing,
    /// `current -= step`, ends when `current <= end`
    Decreasing,
}

/// Result of a single [`TemporalTimer::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer is stopped; nothing changed
    Inactive,
    /// The counter moved but the cycle is still running
    Running,
    /// The counter reached `end`; callbacks fired and the counter was reset
    CycleEnded,
}

impl TickOutcome {
    /// Whether this tick finished a cycle
    pub fn ended_cycle(self) -> bool {
        self == Self::CycleEnded
    }
}

#[derive(Default)]
struct Callbacks {
    on_start: Option<Callback>,
    on_stop: Option<Callback>,
    on_reset: Option<Callback>,
    on_end: Option<Callback>,
}

fn fire(callback: &mut Option<Callback>) {
    if let Some(callback) = callback.as_mut() {
        callback();
    }
}

/// Counter advanced once per tick that fires transitions at a target value
pub struct TemporalTimer<T: TimerValue> {
    start: T,
    end: T,
    current: T,
    step: T,
    step_provider: Option<StepProvider<T>>,
    direction: Direction,
    looping: bool,
    active: bool,
    completed_cycles: u64,
    callbacks: Callbacks,
}

impl<T: TimerValue> TemporalTimer<T> {
    /// Create an increasing, one-shot timer with a fixed step
    pub fn new(start: T, end: T, step: T) -> Self {
        Self::assemble(start, end, step, None, Direction::Increasing, false, Callbacks::default())
    }

    /// Create an increasing, one-shot timer whose step is computed every tick
    ///
    /// # Errors
    ///
    /// [`TimerError::InvalidArgument`] if `provider` is `None`.
    pub fn dynamic(
        start: T,
        end: T,
        provider: Option<StepProvider<T>>,
    ) -> Result<Self, TimerError> {
        let provider = provider.ok_or_else(|| {
            TimerError::InvalidArgument("dynamic timer requires a step provider".to_string())
        })?;
        Ok(Self::assemble(
            start,
            end,
            T::default(),
            Some(provider),
            Direction::Increasing,
            false,
            Callbacks::default(),
        ))
    }

    /// Start configuring a timer running from `start` to `end`
    pub fn builder(start: T, end: T) -> TimerBuilder<T> {
        TimerBuilder::new(start, end)
    }

    /// Create a fixed-step timer from serialized settings
    pub fn from_settings(settings: &TimerSettings<T>) -> Self {
        Self::assemble(
            settings.start,
            settings.end,
            settings.step,
            None,
            settings.direction,
            settings.looping,
            Callbacks::default(),
        )
    }

    fn assemble(
        start: T,
        end: T,
        step: T,
        step_provider: Option<StepProvider<T>>,
        direction: Direction,
        looping: bool,
        callbacks: Callbacks,
    ) -> Self {
        let mut timer = Self {
            start,
            end,
            current: start,
            step,
            step_provider,
            direction,
            looping,
            active: true,
            completed_cycles: 0,
            callbacks,
        };
        log::trace!("Timer created: {:?} -> {:?} ({:?})", start, end, direction);
        fire(&mut timer.callbacks.on_start);
        timer
    }

    /// Apply one tick
    ///
    /// Does nothing while the timer is stopped. Otherwise moves the counter by
    /// the provider's step (or the fixed step) and ends the cycle if `end` was
    /// reached.
    pub fn advance(&mut self) -> TickOutcome {
        if !self.active {
            return TickOutcome::Inactive;
        }

        let delta = match self.step_provider.as_mut() {
            Some(provider) => provider(),
            None => self.step,
        };

        let reached_end = match self.direction {
            Direction::Increasing => {
                self.current = self.current + delta;
                self.current >= self.end
            }
            Direction::Decreasing => {
                self.current = self.current - delta;
                self.current <= self.end
            }
        };

        if reached_end {
            self.finish_cycle();
            TickOutcome::CycleEnded
        } else {
            TickOutcome::Running
        }
    }

    fn finish_cycle(&mut self) {
        self.completed_cycles += 1;
        log::trace!("Timer cycle {} ended at {:?}", self.completed_cycles, self.current);
        fire(&mut self.callbacks.on_end);
        self.reset(!self.looping);
    }

    /// Put the counter back to `start`, optionally stopping the timer
    ///
    /// `on_reset` always fires. With `stop`, `on_stop` fires only if the
    /// timer was running, so a stopped timer never reports a second stop.
    pub fn reset(&mut self, stop: bool) {
        self.current = self.start;
        fire(&mut self.callbacks.on_reset);
        if stop {
            // stop() is a no-op on an inactive timer; on_stop marks the
            // active -> inactive transition, not the request
            self.stop();
        }
    }

    /// Deactivate the timer; no-op if already stopped
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        fire(&mut self.callbacks.on_stop);
    }

    /// Reactivate a stopped timer; no-op if already running
    pub fn resume(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        fire(&mut self.callbacks.on_start);
    }

    /// Current counter value
    pub fn current(&self) -> T {
        self.current
    }

    /// Value the counter resets to
    pub fn start(&self) -> T {
        self.start
    }

    /// Value that ends a cycle
    pub fn end(&self) -> T {
        self.end
    }

    /// Fixed step, used when no provider is set
    pub fn step(&self) -> T {
        self.step
    }

    /// Counting direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the timer restarts after each cycle
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Whether [`advance`](Self::advance) currently has any effect
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the step comes from a provider
    pub fn has_step_provider(&self) -> bool {
        self.step_provider.is_some()
    }

    /// Number of cycles finished since construction
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// Change the reset value; the running counter is untouched
    pub fn set_start(&mut self, start: T) {
        self.start = start;
    }

    /// Change the target value
    pub fn set_end(&mut self, end: T) {
        self.end = end;
    }

    /// Change the fixed step
    pub fn set_step(&mut self, step: T) {
        self.step = step;
    }

    /// Compute the step dynamically from now on
    pub fn set_step_provider(&mut self, provider: impl FnMut() -> T + 'static) {
        self.step_provider = Some(Box::new(provider));
    }

    /// Go back to the fixed step
    pub fn clear_step_provider(&mut self) {
        self.step_provider = None;
    }

    /// Change the counting direction
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Enable or disable looping
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Replace the start/resume callback
    pub fn set_on_start(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.on_start = Some(Box::new(callback));
    }

    /// Replace the stop callback
    pub fn set_on_stop(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.on_stop = Some(Box::new(callback));
    }

    /// Replace the reset callback
    pub fn set_on_reset(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.on_reset = Some(Box::new(callback));
    }

    /// Replace the end-of-cycle callback
    pub fn set_on_end(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.on_end = Some(Box::new(callback));
    }
}

impl<T: TimerValue> fmt::Debug for TemporalTimer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalTimer")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("current", &self.current)
            .field("step", &self.step)
            .field("dynamic_step", &self.step_provider.is_some())
            .field("direction", &self.direction)
            .field("looping", &self.looping)
            .field("active", &self.active)
            .field("completed_cycles", &self.completed_cycles)
            .finish()
    }
}

/// Float timer with only an end callback
pub type SimpleTimer = TemporalTimer<f32>;

impl TemporalTimer<f32> {
    /// Create a float timer the way most gameplay cooldowns need it
    pub fn simple(
        start: f32,
        end: f32,
        step: f32,
        looping: bool,
        on_end: Option<Callback>,
    ) -> Self {
        let callbacks = Callbacks {
            on_end,
            ..Callbacks::default()
        };
        Self::assemble(start, end, step, None, Direction::Increasing, looping, callbacks)
    }
}

/// Builder for [`TemporalTimer`]
///
/// Either [`step`](Self::step) or [`step_provider`](Self::step_provider) must
/// be supplied before [`build`](Self::build).
pub struct TimerBuilder<T: TimerValue> {
    start: T,
    end: T,
    step: Option<T>,
    step_provider: Option<StepProvider<T>>,
    direction: Direction,
    looping: bool,
    callbacks: Callbacks,
}

impl<T: TimerValue> TimerBuilder<T> {
    fn new(start: T, end: T) -> Self {
        Self {
            start,
            end,
            step: None,
            step_provider: None,
            direction: Direction::Increasing,
            looping: false,
            callbacks: Callbacks::default(),
        }
    }

    /// Fixed amount applied per tick
    pub fn step(mut self, step: T) -> Self {
        self.step = Some(step);
        self
    }

    /// Compute the step every tick
    pub fn step_provider(mut self, provider: impl FnMut() -> T + 'static) -> Self {
        self.step_provider = Some(Box::new(provider));
        self
    }

    /// Counting direction
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Restart automatically after each cycle
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Fired on construction and on every resume
    pub fn on_start(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_start = Some(Box::new(callback));
        self
    }

    /// Fired when the timer deactivates
    pub fn on_stop(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_stop = Some(Box::new(callback));
        self
    }

    /// Fired whenever the counter is put back to `start`
    pub fn on_reset(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_reset = Some(Box::new(callback));
        self
    }

    /// Fired when a cycle reaches `end`
    pub fn on_end(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_end = Some(Box::new(callback));
        self
    }

    /// Build the timer, firing `on_start`
    ///
    /// # Errors
    ///
    /// [`TimerError::InvalidArgument`] if neither a step nor a step provider
    /// was given.
    pub fn build(self) -> Result<TemporalTimer<T>, TimerError> {
        if self.step.is_none() && self.step_provider.is_none() {
            return Err(TimerError::InvalidArgument(
                "timer requires a fixed step or a step provider".to_string(),
            ));
        }
        Ok(TemporalTimer::assemble(
            self.start,
            self.end,
            self.step.unwrap_or_default(),
            self.step_provider,
            self.direction,
            self.looping,
            self.callbacks,
        ))
    }
}
