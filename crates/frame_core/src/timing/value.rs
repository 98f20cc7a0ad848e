//! Value domain for timers

use std::fmt::Debug;
use std::ops::{Add, Sub};

/// Ordered additive value a timer can count in
///
/// `Default` is taken as the zero step. Implemented for every type with the
/// right operators: integers, floats, [`std::time::Duration`] and custom
/// fixed-point or tick types.
///
/// Unsigned types and `Duration` panic on underflow in debug builds, so a
/// decreasing timer over them must be able to reach `end` without going
/// below zero.
pub trait TimerValue:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Default + Debug
{
}

impl<T> TimerValue for T where
    T: Copy + PartialOrd + Add<Output = T> + Sub<Output = T> + Default + Debug
{
}
