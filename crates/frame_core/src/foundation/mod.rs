//! Foundation module - Core utilities shared by pooling and timing
//!
//! - Logging setup and macro re-exports

pub mod logging;
