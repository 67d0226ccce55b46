//! Zoom Core - Timing and smoothing primitives for SimpleZoom
//!
//! This crate provides the host-independent building blocks the FOV controller runs on:
//! - Per-frame game time with time scale and pause detection
//! - Monotonic wall-clock sources (real and manually driven)
//! - Critically-damped smoothing of a scalar toward a target

pub mod smoothing;
pub mod time;

pub use smoothing::smooth_damp;
pub use time::{GameTime, ManualClock, MonotonicClock, SystemClock, TimeConfig};
