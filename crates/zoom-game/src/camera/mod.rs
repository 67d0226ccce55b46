//! Camera zoom module
//!
//! Provides the FOV zoom controller and its configuration.

mod config;
mod controller;

pub use config::ZoomConfig;
pub use controller::{FovState, ZoomController, ZoomState};
