//! Baseline watchers
//!
//! Both watchers are small state machines advanced once per frame. The pause
//! watcher reports pause edges; the settings watcher only runs while paused and
//! reads the FOV the player picked in the settings menu.

mod pause;
mod settings;

pub use pause::{PauseEdge, PauseWatcher};
pub use settings::{SettingsWatcher, SETTINGS_POLL_INTERVAL};
