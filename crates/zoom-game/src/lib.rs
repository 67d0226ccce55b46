//! Zoom Game - FOV zoom logic for a first-person camera
//!
//! Provides the zoom controller, input handling, host abstractions, and the
//! watchers that keep the zoom baseline in sync with the game's settings menu.

pub mod camera;
pub mod error;
pub mod host;
pub mod input;
pub mod watcher;

pub use camera::{FovState, ZoomConfig, ZoomController, ZoomState};
pub use error::{ConfigError, LookupError};
pub use host::{FovCamera, LabelText, Scene, CAMERA_OBJECT_NAME, FOV_LABEL_NAME};
pub use input::{InputAction, InputBindings, InputHandler, InputState, PAUSE_KEY};
pub use watcher::{PauseEdge, PauseWatcher, SettingsWatcher, SETTINGS_POLL_INTERVAL};
