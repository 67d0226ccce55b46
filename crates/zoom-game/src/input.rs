//! Input system with action-based mapping
//!
//! Raw key and scroll events are mapped onto a small set of actions and
//! collected into a per-frame [`InputState`] snapshot the zoom controller reads.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::error::ConfigError;

/// Key the host uses to pause; zoom can't be bound to it
pub const PAUSE_KEY: KeyCode = KeyCode::Escape;

/// Actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Zoom in (C by default, configurable)
    Zoom,
    /// Pause/unpause (Escape by default)
    Pause,
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Scroll wheel delta for this frame, positive away from the user
    pub scroll_delta: f32,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.scroll_delta = 0.0;
    }
}

/// Maps physical keys to actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<KeyCode, InputAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };
        bindings.bind(PAUSE_KEY, InputAction::Pause);
        bindings.bind(KeyCode::KeyC, InputAction::Zoom);
        bindings
    }
}

impl InputBindings {
    /// Default bindings with the zoom action moved to `zoom_key`
    pub fn with_zoom_key(zoom_key: KeyCode) -> Result<Self, ConfigError> {
        if zoom_key == PAUSE_KEY {
            return Err(ConfigError::ReservedKey(zoom_key));
        }

        let mut bindings = Self::default();
        bindings.bindings.retain(|_, action| *action != InputAction::Zoom);
        bindings.bind(zoom_key, InputAction::Zoom);
        Ok(bindings)
    }

    /// Bind a key to an action, replacing any previous action on that key
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.bindings.insert(key, action);
    }

    /// Get the action for a key, if any
    pub fn get_key_action(&self, key: KeyCode) -> Option<InputAction> {
        self.bindings.get(&key).copied()
    }
}

/// Input handler that processes raw events and updates state
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    /// Input bindings
    pub bindings: InputBindings,
}

impl InputHandler {
    pub fn new(bindings: InputBindings) -> Self {
        Self {
            state: InputState::new(),
            bindings,
        }
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        let PhysicalKey::Code(key_code) = physical_key else {
            return;
        };
        let Some(action) = self.bindings.get_key_action(key_code) else {
            return;
        };

        match element_state {
            ElementState::Pressed => {
                // Key repeat shouldn't count as a fresh press
                if !self.state.held.contains(&action) {
                    self.state.just_pressed.insert(action);
                }
                self.state.held.insert(action);
            }
            ElementState::Released => {
                self.state.held.remove(&action);
            }
        }
    }

    /// Handle scroll wheel
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let scroll = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
        };
        self.state.scroll_delta += scroll;
    }

    /// Clear frame-specific input data
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = InputBindings::default();
        assert_eq!(bindings.get_key_action(KeyCode::KeyC), Some(InputAction::Zoom));
        assert_eq!(bindings.get_key_action(KeyCode::Escape), Some(InputAction::Pause));
        assert_eq!(bindings.get_key_action(KeyCode::KeyW), None);
    }

    #[test]
    fn test_custom_zoom_key() {
        let bindings = InputBindings::with_zoom_key(KeyCode::KeyZ).unwrap();
        assert_eq!(bindings.get_key_action(KeyCode::KeyZ), Some(InputAction::Zoom));
        assert_eq!(bindings.get_key_action(KeyCode::KeyC), None);
        assert_eq!(bindings.get_key_action(PAUSE_KEY), Some(InputAction::Pause));
    }

    #[test]
    fn test_zoom_key_cannot_take_pause_key() {
        assert_eq!(
            InputBindings::with_zoom_key(PAUSE_KEY).unwrap_err(),
            ConfigError::ReservedKey(PAUSE_KEY)
        );
    }

    #[test]
    fn test_input_state() {
        let mut state = InputState::new();
        state.held.insert(InputAction::Zoom);
        state.just_pressed.insert(InputAction::Pause);
        state.scroll_delta = 1.0;

        assert!(state.is_held(InputAction::Zoom));
        assert!(state.is_just_pressed(InputAction::Pause));
        assert!(!state.is_held(InputAction::Pause));

        state.clear_frame();
        assert!(state.is_held(InputAction::Zoom));
        assert!(!state.is_just_pressed(InputAction::Pause));
        assert_eq!(state.scroll_delta, 0.0);
    }

    #[test]
    fn test_press_edge_ignores_repeat() {
        let mut handler = InputHandler::default();
        let key = PhysicalKey::Code(KeyCode::KeyC);

        handler.handle_keyboard(key, ElementState::Pressed);
        assert!(handler.state.is_just_pressed(InputAction::Zoom));
        handler.end_frame();

        // OS key repeat
        handler.handle_keyboard(key, ElementState::Pressed);
        assert!(!handler.state.is_just_pressed(InputAction::Zoom));
        assert!(handler.state.is_held(InputAction::Zoom));

        handler.handle_keyboard(key, ElementState::Released);
        assert!(!handler.state.is_held(InputAction::Zoom));
    }

    #[test]
    fn test_scroll_accumulates() {
        let mut handler = InputHandler::default();
        handler.handle_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        handler.handle_scroll(MouseScrollDelta::PixelDelta(
            winit::dpi::PhysicalPosition::new(0.0, -60.0),
        ));
        assert!((handler.state.scroll_delta - 0.5).abs() < f32::EPSILON);

        handler.end_frame();
        assert_eq!(handler.state.scroll_delta, 0.0);
    }
}
