//! FOV zoom controller with hold/toggle activation and scroll adjustment

use std::time::Duration;

use tracing::{debug, info, warn};
use zoom_core::{smooth_damp, GameTime, MonotonicClock};

use crate::error::{ConfigError, LookupError};
use crate::host::{FovCamera, Scene, CAMERA_OBJECT_NAME};
use crate::input::{InputAction, InputState};
use crate::watcher::{PauseEdge, PauseWatcher, SettingsWatcher};

use super::ZoomConfig;

/// FOV the host uses until told otherwise
const DEFAULT_BASELINE_FOV: f32 = 75.0;

/// Fraction of the current FOV one unit of scroll moves, before sensitivity
const SCROLL_STEP: f32 = 0.4;

/// Zoom activation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomState {
    #[default]
    Unzoomed,
    Zoomed,
}

impl ZoomState {
    pub fn is_zoomed(&self) -> bool {
        matches!(self, ZoomState::Zoomed)
    }
}

/// Mutable per-frame state of the zoom controller
#[derive(Debug, Clone)]
pub struct FovState {
    /// Unzoomed baseline FOV, tracks the game's own FOV setting
    pub current_fov: f32,
    /// FOV the camera is heading toward
    pub target_fov: f32,
    /// Velocity carried between frames by the smoothing
    pub velocity: f32,
    /// Whether the zoom is active
    pub zoom: ZoomState,
    /// Set once a camera has been found
    pub initialized: bool,
    /// Host pause state as of the last watcher tick
    pub game_paused: bool,
    /// Baseline came from the settings menu rather than the camera
    baseline_synced: bool,
}

impl Default for FovState {
    fn default() -> Self {
        Self {
            current_fov: DEFAULT_BASELINE_FOV,
            target_fov: DEFAULT_BASELINE_FOV,
            velocity: 0.0,
            zoom: ZoomState::Unzoomed,
            initialized: false,
            game_paused: false,
            baseline_synced: false,
        }
    }
}

/// Drives a host camera's field of view from zoom input.
///
/// One instance lives for the whole session. The host calls [`update`](Self::update)
/// and [`tick_watchers`](Self::tick_watchers) once per frame, in any order, or
/// [`frame`](Self::frame) to do both.
pub struct ZoomController<S: Scene> {
    config: ZoomConfig,
    state: FovState,
    camera: Option<S::Camera>,
    pause_watcher: PauseWatcher,
    settings_watcher: SettingsWatcher<S::Label>,
}

impl<S: Scene> ZoomController<S> {
    /// Create a controller, rejecting configs that could produce invalid FOVs
    pub fn new(config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: FovState::default(),
            camera: None,
            pause_watcher: PauseWatcher::new(),
            settings_watcher: SettingsWatcher::new(),
        })
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn state(&self) -> &FovState {
        &self.state
    }

    pub fn current_fov(&self) -> f32 {
        self.state.current_fov
    }

    pub fn target_fov(&self) -> f32 {
        self.state.target_fov
    }

    pub fn zoom_state(&self) -> ZoomState {
        self.state.zoom
    }

    pub fn is_zoomed(&self) -> bool {
        self.state.zoom.is_zoomed()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    pub fn is_game_paused(&self) -> bool {
        self.state.game_paused
    }

    pub fn settings_watcher_active(&self) -> bool {
        self.settings_watcher.is_active()
    }

    /// Run both the watchers and the zoom update for one frame
    pub fn frame(&mut self, scene: &mut S, input: &InputState, time: &GameTime, clock: &impl MonotonicClock) {
        self.tick_watchers(scene, time, clock.elapsed());
        self.update(scene, input, time);
    }

    /// Per-frame zoom update
    pub fn update(&mut self, scene: &mut S, input: &InputState, time: &GameTime) {
        if self.camera.is_none() && !self.acquire_camera(scene) {
            return;
        }
        if !self.state.initialized {
            return;
        }

        let zoom_held = input.is_held(InputAction::Zoom);

        if self.config.toggle_mode {
            if input.is_just_pressed(InputAction::Zoom) {
                self.toggle_zoom();
            }
        } else if zoom_held {
            self.state.zoom = ZoomState::Zoomed;
            self.state.target_fov = self.config.zoom_amount;
        } else {
            self.state.zoom = ZoomState::Unzoomed;
            self.state.target_fov = self.state.current_fov;
        }

        if zoom_held && input.scroll_delta != 0.0 {
            self.handle_scroll(input.scroll_delta);
        }

        self.state.target_fov = self.sanitize(self.state.target_fov);
        self.apply(time.delta_time);
    }

    /// Advance the pause and settings watchers by one frame
    pub fn tick_watchers(&mut self, scene: &mut S, time: &GameTime, now: Duration) {
        match self.pause_watcher.tick(time) {
            Some(PauseEdge::Entered) => {
                debug!("Game paused, watching settings menu FOV");
                self.settings_watcher.start();
            }
            Some(PauseEdge::Left) => {
                debug!("Game resumed, settings watch stopped");
                self.settings_watcher.stop();
            }
            None => {}
        }
        self.state.game_paused = self.pause_watcher.is_paused();

        if let Some(fov) = self.settings_watcher.tick(scene, now) {
            info!("FOV setting changed to {fov}");
            self.set_baseline(fov);
        }
    }

    /// Replace the unzoomed baseline FOV
    pub fn set_baseline(&mut self, fov: f32) {
        if !fov.is_finite() {
            return;
        }
        self.state.current_fov = fov;
        self.state.baseline_synced = true;

        if let Some(camera) = self.camera.as_mut() {
            self.state.target_fov = self.config.clamp_fov(fov);
            if !self.config.enable_animation {
                camera.set_field_of_view(self.state.target_fov);
            }
        }
    }

    /// Handle scroll wheel zoom, proportional to the current target
    fn handle_scroll(&mut self, scroll_delta: f32) {
        let fov_change = scroll_delta * self.config.scroll_sensitivity * self.state.target_fov * SCROLL_STEP;
        self.state.target_fov -= fov_change;
    }

    fn toggle_zoom(&mut self) {
        if self.state.zoom.is_zoomed() {
            self.state.zoom = ZoomState::Unzoomed;
            self.state.target_fov = self.state.current_fov;
        } else {
            self.state.zoom = ZoomState::Zoomed;
            self.state.target_fov = self.config.zoom_amount;
        }
    }

    /// Keep a FOV finite and within the configured caps
    fn sanitize(&self, fov: f32) -> f32 {
        let fov = if fov.is_finite() {
            fov
        } else if self.state.current_fov.is_finite() {
            self.state.current_fov
        } else {
            DEFAULT_BASELINE_FOV
        };
        self.config.clamp_fov(fov)
    }

    fn apply(&mut self, delta_time: f32) {
        let Some(camera) = self.camera.as_mut() else {
            return;
        };

        if self.config.enable_animation {
            let fov = smooth_damp(
                camera.field_of_view(),
                self.state.target_fov,
                &mut self.state.velocity,
                self.config.zoom_speed,
                delta_time,
            );
            camera.set_field_of_view(fov);
        } else {
            camera.set_field_of_view(self.state.target_fov);
        }
    }

    fn acquire_camera(&mut self, scene: &mut S) -> bool {
        let camera = match scene.find_camera(CAMERA_OBJECT_NAME) {
            Ok(camera) => camera,
            Err(err @ LookupError::ObjectNotFound(_)) => {
                debug!("{err}, will retry");
                return false;
            }
            Err(err) => {
                warn!("{err}, will retry");
                return false;
            }
        };

        let fov = camera.field_of_view();
        info!("{CAMERA_OBJECT_NAME} located, default FOV: {fov}");

        if !self.state.baseline_synced && fov.is_finite() {
            self.state.current_fov = fov;
        }
        self.state.target_fov = self.state.current_fov;
        self.state.initialized = true;
        self.camera = Some(camera);
        true
    }
}
