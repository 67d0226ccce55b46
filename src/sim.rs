//! Simulated host game
//!
//! A tiny stand-in for the game engine: a camera that appears after a short
//! loading phase and a settings menu label that only exists while paused.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use zoom_game::{FovCamera, LabelText, LookupError, Scene, CAMERA_OBJECT_NAME, FOV_LABEL_NAME};

/// Camera handle sharing its FOV with the scene
#[derive(Debug, Clone)]
pub struct SimCamera(Rc<Cell<f32>>);

impl FovCamera for SimCamera {
    fn field_of_view(&self) -> f32 {
        self.0.get()
    }

    fn set_field_of_view(&mut self, fov: f32) {
        self.0.set(fov);
    }
}

/// Settings menu label handle
#[derive(Debug, Clone)]
pub struct SimLabel(Rc<RefCell<String>>);

impl LabelText for SimLabel {
    fn read_text(&self) -> Option<String> {
        Some(self.0.borrow().clone())
    }
}

#[derive(Debug)]
pub struct SimScene {
    camera_fov: Rc<Cell<f32>>,
    camera_spawned: bool,
    fov_text: Rc<RefCell<String>>,
    menu_open: bool,
}

impl SimScene {
    pub fn new(settings_fov: f32) -> Self {
        Self {
            camera_fov: Rc::new(Cell::new(settings_fov)),
            camera_spawned: false,
            fov_text: Rc::new(RefCell::new(format!("{settings_fov:.0}"))),
            menu_open: false,
        }
    }

    /// Finish loading the level
    pub fn spawn_camera(&mut self) {
        self.camera_spawned = true;
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    /// The player drags the FOV slider in the settings menu
    pub fn set_settings_fov(&mut self, fov: f32) {
        *self.fov_text.borrow_mut() = format!("{fov:.0}");
    }

    pub fn camera_fov(&self) -> f32 {
        self.camera_fov.get()
    }
}

impl Scene for SimScene {
    type Camera = SimCamera;
    type Label = SimLabel;

    fn find_camera(&mut self, name: &str) -> Result<SimCamera, LookupError> {
        if name != CAMERA_OBJECT_NAME || !self.camera_spawned {
            return Err(LookupError::ObjectNotFound(name.to_string()));
        }
        Ok(SimCamera(self.camera_fov.clone()))
    }

    fn find_label(&mut self, name: &str) -> Result<SimLabel, LookupError> {
        if name != FOV_LABEL_NAME || !self.menu_open {
            return Err(LookupError::ObjectNotFound(name.to_string()));
        }
        Ok(SimLabel(self.fov_text.clone()))
    }
}
