//! Host game abstractions
//!
//! The zoom logic never talks to the game engine directly. A host implements
//! [`Scene`] to hand out camera and label handles by object name.

use crate::error::LookupError;

/// Name of the first-person camera object in the host scene
pub const CAMERA_OBJECT_NAME: &str = "FPSCamera";

/// Name of the settings-menu label that displays the FOV value
pub const FOV_LABEL_NAME: &str = "FOVValueLabel";

/// A handle to a host camera whose field of view can be read and written.
pub trait FovCamera {
    /// Current vertical field of view in degrees
    fn field_of_view(&self) -> f32;

    /// Set the vertical field of view in degrees
    fn set_field_of_view(&mut self, fov: f32);
}

/// Read access to the text a host UI label currently displays.
///
/// Hosts that keep label text in private widget state expose it here; `None`
/// means the text could not be read this time.
pub trait LabelText {
    fn read_text(&self) -> Option<String>;
}

/// Object lookup in the host scene graph.
pub trait Scene {
    type Camera: FovCamera;
    type Label: LabelText;

    /// Find a camera by object name
    fn find_camera(&mut self, name: &str) -> Result<Self::Camera, LookupError>;

    /// Find a text label by object name
    fn find_label(&mut self, name: &str) -> Result<Self::Label, LookupError>;
}
