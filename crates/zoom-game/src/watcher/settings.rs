use std::time::Duration;

use tracing::{debug, warn};

use crate::error::LookupError;
use crate::host::{LabelText, Scene, FOV_LABEL_NAME};

/// Minimum wall-clock time between two reads of the settings label
pub const SETTINGS_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Polls the settings menu FOV label while the game is paused.
///
/// The label handle is resolved lazily on each start and dropped on stop, since
/// the menu may be rebuilt between pauses. A missing label is looked up again
/// every frame; the poll interval only applies to reading its text.
pub struct SettingsWatcher<L> {
    active: bool,
    label: Option<L>,
    last_poll: Option<Duration>,
    last_text: Option<String>,
}

impl<L> Default for SettingsWatcher<L> {
    fn default() -> Self {
        Self {
            active: false,
            label: None,
            last_poll: None,
            last_text: None,
        }
    }
}

impl<L: LabelText> SettingsWatcher<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begin polling on the next tick
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stop polling and forget the label handle
    pub fn stop(&mut self) {
        self.active = false;
        self.label = None;
    }

    /// Advance the watcher by one frame.
    ///
    /// `now` is monotonic time. Returns the new baseline FOV when the label text
    /// changed to something numeric since the last successful read.
    pub fn tick<S>(&mut self, scene: &mut S, now: Duration) -> Option<f32>
    where
        S: Scene<Label = L>,
    {
        if !self.active {
            return None;
        }

        // Lookups aren't debounced, only reads of a resolved label are
        if self.label.is_none() {
            match scene.find_label(FOV_LABEL_NAME) {
                Ok(label) => self.label = Some(label),
                Err(err @ LookupError::ObjectNotFound(_)) => {
                    debug!("{err}, will retry");
                    return None;
                }
                Err(err) => {
                    warn!("{err}, will retry");
                    return None;
                }
            }
        }

        if let Some(last) = self.last_poll {
            if now.saturating_sub(last) < SETTINGS_POLL_INTERVAL {
                return None;
            }
        }
        self.last_poll = Some(now);

        let text = self.label.as_ref()?.read_text();
        let Some(text) = text else {
            debug!("{FOV_LABEL_NAME} text is not readable yet");
            return None;
        };
        if self.last_text.as_deref() == Some(text.as_str()) {
            return None;
        }

        let parsed = text.trim().parse::<f32>().ok().filter(|fov| fov.is_finite());
        self.last_text = Some(text);
        parsed
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::host::FovCamera;

    struct NoCamera;

    impl FovCamera for NoCamera {
        fn field_of_view(&self) -> f32 {
            0.0
        }

        fn set_field_of_view(&mut self, _fov: f32) {}
    }

    #[derive(Clone)]
    struct Label(Rc<RefCell<Option<String>>>);

    impl LabelText for Label {
        fn read_text(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    struct Menu {
        label: Option<Label>,
        lookups: usize,
    }

    impl Menu {
        fn with_text(text: &str) -> Self {
            Self {
                label: Some(Label(Rc::new(RefCell::new(Some(text.to_string()))))),
                lookups: 0,
            }
        }

        fn set_text(&self, text: &str) {
            *self.label.as_ref().unwrap().0.borrow_mut() = Some(text.to_string());
        }
    }

    impl Scene for Menu {
        type Camera = NoCamera;
        type Label = Label;

        fn find_camera(&mut self, name: &str) -> Result<NoCamera, LookupError> {
            Err(LookupError::ObjectNotFound(name.to_string()))
        }

        fn find_label(&mut self, name: &str) -> Result<Label, LookupError> {
            self.lookups += 1;
            self.label
                .clone()
                .ok_or_else(|| LookupError::ObjectNotFound(name.to_string()))
        }
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_inactive_does_nothing() {
        let mut menu = Menu::with_text("90");
        let mut watcher = SettingsWatcher::new();
        assert_eq!(watcher.tick(&mut menu, ms(0)), None);
        assert_eq!(menu.lookups, 0);
    }

    #[test]
    fn test_reads_changed_text() {
        let mut menu = Menu::with_text("90");
        let mut watcher = SettingsWatcher::new();
        watcher.start();

        assert_eq!(watcher.tick(&mut menu, ms(0)), Some(90.0));
        // Unchanged text
        assert_eq!(watcher.tick(&mut menu, ms(600)), None);

        menu.set_text("100");
        assert_eq!(watcher.tick(&mut menu, ms(1200)), Some(100.0));
    }

    #[test]
    fn test_polls_are_debounced() {
        let mut menu = Menu::with_text("90");
        let mut watcher = SettingsWatcher::new();
        watcher.start();
        assert_eq!(watcher.tick(&mut menu, ms(0)), Some(90.0));

        menu.set_text("95");
        assert_eq!(watcher.tick(&mut menu, ms(100)), None);
        menu.set_text("100");
        assert_eq!(watcher.tick(&mut menu, ms(499)), None);

        // Only the latest text is seen once the interval passed
        assert_eq!(watcher.tick(&mut menu, ms(500)), Some(100.0));
    }

    #[test]
    fn test_unparsable_text_is_ignored() {
        let mut menu = Menu::with_text("ninety");
        let mut watcher = SettingsWatcher::new();
        watcher.start();
        assert_eq!(watcher.tick(&mut menu, ms(0)), None);

        menu.set_text("inf");
        assert_eq!(watcher.tick(&mut menu, ms(500)), None);

        menu.set_text(" 80 ");
        assert_eq!(watcher.tick(&mut menu, ms(1000)), Some(80.0));
    }

    #[test]
    fn test_missing_label_is_retried() {
        let mut menu = Menu {
            label: None,
            lookups: 0,
        };
        let mut watcher = SettingsWatcher::new();
        watcher.start();
        assert_eq!(watcher.tick(&mut menu, ms(0)), None);
        assert_eq!(menu.lookups, 1);

        assert_eq!(watcher.tick(&mut menu, ms(16)), None);
        assert_eq!(menu.lookups, 2);

        // Found on the very next frame, no poll interval to wait out
        menu.label = Some(Label(Rc::new(RefCell::new(Some("70".to_string())))));
        assert_eq!(watcher.tick(&mut menu, ms(32)), Some(70.0));
        assert_eq!(menu.lookups, 3);
    }

    #[test]
    fn test_stop_releases_label() {
        let mut menu = Menu::with_text("90");
        let mut watcher = SettingsWatcher::new();
        watcher.start();
        watcher.tick(&mut menu, ms(0));
        watcher.stop();
        assert!(!watcher.is_active());
        assert_eq!(watcher.tick(&mut menu, ms(1000)), None);

        watcher.start();
        menu.set_text("85");
        assert_eq!(watcher.tick(&mut menu, ms(1000)), Some(85.0));
        assert_eq!(menu.lookups, 2);
    }
}
