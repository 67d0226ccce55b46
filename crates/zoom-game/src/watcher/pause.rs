use zoom_core::GameTime;

/// A change in the host's pause state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseEdge {
    /// The game just paused
    Entered,
    /// The game just resumed
    Left,
}

/// Detects pause/unpause edges from the host time scale.
#[derive(Debug, Default)]
pub struct PauseWatcher {
    paused: bool,
}

impl PauseWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pause state as of the last tick
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Sample the pause state for this frame, returning an edge if it changed
    pub fn tick(&mut self, time: &GameTime) -> Option<PauseEdge> {
        let paused = time.is_paused();
        if paused == self.paused {
            return None;
        }

        self.paused = paused;
        Some(if paused {
            PauseEdge::Entered
        } else {
            PauseEdge::Left
        })
    }
}
