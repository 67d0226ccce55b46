//! SimpleZoom - FOV zoom for first-person cameras
//!
//! Runs the zoom controller against a simulated host with a scripted session:
//! level load, hold zoom with scroll adjustment, a pause where the player
//! changes the FOV setting, and a final zoom back to the new baseline.

mod settings;
mod sim;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use zoom_core::{GameTime, SystemClock};
use zoom_game::{InputAction, InputBindings, InputHandler, ZoomController, PAUSE_KEY};

use crate::settings::PluginSettings;
use crate::sim::SimScene;

const FRAME_TIME: Duration = Duration::from_millis(16);
const SESSION_FRAMES: u64 = 300;

/// Scripted player input for one frame
enum ScriptEvent {
    Key(KeyCode, ElementState),
    Scroll(f32),
    SpawnCamera,
    SettingsFov(f32),
}

fn script(frame: u64, zoom_key: KeyCode) -> Vec<ScriptEvent> {
    use ScriptEvent::{Key, Scroll, SettingsFov, SpawnCamera};

    match frame {
        20 => vec![SpawnCamera],
        40 | 220 => vec![Key(zoom_key, ElementState::Pressed)],
        60 => vec![Scroll(1.0)],
        75 => vec![Scroll(-0.5)],
        100 | 250 => vec![Key(zoom_key, ElementState::Released)],
        130 | 200 => vec![
            Key(PAUSE_KEY, ElementState::Pressed),
            Key(PAUSE_KEY, ElementState::Released),
        ],
        150 => vec![SettingsFov(90.0)],
        _ => Vec::new(),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting SimpleZoom v{}", env!("CARGO_PKG_VERSION"));

    let settings = PluginSettings::load();
    if PluginSettings::settings_path().is_some_and(|path| !path.exists()) {
        if let Err(e) = settings.save() {
            warn!("Could not write default settings: {:#}", e);
        }
    }
    let config = settings.general;
    let zoom_key = config.keybind;

    let mut controller = ZoomController::new(config).context("Invalid zoom config")?;
    let mut scene = SimScene::new(75.0);
    let bindings = InputBindings::with_zoom_key(zoom_key).context("Invalid zoom keybind")?;
    let mut input = InputHandler::new(bindings);
    let mut game_time = GameTime::default();
    let clock = SystemClock::new();
    let mut last_frame = Instant::now();

    for frame in 0..SESSION_FRAMES {
        for event in script(frame, zoom_key) {
            match event {
                ScriptEvent::Key(key, state) => input.handle_keyboard(PhysicalKey::Code(key), state),
                ScriptEvent::Scroll(lines) => input.handle_scroll(MouseScrollDelta::LineDelta(0.0, lines)),
                ScriptEvent::SpawnCamera => scene.spawn_camera(),
                ScriptEvent::SettingsFov(fov) => scene.set_settings_fov(fov),
            }
        }

        // The host pauses by freezing its time scale and opens the settings menu
        if input.state.is_just_pressed(InputAction::Pause) {
            let pausing = !game_time.is_paused();
            game_time.set_time_scale(if pausing { 0.0 } else { 1.0 });
            scene.set_menu_open(pausing);
            info!("{}", if pausing { "Paused" } else { "Resumed" });
        }

        let now = Instant::now();
        game_time.update(now.duration_since(last_frame).as_secs_f32());
        last_frame = now;

        controller.frame(&mut scene, &input.state, &game_time, &clock);
        input.end_frame();

        if frame % 10 == 0 {
            info!(
                frame,
                fov = scene.camera_fov(),
                target = controller.target_fov(),
                baseline = controller.current_fov(),
                zoomed = controller.is_zoomed(),
                "tick"
            );
        }

        std::thread::sleep(FRAME_TIME);
    }

    info!("Session finished at FOV {:.1}", scene.camera_fov());
    Ok(())
}
