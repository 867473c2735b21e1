use log::warn;
use macroquad::prelude::*;

use crate::application::{Camera, PuzzleEngine};
use crate::domain::{MoveId, Result};
use crate::ui::{Button, ButtonAction, view_width};

/// Radians of orbit per pixel dragged
const ORBIT_SPEED: f32 = 0.01;
/// Turn duration change per Up/Down press
const SPEED_STEP_MS: f32 = 50.0;

/// Face keys; holding shift selects the inverse move
const FACE_KEYS: [(KeyCode, MoveId); 6] = [
    (KeyCode::R, MoveId::R),
    (KeyCode::L, MoveId::L),
    (KeyCode::U, MoveId::U),
    (KeyCode::D, MoveId::D),
    (KeyCode::F, MoveId::F),
    (KeyCode::B, MoveId::B),
];

/// Log failures from puzzle operations instead of aborting the frame loop
fn report(result: Result<()>) {
    if let Err(e) = result {
        warn!("{e}");
    }
}

/// Run the puzzle operation behind a button
pub fn apply_action(engine: &mut PuzzleEngine, action: ButtonAction) {
    match action {
        ButtonAction::Scramble => report(engine.scramble()),
        ButtonAction::Solve => report(engine.demo_solve()),
        ButtonAction::Pause => engine.toggle_paused(),
        ButtonAction::Step => engine.step(),
        ButtonAction::StepOnce => engine.step_once(),
        ButtonAction::Reset => engine.reset(),
    }
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Tracks the previous cursor position while orbiting
#[derive(Default)]
pub struct OrbitDrag {
    last_pos: Option<(f32, f32)>,
}

impl OrbitDrag {
    /// Orbit the camera while the left button is held over the 3D view
    pub fn update(&mut self, camera: &mut Camera, mouse_pos: (f32, f32)) {
        let dragging = is_mouse_button_down(MouseButton::Left)
            && (self.last_pos.is_some() || mouse_pos.0 < view_width());
        if !dragging {
            self.last_pos = None;
            return;
        }
        if let Some(last) = self.last_pos {
            let dx = mouse_pos.0 - last.0;
            let dy = mouse_pos.1 - last.1;
            camera.orbit(-dx * ORBIT_SPEED, dy * ORBIT_SPEED);
        }
        self.last_pos = Some(mouse_pos);
    }
}

/// Process keyboard input
pub fn process_keyboard_input(engine: &mut PuzzleEngine, camera: &mut Camera) {
    let shift = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
    for (key, m) in FACE_KEYS {
        if is_key_pressed(key) {
            report(engine.enqueue(if shift { m.inverse() } else { m }));
        }
    }

    type KeyAction = (KeyCode, fn(&mut PuzzleEngine));

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, PuzzleEngine::toggle_paused),
        (KeyCode::N, PuzzleEngine::step),
        (KeyCode::Period, PuzzleEngine::step_once),
        (KeyCode::S, |e| report(e.scramble())),
        (KeyCode::Backspace, PuzzleEngine::reset),
        (KeyCode::Up, |e| e.adjust_turn_duration(-SPEED_STEP_MS)),
        (KeyCode::Down, |e| e.adjust_turn_duration(SPEED_STEP_MS)),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(engine));

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}

/// Process button clicks
pub fn process_button_clicks(engine: &mut PuzzleEngine, buttons: &[Button], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .for_each(|btn| apply_action(engine, btn.action()));
}
