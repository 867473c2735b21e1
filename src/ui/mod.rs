mod button;

pub use button::{Button, ButtonAction};

// UI constants - layout functions for responsive panel placement
use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_SPACING: f32 = 50.0;
const FIRST_BUTTON_Y: f32 = 20.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the 3D view
pub fn view_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Y coordinate just below the last button
pub fn buttons_bottom() -> f32 {
    FIRST_BUTTON_Y + BUTTON_SPACING * ButtonAction::ALL.len() as f32
}

/// Create UI buttons, one per action, stacked down the panel
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    ButtonAction::ALL
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            Button::new(
                px,
                FIRST_BUTTON_Y + BUTTON_SPACING * i as f32,
                PANEL_WIDTH,
                BUTTON_HEIGHT,
                action,
            )
        })
        .collect()
}
