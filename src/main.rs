use log::error;
use macroquad::prelude::*;
use rubiks_cube::{Camera, EngineConfig, PuzzleEngine, input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Rubik's Cube".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::builder().init();

    let mut engine = PuzzleEngine::new(EngineConfig::default());
    let mut camera = Camera::new();
    let mut drag = input::OrbitDrag::default();

    loop {
        let mouse_pos = mouse_position();

        // Recreate buttons with current panel position
        let buttons = ui::create_buttons();

        input::process_button_clicks(&mut engine, &buttons, mouse_pos);
        input::process_keyboard_input(&mut engine, &mut camera);
        input::handle_zoom(&mut camera);
        drag.update(&mut camera, mouse_pos);

        if let Err(e) = engine.advance(get_frame_time() * 1000.0) {
            error!("{e}");
        }

        clear_background(Color::from_rgba(240, 240, 240, 255));
        rendering::draw_cube(&engine, &camera);
        rendering::draw_controls(&engine, &buttons, mouse_pos);

        next_frame().await;
    }
}
