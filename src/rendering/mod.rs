use macroquad::prelude::*;

use crate::application::{AnimationFrame, Camera, PuzzleEngine};
use crate::domain::{Coord, Cubelet};
use crate::ui::{Button, PANEL_WIDTH, buttons_bottom, panel_x};

/// Edge length of a cubelet body, slightly under 1 to show the gaps
const CUBELET_SIZE: f32 = 0.95;
const STICKER_SIZE: f32 = 0.8;
const STICKER_THICKNESS: f32 = 0.02;
const BODY_COLOR: Color = Color::new(0.05, 0.05, 0.05, 1.0);

/// Sticker colors keyed by the home face they sit on
const FACES: [(Coord, Color); 6] = [
    (Coord::new(1, 0, 0), Color::new(1.0, 0.65, 0.0, 1.0)),  // right, orange
    (Coord::new(-1, 0, 0), Color::new(1.0, 0.0, 0.0, 1.0)),  // left, red
    (Coord::new(0, 1, 0), Color::new(1.0, 1.0, 1.0, 1.0)),   // up, white
    (Coord::new(0, -1, 0), Color::new(1.0, 1.0, 0.0, 1.0)),  // down, yellow
    (Coord::new(0, 0, 1), Color::new(0.0, 1.0, 0.0, 1.0)),   // front, green
    (Coord::new(0, 0, -1), Color::new(0.0, 0.0, 1.0, 1.0)),  // back, blue
];

fn to_vec3(c: Coord) -> Vec3 {
    Vec3::from_array(c.to_array())
}

/// Draw a box centered on `center` spanned by the three edge vectors
fn draw_box(center: Vec3, e1: Vec3, e2: Vec3, e3: Vec3, color: Color) {
    let offset = center - (e1 + e2 + e3) * 0.5;
    draw_affine_parallelepiped(offset, e1, e2, e3, None, color);
}

/// Transient rotation for cubelets in the turning layer. Positive turn
/// angles are clockwise about the axis, hence the negation.
fn animation_rotation(frame: Option<&AnimationFrame<'_>>, cubelet: &Cubelet) -> Quat {
    match frame {
        Some(frame) if frame.cubelets.contains(&cubelet.id()) => {
            Quat::from_axis_angle(Vec3::from_array(frame.axis.unit()), -frame.angle_degrees.to_radians())
        }
        _ => Quat::IDENTITY,
    }
}

fn draw_cubelet(cubelet: &Cubelet, rotation: Quat) {
    let center = rotation * to_vec3(cubelet.position);
    let basis = cubelet.orientation.columns.map(|c| rotation * to_vec3(c));

    draw_box(
        center,
        basis[0] * CUBELET_SIZE,
        basis[1] * CUBELET_SIZE,
        basis[2] * CUBELET_SIZE,
        BODY_COLOR,
    );

    let home = cubelet.home();
    for (normal, color) in FACES {
        // Stickers only on faces that were on the outside in the solved state
        let on_face = [(home.x, normal.x), (home.y, normal.y), (home.z, normal.z)]
            .iter()
            .any(|&(h, n)| n != 0 && h == n);
        if !on_face {
            continue;
        }

        let local = |c: Coord| basis[0] * c.x as f32 + basis[1] * c.y as f32 + basis[2] * c.z as f32;
        let n = local(normal);
        let (u, v) = match normal {
            Coord { x: 0, y: 0, .. } => (basis[0], basis[1]),
            Coord { x: 0, .. } => (basis[0], basis[2]),
            _ => (basis[1], basis[2]),
        };
        draw_box(
            center + n * (CUBELET_SIZE * 0.5),
            u * STICKER_SIZE,
            v * STICKER_SIZE,
            n * STICKER_THICKNESS,
            color,
        );
    }
}

/// Draw the cube in 3D, including the transient rotation of a turning layer
pub fn draw_cube(engine: &PuzzleEngine, camera: &Camera) {
    set_camera(&Camera3D {
        position: Vec3::from_array(camera.eye()),
        target: Vec3::ZERO,
        up: Vec3::Y,
        ..Default::default()
    });

    let frame = engine.current_animation();
    for cubelet in engine.registry().all_cubelets() {
        draw_cubelet(cubelet, animation_rotation(frame.as_ref(), cubelet));
    }

    set_default_camera();
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons and status
pub fn draw_controls(engine: &PuzzleEngine, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let top = buttons_bottom() + 10.0;
    let status = match (engine.is_animating(), engine.is_paused()) {
        (true, _) => ("Turning", Color::from_rgba(100, 200, 255, 255)),
        (false, true) => ("Paused", Color::from_rgba(255, 165, 0, 255)),
        (false, false) => ("Idle", Color::from_rgba(0, 255, 0, 255)),
    };
    let solved = if engine.is_solved() {
        ("Solved", Color::from_rgba(0, 255, 150, 255))
    } else {
        ("Scrambled", GRAY)
    };
    let recent: Vec<String> = engine
        .history()
        .iter()
        .rev()
        .take(8)
        .rev()
        .map(|m| m.to_string())
        .collect();
    let recent = recent.join(" ");
    let queued = format!("Queued: {}", engine.queued_len());
    let moves = format!("Moves: {}", engine.history().len());
    let turn = format!("Turn: {:.0} ms", engine.config().turn_duration_ms);

    let labels = [
        ("Status:", 16.0, WHITE),
        (status.0, 16.0, status.1),
        (solved.0, 16.0, solved.1),
        (queued.as_str(), 14.0, LIGHTGRAY),
        (moves.as_str(), 14.0, LIGHTGRAY),
        (turn.as_str(), 14.0, LIGHTGRAY),
        (recent.as_str(), 14.0, Color::from_rgba(180, 180, 180, 255)),
        ("Controls:", 14.0, WHITE),
        ("R L U D F B: turn", 12.0, GRAY),
        ("Shift: inverse", 12.0, GRAY),
        ("Space: pause  N: step", 12.0, GRAY),
        ("S: scramble  Bksp: reset", 12.0, GRAY),
        ("Up/Down: speed", 12.0, GRAY),
        ("Drag: orbit  H: home", 12.0, GRAY),
    ];

    labels.iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text_label(text, px + 8.0, top + 18.0 * i as f32, *size, *color);
    });
}
