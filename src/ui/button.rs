use macroquad::prelude::*;

/// Puzzle operation a button triggers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Scramble,
    Solve,
    Pause,
    Step,
    StepOnce,
    Reset,
}

impl ButtonAction {
    pub const ALL: [ButtonAction; 6] = [
        ButtonAction::Scramble,
        ButtonAction::Solve,
        ButtonAction::Pause,
        ButtonAction::Step,
        ButtonAction::StepOnce,
        ButtonAction::Reset,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ButtonAction::Scramble => "Scramble",
            ButtonAction::Solve => "Solve",
            ButtonAction::Pause => "Pause/Resume",
            ButtonAction::Step => "Step",
            ButtonAction::StepOnce => "Step 1",
            ButtonAction::Reset => "Reset",
        }
    }
}

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    action: ButtonAction,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: ButtonAction) -> Self {
        Self {
            x,
            y,
            width,
            height,
            action,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text = self.action.label();
        let text_size = measure_text(text, None, 20, 1.0);
        draw_text(
            text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_bounds() {
        let button = Button::new(10.0, 20.0, 100.0, 40.0, ButtonAction::Reset);
        assert!(button.is_hovered((10.0, 20.0)));
        assert!(button.is_hovered((110.0, 60.0)));
        assert!(!button.is_hovered((111.0, 30.0)));
        assert!(!button.is_hovered((50.0, 19.0)));
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = ButtonAction::ALL.iter().map(|a| a.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), ButtonAction::ALL.len());
    }
}
