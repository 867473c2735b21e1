/// Camera orbits the cube at a fixed target (the origin)
pub struct Camera {
    /// Rotation around the vertical axis, radians
    pub yaw: f32,
    /// Elevation above the horizontal plane, radians
    pub pitch: f32,
    pub distance: f32,
}

const DEFAULT_YAW: f32 = std::f32::consts::FRAC_PI_4;
const DEFAULT_PITCH: f32 = 0.6;
const DEFAULT_DISTANCE: f32 = 8.5;
const MAX_PITCH: f32 = 1.5;

impl Camera {
    pub fn new() -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.distance = (self.distance / factor).clamp(4.0, 30.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(4.0, 30.0);
    }

    /// Orbit by the given angles, pitch is kept short of the poles
    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Eye position in world space as `[x, y, z]`
    pub fn eye(&self) -> [f32; 3] {
        let horizontal = self.distance * self.pitch.cos();
        [
            horizontal * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            horizontal * self.yaw.cos(),
        ]
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_stays_at_distance() {
        let mut camera = Camera::new();
        camera.orbit(1.3, -0.4);
        let [x, y, z] = camera.eye();
        let d = (x * x + y * y + z * z).sqrt();
        assert!((d - camera.distance).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::new();
        camera.orbit(0.0, 10.0);
        assert_eq!(camera.pitch, MAX_PITCH);
        camera.orbit(0.0, -20.0);
        assert_eq!(camera.pitch, -MAX_PITCH);
    }

    #[test]
    fn test_zoom_and_reset() {
        let mut camera = Camera::new();
        camera.zoom_in(100.0);
        assert_eq!(camera.distance, 4.0);
        camera.reset();
        assert_eq!(camera.distance, DEFAULT_DISTANCE);
    }
}
