use std::f32::consts::FRAC_PI_2;

use crate::math::Vec3;

/// Damped orbit camera around a fixed target.
///
/// Pointer drags feed `orbit`/`pan`, wheel feeds `zoom`; `update` advances
/// auto-rotation and eases the camera toward its goal each frame.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub distance: f32,
    /// Polar angle (pitch), clamped off the poles
    pub angle_x: f32,
    /// Azimuth angle (yaw)
    pub angle_y: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    /// Fraction of remaining delta applied per 60 Hz frame
    pub damping: f32,

    goal_distance: f32,
    goal_angle_x: f32,
    goal_angle_y: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 0.0, 0.0),
            distance: 5.0,
            angle_x: 0.0,
            angle_y: 0.0,
            min_distance: 2.0,
            max_distance: 10.0,
            auto_rotate: true,
            auto_rotate_speed: 0.3,
            damping: 0.05,
            goal_distance: 5.0,
            goal_angle_x: 0.0,
            goal_angle_y: 0.0,
        }
    }
}

impl OrbitControls {
    pub fn new(distance: f32) -> Self {
        Self {
            distance,
            goal_distance: distance,
            ..Default::default()
        }
    }

    /// Apply a pointer drag in screen pixels
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.goal_angle_y += delta_x * 0.01;
        self.goal_angle_x = (self.goal_angle_x + delta_y * 0.01)
            .clamp(-FRAC_PI_2 + 0.1, FRAC_PI_2 - 0.1);
    }

    /// Apply a wheel delta
    pub fn zoom(&mut self, delta: f32) {
        self.goal_distance =
            (self.goal_distance + delta * 0.5).clamp(self.min_distance, self.max_distance);
    }

    /// Shift the orbit target in camera-relative space
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let right = Vec3::new(self.angle_y.cos(), 0.0, -self.angle_y.sin());
        self.target = self.target
            + right.scale(-delta_x * 0.01)
            + Vec3::UP.scale(delta_y * 0.01);
    }

    /// Advance auto-rotation and ease toward the goal orientation
    pub fn update(&mut self, dt: f32) {
        if self.auto_rotate {
            self.goal_angle_y += self.auto_rotate_speed * dt;
        }

        // Frame-rate independent exponential damping
        let t = 1.0 - (1.0 - self.damping).powf(dt * 60.0);
        self.angle_x += (self.goal_angle_x - self.angle_x) * t;
        self.angle_y += (self.goal_angle_y - self.angle_y) * t;
        self.distance += (self.goal_distance - self.distance) * t;
    }

    /// Camera position for the current orientation
    pub fn eye(&self) -> Vec3 {
        let cos_x = self.angle_x.cos();
        Vec3::new(
            self.target.x + self.distance * cos_x * self.angle_y.sin(),
            self.target.y + self.distance * self.angle_x.sin(),
            self.target.z + self.distance * cos_x * self.angle_y.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(controls: &mut OrbitControls) {
        for _ in 0..600 {
            controls.update(1.0 / 60.0);
        }
    }

    #[test]
    fn test_eye_starts_on_z_axis() {
        let controls = OrbitControls::new(5.0);
        let eye = controls.eye();
        assert!((eye.z - 5.0).abs() < 0.001);
        assert!(eye.x.abs() < 0.001);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut controls = OrbitControls::new(5.0);
        controls.auto_rotate = false;

        controls.zoom(-100.0);
        settle(&mut controls);
        assert!((controls.distance - controls.min_distance).abs() < 0.01);

        controls.zoom(100.0);
        settle(&mut controls);
        assert!((controls.distance - controls.max_distance).abs() < 0.01);
    }

    #[test]
    fn test_orbit_pitch_clamped_off_poles() {
        let mut controls = OrbitControls::new(5.0);
        controls.auto_rotate = false;

        controls.orbit(0.0, 10_000.0);
        settle(&mut controls);
        assert!(controls.angle_x < FRAC_PI_2);

        controls.orbit(0.0, -20_000.0);
        settle(&mut controls);
        assert!(controls.angle_x > -FRAC_PI_2);
    }

    #[test]
    fn test_damping_moves_gradually() {
        let mut controls = OrbitControls::new(5.0);
        controls.auto_rotate = false;

        controls.orbit(100.0, 0.0);
        controls.update(1.0 / 60.0);
        let after_one = controls.angle_y;
        assert!(after_one > 0.0);
        assert!(after_one < 1.0); // goal not reached in one frame

        settle(&mut controls);
        assert!((controls.angle_y - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_auto_rotate_advances_yaw() {
        let mut controls = OrbitControls::new(5.0);
        let before = controls.angle_y;
        settle(&mut controls);
        assert!(controls.angle_y > before);
    }

    #[test]
    fn test_pan_shifts_target() {
        let mut controls = OrbitControls::new(5.0);
        controls.pan(50.0, 30.0);
        assert!(controls.target.x.abs() > 0.0);
        assert!(controls.target.y > 0.0);
    }

    #[test]
    fn test_eye_respects_distance() {
        let mut controls = OrbitControls::new(5.0);
        controls.auto_rotate = false;
        controls.orbit(123.0, -45.0);
        settle(&mut controls);

        let eye = controls.eye();
        assert!((eye.distance(&controls.target) - controls.distance).abs() < 0.01);
    }
}
