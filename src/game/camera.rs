//! Orbit camera for the board view.
//!
//! Keeps spherical coordinates around a look-at target and produces a
//! macroquad [`Camera3D`] each frame. Left-drag rotates, the wheel zooms,
//! right-drag pans the target.

use macroquad::prelude::*;

use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_MAX_DISTANCE, CAMERA_MAX_PITCH, CAMERA_MIN_DISTANCE,
    CAMERA_ORBIT_SENS, CAMERA_PAN_SCALE, CAMERA_START_DISTANCE, CAMERA_START_PITCH,
    CAMERA_START_YAW, CAMERA_ZOOM_STEP,
};

pub struct OrbitCamera {
    /// Rotation around the Y axis (radians).
    pub yaw: f32,
    /// Elevation above the ground plane (radians), clamped short of the poles.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    pub target: Vec3,
    last_cursor: Option<Vec2>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: CAMERA_START_YAW,
            pitch: CAMERA_START_PITCH,
            distance: CAMERA_START_DISTANCE,
            target: Vec3::ZERO,
            last_cursor: None,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * CAMERA_ORBIT_SENS;
        self.pitch = (self.pitch - dy * CAMERA_ORBIT_SENS).clamp(-CAMERA_MAX_PITCH, CAMERA_MAX_PITCH);
    }

    /// Positive steps zoom in. Multiplicative so the feel is distance-independent.
    pub fn zoom(&mut self, steps: f32) {
        self.distance =
            (self.distance * (1.0 - steps * CAMERA_ZOOM_STEP)).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Move the target in the camera's screen plane, scaled by distance so
    /// panning covers the same screen fraction at any zoom.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.target - self.position()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        let scale = self.distance * CAMERA_PAN_SCALE;
        self.target += (right * -dx + up * dy) * scale;
    }

    pub fn position(&self) -> Vec3 {
        let dir = vec3(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.sin(),
        );
        self.target + dir * self.distance
    }

    /// Poll mouse state and apply rotate/zoom/pan for this frame.
    pub fn handle_input(&mut self) {
        let (mx, my) = mouse_position();
        let cursor = vec2(mx, my);

        let rotating = is_mouse_button_down(MouseButton::Left);
        let panning = is_mouse_button_down(MouseButton::Right);
        if rotating || panning {
            if let Some(prev) = self.last_cursor {
                let delta = cursor - prev;
                if rotating {
                    self.orbit(delta.x, delta.y);
                } else {
                    self.pan(delta.x, delta.y);
                }
            }
            self.last_cursor = Some(cursor);
        } else {
            self.last_cursor = None;
        }

        let (_wx, wy) = mouse_wheel();
        if wy.abs() > 0.001 {
            // Wheel deltas vary wildly across platforms; treat any tick as one step.
            self.zoom(wy.clamp(-1.0, 1.0));
        }
    }

    pub fn camera(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            target: self.target,
            up: Vec3::Y,
            fovy: CAMERA_FOVY_DEG.to_radians(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default_view() {
        let cam = OrbitCamera::new();
        let pos = cam.position();
        // Start pose is a camera at roughly (15, 15, 15) looking at the center.
        assert!((pos.x - 15.0).abs() < 0.2, "x = {}", pos.x);
        assert!((pos.y - 15.0).abs() < 0.2, "y = {}", pos.y);
        assert!((pos.z - 15.0).abs() < 0.2, "z = {}", pos.z);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn orbit_clamps_pitch() {
        let mut cam = OrbitCamera::new();
        cam.orbit(0.0, -100_000.0);
        assert!(cam.pitch <= CAMERA_MAX_PITCH);
        cam.orbit(0.0, 100_000.0);
        assert!(cam.pitch >= -CAMERA_MAX_PITCH);
    }

    #[test]
    fn zoom_clamps_distance() {
        let mut cam = OrbitCamera::new();
        for _ in 0..500 {
            cam.zoom(1.0);
        }
        assert!((cam.distance - CAMERA_MIN_DISTANCE).abs() < 1e-3);
        for _ in 0..500 {
            cam.zoom(-1.0);
        }
        assert!((cam.distance - CAMERA_MAX_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_target_not_distance() {
        let mut cam = OrbitCamera::new();
        let before = cam.distance;
        cam.pan(40.0, -25.0);
        assert!(cam.target.length() > 0.0);
        assert!((cam.distance - before).abs() < 1e-6);
        // Camera follows its target.
        let gap = (cam.position() - cam.target).length();
        assert!((gap - cam.distance).abs() < 1e-3);
    }

    #[test]
    fn position_stays_on_orbit_sphere() {
        let mut cam = OrbitCamera::new();
        cam.orbit(300.0, -120.0);
        let gap = (cam.position() - cam.target).length();
        assert!((gap - cam.distance).abs() < 1e-3);
    }
}
