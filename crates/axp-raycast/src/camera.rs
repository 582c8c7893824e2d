use axp_engine::coords::{Vec2, Vec3};

use crate::config::CameraConfig;

const WORLD_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Half-line `origin + t * direction`, `t > 0`.
///
/// `direction` need not be normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` through `target`.
    pub fn through(origin: Vec3, target: Vec3) -> Self {
        Self { origin, direction: target - origin }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Orthonormal camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl CameraBasis {
    /// `None` when the eye sits on the look-at point or looks straight
    /// up or down.
    pub fn new(camera: &CameraConfig) -> Option<Self> {
        let forward = (camera.center - camera.eye).normalized()?;
        let right = forward.cross(WORLD_UP).normalized()?;
        let up = right.cross(forward);
        Some(Self { forward, right, up })
    }
}

/// Primary ray from the eye through `on_screen` (a point of `[-1, 1]²`).
///
/// The screen plane sits in front of the eye with a unit right/up frame,
/// so the image is upright and not scaled by the view angle.
pub fn eye_ray(camera: &CameraConfig, on_screen: Vec2) -> Option<Ray> {
    let basis = CameraBasis::new(camera)?;
    let screen_center = camera.eye + basis.forward * camera.distance_from_screen;
    let target = screen_center + basis.right * on_screen.x + basis.up * on_screen.y;
    Some(Ray::through(camera.eye, target))
}
