use axp_engine::coords::Vec3;

/// Point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    pub color: Vec3,
    pub position: Vec3,
}

/// Pinhole camera looking from `eye` at `center`.
///
/// The screen plane sits `distance_from_screen` in front of the eye and spans
/// `[-1, 1]²` in the camera's right/up directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub center: Vec3,
    pub distance_from_screen: f32,
}

/// Everything the pixel kernel reads about the scene besides its geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    pub light: LightSource,
    pub ambient_color: Vec3,
    pub surface_color: Vec3,
    pub camera: CameraConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            light: LightSource {
                color: Vec3::splat(0.5),
                position: Vec3::new(-7.59025, -8.68034, -3.25375),
            },
            ambient_color: Vec3::new(0.1, 0.1, 0.7),
            surface_color: Vec3::splat(1.0),
            camera: CameraConfig {
                eye: Vec3::splat(0.442229),
                center: Vec3::zero(),
                distance_from_screen: 0.75179,
            },
        }
    }
}

impl RendererConfig {
    pub fn light(mut self, light: LightSource) -> Self {
        self.light = light;
        self
    }

    pub fn ambient_color(mut self, color: Vec3) -> Self {
        self.ambient_color = color;
        self
    }

    pub fn surface_color(mut self, color: Vec3) -> Self {
        self.surface_color = color;
        self
    }

    pub fn camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }
}

/// Deterministic per-frame scene changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneAnimation {
    /// Radians the light turns around the z axis each frame.
    pub light_orbit_step: f32,
    /// Factor the eye position is scaled by each frame.
    pub camera_dolly: f32,
}

impl Default for SceneAnimation {
    fn default() -> Self {
        Self { light_orbit_step: 0.1, camera_dolly: 1.01 }
    }
}

impl SceneAnimation {
    /// No movement at all.
    pub const STILL: Self = Self { light_orbit_step: 0.0, camera_dolly: 1.0 };

    /// Advances `config` by one frame.
    pub fn step(&self, config: &mut RendererConfig) {
        config.light.position = config.light.position.rotate_xy(self.light_orbit_step);
        config.camera.eye *= self.camera_dolly;
    }
}

/// Surface shading knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingParams {
    /// Upper bound, in radians, of the random normal perturbation.
    pub jitter: f32,
    pub specular_exponent: i32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self { jitter: 0.05, specular_exponent: 15 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_step_orbits_light_and_dollies_camera() {
        let mut cfg = RendererConfig::default();
        let before = cfg;
        SceneAnimation::default().step(&mut cfg);

        assert!((cfg.light.position.xy().len() - before.light.position.xy().len()).abs() < 1e-4);
        assert_eq!(cfg.light.position.z, before.light.position.z);
        assert!((cfg.camera.eye.x - 0.442229 * 1.01).abs() < 1e-6);
        assert_eq!(cfg.camera.center, before.camera.center);
    }

    #[test]
    fn still_animation_changes_nothing() {
        let mut cfg = RendererConfig::default();
        SceneAnimation::STILL.step(&mut cfg);
        let d = cfg.light.position - RendererConfig::default().light.position;
        assert!(d.len() < 1e-6);
        assert_eq!(cfg.camera, RendererConfig::default().camera);
    }
}
