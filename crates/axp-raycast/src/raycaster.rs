use axp_engine::coords::{Vec2, Vec3, Viewport};
use axp_engine::core::{App, AppControl, FrameCtx, FrameTarget};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::camera::eye_ray;
use crate::config::{RendererConfig, SceneAnimation, ShadingParams};
use crate::sphere::Sphere;

const BACKGROUND: Vec3 = Vec3::new(0.0, 0.0, 0.0);

/// The two-sphere scene drawn by default.
pub fn default_scene() -> Vec<Sphere> {
    vec![
        Sphere::new(Vec3::new(0.0, 0.0, 0.0), 0.2),
        Sphere::new(Vec3::new(0.0, 0.2, 0.2), 0.2),
    ]
}

/// CPU raycaster over a set of spheres.
///
/// Each frame after the first advances the scene by [`SceneAnimation`], then
/// every pixel is shaded independently from a read-only view of it.
pub struct Raycaster {
    config: RendererConfig,
    spheres: Vec<Sphere>,
    animation: SceneAnimation,
    shading: ShadingParams,
    seed: u64,
}

impl Default for Raycaster {
    fn default() -> Self {
        Self::new(default_scene())
    }
}

impl Raycaster {
    pub fn new(spheres: Vec<Sphere>) -> Self {
        Self {
            config: RendererConfig::default(),
            spheres,
            animation: SceneAnimation::default(),
            shading: ShadingParams::default(),
            seed: 0,
        }
    }

    pub fn config(mut self, config: RendererConfig) -> Self {
        self.config = config;
        self
    }

    pub fn animation(mut self, animation: SceneAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn shading(mut self, shading: ShadingParams) -> Self {
        self.shading = shading;
        self
    }

    /// Seed for the per-pixel normal jitter.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn renderer_config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Color of the pixel at `position` (in `[-1, 1]²`).
    ///
    /// `index` seeds the jitter, so a pixel shades the same way every time
    /// the scene is unchanged.
    pub fn shade_pixel(&self, position: Vec2, index: usize) -> Vec3 {
        let Some(ray) = eye_ray(&self.config.camera, position) else {
            return BACKGROUND;
        };

        let nearest = self
            .spheres
            .iter()
            .filter_map(|s| s.intersect_with_ray(&ray).map(|hit| (s, hit)))
            .min_by(|(_, a), (_, b)| a.t.total_cmp(&b.t));

        let Some((sphere, hit)) = nearest else {
            return BACKGROUND;
        };

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ index as u64);
        sphere
            .surface_color(hit.point, &self.config, &self.shading, &mut rng)
            .unwrap_or(BACKGROUND)
    }
}

impl App for Raycaster {
    fn setup(&mut self, viewport: Viewport) {
        log::info!(
            "raycasting {} spheres at {}x{}",
            self.spheres.len(),
            viewport.width,
            viewport.height
        );
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if !ctx.time.is_first() {
            self.animation.step(&mut self.config);
        }

        match &mut ctx.target {
            FrameTarget::Pixels(grid) => grid.shade(|pos, index| self.shade_pixel(pos, index)),
            FrameTarget::Vector(_) => log::warn!("raycaster needs a pixel surface"),
        }
        AppControl::Continue
    }

    fn on_fps_updated(&mut self, fps: u32) {
        log::info!("FPS: {fps}");
    }
}
