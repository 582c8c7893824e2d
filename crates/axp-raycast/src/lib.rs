//! CPU sphere raycaster.
//!
//! A per-pixel kernel over [`axp_engine::pixel::PixelGrid`]: each pixel casts
//! one ray from the eye through the screen plane, takes the nearest sphere
//! hit and shades it with diffuse, specular and ambient light.

pub mod camera;
pub mod config;
pub mod raycaster;
pub mod sphere;

pub use camera::{eye_ray, Ray};
pub use config::{CameraConfig, LightSource, RendererConfig, SceneAnimation, ShadingParams};
pub use raycaster::{default_scene, Raycaster};
pub use sphere::{Hit, PhongTerms, Sphere};
