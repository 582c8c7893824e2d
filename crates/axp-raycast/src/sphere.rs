use axp_engine::coords::Vec3;
use rand::Rng;

use crate::camera::Ray;
use crate::config::{RendererConfig, ShadingParams};

/// Where a ray met a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter; always positive.
    pub t: f32,
    pub point: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Nearest intersection in front of the ray's origin.
    ///
    /// Solves `|O - C + tD|² = r²` for `t`. Of the two roots the smaller
    /// positive one wins, so a ray starting inside the sphere reports the
    /// exit point. Tangent rays count as hits; a zero direction never hits.
    pub fn intersect_with_ray(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let d = ray.direction;

        let a = d.dot(d);
        if a == 0.0 || !a.is_finite() {
            return None;
        }
        let b = 2.0 * oc.dot(d);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 || discriminant.is_nan() {
            return None;
        }
        let root = discriminant.sqrt();
        let near = (-b - root) / (2.0 * a);
        let far = (-b + root) / (2.0 * a);

        let t = if near > 0.0 {
            near
        } else if far > 0.0 {
            far
        } else {
            return None;
        };
        Some(Hit { t, point: ray.at(t) })
    }

    /// Color of the surface at `point` as seen from the configured eye.
    ///
    /// The outward normal is perturbed by up to `shading.jitter` radians in
    /// the xy and xz planes, drawn from `rng`. Returns `None` when the
    /// point coincides with the center, the light or the eye.
    pub fn surface_color<R: Rng + ?Sized>(
        &self,
        point: Vec3,
        config: &RendererConfig,
        shading: &ShadingParams,
        rng: &mut R,
    ) -> Option<Vec3> {
        let mut normal = (point - self.center).normalized()?;
        if shading.jitter > 0.0 {
            normal = normal
                .rotate_xy(rng.gen_range(0.0..shading.jitter))
                .rotate_xz(rng.gen_range(0.0..shading.jitter));
        }

        let to_light = (config.light.position - point).normalized()?;
        let to_eye = (config.camera.eye - point).normalized()?;
        let terms = PhongTerms::new(normal, to_light, to_eye, shading.specular_exponent);

        let light = config.light.color;
        Some(
            light * terms.specular
                + (Vec3::splat(terms.diffuse) + config.ambient_color)
                    .mul_elem(light)
                    .mul_elem(config.surface_color),
        )
    }
}

/// Lighting weights at one surface point, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongTerms {
    pub diffuse: f32,
    pub specular: f32,
}

impl PhongTerms {
    /// `normal`, `to_light` and `to_eye` are unit vectors pointing away from
    /// the surface.
    pub fn new(normal: Vec3, to_light: Vec3, to_eye: Vec3, exponent: i32) -> Self {
        let cos_alpha = normal.dot(to_light);
        let reflected = normal * (2.0 * cos_alpha) - to_light;
        let cos_phi = reflected.dot(to_eye);

        Self {
            diffuse: saturate(cos_alpha),
            specular: saturate(saturate(cos_phi).powi(exponent)),
        }
    }
}

#[inline]
fn saturate(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
