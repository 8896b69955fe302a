//! The focal object: a distorted, hover-reactive sphere.
//!
//! Rotation advances monotonically with elapsed wall-clock time on two axes
//! at different rates. Hover switches between two fixed material presets and
//! eases the scale toward a larger target; nothing jumps instantaneously.

use super::math3d::Vec3;
use std::f32::consts::{PI, TAU};

/// Linear color, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Surface preset: color, distortion amount, animation speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialPreset {
    pub color: Rgb,
    pub distort: f32,
    pub speed: f32,
}

/// Idle look: purple, gentle distortion. (#9D4EDD)
pub const IDLE_PRESET: MaterialPreset = MaterialPreset {
    color: Rgb::new(0.616, 0.306, 0.867),
    distort: 0.3,
    speed: 1.5,
};

/// Hovered look: cyan, agitated distortion. (#00D9FF)
pub const HOVER_PRESET: MaterialPreset = MaterialPreset {
    color: Rgb::new(0.0, 0.851, 1.0),
    distort: 0.6,
    speed: 4.0,
};

/// World position of the sphere center, right of the page midline.
pub const SPHERE_POS: Vec3 = Vec3 { x: 1.5, y: 0.0, z: 0.0 };
/// Unit radius before scaling.
pub const BASE_RADIUS: f32 = 1.0;

const SCALE_IDLE: f32 = 2.0;
const SCALE_HOVER: f32 = 2.5;
/// Per-frame ease factor toward the scale target.
const SCALE_LERP: f32 = 0.1;

/// Rotation rates, radians per second of elapsed time.
const ROT_RATE_X: f32 = 0.2;
const ROT_RATE_Y: f32 = 0.3;

/// Gentle vertical bob.
const FLOAT_SPEED: f32 = 1.5;
const FLOAT_AMPLITUDE: f32 = 0.1;

/// Vertex grid density for the painted point cloud.
const LAT_BANDS: usize = 14;
const LON_STEPS: usize = 22;

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[derive(Debug, Clone)]
pub struct FocalSphere {
    hovered: bool,
    scale: f32,
}

impl Default for FocalSphere {
    fn default() -> Self {
        Self::new()
    }
}

impl FocalSphere {
    pub fn new() -> Self {
        Self {
            hovered: false,
            scale: SCALE_IDLE,
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Active material preset for the current hover state.
    pub fn preset(&self) -> &'static MaterialPreset {
        if self.hovered {
            &HOVER_PRESET
        } else {
            &IDLE_PRESET
        }
    }

    /// One animation-frame step: ease scale toward the hover target.
    pub fn tick(&mut self) {
        let target = if self.hovered { SCALE_HOVER } else { SCALE_IDLE };
        self.scale = lerp(self.scale, target, SCALE_LERP);
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Sphere center at `elapsed` seconds, including the float bob.
    pub fn center(&self, elapsed: f32) -> Vec3 {
        SPHERE_POS + Vec3::new(0.0, (elapsed * FLOAT_SPEED).sin() * FLOAT_AMPLITUDE, 0.0)
    }

    /// Distorted, rotated, scaled surface vertices at `elapsed` seconds.
    ///
    /// Poles are skipped; the point cloud reads as a sphere without them and
    /// they would all project onto the same two dots.
    pub fn vertices(&self, elapsed: f32) -> Vec<Vec3> {
        let preset = self.preset();
        let rot_x = elapsed * ROT_RATE_X;
        let rot_y = elapsed * ROT_RATE_Y;
        let center = self.center(elapsed);
        let phase = elapsed * preset.speed;

        let mut out = Vec::with_capacity((LAT_BANDS - 1) * LON_STEPS);
        for lat in 1..LAT_BANDS {
            let theta = PI * lat as f32 / LAT_BANDS as f32;
            let (sin_t, cos_t) = theta.sin_cos();
            for lon in 0..LON_STEPS {
                let phi = TAU * lon as f32 / LON_STEPS as f32;
                let unit = Vec3::new(sin_t * phi.cos(), cos_t, sin_t * phi.sin());

                // Radial displacement wave over the surface.
                let wave = (3.0 * theta + phase).sin() * (2.0 * phi + phase).cos();
                let radius = BASE_RADIUS * (1.0 + preset.distort * wave) * self.scale;

                let p = (unit * radius).rotate_x(rot_x).rotate_y(rot_y);
                out.push(center + p);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_eases_toward_hover_target() {
        let mut sphere = FocalSphere::new();
        assert_eq!(sphere.scale(), SCALE_IDLE);

        sphere.set_hovered(true);
        let mut prev = sphere.scale();
        for _ in 0..60 {
            sphere.tick();
            assert!(sphere.scale() >= prev);
            prev = sphere.scale();
        }
        assert!((sphere.scale() - SCALE_HOVER).abs() < 1e-2);

        sphere.set_hovered(false);
        for _ in 0..60 {
            sphere.tick();
        }
        assert!((sphere.scale() - SCALE_IDLE).abs() < 1e-2);
    }

    #[test]
    fn first_tick_is_not_a_jump() {
        let mut sphere = FocalSphere::new();
        sphere.set_hovered(true);
        sphere.tick();
        assert!(sphere.scale() < SCALE_HOVER);
        assert!(sphere.scale() > SCALE_IDLE);
    }

    #[test]
    fn preset_switches_with_hover() {
        let mut sphere = FocalSphere::new();
        assert_eq!(*sphere.preset(), IDLE_PRESET);
        sphere.set_hovered(true);
        assert_eq!(*sphere.preset(), HOVER_PRESET);
    }

    #[test]
    fn vertices_stay_within_distortion_bounds() {
        let sphere = FocalSphere::new();
        let center = sphere.center(1.7);
        let max = BASE_RADIUS * (1.0 + IDLE_PRESET.distort) * sphere.scale() + 1e-4;
        let min = BASE_RADIUS * (1.0 - IDLE_PRESET.distort) * sphere.scale() - 1e-4;
        for v in sphere.vertices(1.7) {
            let r = (v - center).length();
            assert!(r <= max, "vertex too far: {}", r);
            assert!(r >= min, "vertex too close: {}", r);
        }
    }

    #[test]
    fn vertex_grid_is_fixed_size() {
        let sphere = FocalSphere::new();
        assert_eq!(sphere.vertices(0.0).len(), (LAT_BANDS - 1) * LON_STEPS);
    }

    #[test]
    fn surface_animates_over_time() {
        let sphere = FocalSphere::new();
        let a = sphere.vertices(0.0);
        let b = sphere.vertices(1.0);
        assert!(a.iter().zip(&b).any(|(x, y)| x != y));
    }
}
