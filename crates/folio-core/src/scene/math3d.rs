//! 3D math for the decorative background scene.
//!
//! A small Vec3 plus a constrained orbit camera with perspective projection.
//! The scene is painted as depth-sorted 2D points, so projection carries a
//! depth and a scale factor for point sizing.

use glam::Vec2;
use std::f32::consts::PI;
use std::ops::{Add, Mul, Sub};

/// 3D vector for star and sphere-vertex positions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 1e-10 {
            self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// Rotate around the Y axis (azimuth).
    pub fn rotate_y(self, angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Rotate around the X axis (elevation).
    pub fn rotate_x(self, angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Projection result from 3D to 2D.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// 2D screen position.
    pub pos: Vec2,
    /// Depth (positive = closer to camera).
    pub depth: f32,
    /// Scale factor for depth-based point sizing.
    pub scale: f32,
}

/// Orbit camera locked to a narrow frontal window.
///
/// Dragging orbits azimuth and elevation within fixed clamps; zoom and pan
/// are not offered. Matches the page's ambient-scene controls: a band around
/// the equator, a ±45° frontal arc.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub elevation: f32,
    distance: f32,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl OrbitCamera {
    const ORBIT_SENSITIVITY: f32 = 0.005;
    const DISTANCE: f32 = 6.0;
    /// Focal length factor approximating a 45° vertical FOV.
    const FOV_SCALE: f32 = 1.2;

    /// Azimuth window: ±45° frontal arc.
    pub const AZIMUTH_MAX: f32 = PI / 4.0;
    /// Elevation window derived from the polar-angle band [π/2.5, π/1.5].
    pub const ELEVATION_MIN: f32 = PI / 2.0 - PI / 1.5;
    pub const ELEVATION_MAX: f32 = PI / 2.0 - PI / 2.5;

    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            distance: Self::DISTANCE,
            screen_width,
            screen_height,
        }
    }

    /// Orbit by a pointer drag delta in pixels, clamped to the window.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth = (self.azimuth + dx * Self::ORBIT_SENSITIVITY)
            .clamp(-Self::AZIMUTH_MAX, Self::AZIMUTH_MAX);
        self.elevation = (self.elevation - dy * Self::ORBIT_SENSITIVITY)
            .clamp(Self::ELEVATION_MIN, Self::ELEVATION_MAX);
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Transform a world position to camera-relative view space.
    fn world_to_view(&self, pos: Vec3) -> Vec3 {
        let rotated = pos.rotate_y(-self.azimuth).rotate_x(-self.elevation);
        Vec3::new(rotated.x, rotated.y, rotated.z - self.distance)
    }

    /// Project a 3D world position to 2D screen coordinates.
    pub fn project(&self, pos: Vec3) -> Projection {
        let view = self.world_to_view(pos);

        // Camera looks down -Z; keep a floor under the divide so points
        // swinging behind the camera degrade instead of exploding.
        let depth = -view.z;
        let safe_depth = depth.max(0.1);

        let focal = self.screen_height * Self::FOV_SCALE;
        let scale = focal / safe_depth;

        Projection {
            pos: Vec2::new(
                self.screen_width / 2.0 + view.x * scale,
                self.screen_height / 2.0 - view.y * scale,
            ),
            depth,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_y_quarter_turn() {
        let v = Vec3::new(1.0, 0.0, 0.0).rotate_y(std::f32::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_degenerate_is_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        let n = Vec3::new(3.0, 4.0, 0.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = OrbitCamera::new(800.0, 600.0);
        let proj = camera.project(Vec3::ZERO);
        assert!((proj.pos.x - 400.0).abs() < 0.5);
        assert!((proj.pos.y - 300.0).abs() < 0.5);
    }

    #[test]
    fn closer_points_project_larger() {
        let camera = OrbitCamera::new(800.0, 600.0);
        let near = camera.project(Vec3::new(0.0, 0.0, 2.0));
        let far = camera.project(Vec3::new(0.0, 0.0, -2.0));
        assert!(near.scale > far.scale);
        assert!(near.depth < far.depth);
    }

    #[test]
    fn orbit_respects_azimuth_window() {
        let mut camera = OrbitCamera::new(800.0, 600.0);
        camera.orbit(1e6, 0.0);
        assert!(camera.azimuth <= OrbitCamera::AZIMUTH_MAX);
        camera.orbit(-1e6, 0.0);
        assert!(camera.azimuth >= -OrbitCamera::AZIMUTH_MAX);
    }

    #[test]
    fn orbit_respects_elevation_band() {
        let mut camera = OrbitCamera::new(800.0, 600.0);
        camera.orbit(0.0, -1e6);
        assert!(camera.elevation <= OrbitCamera::ELEVATION_MAX);
        camera.orbit(0.0, 1e6);
        assert!(camera.elevation >= OrbitCamera::ELEVATION_MIN);
        // The band straddles the equator.
        assert!(OrbitCamera::ELEVATION_MIN < 0.0);
        assert!(OrbitCamera::ELEVATION_MAX > 0.0);
    }
}
