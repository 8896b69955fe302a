//! Whole-scene simulation state and the painted draw list.
//!
//! The scene is ambient: it reads pointer input for camera drags and sphere
//! hover, and exposes a depth-sorted point list for the canvas painter.
//! Nothing else on the page observes it.

use super::math3d::OrbitCamera;
use super::sphere::{FocalSphere, Rgb, BASE_RADIUS};
use super::starfield::Starfield;
use glam::Vec2;

/// Screen-space radius multiplier for star sprites.
const STAR_SIZE_FACTOR: f32 = 0.2;
/// World radius of a painted sphere vertex dot.
const VERTEX_RADIUS: f32 = 0.035;
/// Star sprites closer than this are culled (clamped projection would smear
/// them across the screen center).
const STAR_MIN_DEPTH: f32 = 1.0;
const VERTEX_MIN_DEPTH: f32 = 0.5;

const STAR_COLOR: Rgb = Rgb::new(1.0, 1.0, 1.0);
const STAR_ALPHA: f32 = 0.9;
const VERTEX_ALPHA: f32 = 0.85;

/// One 2D point ready for the canvas painter.
#[derive(Debug, Clone, Copy)]
pub struct ScenePoint {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

struct DepthPoint {
    depth: f32,
    point: ScenePoint,
}

pub struct SceneState {
    pub camera: OrbitCamera,
    starfield: Starfield,
    pub sphere: FocalSphere,
    elapsed: f32,
    dragging: bool,
    last_pointer: Vec2,
}

impl SceneState {
    pub fn new(screen_width: f32, screen_height: f32, seed: u64) -> Self {
        log::debug!(
            "scene: {}x{} viewport, star seed {:#x}",
            screen_width,
            screen_height,
            seed
        );
        Self {
            camera: OrbitCamera::new(screen_width, screen_height),
            starfield: Starfield::new(seed),
            sphere: FocalSphere::new(),
            elapsed: 0.0,
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_screen_size(width, height);
    }

    /// One animation-frame step.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
        self.starfield.tick(dt);
        self.sphere.tick();
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    // ── Pointer input ────────────────────────────────────────────────

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_pointer = Vec2::new(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        if self.dragging {
            let delta = pos - self.last_pointer;
            self.camera.orbit(delta.x, delta.y);
        }
        self.last_pointer = pos;
        let hovered = self.hit_test(pos);
        self.sphere.set_hovered(hovered);
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Does a screen position fall on the projected sphere disc?
    pub fn hit_test(&self, screen: Vec2) -> bool {
        let proj = self.camera.project(self.sphere.center(self.elapsed));
        if proj.depth <= 0.0 {
            return false;
        }
        let screen_radius = BASE_RADIUS * self.sphere.scale() * proj.scale;
        (screen - proj.pos).length() <= screen_radius
    }

    // ── Painting ─────────────────────────────────────────────────────

    /// Build the frame's draw list: stars plus sphere vertices, depth sorted
    /// back-to-front (painter's algorithm).
    pub fn build_draw_list(&self, out: &mut Vec<ScenePoint>) {
        out.clear();
        let mut items: Vec<DepthPoint> =
            Vec::with_capacity(self.starfield.stars().len() + 512);

        for star in self.starfield.stars() {
            let proj = self.camera.project(star.pos);
            if proj.depth < STAR_MIN_DEPTH {
                continue;
            }
            items.push(DepthPoint {
                depth: proj.depth,
                point: ScenePoint {
                    pos: proj.pos,
                    radius: star.size * proj.scale * STAR_SIZE_FACTOR,
                    color: STAR_COLOR,
                    alpha: STAR_ALPHA * self.starfield.brightness(star),
                },
            });
        }

        let preset = self.sphere.preset();
        for vertex in self.sphere.vertices(self.elapsed) {
            let proj = self.camera.project(vertex);
            if proj.depth < VERTEX_MIN_DEPTH {
                continue;
            }
            items.push(DepthPoint {
                depth: proj.depth,
                point: ScenePoint {
                    pos: proj.pos,
                    radius: VERTEX_RADIUS * proj.scale,
                    color: preset.color,
                    alpha: VERTEX_ALPHA,
                },
            });
        }

        // Farther points first.
        items.sort_by(|a, b| {
            b.depth
                .partial_cmp(&a.depth)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        out.extend(items.into_iter().map(|d| d.point));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::starfield::STAR_COUNT;

    fn scene() -> SceneState {
        SceneState::new(800.0, 600.0, 42)
    }

    #[test]
    fn drag_orbits_the_camera() {
        let mut s = scene();
        s.pointer_down(100.0, 100.0);
        s.pointer_move(140.0, 100.0);
        assert!(s.camera.azimuth > 0.0);
        s.pointer_up();
        let azimuth = s.camera.azimuth;
        s.pointer_move(300.0, 100.0);
        assert_eq!(s.camera.azimuth, azimuth, "move without drag must not orbit");
    }

    #[test]
    fn hover_follows_the_projected_disc() {
        let mut s = scene();
        let proj = s.camera.project(s.sphere.center(0.0));
        s.pointer_move(proj.pos.x, proj.pos.y);
        assert!(s.sphere.hovered());
        s.pointer_move(proj.pos.x + 5000.0, proj.pos.y);
        assert!(!s.sphere.hovered());
    }

    #[test]
    fn draw_list_covers_stars_and_sphere() {
        let mut s = scene();
        s.tick(1.0 / 60.0);
        let mut points = Vec::new();
        s.build_draw_list(&mut points);
        // Most of the shell faces the camera from inside, so the bulk of the
        // stars survive culling, plus the sphere's vertex grid.
        assert!(points.len() > STAR_COUNT / 2);
        assert!(points.iter().all(|p| p.radius > 0.0));
        assert!(points.iter().all(|p| (0.0..=1.0).contains(&p.alpha)));
    }

    #[test]
    fn draw_list_is_rebuilt_not_accumulated() {
        let mut s = scene();
        let mut points = Vec::new();
        s.build_draw_list(&mut points);
        let first = points.len();
        s.tick(0.016);
        s.build_draw_list(&mut points);
        assert_eq!(points.len(), first);
    }

    #[test]
    fn elapsed_accumulates() {
        let mut s = scene();
        for _ in 0..60 {
            s.tick(1.0 / 60.0);
        }
        assert!((s.elapsed() - 1.0).abs() < 1e-4);
    }
}
