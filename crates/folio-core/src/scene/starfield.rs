//! Ambient star field: a fixed count of static point sprites in a spherical
//! shell, with a slow per-star brightness fade. Positions are seeded once
//! and never change; only the fade clock advances.

use super::math3d::Vec3;
use super::rng::Rng;
use std::f32::consts::TAU;

pub const STAR_COUNT: usize = 5000;

/// Inner radius of the shell the stars occupy.
const FIELD_RADIUS: f32 = 100.0;
/// Radial depth of the shell beyond the inner radius.
const FIELD_DEPTH: f32 = 50.0;
/// Fade clock rate, radians per second.
const FADE_SPEED: f32 = 1.0;
/// Twinkle floor so no star ever fully disappears.
const MIN_BRIGHTNESS: f32 = 0.25;

#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vec3,
    /// Base point size in world-independent units.
    pub size: f32,
    /// Per-star fade phase offset.
    phase: f32,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    time: f32,
}

impl Starfield {
    pub fn new(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let mut stars = Vec::with_capacity(STAR_COUNT);
        for _ in 0..STAR_COUNT {
            // Uniform direction via normalized cube sample; rejection keeps
            // the distribution from bunching at the corners.
            let dir = loop {
                let v = Vec3::new(
                    rng.range(-1.0, 1.0),
                    rng.range(-1.0, 1.0),
                    rng.range(-1.0, 1.0),
                );
                let len = v.length();
                if len > 1e-3 && len <= 1.0 {
                    break v * (1.0 / len);
                }
            };
            let radius = rng.range(FIELD_RADIUS, FIELD_RADIUS + FIELD_DEPTH);
            stars.push(Star {
                pos: dir * radius,
                size: rng.range(0.6, 1.8),
                phase: rng.range(0.0, TAU),
            });
        }
        Self { stars, time: 0.0 }
    }

    /// Advance the fade clock. Star positions are untouched.
    pub fn tick(&mut self, dt: f32) {
        self.time += dt * FADE_SPEED;
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Current brightness of a star in [MIN_BRIGHTNESS, 1].
    pub fn brightness(&self, star: &Star) -> f32 {
        let wave = 0.5 + 0.5 * (self.time + star.phase).sin();
        MIN_BRIGHTNESS + (1.0 - MIN_BRIGHTNESS) * wave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_star_count() {
        let field = Starfield::new(1);
        assert_eq!(field.stars().len(), STAR_COUNT);
    }

    #[test]
    fn stars_occupy_the_shell() {
        let field = Starfield::new(9);
        for star in field.stars() {
            let r = star.pos.length();
            assert!(
                (FIELD_RADIUS - 1e-3..=FIELD_RADIUS + FIELD_DEPTH + 1e-3).contains(&r),
                "star outside shell: {}",
                r
            );
        }
    }

    #[test]
    fn positions_immutable_under_ticking() {
        let mut field = Starfield::new(3);
        let before: Vec<Vec3> = field.stars().iter().map(|s| s.pos).collect();
        for _ in 0..600 {
            field.tick(1.0 / 60.0);
        }
        let after: Vec<Vec3> = field.stars().iter().map(|s| s.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn deterministic_per_seed() {
        let a = Starfield::new(42);
        let b = Starfield::new(42);
        for (sa, sb) in a.stars().iter().zip(b.stars()) {
            assert_eq!(sa.pos, sb.pos);
        }
    }

    #[test]
    fn brightness_stays_in_band() {
        let mut field = Starfield::new(5);
        for _ in 0..300 {
            field.tick(0.016);
            let star = &field.stars()[0];
            let b = field.brightness(star);
            assert!((MIN_BRIGHTNESS..=1.0).contains(&b));
        }
    }
}
