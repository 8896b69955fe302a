pub mod math3d;
pub mod rng;
pub mod sphere;
pub mod starfield;
pub mod state;
