pub mod content;
pub mod scene;
pub mod ui;

// Re-export key types at crate root for convenience
pub use content::catalog::{
    CERTIFICATIONS, EDUCATION, HIGHLIGHTS, PROFILES, PROJECTS, SKILL_CATEGORIES,
};
pub use content::types::{
    Certification, CodingProfile, EducationEntry, EducationStatus, Highlight, Icon, Project,
    SectionId, Skill, SkillCategory,
};
pub use scene::math3d::{OrbitCamera, Projection, Vec3};
pub use scene::sphere::{FocalSphere, MaterialPreset, Rgb};
pub use scene::starfield::{Star, Starfield};
pub use scene::state::{SceneState, ScenePoint};
pub use ui::form::{ContactForm, CONTACT_EMAIL};
pub use ui::scrollspy::{MobileMenu, NavPhase, ScrollSpy, NAV_LINKS, SCROLL_THRESHOLD};
pub use ui::tilt::{TiltConfig, TiltState};
