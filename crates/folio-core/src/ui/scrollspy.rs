//! Scroll-spy state for the fixed navigation bar.
//!
//! The bar watches the page's single scrolling container (not the window)
//! and swaps its visual treatment once the offset passes a fixed threshold.
//! Pure state machine here; listener wiring lives in the web crate.

use crate::content::types::SectionId;

/// Scroll offset above which the bar switches to its condensed treatment.
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Links shown in the bar, in order. A strict subset of `SectionId`.
pub const NAV_LINKS: [(&str, SectionId); 4] = [
    ("About", SectionId::About),
    ("Work", SectionId::Work),
    ("Achievements", SectionId::Achievements),
    ("Contact", SectionId::Contact),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPhase {
    /// At or near the top; transparent bar.
    Top,
    /// Past the threshold; condensed, blurred bar.
    Scrolled,
}

impl NavPhase {
    fn from_offset(offset: f32) -> NavPhase {
        if offset > SCROLL_THRESHOLD {
            NavPhase::Scrolled
        } else {
            NavPhase::Top
        }
    }
}

/// Two-state scroll tracker. Constructed synchronously from the container's
/// current offset so the bar is correct on mount, before any scroll event.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    phase: NavPhase,
}

impl ScrollSpy {
    pub fn new(initial_offset: f32) -> Self {
        Self {
            phase: NavPhase::from_offset(initial_offset),
        }
    }

    /// Feed a new scroll offset. Returns `Some(phase)` only when the phase
    /// changed, so the caller touches the DOM only on transitions.
    pub fn observe(&mut self, offset: f32) -> Option<NavPhase> {
        let next = NavPhase::from_offset(offset);
        if next != self.phase {
            self.phase = next;
            Some(next)
        } else {
            None
        }
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }
}

/// Mobile menu open/closed toggle. Purely local UI state; closes after any
/// link is activated.
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A nav link was clicked (desktop or mobile); the menu always ends closed.
    pub fn link_activated(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_phase_from_offset() {
        assert_eq!(ScrollSpy::new(0.0).phase(), NavPhase::Top);
        assert_eq!(ScrollSpy::new(50.0).phase(), NavPhase::Top);
        assert_eq!(ScrollSpy::new(50.5).phase(), NavPhase::Scrolled);
        assert_eq!(ScrollSpy::new(400.0).phase(), NavPhase::Scrolled);
    }

    #[test]
    fn threshold_is_strict() {
        let mut spy = ScrollSpy::new(0.0);
        assert_eq!(spy.observe(50.0), None);
        assert_eq!(spy.observe(51.0), Some(NavPhase::Scrolled));
        assert_eq!(spy.observe(50.0), Some(NavPhase::Top));
    }

    #[test]
    fn observe_reports_transitions_only() {
        let mut spy = ScrollSpy::new(0.0);
        assert_eq!(spy.observe(10.0), None);
        assert_eq!(spy.observe(200.0), Some(NavPhase::Scrolled));
        assert_eq!(spy.observe(300.0), None);
        assert_eq!(spy.observe(0.0), Some(NavPhase::Top));
        assert_eq!(spy.observe(0.0), None);
    }

    #[test]
    fn nav_links_are_a_subset_of_sections() {
        for (label, id) in NAV_LINKS.iter() {
            assert!(!label.is_empty());
            assert!(SectionId::ALL.contains(id));
        }
        // Home is the brand link, not a nav entry.
        assert!(!NAV_LINKS.iter().any(|(_, id)| *id == SectionId::Home));
    }

    #[test]
    fn menu_closes_on_any_link() {
        let mut menu = MobileMenu::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        menu.link_activated();
        assert!(!menu.is_open());
        // Closing an already-closed menu stays closed.
        menu.link_activated();
        assert!(!menu.is_open());
    }
}
