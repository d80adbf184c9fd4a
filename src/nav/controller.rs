//! Click-to-section navigation.

use super::layout::{Layout, ScrollBehavior, Viewport};
use serde::Serialize;

/// Open/closed state of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenuState {
    open: bool,
}

impl NavMenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip the overlay (mobile menu button).
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum NavOutcome {
    /// A scroll to `top` was issued.
    Scrolled { top: f64 },
    /// No anchor region for the target; nothing scrolled.
    Missing,
}

impl NavOutcome {
    pub fn scrolled(&self) -> bool {
        matches!(self, Self::Scrolled { .. })
    }
}

/// Scrolls the viewport to a section's anchor and closes the mobile menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationController {
    behavior: ScrollBehavior,
}

impl NavigationController {
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Navigate to the anchor named `target`.
    ///
    /// A missing anchor is a silent no-op. The menu is closed either way.
    pub fn navigate<L, V>(
        &self,
        target: &str,
        layout: &L,
        viewport: &mut V,
        menu: &mut NavMenuState,
    ) -> NavOutcome
    where
        L: Layout + ?Sized,
        V: Viewport + ?Sized,
    {
        let outcome = match layout.region(target) {
            Some(region) => {
                viewport.scroll_to(region.top, self.behavior);
                NavOutcome::Scrolled { top: region.top }
            }
            None => {
                crate::debug!("nav"; "no anchor for `{}`, ignoring", target);
                NavOutcome::Missing
            }
        };
        menu.close();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::events::ScrollEvents;
    use crate::nav::layout::{ScrollRequest, SimulatedViewport, StaticLayout};

    fn layout() -> StaticLayout {
        StaticLayout::new()
            .with("home", 0.0, 800.0)
            .with("about", 800.0, 800.0)
            .with("menu", 1600.0, 1600.0)
            .with("gallery", 3200.0, 900.0)
            .with("contact", 4100.0, 1000.0)
    }

    #[test]
    fn test_toggle_menu() {
        let mut menu = NavMenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
    }

    #[test]
    fn test_navigate_scrolls_smoothly_and_closes_menu() {
        let mut viewport = SimulatedViewport::new(ScrollEvents::new());
        let mut menu = NavMenuState::default();
        menu.open();

        let outcome =
            NavigationController::default().navigate("gallery", &layout(), &mut viewport, &mut menu);

        assert_eq!(outcome, NavOutcome::Scrolled { top: 3200.0 });
        assert!(!menu.is_open());
        assert_eq!(
            viewport.last_request(),
            Some(ScrollRequest {
                top: 3200.0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn test_navigate_closed_menu_stays_closed() {
        let mut viewport = SimulatedViewport::new(ScrollEvents::new());
        let mut menu = NavMenuState::default();
        NavigationController::default().navigate("about", &layout(), &mut viewport, &mut menu);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_missing_is_noop() {
        let mut viewport = SimulatedViewport::new(ScrollEvents::new());
        let mut menu = NavMenuState::default();
        menu.open();

        let outcome =
            NavigationController::default().navigate("nonexistent", &layout(), &mut viewport, &mut menu);

        assert_eq!(outcome, NavOutcome::Missing);
        assert!(!menu.is_open());
        assert_eq!(viewport.last_request(), None);
        assert_eq!(viewport.scroll_offset(), 0.0);
    }

    #[test]
    fn test_instant_behavior() {
        let mut viewport = SimulatedViewport::new(ScrollEvents::new());
        let mut menu = NavMenuState::default();
        NavigationController::new(ScrollBehavior::Instant).navigate(
            "contact",
            &layout(),
            &mut viewport,
            &mut menu,
        );
        assert_eq!(viewport.scroll_offset(), 4100.0);
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_string(&NavOutcome::Scrolled { top: 800.0 }).unwrap();
        assert_eq!(json, r#"{"outcome":"scrolled","top":800.0}"#);
        let json = serde_json::to_string(&NavOutcome::Missing).unwrap();
        assert_eq!(json, r#"{"outcome":"missing"}"#);
    }
}
