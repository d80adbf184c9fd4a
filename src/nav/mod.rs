//! In-page navigation model.
//!
//! # Module Structure
//!
//! - [`layout`]: anchor geometry and viewport traits, in-memory implementations
//! - [`events`]: scroll notifications with drop-scoped subscriptions
//! - [`tracker`]: active section from scroll offset
//! - [`controller`]: navigate-to-section and the mobile menu flag
//!
//! [`PageSession`] wires them together the way the browser runtime does:
//! the tracker listens to scroll events while mounted, navigation issues
//! scrolls and the tracker converges once the scroll settles.

pub mod controller;
pub mod events;
pub mod layout;
pub mod tracker;

pub use controller::{NavMenuState, NavOutcome, NavigationController};
pub use events::{ScrollEvents, ScrollSubscription};
pub use layout::{AnchorRegion, Layout, ScrollBehavior, SimulatedViewport, StaticLayout, Viewport};
pub use tracker::{DEFAULT_LOOKAHEAD, SectionTracker};

use crate::config::section::NavConfig;
use crate::content::SectionId;
use std::cell::RefCell;
use std::rc::Rc;

/// Interactive state of one rendered page.
#[derive(Debug)]
pub struct PageSession {
    tracker: Rc<RefCell<SectionTracker>>,
    controller: NavigationController,
    menu: NavMenuState,
    scroll: Option<ScrollSubscription>,
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD, ScrollBehavior::Smooth)
    }
}

impl PageSession {
    pub fn new(lookahead: f64, behavior: ScrollBehavior) -> Self {
        Self {
            tracker: Rc::new(RefCell::new(SectionTracker::new(lookahead))),
            controller: NavigationController::new(behavior),
            menu: NavMenuState::default(),
            scroll: None,
        }
    }

    pub fn from_config(nav: &NavConfig) -> Self {
        let behavior = if nav.smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        };
        Self::new(nav.lookahead, behavior)
    }

    /// Install the scroll listener. Returns `false` if already mounted.
    pub fn mount<L: Layout + 'static>(&mut self, events: &ScrollEvents, layout: Rc<L>) -> bool {
        if self.scroll.is_some() {
            return false;
        }
        let tracker = Rc::clone(&self.tracker);
        self.scroll = Some(events.subscribe(move |offset| {
            tracker.borrow_mut().evaluate(offset, &*layout);
        }));
        true
    }

    /// Remove the scroll listener; the tracker keeps its last value.
    pub fn unmount(&mut self) {
        self.scroll = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.scroll.is_some()
    }

    /// Section to highlight in the nav.
    pub fn active(&self) -> SectionId {
        self.tracker.borrow().active()
    }

    pub fn menu(&self) -> NavMenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn navigate<L, V>(&mut self, target: &str, layout: &L, viewport: &mut V) -> NavOutcome
    where
        L: Layout + ?Sized,
        V: Viewport + ?Sized,
    {
        self.controller
            .navigate(target, layout, viewport, &mut self.menu)
    }
}
