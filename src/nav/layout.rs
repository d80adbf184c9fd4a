//! Page geometry and viewport abstractions.
//!
//! The tracker and controller never hold geometry themselves: every
//! evaluation asks a [`Layout`] for the current anchor regions, so layout
//! changes between evaluations are always picked up.

use super::events::ScrollEvents;
use crate::content::SectionId;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Vertical extent of a rendered anchor region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnchorRegion {
    pub top: f64,
    pub height: f64,
}

impl AnchorRegion {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Live page geometry, looked up by anchor id.
pub trait Layout {
    fn region(&self, id: &str) -> Option<AnchorRegion>;
}

impl<L: Layout + ?Sized> Layout for &L {
    fn region(&self, id: &str) -> Option<AnchorRegion> {
        (**self).region(id)
    }
}

impl<L: Layout + ?Sized> Layout for Rc<L> {
    fn region(&self, id: &str) -> Option<AnchorRegion> {
        (**self).region(id)
    }
}

impl<L: Layout + ?Sized> Layout for RefCell<L> {
    fn region(&self, id: &str) -> Option<AnchorRegion> {
        self.borrow().region(id)
    }
}

/// How a programmatic scroll is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Animated by the platform; the offset changes once the animation settles.
    #[default]
    Smooth,
    /// Jump immediately.
    Instant,
}

/// The scrollable viewport.
pub trait Viewport {
    fn scroll_offset(&self) -> f64;

    /// Request a scroll so that `top` is aligned with the top edge.
    /// Fire-and-forget: a newer request supersedes one still in flight.
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);
}

// ============================================================================
// In-memory implementations
// ============================================================================

/// Layout held in memory, keyed by anchor id.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    regions: FxHashMap<String, AnchorRegion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutParseError {
    #[error("expected `id=top:height`, got `{0}`")]
    Malformed(String),

    #[error("invalid number `{value}` in `{entry}`")]
    Number { entry: String, value: String },

    #[error("negative height in `{0}`")]
    NegativeHeight(String),
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, id: impl Into<String>, top: f64, height: f64) -> Self {
        self.insert(id, AnchorRegion::new(top, height));
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, region: AnchorRegion) {
        self.regions.insert(id.into(), region);
    }

    pub fn remove(&mut self, id: &str) -> Option<AnchorRegion> {
        self.regions.remove(id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Stack sections top to bottom with the given heights, starting at 0.
    pub fn stacked(heights: &[(SectionId, f64)]) -> Self {
        let mut layout = Self::new();
        let mut top = 0.0;
        for &(id, height) in heights {
            layout.insert(id.as_str(), AnchorRegion::new(top, height));
            top += height;
        }
        layout
    }

    /// Total covered height (bottom of the lowest region).
    pub fn extent(&self) -> f64 {
        self.regions
            .values()
            .map(AnchorRegion::bottom)
            .fold(0.0, f64::max)
    }

    /// Parse `home=0:800,about=800:800` style descriptions.
    ///
    /// Ids are not restricted to section ids so that stray anchors can be
    /// described too.
    pub fn parse(input: &str) -> Result<Self, LayoutParseError> {
        let mut layout = Self::new();
        for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (id, range) = entry
                .split_once('=')
                .ok_or_else(|| LayoutParseError::Malformed(entry.to_string()))?;
            let (top, height) = range
                .split_once(':')
                .ok_or_else(|| LayoutParseError::Malformed(entry.to_string()))?;
            let id = id.trim();
            if id.is_empty() {
                return Err(LayoutParseError::Malformed(entry.to_string()));
            }
            let number = |value: &str| {
                value
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| LayoutParseError::Number {
                        entry: entry.to_string(),
                        value: value.trim().to_string(),
                    })
            };
            let (top, height) = (number(top)?, number(height)?);
            if height < 0.0 {
                return Err(LayoutParseError::NegativeHeight(entry.to_string()));
            }
            layout.insert(id, AnchorRegion::new(top, height));
        }
        Ok(layout)
    }
}

impl Layout for StaticLayout {
    fn region(&self, id: &str) -> Option<AnchorRegion> {
        self.regions.get(id).copied()
    }
}

/// A scroll request recorded by [`SimulatedViewport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Viewport that emits scroll notifications like a browser window would.
///
/// Instant scrolls move and notify at once. Smooth scrolls stay pending
/// until [`settle`](Self::settle), modelling the platform animation; a new
/// request replaces the pending one.
#[derive(Debug)]
pub struct SimulatedViewport {
    offset: f64,
    max_offset: f64,
    pending: Option<ScrollRequest>,
    last_request: Option<ScrollRequest>,
    events: ScrollEvents,
}

impl SimulatedViewport {
    pub fn new(events: ScrollEvents) -> Self {
        Self {
            offset: 0.0,
            max_offset: f64::INFINITY,
            pending: None,
            last_request: None,
            events,
        }
    }

    /// Clamp scrolling to `[0, max]` like a document of finite height.
    pub fn with_max_offset(mut self, max: f64) -> Self {
        self.max_offset = max.max(0.0);
        self
    }

    /// User scroll (wheel, touch): moves and notifies.
    pub fn user_scroll(&mut self, offset: f64) {
        self.pending = None;
        self.move_to(offset);
    }

    /// Finish the in-flight smooth scroll, if any.
    pub fn settle(&mut self) -> bool {
        match self.pending.take() {
            Some(request) => {
                self.move_to(request.top);
                true
            }
            None => false,
        }
    }

    pub fn pending(&self) -> Option<ScrollRequest> {
        self.pending
    }

    pub fn last_request(&self) -> Option<ScrollRequest> {
        self.last_request
    }

    fn move_to(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset);
        self.events.emit(self.offset);
    }
}

impl Viewport for SimulatedViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let request = ScrollRequest { top, behavior };
        self.last_request = Some(request);
        match behavior {
            ScrollBehavior::Smooth => self.pending = Some(request),
            ScrollBehavior::Instant => {
                self.pending = None;
                self.move_to(top);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_is_half_open() {
        let r = AnchorRegion::new(800.0, 800.0);
        assert!(r.contains(800.0));
        assert!(r.contains(1599.9));
        assert!(!r.contains(1600.0));
        assert!(!r.contains(799.9));
    }

    #[test]
    fn test_zero_height_contains_nothing() {
        let r = AnchorRegion::new(100.0, 0.0);
        assert!(!r.contains(100.0));
    }

    #[test]
    fn test_stacked_is_contiguous() {
        let layout = StaticLayout::stacked(&[
            (SectionId::Home, 800.0),
            (SectionId::About, 800.0),
            (SectionId::Menu, 1600.0),
        ]);
        assert_eq!(layout.region("about"), Some(AnchorRegion::new(800.0, 800.0)));
        assert_eq!(layout.region("menu"), Some(AnchorRegion::new(1600.0, 1600.0)));
        assert_eq!(layout.region("gallery"), None);
        assert_eq!(layout.extent(), 3200.0);
    }

    #[test]
    fn test_parse_layout() {
        let layout = StaticLayout::parse("home=0:800, about=800:800,menu=1600:1600").unwrap();
        assert_eq!(layout.len(), 3);
        assert_eq!(layout.region("home"), Some(AnchorRegion::new(0.0, 800.0)));
    }

    #[test]
    fn test_parse_layout_errors() {
        assert!(matches!(
            StaticLayout::parse("home:0:800"),
            Err(LayoutParseError::Malformed(_))
        ));
        assert!(matches!(
            StaticLayout::parse("home=zero:800"),
            Err(LayoutParseError::Number { .. })
        ));
        assert!(matches!(
            StaticLayout::parse("home=0:-1"),
            Err(LayoutParseError::NegativeHeight(_))
        ));
        assert!(StaticLayout::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_refcell_layout_sees_updates() {
        let layout = RefCell::new(StaticLayout::new().with("home", 0.0, 500.0));
        assert_eq!(layout.region("home").map(|r| r.height), Some(500.0));
        layout.borrow_mut().insert("home", AnchorRegion::new(0.0, 900.0));
        assert_eq!(layout.region("home").map(|r| r.height), Some(900.0));
    }

    #[test]
    fn test_smooth_scroll_is_pending_until_settled() {
        let events = ScrollEvents::new();
        let mut viewport = SimulatedViewport::new(events);
        viewport.scroll_to(1200.0, ScrollBehavior::Smooth);
        assert_eq!(viewport.scroll_offset(), 0.0);
        assert!(viewport.pending().is_some());

        // Newer request redirects the animation
        viewport.scroll_to(2400.0, ScrollBehavior::Smooth);
        assert!(viewport.settle());
        assert_eq!(viewport.scroll_offset(), 2400.0);
        assert!(!viewport.settle());
    }

    #[test]
    fn test_offset_is_clamped() {
        let mut viewport = SimulatedViewport::new(ScrollEvents::new()).with_max_offset(1000.0);
        viewport.user_scroll(-50.0);
        assert_eq!(viewport.scroll_offset(), 0.0);
        viewport.scroll_to(5000.0, ScrollBehavior::Instant);
        assert_eq!(viewport.scroll_offset(), 1000.0);
    }
}
