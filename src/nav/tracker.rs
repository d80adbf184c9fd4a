//! Scroll-driven active section tracking.

use super::layout::Layout;
use crate::content::SectionId;

/// Lookahead added to the scroll offset before matching, so a section
/// counts as active once it reaches the area below the fixed nav bar.
pub const DEFAULT_LOOKAHEAD: f64 = 100.0;

/// Owns the active section and recomputes it from scroll position.
///
/// A section is active when `offset + lookahead` lies in
/// `[top, top + height)` of its anchor region. Sections are checked in page
/// order and the last match wins. When nothing matches the previous value is
/// kept, so the active section is always one of the five ids.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTracker {
    active: SectionId,
    lookahead: f64,
    evaluations: u64,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKAHEAD)
    }
}

impl SectionTracker {
    pub fn new(lookahead: f64) -> Self {
        Self {
            active: SectionId::default(),
            lookahead,
            evaluations: 0,
        }
    }

    #[inline]
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn lookahead(&self) -> f64 {
        self.lookahead
    }

    /// Number of evaluations performed so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Recompute the active section for `offset`.
    ///
    /// Returns the matched section, or `None` when the biased offset is
    /// outside every anchor region (the active section is then unchanged).
    pub fn evaluate<L: Layout + ?Sized>(&mut self, offset: f64, layout: &L) -> Option<SectionId> {
        self.evaluations += 1;
        let matched = locate(offset + self.lookahead, layout);
        if let Some(id) = matched {
            self.active = id;
        }
        matched
    }
}

/// Last section in page order whose region contains `y`.
pub fn locate<L: Layout + ?Sized>(y: f64, layout: &L) -> Option<SectionId> {
    SectionId::ALL
        .into_iter()
        .filter(|id| {
            layout
                .region(id.as_str())
                .is_some_and(|region| region.contains(y))
        })
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::layout::StaticLayout;

    fn page() -> StaticLayout {
        StaticLayout::stacked(&[
            (SectionId::Home, 800.0),
            (SectionId::About, 800.0),
            (SectionId::Menu, 1600.0),
            (SectionId::Gallery, 900.0),
            (SectionId::Contact, 1000.0),
        ])
    }

    #[test]
    fn test_offset_zero_is_home() {
        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.evaluate(0.0, &page()), Some(SectionId::Home));
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn test_lookahead_moves_boundary() {
        let layout = StaticLayout::new()
            .with("home", 0.0, 800.0)
            .with("about", 800.0, 800.0)
            .with("menu", 1600.0, 1600.0);
        let mut tracker = SectionTracker::default();

        tracker.evaluate(750.0, &layout);
        assert_eq!(tracker.active(), SectionId::About);

        tracker.evaluate(699.0, &layout);
        assert_eq!(tracker.active(), SectionId::Home);

        tracker.evaluate(700.0, &layout);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_every_offset_resolves_on_contiguous_page() {
        let layout = page();
        let mut tracker = SectionTracker::default();
        let bottom = layout.extent() - DEFAULT_LOOKAHEAD;
        let mut offset = 0.0;
        while offset < bottom {
            assert!(tracker.evaluate(offset, &layout).is_some(), "offset {offset}");
            offset += 37.0;
        }
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let layout = page();
        let mut tracker = SectionTracker::default();
        tracker.evaluate(2000.0, &layout);
        assert_eq!(tracker.active(), SectionId::Menu);

        // Past the end of the page
        assert_eq!(tracker.evaluate(100_000.0, &layout), None);
        assert_eq!(tracker.active(), SectionId::Menu);
    }

    #[test]
    fn test_above_all_anchors_keeps_default() {
        let layout = StaticLayout::new().with("home", 500.0, 500.0);
        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.evaluate(0.0, &layout), None);
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn test_last_match_wins_on_overlap() {
        let layout = StaticLayout::new()
            .with("about", 0.0, 1000.0)
            .with("gallery", 0.0, 1000.0);
        let mut tracker = SectionTracker::default();
        tracker.evaluate(0.0, &layout);
        assert_eq!(tracker.active(), SectionId::Gallery);
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let layout = page();
        let mut tracker = SectionTracker::default();
        tracker.evaluate(2600.0, &layout);
        let first = tracker.active();
        for _ in 0..100 {
            tracker.evaluate(2600.0, &layout);
            assert_eq!(tracker.active(), first);
        }
        assert_eq!(tracker.evaluations(), 101);
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let mut layout = page();
        layout.remove("about");
        let mut tracker = SectionTracker::default();
        tracker.evaluate(0.0, &layout);
        assert_eq!(tracker.evaluate(900.0, &layout), None);
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn test_non_section_anchors_are_ignored() {
        let layout = StaticLayout::new().with("reserve", 0.0, 10_000.0);
        assert_eq!(locate(50.0, &layout), None);
    }

    #[test]
    fn test_custom_lookahead() {
        let layout = page();
        let mut tracker = SectionTracker::new(0.0);
        tracker.evaluate(750.0, &layout);
        assert_eq!(tracker.active(), SectionId::Home);
    }
}
