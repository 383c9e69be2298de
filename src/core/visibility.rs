use std::collections::HashMap;

use crate::core::section::Section;

/// Root margin applied to the viewport before intersecting, in pixels.
/// Negative values shrink the viewport.
pub const DEFAULT_ROOT_MARGIN: i32 = -100;

/// Vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub top: i32,
    pub bottom: i32,
}

/// Currently scrolled-to window of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_top: i32,
    pub height: i32,
}

impl Viewport {
    fn intersects(&self, bounds: Bounds, margin: i32) -> bool {
        let top = self.scroll_top - margin;
        let bottom = self.scroll_top + self.height + margin;
        bounds.top < bottom && bounds.bottom > top
    }
}

/// One-shot "in view" flag. Once set it never clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
    margin: i32,
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_MARGIN)
    }
}

impl VisibilityLatch {
    pub fn new(margin: i32) -> Self {
        Self {
            visible: false,
            margin,
        }
    }

    pub fn latched() -> Self {
        Self {
            visible: true,
            margin: DEFAULT_ROOT_MARGIN,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection sample. Returns true only on the transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn observe_scroll(&mut self, bounds: Bounds, viewport: Viewport) -> bool {
        let hit = viewport.intersects(bounds, self.margin);
        self.observe(hit)
    }
}

/// Independent latch per page section.
#[derive(Debug, Clone)]
pub struct SectionVisibility {
    latches: HashMap<Section, VisibilityLatch>,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionVisibility {
    /// Hero starts visible; every other section waits for a scroll.
    pub fn new() -> Self {
        let latches = Section::ORDER
            .iter()
            .map(|section| {
                let latch = if section.reveals_on_scroll() {
                    VisibilityLatch::default()
                } else {
                    VisibilityLatch::latched()
                };
                (*section, latch)
            })
            .collect();
        Self { latches }
    }

    /// Every section latched, for static output without a browser.
    pub fn all_visible() -> Self {
        let latches = Section::ORDER
            .iter()
            .map(|section| (*section, VisibilityLatch::latched()))
            .collect();
        Self { latches }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.latches
            .get(&section)
            .map(VisibilityLatch::is_visible)
            .unwrap_or(false)
    }

    pub fn observe(&mut self, section: Section, intersecting: bool) -> bool {
        let latch = self.latches.entry(section).or_default();
        let fired = latch.observe(intersecting);
        if fired {
            tracing::trace!("Section {} entered the viewport", section.anchor());
        }
        fired
    }

    /// Samples every section against one scroll position.
    pub fn observe_scroll(&mut self, layout: &[(Section, Bounds)], viewport: Viewport) -> Vec<Section> {
        layout
            .iter()
            .filter(|(section, bounds)| {
                self.latches
                    .entry(*section)
                    .or_default()
                    .observe_scroll(*bounds, viewport)
            })
            .map(|(section, _)| *section)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.is_visible());
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_visible());
        assert!(!latch.observe(true));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_root_margin_shrinks_viewport() {
        let viewport = Viewport {
            scroll_top: 0,
            height: 800,
        };
        // Only the top 50px of the section is on screen, inside the 100px margin.
        let section = Bounds {
            top: 750,
            bottom: 1500,
        };

        let mut strict = VisibilityLatch::default();
        assert!(!strict.observe_scroll(section, viewport));

        let mut loose = VisibilityLatch::new(0);
        assert!(loose.observe_scroll(section, viewport));
    }

    #[test]
    fn test_scrolled_past_section_stays_visible() {
        let mut visibility = SectionVisibility::new();
        let layout = [
            (Section::About, Bounds { top: 900, bottom: 1700 }),
            (Section::Portfolio, Bounds { top: 1700, bottom: 2600 }),
        ];

        let fired = visibility.observe_scroll(&layout, Viewport { scroll_top: 800, height: 800 });
        assert_eq!(fired, vec![Section::About]);

        let fired = visibility.observe_scroll(&layout, Viewport { scroll_top: 2000, height: 800 });
        assert_eq!(fired, vec![Section::Portfolio]);

        let fired = visibility.observe_scroll(&layout, Viewport { scroll_top: 5000, height: 800 });
        assert!(fired.is_empty());
        assert!(visibility.is_visible(Section::About));
        assert!(visibility.is_visible(Section::Portfolio));
    }

    #[test]
    fn test_sections_are_independent() {
        let mut visibility = SectionVisibility::new();
        assert!(visibility.is_visible(Section::Hero));
        assert!(!visibility.is_visible(Section::Skills));

        assert!(visibility.observe(Section::Skills, true));
        assert!(visibility.is_visible(Section::Skills));
        assert!(!visibility.is_visible(Section::Contact));
    }
}
