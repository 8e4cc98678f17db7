use crate::foundation::core::Progress;
use crate::scroll::region::{ElementLayout, ScrollOffsets, TrackedRegion};

/// Observes one tracked region and reports its progress for the current scroll offset.
///
/// Progress is recomputed from scratch on every sample, so repeated sampling never
/// accumulates error.
#[derive(Clone, Debug)]
pub struct ProgressSource {
    region: TrackedRegion,
    offsets: ScrollOffsets,
    scroll: f64,
}

impl ProgressSource {
    /// Source over a fixed region.
    pub fn new(region: TrackedRegion) -> Self {
        Self {
            region,
            offsets: ScrollOffsets::default(),
            scroll: region.start,
        }
    }

    /// Source whose region follows the element layout through `offsets`.
    pub fn from_layout(layout: ElementLayout, offsets: ScrollOffsets) -> Self {
        let region = TrackedRegion::from_layout(layout, offsets);
        Self {
            region,
            offsets,
            scroll: region.start,
        }
    }

    /// Offsets used to rederive the region on a layout change.
    pub fn offsets(&self) -> ScrollOffsets {
        self.offsets
    }

    /// Change the offsets applied on the next [`set_layout`](Self::set_layout). The current
    /// region is kept.
    pub fn set_offsets(&mut self, offsets: ScrollOffsets) {
        self.offsets = offsets;
    }

    /// Current region.
    pub fn region(&self) -> TrackedRegion {
        self.region
    }

    /// Last observed scroll offset.
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Record a new scroll offset. Non-finite offsets are ignored.
    pub fn set_scroll(&mut self, scroll: f64) {
        if scroll.is_finite() {
            self.scroll = scroll;
        }
    }

    /// Recompute the region after a layout change.
    pub fn set_layout(&mut self, layout: ElementLayout) {
        self.region = TrackedRegion::from_layout(layout, self.offsets);
    }

    /// Replace the region outright.
    pub fn set_region(&mut self, region: TrackedRegion) {
        self.region = region;
    }

    /// Progress for the current scroll offset and region.
    pub fn sample(&self) -> Progress {
        self.region.progress(self.scroll)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/source.rs"]
mod tests;
