use crate::foundation::core::Progress;
use crate::foundation::error::{FolioError, FolioResult};

/// Scroll range `[start, end]` over which a view's progress runs from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackedRegion {
    /// Scroll offset at which progress is 0.
    pub start: f64,
    /// Scroll offset at which progress is 1.
    pub end: f64,
}

impl TrackedRegion {
    /// Region with explicit bounds.
    pub fn new(start: f64, end: f64) -> FolioResult<Self> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(FolioError::validation(format!(
                "TrackedRegion bounds must be finite, got [{start}, {end}]"
            )));
        }
        Ok(Self { start, end })
    }

    /// Derive the region from element layout and an offset pair.
    pub fn from_layout(layout: ElementLayout, offsets: ScrollOffsets) -> Self {
        Self {
            start: offsets.start.scroll_offset(layout),
            end: offsets.end.scroll_offset(layout),
        }
    }

    /// Signed length of the region.
    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    /// `true` for a zero-length region.
    pub fn is_empty(&self) -> bool {
        self.len() == 0.0
    }

    /// `clamp((scroll − start) / (end − start), 0, 1)`; a zero-length region yields 0.
    pub fn progress(&self, scroll: f64) -> Progress {
        let span = self.len();
        if span == 0.0 || !span.is_finite() {
            return Progress::START;
        }
        Progress::new((scroll - self.start) / span)
    }
}

/// Layout of a tracked element, in document scroll coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementLayout {
    /// Offset of the element's top edge from the document top.
    pub top: f64,
    /// Element height.
    pub height: f64,
    /// Height of the scrolling viewport.
    pub viewport_height: f64,
}

/// A reference line on an element or the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Top edge.
    Start,
    /// Vertical midpoint.
    Center,
    /// Bottom edge.
    End,
}

impl Edge {
    /// Position of this edge as a fraction of the box height.
    pub fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

/// "`target` edge of the element meets `container` edge of the viewport".
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScrollOffset {
    /// Edge on the tracked element.
    pub target: Edge,
    /// Edge on the viewport.
    pub container: Edge,
}

impl ScrollOffset {
    /// Scroll offset at which the two edges line up.
    pub fn scroll_offset(self, layout: ElementLayout) -> f64 {
        layout.top + self.target.fraction() * layout.height
            - self.container.fraction() * layout.viewport_height
    }
}

/// Offset pair marking where progress is 0 and where it is 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScrollOffsets {
    /// Intersection at progress 0.
    pub start: ScrollOffset,
    /// Intersection at progress 1.
    pub end: ScrollOffset,
}

impl ScrollOffsets {
    /// Element top at viewport top, through element bottom at viewport bottom.
    pub const CONTAINED: Self = Self {
        start: ScrollOffset {
            target: Edge::Start,
            container: Edge::Start,
        },
        end: ScrollOffset {
            target: Edge::End,
            container: Edge::End,
        },
    };

    /// Element top entering the viewport bottom, through element bottom leaving the top.
    pub const PASS_THROUGH: Self = Self {
        start: ScrollOffset {
            target: Edge::Start,
            container: Edge::End,
        },
        end: ScrollOffset {
            target: Edge::End,
            container: Edge::Start,
        },
    };
}

impl Default for ScrollOffsets {
    fn default() -> Self {
        Self::CONTAINED
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/region.rs"]
mod tests;
