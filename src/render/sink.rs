use crate::eval::evaluator::{FrameSample, ModuleTransform};
use crate::foundation::error::{FolioError, FolioResult};
use std::collections::BTreeMap;

/// Consumer of evaluated module transforms.
///
/// Ordering contract: `begin_frame`, then one `apply` per module in paint order, then
/// `end_frame`. Every transform between a `begin_frame`/`end_frame` pair derives from the
/// same sample.
pub trait TransformSink {
    /// Called once before the frame's first transform.
    fn begin_frame(&mut self, sample: FrameSample) -> FolioResult<()>;
    /// Apply one module's transform.
    fn apply(&mut self, module: &str, transform: &ModuleTransform) -> FolioResult<()>;
    /// Called once after the frame's last transform.
    fn end_frame(&mut self) -> FolioResult<()>;
}

/// One frame captured by [`InMemorySink`].
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedFrame {
    /// Sample the frame was derived from.
    pub sample: FrameSample,
    /// `(module id, transform)` in apply order.
    pub transforms: Vec<(String, ModuleTransform)>,
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    open: Option<CapturedFrame>,
    frames: Vec<CapturedFrame>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the completed frames.
    pub fn frames(&self) -> &[CapturedFrame] {
        &self.frames
    }

    /// Most recent completed frame.
    pub fn last(&self) -> Option<&CapturedFrame> {
        self.frames.last()
    }

    /// Latest transform applied to `module` across all completed frames.
    pub fn latest(&self, module: &str) -> Option<&ModuleTransform> {
        self.frames.iter().rev().find_map(|f| {
            f.transforms
                .iter()
                .find(|(id, _)| id == module)
                .map(|(_, t)| t)
        })
    }
}

impl TransformSink for InMemorySink {
    fn begin_frame(&mut self, sample: FrameSample) -> FolioResult<()> {
        if self.open.is_some() {
            return Err(FolioError::evaluation("begin_frame called twice"));
        }
        self.open = Some(CapturedFrame {
            sample,
            transforms: Vec::new(),
        });
        Ok(())
    }

    fn apply(&mut self, module: &str, transform: &ModuleTransform) -> FolioResult<()> {
        let frame = self
            .open
            .as_mut()
            .ok_or_else(|| FolioError::evaluation("apply called outside a frame"))?;
        frame.transforms.push((module.to_owned(), *transform));
        Ok(())
    }

    fn end_frame(&mut self) -> FolioResult<()> {
        let frame = self
            .open
            .take()
            .ok_or_else(|| FolioError::evaluation("end_frame called without begin_frame"))?;
        self.frames.push(frame);
        Ok(())
    }
}

/// Sink keeping the latest inline style per module, the way a DOM binding would.
#[derive(Debug, Default)]
pub struct CssSink {
    styles: BTreeMap<String, String>,
    frames: u64,
}

impl CssSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current inline style of `module`.
    pub fn style(&self, module: &str) -> Option<&str> {
        self.styles.get(module).map(String::as_str)
    }

    /// Every module's current style, sorted by id.
    pub fn styles(&self) -> &BTreeMap<String, String> {
        &self.styles
    }

    /// Number of completed frames.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl TransformSink for CssSink {
    fn begin_frame(&mut self, _sample: FrameSample) -> FolioResult<()> {
        Ok(())
    }

    fn apply(&mut self, module: &str, transform: &ModuleTransform) -> FolioResult<()> {
        self.styles
            .insert(module.to_owned(), super::css::css_style(transform));
        Ok(())
    }

    fn end_frame(&mut self) -> FolioResult<()> {
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
