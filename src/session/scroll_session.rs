use crate::animation::spring::{SmoothingConfig, SmoothingFilter};
use crate::choreography::SceneKind;
use crate::choreography::model::Choreography;
use crate::eval::evaluator::{Evaluator, FrameSample};
use crate::foundation::core::Progress;
use crate::foundation::error::{FolioError, FolioResult};
use crate::render::sink::TransformSink;
use crate::scroll::region::ElementLayout;
use crate::scroll::source::ProgressSource;
use std::fmt;

/// Options controlling a [`ScrollSession`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSessionOpts {
    /// Smoothing stage between the scroll source and the evaluator. `None` drives every track
    /// straight from raw progress.
    pub smoothing: Option<SmoothingConfig>,
    /// Skip sink writes when a frame's sample equals the previous frame's.
    pub elide_unchanged: bool,
}

impl Default for ScrollSessionOpts {
    fn default() -> Self {
        Self {
            smoothing: Some(SmoothingConfig::SCROLL),
            elide_unchanged: true,
        }
    }
}

impl ScrollSessionOpts {
    /// Options without a smoothing stage.
    pub fn direct() -> Self {
        Self {
            smoothing: None,
            ..Self::default()
        }
    }
}

/// Lifecycle state of a [`ScrollSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Mounted, frame loop not started.
    Idle,
    /// Frame loop armed.
    Running,
    /// Torn down; the session accepts no further input.
    Stopped,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stopped => "stopped",
        })
    }
}

/// Result of one [`ScrollSession::frame`] call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutcome {
    /// Raw progress sampled for this frame.
    pub progress: Progress,
    /// Progress every smoothed track was evaluated at.
    pub smoothed: Progress,
    /// `true` once the smoothed signal rests on the raw one.
    pub settled: bool,
    /// `false` when the frame was elided because nothing changed.
    pub applied: bool,
}

/// Frame counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames requested while running.
    pub frames_total: u64,
    /// Frames written to the sink.
    pub frames_applied: u64,
    /// Frames skipped because their sample was unchanged.
    pub frames_elided: u64,
}

/// Owned scroll-animation binding for one mounted view.
///
/// Acquire on mount, [`start`](Self::start) the frame loop, feed it scroll and resize events,
/// call [`frame`](Self::frame) once per rendering frame, and [`stop`](Self::stop) on unmount.
/// Within a frame progress is sampled once and every module derives from that sample.
pub struct ScrollSession {
    scene: Choreography,
    source: ProgressSource,
    filter: Option<SmoothingFilter>,
    opts: ScrollSessionOpts,
    state: SessionState,
    last: Option<FrameSample>,
    stats: SessionStats,
}

impl ScrollSession {
    /// Mount a session for `scene` observed through `source`.
    ///
    /// Resizes rederive the region with the scene's offsets, whatever `source` was built with.
    pub fn new(
        scene: Choreography,
        mut source: ProgressSource,
        opts: ScrollSessionOpts,
    ) -> FolioResult<Self> {
        scene.validate()?;
        source.set_offsets(scene.offsets);
        let filter = opts
            .smoothing
            .map(|cfg| SmoothingFilter::new(cfg, source.sample().get()))
            .transpose()?;
        Ok(Self {
            scene,
            source,
            filter,
            opts,
            state: SessionState::Idle,
            last: None,
            stats: SessionStats::default(),
        })
    }

    /// Mount a built-in scene whose tracked region follows `layout`.
    pub fn for_scene(
        kind: SceneKind,
        layout: ElementLayout,
        opts: ScrollSessionOpts,
    ) -> FolioResult<Self> {
        let scene = kind.build()?;
        let source = ProgressSource::from_layout(layout, scene.offsets);
        Self::new(scene, source, opts)
    }

    /// Bound choreography.
    pub fn scene(&self) -> &Choreography {
        &self.scene
    }

    /// Scroll source.
    pub fn source(&self) -> &ProgressSource {
        &self.source
    }

    /// Lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// `true` while the frame loop is armed.
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Frame counters.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Sample of the last applied frame.
    pub fn last_sample(&self) -> Option<FrameSample> {
        self.last
    }

    /// Arm the frame loop. The smoothing filter starts at rest on the current raw progress.
    #[tracing::instrument(skip(self), fields(scene = %self.scene.name))]
    pub fn start(&mut self) -> FolioResult<()> {
        match self.state {
            SessionState::Running => Ok(()),
            SessionState::Stopped => Err(FolioError::validation(
                "cannot restart a stopped scroll session; mount a new one",
            )),
            SessionState::Idle => {
                let raw = self.source.sample();
                if let Some(filter) = self.filter.as_mut() {
                    filter.reset(raw.get());
                }
                self.state = SessionState::Running;
                tracing::debug!(progress = raw.get(), "scroll session started");
                Ok(())
            }
        }
    }

    /// Cancel the frame loop and drop all further input.
    #[tracing::instrument(skip(self), fields(scene = %self.scene.name))]
    pub fn stop(&mut self) {
        if self.state != SessionState::Stopped {
            self.state = SessionState::Stopped;
            tracing::debug!(frames = self.stats.frames_total, "scroll session stopped");
        }
    }

    /// Record a scroll offset. Returns `false` once the session is stopped.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        if self.state == SessionState::Stopped {
            return false;
        }
        self.source.set_scroll(offset);
        true
    }

    /// Recompute the tracked region after a layout change. Returns `false` once stopped.
    pub fn on_resize(&mut self, layout: ElementLayout) -> bool {
        if self.state == SessionState::Stopped {
            return false;
        }
        self.source.set_layout(layout);
        tracing::debug!(
            start = self.source.region().start,
            end = self.source.region().end,
            "tracked region resized"
        );
        true
    }

    /// Advance one rendering frame of `dt_secs` and bind the result to `sink`.
    pub fn frame(
        &mut self,
        dt_secs: f64,
        sink: &mut dyn TransformSink,
    ) -> FolioResult<FrameOutcome> {
        if self.state != SessionState::Running {
            return Err(FolioError::validation(format!(
                "frame requested on a {} scroll session",
                self.state
            )));
        }

        let raw = self.source.sample();
        let (smoothed, settled) = match self.filter.as_mut() {
            Some(filter) => {
                let p = Progress::new(filter.tick(raw.get(), dt_secs));
                (p, filter.is_settled(raw.get()))
            }
            None => (raw, true),
        };
        let sample = FrameSample { raw, smoothed };
        self.stats.frames_total += 1;

        let applied = !(self.opts.elide_unchanged && self.last == Some(sample));
        if applied {
            Evaluator::bind(&self.scene, sample, sink)?;
            self.last = Some(sample);
            self.stats.frames_applied += 1;
        } else {
            self.stats.frames_elided += 1;
        }
        tracing::trace!(
            raw = raw.get(),
            smoothed = smoothed.get(),
            settled,
            applied,
            "frame"
        );

        Ok(FrameOutcome {
            progress: raw,
            smoothed,
            settled,
            applied,
        })
    }
}

impl Drop for ScrollSession {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/scroll_session.rs"]
mod tests;
