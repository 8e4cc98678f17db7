//! Scroll-driven choreography for a single-page portfolio.
//!
//! Scroll offsets become normalized progress, optionally pass through a spring smoothing
//! filter, and are mapped through piecewise-linear keyframe tracks into per-module
//! transforms that a [`TransformSink`] applies once per frame.
//!
//! - Build a scene with [`SceneKind::build`]
//! - Mount a [`ScrollSession`], feed it scroll events, call `frame` every rendering frame
//! - Or evaluate a scene directly with [`Evaluator::eval_frame`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod choreography;
pub mod content;
pub mod eval;
pub mod foundation;
pub mod render;
pub mod scroll;
pub mod session;
pub mod site;

pub use crate::animation::spring::{SmoothingConfig, SmoothingFilter};
pub use crate::animation::track::{Keyframe, Lerp, Track, evaluate};
pub use crate::choreography::SceneKind;
pub use crate::choreography::model::{Act, ActKind, Choreography, Driver, ModuleDef, ModuleRole};
pub use crate::content::case_study::{CaseStudy, ContentTable, ProjectPage};
pub use crate::eval::evaluator::{EvaluatedFrame, Evaluator, FrameSample, ModuleTransform};
pub use crate::foundation::core::{OffsetUnit, Progress, Rgba8, Vec2};
pub use crate::foundation::error::{FolioError, FolioResult};
pub use crate::render::sink::{CssSink, InMemorySink, TransformSink};
pub use crate::scroll::region::{ElementLayout, ScrollOffsets, TrackedRegion};
pub use crate::scroll::source::ProgressSource;
pub use crate::session::scroll_session::{FrameOutcome, ScrollSession, ScrollSessionOpts};
pub use crate::site::cursor::CursorFollower;
pub use crate::site::nav::{NavTarget, Navigator};
