use crate::choreography::model::{Choreography, Driver, GridSlot, ModuleDef};
use crate::foundation::core::{OffsetUnit, Progress, Vec2};
use crate::foundation::error::FolioResult;
use crate::render::sink::TransformSink;

/// Resolved visual transform of one module at one progress sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ModuleTransform {
    /// Grid placement the transform is applied on top of.
    pub slot: GridSlot,
    /// `(translateX, translateY)` in `unit`.
    pub translate: Vec2,
    /// Unit of `translate`.
    pub unit: OffsetUnit,
    /// Opacity, clamped to `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation around the vertical axis, in degrees.
    pub rotate_y_deg: f64,
    /// Stacking order.
    pub z_index: i32,
}

impl ModuleTransform {
    /// Full-slot transform with no offset, full opacity and unit scale.
    pub fn identity(unit: OffsetUnit, z_index: i32) -> Self {
        Self {
            slot: GridSlot::full(),
            translate: Vec2::ZERO,
            unit,
            opacity: 1.0,
            scale: 1.0,
            rotate_y_deg: 0.0,
            z_index,
        }
    }

    /// `true` when the module is not painted at all.
    pub fn is_hidden(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// The pair of progress signals taken once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameSample {
    /// Progress straight from the scroll source.
    pub raw: Progress,
    /// Progress after the smoothing filter; equal to `raw` without one.
    pub smoothed: Progress,
}

impl FrameSample {
    /// Sample where both signals agree.
    pub fn direct(progress: Progress) -> Self {
        Self {
            raw: progress,
            smoothed: progress,
        }
    }

    /// Signal selected by `driver`.
    pub fn for_driver(&self, driver: Driver) -> Progress {
        match driver {
            Driver::Smoothed => self.smoothed,
            Driver::Raw => self.raw,
        }
    }
}

/// One module's transform within an [`EvaluatedFrame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedModule {
    /// Module id.
    pub id: String,
    /// Resolved transform.
    pub transform: ModuleTransform,
}

/// Every module of a scene evaluated against a single [`FrameSample`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedFrame {
    /// The sample every module was derived from.
    pub sample: FrameSample,
    /// Modules in paint order.
    pub modules: Vec<EvaluatedModule>,
}

impl EvaluatedFrame {
    /// Transform of the module with `id`.
    pub fn get(&self, id: &str) -> Option<&ModuleTransform> {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .map(|m| &m.transform)
    }
}

/// Evaluate every track of `module` for `sample`.
///
/// Position tracks follow the module's driver; opacity, scale and rotation always follow the
/// smoothed signal.
pub fn evaluate_module(module: &ModuleDef, sample: FrameSample) -> ModuleTransform {
    let pos = sample.for_driver(module.position_driver).get();
    let p = sample.smoothed.get();
    let t = &module.tracks;
    ModuleTransform {
        slot: module.slot,
        translate: Vec2::new(t.x.evaluate(pos), t.y.evaluate(pos)),
        unit: module.unit,
        opacity: t.opacity.evaluate(p).clamp(0.0, 1.0),
        scale: t.scale.evaluate(p),
        rotate_y_deg: t.rotate_y.evaluate(p),
        z_index: module.z_index,
    }
}

/// Pull-based evaluation of a whole choreography.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate every module of `scene` from one sample.
    #[tracing::instrument(skip(scene), fields(scene = %scene.name))]
    pub fn eval_frame(scene: &Choreography, sample: FrameSample) -> EvaluatedFrame {
        let modules = scene
            .modules
            .iter()
            .map(|m| EvaluatedModule {
                id: m.id.clone(),
                transform: evaluate_module(m, sample),
            })
            .collect();
        EvaluatedFrame { sample, modules }
    }

    /// Evaluate `scene` and write every transform to `sink` as one frame.
    pub fn bind(
        scene: &Choreography,
        sample: FrameSample,
        sink: &mut dyn TransformSink,
    ) -> FolioResult<EvaluatedFrame> {
        let frame = Self::eval_frame(scene, sample);
        sink.begin_frame(sample)?;
        for m in &frame.modules {
            sink.apply(&m.id, &m.transform)?;
        }
        sink.end_frame()?;
        Ok(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
