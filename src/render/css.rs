//! Inline-style rendering of module transforms.

use crate::choreography::model::GridSlot;
use crate::eval::evaluator::ModuleTransform;

/// Format a number with at most four decimals and no trailing zeros.
pub fn css_number(v: f64) -> String {
    let mut s = format!("{v:.4}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_owned();
    }
    s
}

/// Absolute placement within the container. An auto height is left out.
pub fn css_placement(slot: &GridSlot) -> String {
    let mut s = format!(
        "left: {}%; top: {}%; width: {}%",
        css_number(slot.left),
        css_number(slot.top),
        css_number(slot.width),
    );
    if let Some(h) = slot.height {
        s.push_str(&format!("; height: {}%", css_number(h)));
    }
    s
}

/// CSS `transform` value for `t`.
pub fn css_transform(t: &ModuleTransform) -> String {
    let unit = t.unit.css_suffix();
    format!(
        "translateX({}{unit}) translateY({}{unit}) scale({}) rotateY({}deg)",
        css_number(t.translate.x),
        css_number(t.translate.y),
        css_number(t.scale),
        css_number(t.rotate_y_deg),
    )
}

/// Full inline style: placement, transform, opacity and stacking order.
pub fn css_style(t: &ModuleTransform) -> String {
    format!(
        "{}; transform: {}; opacity: {}; z-index: {}",
        css_placement(&t.slot),
        css_transform(t),
        css_number(t.opacity),
        t.z_index
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/css.rs"]
mod tests;
