use super::*;
use crate::choreography::model::GridSlot;
use crate::foundation::core::{OffsetUnit, Vec2};

#[test]
fn numbers_drop_trailing_zeros() {
    assert_eq!(css_number(1.0), "1");
    assert_eq!(css_number(-150.0), "-150");
    assert_eq!(css_number(0.25), "0.25");
    assert_eq!(css_number(1.0 / 3.0), "0.3333");
    assert_eq!(css_number(-0.00001), "0");
}

#[test]
fn style_renders_every_property() {
    let t = ModuleTransform {
        slot: GridSlot::new(0.0, 0.0, 48.0, 64.0),
        translate: Vec2::new(-50.0, 120.0),
        unit: OffsetUnit::Percent,
        opacity: 0.5,
        scale: 1.3,
        rotate_y_deg: -15.0,
        z_index: 30,
    };
    assert_eq!(
        css_style(&t),
        "left: 0%; top: 0%; width: 48%; height: 64%; \
         transform: translateX(-50%) translateY(120%) scale(1.3) rotateY(-15deg); \
         opacity: 0.5; z-index: 30"
    );
}

#[test]
fn pixel_offsets_use_px() {
    let t = ModuleTransform {
        translate: Vec2::new(0.0, 100.0),
        ..ModuleTransform::identity(OffsetUnit::Pixels, 10)
    };
    assert_eq!(
        css_transform(&t),
        "translateX(0px) translateY(100px) scale(1) rotateY(0deg)"
    );
}

#[test]
fn auto_height_slot_omits_height() {
    assert_eq!(
        css_placement(&GridSlot::auto_height(55.0, 50.0, 40.0)),
        "left: 55%; top: 50%; width: 40%"
    );
    assert_eq!(
        css_placement(&GridSlot::full()),
        "left: 0%; top: 0%; width: 100%; height: 100%"
    );
}
