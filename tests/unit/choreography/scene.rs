use super::*;

#[test]
fn every_builtin_scene_builds_and_validates() {
    for kind in SceneKind::ALL {
        let c = kind.build().unwrap();
        assert_eq!(c.name, kind.name());
        assert!(!c.modules.is_empty());
    }
}

#[test]
fn scene_names_round_trip_through_from_str() {
    for kind in SceneKind::ALL {
        assert_eq!(kind.to_string().parse::<SceneKind>().unwrap(), kind);
    }
    assert!("footer".parse::<SceneKind>().is_err());
}

#[test]
fn showcase_strip_pans_from_one_to_minus_seventy_five_percent() {
    let c = SceneKind::Showcase.build().unwrap();
    let strip = c.module(sections::PROJECT_STRIP).unwrap();
    assert_eq!(strip.tracks.x.evaluate(0.0), 1.0);
    assert_eq!(strip.tracks.x.evaluate(1.0), -75.0);
    assert_eq!(strip.tracks.x.evaluate(0.5), -37.0);
}

#[test]
fn about_uses_pass_through_offsets() {
    let c = SceneKind::About.build().unwrap();
    assert_eq!(c.offsets, crate::scroll::region::ScrollOffsets::PASS_THROUGH);
    let copy = c.module(sections::ABOUT_COPY).unwrap();
    assert_eq!(copy.tracks.y.evaluate(0.5), 0.0);
}
