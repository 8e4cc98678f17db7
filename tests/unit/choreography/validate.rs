use super::*;
use crate::choreography::model::GridSlot;
use crate::scroll::region::ScrollOffsets;

fn focus(act: &str) -> ModuleRole {
    ModuleRole::Focus {
        act: act.to_owned(),
    }
}

fn ramp(input: &[f64], output: &[f64]) -> Track<f64> {
    Track::ramp(input, output).unwrap()
}

/// Two focus acts handing over at 0.5.
fn scene(modules: Vec<ModuleDef>) -> Choreography {
    Choreography {
        name: "t".to_owned(),
        offsets: ScrollOffsets::default(),
        acts: vec![
            Act::grid("grid", 0.0, 0.2),
            Act::focus("a", 0.2, 0.3, 0.5),
            Act::focus("b", 0.5, 0.6, 1.0),
        ],
        modules,
        parallax_limit: 100.0,
    }
}

fn module_a() -> ModuleDef {
    ModuleDef::new("a", focus("a"), GridSlot::full())
        .x(ramp(&[0.0, 0.5, 0.6, 1.0], &[0.0, 0.0, -150.0, -150.0]))
        .opacity(ramp(&[0.0, 0.2, 0.5, 0.6, 1.0], &[0.2, 1.0, 1.0, 0.0, 0.0]))
        .rotate_y(ramp(&[0.0, 0.2, 0.3, 1.0], &[0.0, 0.0, 5.0, 5.0]))
}

fn module_b() -> ModuleDef {
    ModuleDef::new("b", focus("b"), GridSlot::full())
        .opacity(ramp(&[0.0, 0.2, 0.3, 0.5, 0.6, 1.0], &[0.2, 1.0, 0.0, 0.0, 1.0, 1.0]))
}

#[test]
fn well_formed_scene_passes() {
    let c = scene(vec![module_a(), module_b()]);
    assert!(check_choreography(&c).is_empty(), "{:?}", check_choreography(&c));
    assert!(validate_choreography(&c).is_ok());
}

#[test]
fn partial_domain_track_is_reported() {
    let m = module_b().scale(ramp(&[0.5, 0.6], &[1.0, 1.3]));
    let v = check_choreography(&scene(vec![module_a(), m]));
    assert!(v.iter().any(|s| s.contains("b.scale: breakpoints must span 0..1")));
}

#[test]
fn lingering_opacity_breaks_single_focus() {
    let m = module_b().opacity(ramp(&[0.0, 0.2, 0.3, 1.0], &[0.2, 1.0, 0.1, 1.0]));
    let v = check_choreography(&scene(vec![module_a(), m]));
    assert!(v.iter().any(|s| s == "b.opacity must be 0 while 'a' holds"), "{v:?}");
}

#[test]
fn short_exit_is_reported() {
    let m = module_a().x(ramp(&[0.0, 0.5, 0.6, 1.0], &[0.0, 0.0, -100.0, -100.0]));
    let v = check_choreography(&scene(vec![m, module_b()]));
    assert!(v.iter().any(|s| s.starts_with("a must be off-canvas")), "{v:?}");
}

#[test]
fn drifting_during_hold_is_reported() {
    let m = module_a().y(ramp(&[0.0, 0.4, 1.0], &[0.0, 10.0, 10.0]));
    let v = check_choreography(&scene(vec![m, module_b()]));
    assert!(v.iter().any(|s| s.contains("a.y must hold its dock position")), "{v:?}");
}

#[test]
fn rotation_outside_transition_window_is_reported() {
    let m = module_b().rotate_y(ramp(&[0.0, 0.8, 1.0], &[0.0, 0.0, 15.0]));
    let v = check_choreography(&scene(vec![module_a(), m]));
    assert!(v.iter().any(|s| s.contains("b.rotateY changes over 0.8..1")), "{v:?}");
}

#[test]
fn scatter_rules_are_enforced() {
    let good = ModuleDef::new("s", ModuleRole::Scatter, GridSlot::full())
        .driven_by(Driver::Raw)
        .x(ramp(&[0.0, 1.0], &[0.0, -100.0]))
        .opacity(ramp(&[0.0, 0.2, 0.3, 1.0], &[0.2, 1.0, 0.0, 0.0]));
    assert!(check_choreography(&scene(vec![good.clone()])).is_empty());

    let bad = good
        .driven_by(Driver::Smoothed)
        .y(ramp(&[0.0, 1.0], &[0.0, 300.0]))
        .opacity(ramp(&[0.0, 0.2, 1.0], &[0.2, 1.0, 0.1]));
    let v = check_choreography(&scene(vec![bad]));
    assert!(v.iter().any(|s| s.contains("driven by raw progress")));
    assert!(v.iter().any(|s| s.contains("beyond the parallax limit")));
    assert!(v.iter().any(|s| s.contains("s.opacity must be 0 while 'b' holds")));
}

#[test]
fn act_tiling_and_references_are_checked() {
    let mut c = scene(vec![ModuleDef::new("x", focus("missing"), GridSlot::full())]);
    c.acts[2].start = 0.55;
    let v = check_choreography(&c);
    assert!(v.iter().any(|s| s.contains("act 'b' must start where 'a' ends")));
    assert!(v.iter().any(|s| s.contains("focus act 'missing' does not exist")));
}

#[test]
fn duplicate_ids_are_reported() {
    let v = check_choreography(&scene(vec![module_a(), module_a()]));
    assert!(v.iter().any(|s| s == "duplicate module id 'a'"));
    let err = validate_choreography(&scene(vec![module_a(), module_a()])).unwrap_err();
    assert!(err.to_string().contains("choreography 't' is invalid"));
}
