use super::*;
use crate::choreography::model::ActKind;
use crate::choreography::validate::check_choreography;

#[test]
fn hero_satisfies_act_contract() {
    let c = hero().unwrap();
    let v = check_choreography(&c);
    assert!(v.is_empty(), "{v:?}");
}

#[test]
fn acts_partition_unit_range() {
    let c = hero().unwrap();
    let names: Vec<_> = c.acts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, [INTRO, RELIABILITY, SECURITY_ACT, GLOBAL_SCALE]);
    assert_eq!(c.acts[0].kind, ActKind::Grid);
    assert_eq!((c.acts[1].start, c.acts[1].end), (0.15, 0.45));
    assert_eq!((c.acts[2].start, c.acts[2].end), (0.45, 0.75));
    assert_eq!((c.acts[3].start, c.acts[3].end), (0.75, 1.0));
}

#[test]
fn every_track_covers_zero_and_one() {
    let c = hero().unwrap();
    for m in &c.modules {
        for (prop, t) in m.named_tracks() {
            assert!(t.covers_unit_domain(), "{}.{prop}", m.id);
        }
    }
}

#[test]
fn at_most_one_dashboard_module_visible_while_an_act_holds() {
    let c = hero().unwrap();
    for act in c.acts.iter().filter(|a| a.kind == ActKind::Focus) {
        let (s, e) = act.hold_window();
        // The hold end is shared with the next act's start, where the later act owns focus.
        for step in 0..20 {
            let p = s + (e - s) * f64::from(step) / 20.0;
            let visible: Vec<_> = c
                .modules
                .iter()
                .filter(|m| !matches!(m.role, ModuleRole::Overlay))
                .filter(|m| m.tracks.opacity.evaluate(p) > 0.0)
                .map(|m| m.id.as_str())
                .collect();
            assert_eq!(visible.len(), 1, "p={p} visible={visible:?}");
            assert_eq!(c.focus_at(p).map(|m| m.id.as_str()), Some(visible[0]));
        }
    }
}

#[test]
fn intro_shows_the_full_grid() {
    let c = hero().unwrap();
    for id in [GRAPH, SECURITY, GLOBE, USER_STATS, REVENUE, ANALYTICS] {
        let m = c.module(id).unwrap();
        assert_eq!(m.tracks.opacity.evaluate(0.0), 0.2, "{id}");
        assert_eq!(m.tracks.opacity.evaluate(0.15), 1.0, "{id}");
        assert_eq!(m.tracks.x.evaluate(0.0), 0.0, "{id}");
        assert_eq!(m.tracks.y.evaluate(0.0), 0.0, "{id}");
    }
}

#[test]
fn graph_fades_during_security_entry() {
    let c = hero().unwrap();
    let graph = c.module(GRAPH).unwrap();
    let v = graph.tracks.opacity.evaluate(0.5);
    assert!(v > 0.0 && v < 1.0);
    assert_eq!(graph.tracks.opacity.evaluate(0.2), 1.0);
    assert_eq!(graph.tracks.rotate_y.evaluate(0.25), 5.0);
}

#[test]
fn security_docks_then_exits_right() {
    let c = hero().unwrap();
    let s = c.module(SECURITY).unwrap();
    assert_eq!(s.tracks.x.evaluate(0.6), -50.0);
    assert_eq!(s.tracks.y.evaluate(0.6), 120.0);
    assert_eq!(s.tracks.scale.evaluate(0.6), 1.3);
    assert_eq!(s.tracks.rotate_y.evaluate(0.6), -15.0);
    assert_eq!(s.tracks.x.evaluate(0.9), 150.0);
    assert_eq!(s.tracks.opacity.evaluate(0.9), 0.0);
}

#[test]
fn scatter_cards_drift_on_raw_progress() {
    let c = hero().unwrap();
    let m = c.module(ANALYTICS).unwrap();
    assert_eq!(m.position_driver, Driver::Raw);
    assert_eq!(m.unit, OffsetUnit::Pixels);
    assert_eq!(m.tracks.x.evaluate(0.5), -100.0);
    assert_eq!(m.tracks.y.evaluate(1.0), 200.0);
    assert_eq!(m.tracks.opacity.evaluate(0.3), 0.0);
}
