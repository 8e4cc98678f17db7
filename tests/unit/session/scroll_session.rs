use super::*;
use crate::render::sink::InMemorySink;
use crate::scroll::region::{ScrollOffsets, TrackedRegion};

const FRAME: f64 = 1.0 / 60.0;

fn session(opts: ScrollSessionOpts) -> ScrollSession {
    let scene = SceneKind::Hero.build().unwrap();
    let source = ProgressSource::new(TrackedRegion::new(1000.0, 2000.0).unwrap());
    ScrollSession::new(scene, source, opts).unwrap()
}

#[test]
fn frames_are_refused_unless_running() {
    let mut s = session(ScrollSessionOpts::direct());
    let mut sink = InMemorySink::new();
    assert!(s.frame(FRAME, &mut sink).is_err());

    s.start().unwrap();
    s.frame(FRAME, &mut sink).unwrap();
    s.stop();
    let err = s.frame(FRAME, &mut sink).unwrap_err();
    assert!(err.to_string().contains("stopped"));
    assert_eq!(sink.frames().len(), 1);
}

#[test]
fn stopped_session_ignores_input_and_cannot_restart() {
    let mut s = session(ScrollSessionOpts::direct());
    s.start().unwrap();
    s.stop();
    assert!(!s.on_scroll(1500.0));
    assert!(!s.on_resize(ElementLayout {
        top: 0.0,
        height: 2000.0,
        viewport_height: 800.0,
    }));
    assert_eq!(s.source().scroll(), 1000.0);
    assert!(s.start().is_err());
    assert_eq!(s.state(), SessionState::Stopped);
}

#[test]
fn direct_session_follows_raw_progress() {
    let mut s = session(ScrollSessionOpts::direct());
    let mut sink = InMemorySink::new();
    s.start().unwrap();
    assert!(s.on_scroll(1500.0));
    let out = s.frame(FRAME, &mut sink).unwrap();
    assert_eq!(out.progress, Progress::new(0.5));
    assert_eq!(out.smoothed, out.progress);
    assert!(out.settled);
    assert!(out.applied);
}

#[test]
fn smoothed_session_lags_then_settles_exactly() {
    let mut s = session(ScrollSessionOpts::default());
    let mut sink = InMemorySink::new();
    s.start().unwrap();
    s.on_scroll(2000.0);

    let mut prev = 0.0;
    let mut settled_at = None;
    for i in 0..600 {
        let out = s.frame(FRAME, &mut sink).unwrap();
        assert_eq!(out.progress, Progress::END);
        let v = out.smoothed.get();
        assert!(v >= prev && v <= 1.0, "frame {i}: {v} after {prev}");
        prev = v;
        if out.settled {
            settled_at = Some(i);
            break;
        }
    }
    assert!(settled_at.is_some_and(|i| i > 10));
    assert_eq!(prev, 1.0);
}

#[test]
fn start_rests_filter_on_current_progress() {
    let mut s = session(ScrollSessionOpts::default());
    let mut sink = InMemorySink::new();
    assert!(s.on_scroll(1500.0));
    s.start().unwrap();
    let out = s.frame(FRAME, &mut sink).unwrap();
    assert_eq!(out.smoothed, Progress::new(0.5));
    assert!(out.settled);
}

#[test]
fn unchanged_samples_are_elided() {
    let mut s = session(ScrollSessionOpts::direct());
    let mut sink = InMemorySink::new();
    s.start().unwrap();
    s.on_scroll(1200.0);
    assert!(s.frame(FRAME, &mut sink).unwrap().applied);
    assert!(!s.frame(FRAME, &mut sink).unwrap().applied);
    s.on_scroll(1300.0);
    assert!(s.frame(FRAME, &mut sink).unwrap().applied);

    assert_eq!(sink.frames().len(), 2);
    assert_eq!(
        s.stats(),
        SessionStats {
            frames_total: 3,
            frames_applied: 2,
            frames_elided: 1,
        }
    );
}

#[test]
fn every_transform_in_a_frame_shares_one_sample() {
    let mut s = session(ScrollSessionOpts::default());
    let mut sink = InMemorySink::new();
    s.start().unwrap();
    s.on_scroll(1700.0);
    let out = s.frame(FRAME, &mut sink).unwrap();
    let captured = sink.last().unwrap();
    assert_eq!(captured.sample.raw, out.progress);
    assert_eq!(captured.sample.smoothed, out.smoothed);
    assert_eq!(s.last_sample(), Some(captured.sample));
}

#[test]
fn resize_recomputes_region_from_layout() {
    let layout = ElementLayout {
        top: 800.0,
        height: 4000.0,
        viewport_height: 1000.0,
    };
    let mut s =
        ScrollSession::for_scene(SceneKind::Hero, layout, ScrollSessionOpts::direct()).unwrap();
    let mut sink = InMemorySink::new();
    s.start().unwrap();
    s.on_scroll(2300.0);
    assert_eq!(s.frame(FRAME, &mut sink).unwrap().progress, Progress::new(0.5));

    assert!(s.on_resize(ElementLayout {
        height: 2000.0,
        ..layout
    }));
    assert_eq!(s.source().region(), TrackedRegion::new(800.0, 1800.0).unwrap());
    assert_eq!(s.frame(FRAME, &mut sink).unwrap().progress, Progress::END);
}

#[test]
fn resize_uses_scene_offsets_for_a_plain_source() {
    let scene = SceneKind::About.build().unwrap();
    let source = ProgressSource::new(TrackedRegion::new(0.0, 1000.0).unwrap());
    let mut s = ScrollSession::new(scene, source, ScrollSessionOpts::direct()).unwrap();
    assert_eq!(s.source().offsets(), ScrollOffsets::PASS_THROUGH);

    let mut sink = InMemorySink::new();
    s.start().unwrap();
    assert!(s.on_resize(ElementLayout {
        top: 2000.0,
        height: 1000.0,
        viewport_height: 800.0,
    }));
    assert_eq!(s.source().region(), TrackedRegion::new(1200.0, 3000.0).unwrap());

    s.on_scroll(1650.0);
    assert_eq!(s.frame(FRAME, &mut sink).unwrap().progress, Progress::new(0.25));
}
