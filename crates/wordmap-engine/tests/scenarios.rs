use glam::Vec2;
use wordmap_engine::*;

fn rec(word: &str, direction: Direction) -> SolvedRecord {
    SolvedRecord::new(word, direction)
}

/// A walk of `n` moves cycling through the four directions, optionally closed
/// by a terminal record.
fn walk(n: usize, seed: u64, terminal: bool) -> Vec<SolvedRecord> {
    let mut pick = Rng::new(seed ^ 0x5EED);
    let mut records: Vec<_> = (0..n)
        .map(|i| {
            let dir = Direction::MOVES[(pick.next_unit() * 4.0) as usize % 4];
            rec(&format!("word{}", i), dir)
        })
        .collect();
    if terminal {
        records.push(rec("final", Direction::Terminal));
    }
    records
}

const SURFACES: [(f32, f32); 5] = [
    (1080.0, 1920.0),
    (400.0, 300.0),
    (150.0, 150.0),
    (25.0, 60.0),
    (3.0, 3.0),
];

#[test]
fn scenario_a_sole_right_move() {
    let mut engine = PathLayoutEngine::with_jitter(LayoutConfig::default(), Rng::new(1));
    engine.on_surface_resize(1000.0, 1000.0);
    engine.set_records(vec![rec("apple", Direction::Right)]);

    let points = engine.points();
    assert_eq!(points.len(), 1);
    assert!((points[0].x - 650.0).abs() < 1e-3);
    assert!((points[0].y - 500.0).abs() < 1e-3);
    assert_eq!(engine.geometry().start(), Some(Vec2::new(500.0, 500.0)));
}

#[test]
fn scenario_b_up_then_terminal() {
    for seed in 0..50 {
        let mut engine = PathLayoutEngine::with_jitter(LayoutConfig::default(), Rng::new(seed));
        engine.on_surface_resize(1000.0, 1000.0);
        engine.set_records(ingest(&[RawRecord::new("a", "Up"), RawRecord::new("b", "마지막")]).unwrap());

        let points = engine.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], points[0]);

        // Up is -90 degrees, deflected by 10-20 degrees either way.
        let step = Vec2::from(points[0]) - Vec2::new(500.0, 500.0);
        assert!((step.length() - 150.0).abs() < 1e-2);
        let deviation = (step.to_angle().to_degrees() + 90.0).abs();
        assert!((10.0 - 1e-2..=20.0 + 1e-2).contains(&deviation), "deviation {}", deviation);
    }
}

#[test]
fn scenario_c_empty_records_draw_nothing() {
    let mut engine = PathLayoutEngine::with_jitter(LayoutConfig::default(), Rng::new(3));
    engine.on_surface_resize(800.0, 800.0);
    engine.set_records(Vec::<SolvedRecord>::new());

    assert!(engine.points().is_empty());
    assert_eq!(engine.geometry().segment_count(), 0);

    let snap = engine.snapshot();
    let mut canvas = MeshCanvas::new();
    let drawn = PathRenderer::new(engine.config()).draw(snap.records(), snap.layout(), &mut canvas);
    assert_eq!(drawn, 0);
    assert_eq!(canvas.vertex_count(), 0);
    assert!(canvas.labels().is_empty());
}

#[test]
fn scenario_d_unknown_direction_rejected() {
    let raw = vec![
        RawRecord::new("alpha", "상단"),
        RawRecord::new("beta", "diagonal"),
        RawRecord::new("gamma", "마지막"),
    ];
    let err = ingest(&raw).unwrap_err();
    assert_eq!(err.index(), 1);
    assert!(matches!(err, ValidationError::UnknownDirection { ref label, .. } if label == "diagonal"));
}

#[test]
fn alignment_and_bounds_hold_across_seeds_and_surfaces() {
    let config = LayoutConfig::default();
    for seed in 0..40 {
        for &(w, h) in &SURFACES {
            for n in [1, 2, 5, 17] {
                let records = walk(n, seed, seed % 2 == 0);
                let layout = compute_layout(&records, w, h, &config, &mut Rng::new(seed));
                let bounds = SafeBounds::new(w, h, &config);

                assert_eq!(layout.points.len(), records.len());
                for p in &layout.points {
                    assert!(bounds.contains(Vec2::from(*p)), "{:?} outside {:?}", p, bounds);
                }
                if bounds.is_collapsed() {
                    for p in &layout.points {
                        let v = Vec2::from(*p);
                        if bounds.min.x == bounds.max.x {
                            assert_eq!(v.x, bounds.min.x);
                        }
                        if bounds.min.y == bounds.max.y {
                            assert_eq!(v.y, bounds.min.y);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn terminal_is_stationary_and_adds_no_segment() {
    for seed in 0..30 {
        let records = walk(6, seed, true);
        let layout = compute_layout(&records, 700.0, 700.0, &LayoutConfig::default(), &mut Rng::new(seed));
        let last = records.len() - 1;
        assert_eq!(layout.points[last], layout.points[last - 1]);
        assert_eq!(layout.geometry.segment_count(), records.len() - 1);
        assert_eq!(layout.geometry.vertices().len(), records.len());
    }
}

#[test]
fn geometry_starts_at_anchor_and_threads_the_points() {
    let records = walk(8, 21, true);
    let layout = compute_layout(&records, 640.0, 480.0, &LayoutConfig::default(), &mut Rng::new(21));
    let vertices = layout.geometry.vertices();

    assert_eq!(vertices[0], Vec2::new(320.0, 240.0));
    for (i, p) in layout.points.iter().take(8).enumerate() {
        assert_eq!(vertices[i + 1], Vec2::from(*p));
    }
}

#[test]
fn unclamped_steps_have_exact_length() {
    let config = LayoutConfig::default();
    for seed in 0..40 {
        let records = walk(12, seed, false);
        let (w, h) = (900.0, 900.0);
        let layout = compute_layout(&records, w, h, &config, &mut Rng::new(seed));
        let bounds = SafeBounds::new(w, h, &config);

        let mut prev = Vec2::new(w / 2.0, h / 2.0);
        for p in &layout.points {
            let next = Vec2::from(*p);
            let strictly_inside = next.x > bounds.min.x
                && next.x < bounds.max.x
                && next.y > bounds.min.y
                && next.y < bounds.max.y;
            if strictly_inside {
                assert!((prev.distance(next) - config.step_distance).abs() < 1e-2);
            }
            prev = next;
        }
    }
}

#[test]
fn each_step_turns_by_ten_to_twenty_degrees() {
    let config = LayoutConfig::default();
    let records: Vec<_> = (0..15).map(|i| rec(&format!("r{}", i), Direction::Right)).collect();
    for seed in 0..20 {
        // Large enough that 15 steps never reach an edge.
        let layout = compute_layout(&records, 10_000.0, 10_000.0, &config, &mut Rng::new(seed));
        let mut prev = Vec2::splat(5000.0);
        let mut prev_heading = 0.0f32;
        for p in &layout.points {
            let next = Vec2::from(*p);
            let heading = (next - prev).to_angle();
            let mut turn = (heading - prev_heading).to_degrees().abs();
            if turn > 180.0 {
                turn = 360.0 - turn;
            }
            assert!((10.0 - 1e-2..=20.0 + 1e-2).contains(&turn), "turn {}", turn);
            prev = next;
            prev_heading = heading;
        }
    }
}

#[test]
fn resize_relayouts_held_records() {
    let mut engine = PathLayoutEngine::with_jitter(LayoutConfig::default(), Rng::new(5));
    engine.set_records(walk(4, 5, true));
    assert!(engine.points().is_empty());

    engine.on_surface_resize(720.0, 1280.0);
    assert_eq!(engine.points().len(), 5);

    engine.on_surface_resize(0.0, 0.0);
    assert!(engine.points().is_empty());
    assert!(engine.geometry().is_empty());
}

#[test]
fn solved_log_feeds_the_engine() {
    let mut log = SolvedLog::new();
    log.record_label("apple", "상단").unwrap();
    log.record_label("banana", "우측").unwrap();
    log.record_label("cherry", "좌측").unwrap();
    log.finish("durian").unwrap();
    assert!(validate(log.records()).is_ok());

    let mut engine = PathLayoutEngine::with_jitter(LayoutConfig::default(), Rng::new(9));
    engine.on_surface_resize(1080.0, 1920.0);
    engine.set_records(log.into_records());
    assert_eq!(engine.points().len(), 4);
    assert_eq!(engine.points()[3], engine.points()[2]);
}
