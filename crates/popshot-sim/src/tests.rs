//! Tests for gesture classification, the per-frame systems and the
//! frame orchestrator.

use popshot_core::config::{GestureConfig, SimConfig};
use popshot_core::enums::*;
use popshot_core::events::SimEvent;
use popshot_core::landmarks::*;
use popshot_core::render::{DrawCommand, DrawList};
use popshot_core::types::{Position, Viewport};

use crate::engine::FrameOrchestrator;
use crate::gesture::{self, Classification, GestureClassifier};
use crate::store::EntityStore;
use crate::systems::{cleanup, collision, movement};

// ---- Helpers ----

fn test_config() -> SimConfig {
    SimConfig {
        viewport: Viewport::new(800.0, 600.0),
        ..Default::default()
    }
}

fn hand(
    wrist: (f64, f64),
    thumb: (f64, f64),
    index: (f64, f64),
    middle: (f64, f64),
) -> HandLandmarks {
    let mut points = vec![Landmark::new(0.5, 0.9); LANDMARK_COUNT];
    points[WRIST] = Landmark::new(wrist.0, wrist.1);
    points[THUMB_TIP] = Landmark::new(thumb.0, thumb.1);
    points[INDEX_TIP] = Landmark::new(index.0, index.1);
    points[MIDDLE_TIP] = Landmark::new(middle.0, middle.1);
    HandLandmarks::new(points)
}

/// Thumb on index tip, middle tip far away.
fn index_pinch(wrist: (f64, f64)) -> HandLandmarks {
    hand(wrist, (0.4, 0.4), (0.4, 0.4), (0.7, 0.1))
}

/// Thumb on middle tip, index tip far away.
fn middle_pinch(wrist: (f64, f64)) -> HandLandmarks {
    hand(wrist, (0.4, 0.4), (0.7, 0.1), (0.4, 0.4))
}

fn open_hand(wrist: (f64, f64)) -> HandLandmarks {
    hand(wrist, (0.3, 0.5), (0.5, 0.2), (0.6, 0.2))
}

fn frame(h: HandLandmarks) -> HandFrame {
    HandFrame::single(h)
}

fn engine(config: SimConfig) -> FrameOrchestrator {
    FrameOrchestrator::new(config).unwrap()
}

// ---- Gesture classification ----

#[test]
fn test_index_pinch_spawns_target() {
    let c = gesture::classify(
        &frame(index_pinch((0.5, 0.5))),
        Viewport::new(800.0, 600.0),
        &GestureConfig::default(),
    );
    assert_eq!(c.action, Action::SpawnTarget);
    assert_eq!(c.anchor, Some(Position::new(400.0, 300.0)));
}

#[test]
fn test_middle_pinch_spawns_projectile() {
    let c = gesture::classify(
        &frame(middle_pinch((0.5, 0.5))),
        Viewport::default(),
        &GestureConfig::default(),
    );
    assert_eq!(c.action, Action::SpawnProjectile);
}

#[test]
fn test_both_pinches_prefer_target() {
    let both = hand((0.5, 0.5), (0.4, 0.4), (0.4, 0.4), (0.4, 0.4));
    let c = gesture::classify(&frame(both), Viewport::default(), &GestureConfig::default());
    assert_eq!(c.action, Action::SpawnTarget);
}

#[test]
fn test_open_hand_is_no_action_but_moves_anchor() {
    let c = gesture::classify(
        &frame(open_hand((0.25, 0.5))),
        Viewport::new(800.0, 600.0),
        &GestureConfig::default(),
    );
    assert_eq!(c.action, Action::None);
    assert_eq!(c.anchor, Some(Position::new(200.0, 300.0)));
}

#[test]
fn test_threshold_is_strict() {
    let config = GestureConfig {
        pinch_threshold: 0.25,
        ..Default::default()
    };
    let at_threshold = hand((0.5, 0.5), (0.5, 0.5), (0.75, 0.5), (0.5, 0.0));
    let c = gesture::classify(&frame(at_threshold), Viewport::default(), &config);
    assert_eq!(c.action, Action::None);
}

#[test]
fn test_no_hands_keeps_anchor() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut classifier = GestureClassifier::new(GestureConfig::default(), viewport);
    assert_eq!(classifier.anchor(), Position::new(400.0, 300.0));

    classifier.classify(&frame(open_hand((0.25, 0.75))));
    assert_eq!(classifier.anchor(), Position::new(200.0, 450.0));

    let action = classifier.classify(&HandFrame::empty());
    assert_eq!(action, Action::None);
    assert_eq!(
        classifier.anchor(),
        Position::new(200.0, 450.0),
        "Anchor should stick to the last tracked wrist"
    );
}

#[test]
fn test_multiple_hands_first_selected() {
    let frame = HandFrame {
        hands: vec![index_pinch((0.1, 0.1)), middle_pinch((0.9, 0.9))],
    };
    let viewport = Viewport::new(100.0, 100.0);

    let first = gesture::classify(&frame, viewport, &GestureConfig::default());
    assert_eq!(first.action, Action::SpawnTarget);
    assert_eq!(first.anchor, Some(Position::new(10.0, 10.0)));

    let last_config = GestureConfig {
        hand_selection: HandSelection::Last,
        ..Default::default()
    };
    let last = gesture::classify(&frame, viewport, &last_config);
    assert_eq!(last.action, Action::SpawnProjectile);
    assert_eq!(last.anchor, Some(Position::new(90.0, 90.0)));
}

#[test]
fn test_malformed_hand_fails_closed() {
    let truncated = HandLandmarks::new(vec![Landmark::new(0.4, 0.4); 5]);
    let frame = HandFrame {
        hands: vec![truncated, index_pinch((0.9, 0.9))],
    };
    let mut classifier = GestureClassifier::new(GestureConfig::default(), Viewport::default());
    let before = classifier.anchor();

    assert_eq!(classifier.classify(&frame), Action::None);
    assert_eq!(classifier.anchor(), before);

    let mut nan_hand = index_pinch((0.5, 0.5));
    nan_hand.points[WRIST].y = f64::INFINITY;
    assert_eq!(classifier.classify(&HandFrame::single(nan_hand)), Action::None);
    assert_eq!(classifier.anchor(), before);
}

// ---- Movement ----

#[test]
fn test_movement_law() {
    let config = test_config();
    let mut store = EntityStore::new();
    let t = store.spawn_target(Position::new(100.0, 500.0), 20.0);
    let p = store.spawn_projectile(Position::new(50.0, 250.0));

    movement::run(&mut store, &config);

    assert_eq!(store.position(t), Some(Position::new(100.0, 498.0)));
    assert_eq!(store.position(p), Some(Position::new(50.0, 240.0)));
}

// ---- Cleanup ----

#[test]
fn test_target_despawn_threshold() {
    let config = test_config();
    let mut store = EntityStore::new();
    let leaving = store.spawn_target(Position::new(10.0, -19.0), 20.0);
    let edge = store.spawn_target(Position::new(20.0, -18.0), 20.0);
    let mut buffer = Vec::new();
    let mut events = Vec::new();

    movement::run(&mut store, &config);
    cleanup::run(&mut store, &config, &mut buffer, &mut events);

    // -21 < -20: gone. -20 is not < -20: stays.
    assert!(!store.contains(leaving));
    assert!(store.contains(edge));
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        SimEvent::Despawned {
            kind: EntityKind::Target,
            ..
        }
    ));

    for _ in 0..5 {
        movement::run(&mut store, &config);
        cleanup::run(&mut store, &config, &mut buffer, &mut events);
    }
    assert_eq!(store.target_count(), 0);
}

#[test]
fn test_projectile_despawn_threshold() {
    let config = test_config();
    let mut store = EntityStore::new();
    let p = store.spawn_projectile(Position::new(10.0, -9.0));
    let mut buffer = Vec::new();
    let mut events = Vec::new();

    movement::run(&mut store, &config);
    cleanup::run(&mut store, &config, &mut buffer, &mut events);
    assert!(store.contains(p), "y = -19 is still within the height margin");

    movement::run(&mut store, &config);
    cleanup::run(&mut store, &config, &mut buffer, &mut events);
    assert!(!store.contains(p));
}

#[test]
fn test_cleanup_removes_adjacent_entities() {
    let config = test_config();
    let mut store = EntityStore::new();
    for i in 0..4 {
        store.spawn_target(Position::new(i as f64 * 50.0, -30.0), 20.0);
    }
    let keeper = store.spawn_target(Position::new(300.0, 100.0), 20.0);
    let mut buffer = Vec::new();
    let mut events = Vec::new();

    cleanup::run(&mut store, &config, &mut buffer, &mut events);

    assert_eq!(store.target_count(), 1);
    assert!(store.contains(keeper));
    assert!(buffer.is_empty());
}

// ---- Collision ----

#[test]
fn test_collision_inside_radius_removes_both() {
    let mut store = EntityStore::new();
    let t = store.spawn_target(Position::new(100.0, 100.0), 20.0);
    let p = store.spawn_projectile(Position::new(112.0, 116.0)); // 12-16-20 triangle
    let mut buffer = Vec::new();
    let mut events = Vec::new();

    // Exactly on the radius: no collision.
    assert_eq!(collision::run(&mut store, &mut buffer, &mut events), 0);
    assert!(store.contains(t));
    assert!(store.contains(p));

    let q = store.spawn_projectile(Position::new(105.0, 95.0));
    assert_eq!(collision::run(&mut store, &mut buffer, &mut events), 1);
    assert!(!store.contains(t));
    assert!(!store.contains(q));
    assert!(store.contains(p), "Projectile outside the radius is unaffected");
    assert_eq!(events.len(), 1);
}

#[test]
fn test_projectile_between_two_targets_removes_first() {
    let mut store = EntityStore::new();
    let first = store.spawn_target(Position::new(390.0, 300.0), 20.0);
    let second = store.spawn_target(Position::new(410.0, 300.0), 20.0);
    let p = store.spawn_projectile(Position::new(400.0, 300.0));
    let mut buffer = Vec::new();
    let mut events = Vec::new();

    let pairs = collision::run(&mut store, &mut buffer, &mut events);

    assert_eq!(pairs, 1);
    assert!(!store.contains(first), "Store-order first target is consumed");
    assert!(store.contains(second));
    assert!(!store.contains(p));
}

#[test]
fn test_target_between_two_projectiles_consumes_one() {
    let mut store = EntityStore::new();
    let t = store.spawn_target(Position::new(400.0, 300.0), 20.0);
    let first = store.spawn_projectile(Position::new(400.0, 290.0));
    let second = store.spawn_projectile(Position::new(400.0, 310.0));
    let mut buffer = Vec::new();
    let mut events = Vec::new();

    assert_eq!(collision::run(&mut store, &mut buffer, &mut events), 1);
    assert!(!store.contains(t));
    assert!(!store.contains(first));
    assert!(store.contains(second));
}

#[test]
fn test_adjacent_collisions_none_skipped() {
    // Consecutive colliding pairs: removing one must not hide the next.
    let mut store = EntityStore::new();
    for i in 0..5 {
        store.spawn_target(Position::new(i as f64 * 100.0, 200.0), 20.0);
    }
    for i in 0..5 {
        store.spawn_projectile(Position::new(i as f64 * 100.0, 205.0));
    }
    let mut buffer = Vec::new();
    let mut events = Vec::new();

    assert_eq!(collision::run(&mut store, &mut buffer, &mut events), 5);
    assert_eq!(store.target_count(), 0);
    assert_eq!(store.projectile_count(), 0);
}

// ---- Store ----

#[test]
fn test_store_order_survives_despawn() {
    let mut store = EntityStore::new();
    let a = store.spawn_target(Position::new(1.0, 0.0), 20.0);
    let b = store.spawn_target(Position::new(2.0, 0.0), 20.0);
    let c = store.spawn_target(Position::new(3.0, 0.0), 20.0);
    store.despawn(a);
    let d = store.spawn_target(Position::new(4.0, 0.0), 20.0);

    let order: Vec<_> = store.targets().iter().map(|t| t.entity).collect();
    assert_eq!(order, vec![b, c, d]);
    assert!(!store.despawn(a), "Double despawn is a no-op");
}

// ---- Orchestrator ----

#[test]
fn test_invalid_config_rejected() {
    let mut config = test_config();
    config.target.speed = 0.0;
    assert!(FrameOrchestrator::new(config).is_err());
}

#[test]
fn test_hold_target_gesture_five_frames() {
    let mut engine = engine(test_config());
    let mut surface = DrawList::new();
    let pinch = frame(index_pinch((0.5, 0.5)));

    for _ in 0..5 {
        let snap = engine.tick(&pinch, &mut surface);
        assert_eq!(snap.action, Action::SpawnTarget);
    }

    assert_eq!(engine.store().target_count(), 5);
    assert_eq!(engine.store().projectile_count(), 0);
}

#[test]
fn test_spawned_target_on_bottom_edge_and_moves_same_frame() {
    let mut engine = engine(test_config());
    let mut surface = DrawList::new();

    let snap = engine.tick(&frame(index_pinch((0.5, 0.5))), &mut surface);

    assert_eq!(snap.targets.len(), 1);
    let target = &snap.targets[0];
    assert!(target.position.x >= 0.0 && target.position.x < 800.0);
    assert_eq!(target.position.y, 600.0 - 2.0);
    assert_eq!(target.radius, 20.0);
    assert!(matches!(
        snap.events[0],
        SimEvent::TargetSpawned { position } if position.y == 600.0
    ));
}

#[test]
fn test_projectile_spawns_at_anchor() {
    let mut engine = engine(test_config());
    let mut surface = DrawList::new();

    let snap = engine.tick(&frame(middle_pinch((0.25, 0.5))), &mut surface);

    assert_eq!(snap.anchor, Position::new(200.0, 300.0));
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.projectiles[0].position, Position::new(200.0, 290.0));
}

#[test]
fn test_projectile_uses_sticky_anchor_without_hand() {
    let mut engine = engine(test_config());
    let mut surface = DrawList::new();

    engine.tick(&frame(open_hand((0.1, 0.2))), &mut surface);
    engine.tick(&HandFrame::empty(), &mut surface);
    // Classification from elsewhere carrying an action but no anchor.
    let snap = engine.tick_classified(
        Classification {
            action: Action::SpawnProjectile,
            anchor: None,
        },
        &mut surface,
    );

    assert_eq!(snap.anchor, Position::new(80.0, 120.0));
    assert_eq!(snap.projectiles[0].position, Position::new(80.0, 110.0));
}

#[test]
fn test_action_not_carried_across_frames() {
    let mut engine = engine(test_config());
    let mut surface = DrawList::new();

    engine.tick(&frame(index_pinch((0.5, 0.5))), &mut surface);
    let snap = engine.tick(&HandFrame::empty(), &mut surface);

    assert_eq!(snap.action, Action::None);
    assert_eq!(engine.action(), Action::None);
    assert_eq!(engine.store().target_count(), 1);
}

#[test]
fn test_render_reflects_previous_frame() {
    let mut engine = engine(test_config());
    let mut surface = DrawList::new();
    let pinch = frame(index_pinch((0.5, 0.5)));

    engine.tick(&pinch, &mut surface);
    assert_eq!(surface.commands, vec![DrawCommand::Clear]);

    let snap = engine.tick(&HandFrame::empty(), &mut surface);
    assert_eq!(surface.circle_count(), 1);
    match &surface.commands[1] {
        DrawCommand::FillCircle { center, radius, .. } => {
            assert_eq!(center.y, 598.0, "Drawn at end-of-previous-frame position");
            assert_eq!(*radius, 20.0);
        }
        other => panic!("Expected a circle, got {other:?}"),
    }
    assert_eq!(snap.targets[0].position.y, 596.0);
}

#[test]
fn test_render_projectile_rect() {
    let mut engine = engine(test_config());
    engine
        .store_mut()
        .spawn_projectile(Position::new(100.0, 200.0));
    let mut surface = DrawList::new();

    engine.render(&mut surface);

    assert_eq!(
        surface.commands[1],
        DrawCommand::FillRect {
            origin: Position::new(98.0, 200.0),
            width: 4.0,
            height: 20.0,
            color: engine.config().projectile.color,
        }
    );
}

#[test]
fn test_fresh_projectile_collides_same_frame() {
    let mut engine = engine(test_config());
    // Anchor lands on (400, 300); target 8 px above it rises to 290 with the projectile.
    let target = engine
        .store_mut()
        .spawn_target(Position::new(400.0, 292.0), 20.0);
    let mut surface = DrawList::new();

    let snap = engine.tick(&frame(middle_pinch((0.5, 0.5))), &mut surface);

    assert!(!engine.store().contains(target));
    assert_eq!(snap.collisions(), 1);
    assert!(snap.targets.is_empty());
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_population_cap_suppresses_spawns() {
    let mut config = test_config();
    config.limits.max_targets = Some(3);
    let mut engine = engine(config);
    let mut surface = DrawList::new();
    let pinch = frame(index_pinch((0.5, 0.5)));

    let mut suppressed = 0;
    for _ in 0..5 {
        let snap = engine.tick(&pinch, &mut surface);
        suppressed += snap
            .events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    SimEvent::SpawnSuppressed {
                        kind: EntityKind::Target,
                        reason: SuppressReason::PopulationCap,
                    }
                )
            })
            .count();
    }

    assert_eq!(engine.store().target_count(), 3);
    assert_eq!(suppressed, 2);
}

#[test]
fn test_unbounded_population() {
    let mut config = test_config();
    config.limits.max_projectiles = None;
    let mut engine = engine(config);
    let mut surface = DrawList::new();
    // Anchor low in the viewport so nothing leaves the top during the run.
    let pinch = frame(middle_pinch((0.5, 0.99)));

    for _ in 0..50 {
        engine.tick(&pinch, &mut surface);
    }
    assert_eq!(engine.store().projectile_count(), 50);
}

#[test]
fn test_cooldown_spaces_spawns() {
    let mut config = test_config();
    config.limits.cooldown_frames = 2;
    let mut engine = engine(config);
    let mut surface = DrawList::new();
    let pinch = frame(index_pinch((0.5, 0.5)));

    for _ in 0..6 {
        engine.tick(&pinch, &mut surface);
    }

    // Spawns on ticks 0 and 3; ticks 1, 2, 4, 5 cool down.
    assert_eq!(engine.store().target_count(), 2);
}

#[test]
fn test_cooldown_is_per_kind() {
    let mut config = test_config();
    config.limits.cooldown_frames = 10;
    let mut engine = engine(config);
    let mut surface = DrawList::new();

    engine.tick(&frame(index_pinch((0.5, 0.5))), &mut surface);
    engine.tick(&frame(middle_pinch((0.5, 0.5))), &mut surface);

    assert_eq!(engine.store().target_count(), 1);
    assert_eq!(engine.store().projectile_count(), 1);
}

// ---- Determinism ----

fn scripted_frame(i: usize) -> HandFrame {
    let wrist = ((i % 10) as f64 / 10.0, 0.8);
    match i % 4 {
        0 => frame(index_pinch(wrist)),
        1 => frame(middle_pinch(wrist)),
        2 => frame(open_hand(wrist)),
        _ => HandFrame::empty(),
    }
}

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = engine(test_config());
    let mut engine_b = engine(test_config());
    let mut surface_a = DrawList::new();
    let mut surface_b = DrawList::new();

    for i in 0..300 {
        let hands = scripted_frame(i);
        let snap_a = engine_a.tick(&hands, &mut surface_a);
        let snap_b = engine_b.tick(&hands, &mut surface_b);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
        assert_eq!(surface_a.commands, surface_b.commands);
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = engine(SimConfig {
        seed: 111,
        ..test_config()
    });
    let mut engine_b = engine(SimConfig {
        seed: 222,
        ..test_config()
    });
    let mut surface = DrawList::new();
    let pinch = frame(index_pinch((0.5, 0.5)));

    let snap_a = engine_a.tick(&pinch, &mut surface);
    let snap_b = engine_b.tick(&pinch, &mut surface);
    assert_ne!(
        snap_a.targets[0].position.x, snap_b.targets[0].position.x,
        "Different seeds should place targets differently"
    );
}

#[test]
fn test_independent_instances() {
    let mut engine_a = engine(test_config());
    let mut engine_b = engine(test_config());
    let mut surface = DrawList::new();

    for _ in 0..3 {
        engine_a.tick(&frame(index_pinch((0.5, 0.5))), &mut surface);
    }
    engine_b.tick(&HandFrame::empty(), &mut surface);

    assert_eq!(engine_a.store().target_count(), 3);
    assert_eq!(engine_b.store().target_count(), 0);
    assert_eq!(engine_a.time().tick, 3);
    assert_eq!(engine_b.time().tick, 1);
}
