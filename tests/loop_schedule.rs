use gridloop::{Phase, Player, PlayerConfig, Shape};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn default_player() -> Player {
    Player::new(PlayerConfig::default()).unwrap()
}

#[test]
fn phases_replay_in_order_indefinitely() {
    init_tracing();
    let mut player = default_player();
    player.play().unwrap();

    // ~8 s in small steps covers two full cycles and part of a third.
    for _ in 0..400 {
        player.advance(0.02).unwrap();
    }

    let indices: Vec<usize> = player.events().iter().map(|e| e.phase.index()).collect();
    assert!(indices.len() >= 12);
    for (i, index) in indices.iter().enumerate() {
        assert_eq!(*index, i % 5);
    }
    assert!(player.events().iter().any(|e| e.cycle == 3));
}

#[test]
fn entry_times_follow_the_calibrated_overlaps() {
    let mut player = default_player();
    player.play().unwrap();
    // one large step must reproduce the exact schedule
    player.advance(4.0).unwrap();

    let events = player.events();
    assert!(events.len() >= 6);

    // durations [0.4, 0.4, 0.6, 0.6, 0.8]:
    //   morph ends 0.4; grid +0.5*0.4; diagonals +0.5*0.6; inset +0.8*0.6;
    //   rings finish 0.88 after phase 4 begins, restart 0.8 later.
    let expected = [0.0, 0.4, 0.6, 0.9, 1.38, 3.06];
    for (event, at) in events.iter().zip(expected) {
        assert!(
            approx(event.at, at),
            "expected phase {:?} at {at}, got {}",
            event.phase,
            event.at
        );
    }
    assert_eq!(events[5].phase, Phase::CornerMorph);
    assert_eq!(events[5].cycle, 2);
}

#[test]
fn rings_are_staggered_with_shrinking_durations() {
    let mut player = default_player();
    player.play().unwrap();
    player.advance(1.4).unwrap();
    assert_eq!(player.phase(), Some(Phase::CrossAndRings));

    let t4 = player.events()[4].at;
    let rings: Vec<_> = player
        .stage()
        .drawables()
        .iter()
        .filter(|d| matches!(d.shape, Shape::Circle(_)))
        .collect();
    assert_eq!(rings.len(), 3);

    for (i, ring) in rings.iter().enumerate() {
        let idx = i as f64;
        for anim in ring.animations() {
            assert!(approx(anim.begin, t4 + 0.2 * idx));
            assert!(approx(anim.duration, 0.8 * (1.0 - 0.2 * idx)));
        }
    }
}

#[test]
fn corner_morph_replays_from_round_each_cycle() {
    let mut player = default_player();
    player.play().unwrap();

    // held at the target radius late in cycle 1
    player.advance(2.0).unwrap();
    assert!(approx(player.sample(2.0).base.unwrap().corner_radius, 50.0));

    // cycle 2 begins at 3.06: the container is round again and morphs back down
    player.advance(2.0).unwrap();
    let restart = player.events()[5].at;
    assert!(approx(player.sample(restart).base.unwrap().corner_radius, 120.0));
    assert!(approx(
        player.sample(restart + 1.0).base.unwrap().corner_radius,
        50.0
    ));
}

#[test]
fn each_cycle_owns_its_drawables() {
    let mut player = default_player();
    player.play().unwrap();
    player.advance(2.0).unwrap();
    // full cycle population: 8 grid + 4 diagonals + 8 inset + 4 cross + 3 rings
    assert_eq!(player.stage().drawable_count(), 27);

    player.advance(1.2).unwrap(); // past the restart at 3.06
    assert_eq!(player.phase(), Some(Phase::CornerMorph));
    assert_eq!(player.stage().drawable_count(), 0);
}

#[test]
fn cancellation_stops_the_loop_for_good() {
    let mut player = default_player();
    player.play().unwrap();
    player.advance(1.0).unwrap();
    player.cancel();
    let seen = player.events().len();

    player.advance(60.0).unwrap();
    assert_eq!(player.events().len(), seen);
    assert_eq!(player.pending_timers(), 0);
}

#[test]
fn identical_players_stay_in_lockstep() {
    let mut a = default_player();
    let mut b = default_player();
    a.play().unwrap();
    b.play().unwrap();

    for _ in 0..100 {
        a.advance(0.03).unwrap();
        b.advance(0.03).unwrap();
    }

    let ja = serde_json::to_string(&a.snapshot()).unwrap();
    let jb = serde_json::to_string(&b.snapshot()).unwrap();
    assert_eq!(ja, jb);
    assert_eq!(a.events(), b.events());
}
