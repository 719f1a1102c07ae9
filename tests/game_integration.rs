use std::thread::sleep;
use std::time::Duration;

use cube_snake::surface::Surface;
use cube_snake::{Game, Prefs, Status};

fn seeded_game(seed: u64) -> Game {
    let mut game = Game::new(Prefs::default().rng_seed(seed)).unwrap();
    game.set_autoplay(true);
    game.start();
    game
}

#[test]
fn seeded_games_are_deterministic() {
    let mut a = seeded_game(1234);
    let mut b = seeded_game(1234);

    for _ in 0..500 {
        a.tick();
        b.tick();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn state_invariants_hold_over_a_long_run() {
    let surface = Surface::new(4);
    let mut game = seeded_game(99);

    for _ in 0..2000 {
        game.tick();
        let snapshot = game.snapshot();

        for seg in &snapshot.segments {
            assert!(surface.contains(seg.pos), "segment off surface: {seg:?}");
        }
        // the published direction is always tangent to the head's face
        assert!(snapshot.segments[0].normal.is_tangent(snapshot.direction));

        // positions are unique except for a pivot's same-cell pair,
        // which drifts down the body as the snake advances; such a
        // pair is always adjacent and its normals differ
        let n = snapshot.segments.len();
        for i in 0..n {
            for j in i + 1..n {
                if snapshot.segments[i].pos == snapshot.segments[j].pos {
                    assert_eq!(j, i + 1, "non-adjacent duplicate at ({i}, {j})");
                    assert_ne!(snapshot.segments[i].normal, snapshot.segments[j].normal);
                }
            }
        }

        assert!(surface.contains(snapshot.food.pos));
        assert_eq!(snapshot.segments.len() as u32, snapshot.score + 1);
        assert!(snapshot.high_score >= snapshot.score);

        if snapshot.status != Status::Playing {
            break;
        }
    }
}

#[test]
fn paused_game_does_not_advance() {
    let mut game = Game::new(
        Prefs::default()
            .rng_seed(5)
            .base_tick_interval(Duration::from_millis(5))
            .speed_multiplier(0.),
    )
    .unwrap();
    game.set_autoplay(true);
    game.start();

    let before = game.snapshot();
    sleep(Duration::from_millis(50));
    game.update();
    assert_eq!(game.snapshot(), before);

    // resuming counts time from the moment of the speed change, so the
    // 50ms spent paused doesn't fire a burst of catch-up ticks
    game.set_speed_multiplier(1.);
    game.update();
    assert_eq!(game.snapshot(), before);
}

#[test]
fn update_pumps_due_ticks() {
    let mut game = Game::new(
        Prefs::default()
            .rng_seed(5)
            .base_tick_interval(Duration::from_millis(5)),
    )
    .unwrap();
    game.set_autoplay(true);
    game.start();

    sleep(Duration::from_millis(40));
    game.update();

    let snapshot = game.snapshot();
    assert_ne!(snapshot.segments, seeded_game(5).snapshot().segments);
}

#[test]
fn invalid_prefs_are_rejected_up_front() {
    let err = Game::new(Prefs::default().half_extent(0)).err().unwrap();
    assert!(err.to_string().contains("half_extent"));

    let err = Game::new(Prefs::default().win_score(0)).err().unwrap();
    assert!(err.to_string().contains("win_score"));

    assert!(Game::new(Prefs::default().speed_multiplier(-0.5)).is_err());
    assert!(Game::new(Prefs::default().base_tick_interval(Duration::ZERO)).is_err());
}
