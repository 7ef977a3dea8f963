//! Integration test: menu to round and back, driven through key events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quickfire::app::{App, GameKind, Screen};
use quickfire::clock::FixedClock;
use quickfire::config::Settings;
use quickfire::input::handle_key;
use quickfire::Difficulty;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn press(app: &mut App, code: KeyCode, rng: &mut ChaCha8Rng, clock: &FixedClock) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), rng, clock);
}

#[test]
fn test_math_round_from_menu_to_scoreboard() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let clock = FixedClock::at(10, 10);
    let mut app = App::new(Settings::default());

    // Difficulty row, bump to medium.
    press(&mut app, KeyCode::Down, &mut rng, &clock);
    press(&mut app, KeyCode::Right, &mut rng, &clock);
    assert_eq!(app.menu.difficulty, Difficulty::Medium);

    press(&mut app, KeyCode::Enter, &mut rng, &clock);
    assert_eq!(app.screen(), Screen::Math);

    let answer = app.math.questions().current().map(|q| q.answer()).unwrap();
    for c in answer.to_string().chars() {
        press(&mut app, KeyCode::Char(c), &mut rng, &clock);
    }
    assert_eq!(app.math.score(), 1);
    assert!(app.math.is_flashing());

    press(&mut app, KeyCode::Esc, &mut rng, &clock);
    assert_eq!(app.screen(), Screen::Menu);
    let entry = app.math.history().latest().unwrap();
    assert_eq!(entry.score, 1);
    assert_eq!(entry.difficulty, Difficulty::Medium);
}

#[test]
fn test_squat_round_ends_and_any_key_dismisses() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let clock = FixedClock::at(10, 10);
    let mut app = App::new(Settings::default());

    press(&mut app, KeyCode::Right, &mut rng, &clock);
    assert_eq!(app.menu.game, GameKind::Squat);
    press(&mut app, KeyCode::Enter, &mut rng, &clock);
    assert_eq!(app.screen(), Screen::Squat);

    for _ in 0..(60_000 / 50) {
        app.tick(50, &mut rng, &clock);
    }
    assert_eq!(app.screen(), Screen::Squat);
    assert_eq!(app.squat.history().latest().map(|e| e.reps), Some(10));

    press(&mut app, KeyCode::Char('x'), &mut rng, &clock);
    assert_eq!(app.screen(), Screen::Menu);
}

#[test]
fn test_key_release_is_ignored_and_ctrl_c_quits() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let clock = FixedClock::at(10, 10);
    let mut app = App::new(Settings::default());

    let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    handle_key(&mut app, release, &mut rng, &clock);
    assert_eq!(app.screen(), Screen::Menu);

    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut rng,
        &clock,
    );
    assert!(app.should_quit);
}
