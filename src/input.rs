//! Keyboard dispatch: translate crossterm key events into per-screen actions.

use crate::app::{App, MathInput, MenuInput, Screen, SquatInput};
use crate::clock::Clock;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

pub fn map_menu_key(key: KeyEvent) -> Option<MenuInput> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuInput::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuInput::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Some(MenuInput::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => Some(MenuInput::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuInput::Start),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuInput::Quit),
        _ => None,
    }
}

pub fn map_math_key(key: KeyEvent) -> Option<MathInput> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '+' => {
            Some(MathInput::Char(c))
        }
        KeyCode::Backspace => Some(MathInput::Backspace),
        KeyCode::Enter => Some(MathInput::Submit),
        KeyCode::Esc => Some(MathInput::Leave),
        _ => None,
    }
}

pub fn map_squat_key(key: KeyEvent) -> SquatInput {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => SquatInput::Leave,
        _ => SquatInput::Other,
    }
}

/// Route a key to the screen currently shown. Ctrl+C always quits.
pub fn handle_key<R: Rng>(app: &mut App, key: KeyEvent, rng: &mut R, clock: &dyn Clock) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen() {
        Screen::Menu => {
            if let Some(input) = map_menu_key(key) {
                app.handle_menu(input, rng);
            }
        }
        Screen::Math => {
            if let Some(input) = map_math_key(key) {
                app.handle_math(input, rng, clock);
            }
        }
        Screen::Squat => app.handle_squat(map_squat_key(key), clock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::Settings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_math_keys() {
        assert_eq!(map_math_key(key(KeyCode::Char('7'))), Some(MathInput::Char('7')));
        assert_eq!(map_math_key(key(KeyCode::Char('-'))), Some(MathInput::Char('-')));
        assert_eq!(map_math_key(key(KeyCode::Char('a'))), None);
        assert_eq!(map_math_key(key(KeyCode::Enter)), Some(MathInput::Submit));
        assert_eq!(map_math_key(key(KeyCode::Esc)), Some(MathInput::Leave));
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(map_menu_key(key(KeyCode::Enter)), Some(MenuInput::Start));
        assert_eq!(map_menu_key(key(KeyCode::Char('q'))), Some(MenuInput::Quit));
        assert_eq!(map_menu_key(key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = App::new(Settings::default());
        let mut rng = StdRng::seed_from_u64(5);
        let clock = FixedClock::at(10, 0);
        handle_key(&mut app, key(KeyCode::Enter), &mut rng, &clock);
        assert_eq!(app.screen(), Screen::Math);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut rng,
            &clock,
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_reaches_math_session() {
        let mut app = App::new(Settings::default());
        let mut rng = StdRng::seed_from_u64(5);
        let clock = FixedClock::at(10, 0);
        handle_key(&mut app, key(KeyCode::Enter), &mut rng, &clock);
        let answer = app.math.questions().current().unwrap().answer();
        for c in answer.to_string().chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), &mut rng, &clock);
        }
        assert_eq!(app.math.score(), 1);
    }
}
