//! Top-level application state: menu selections plus the two game sessions.
//!
//! The two games never share state; the app only routes input and elapsed
//! time to whichever one is on screen.

use crate::clock::Clock;
use crate::config::Settings;
use crate::constants::{MAX_TIMER_SECS, MIN_TIMER_SECS, TIMER_STEP_SECS};
use crate::difficulty::Difficulty;
use crate::math::MathSession;
use crate::session_phase::SessionPhase;
use crate::squat::SquatSession;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Math,
    Squat,
}

impl GameKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Math => "Falling Math",
            Self::Squat => "Squat Metronome",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Self::Math => Self::Squat,
            Self::Squat => Self::Math,
        }
    }
}

/// Menu rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Game,
    Difficulty,
    Timer,
}

impl MenuRow {
    pub const ALL: [MenuRow; 3] = [MenuRow::Game, MenuRow::Difficulty, MenuRow::Timer];

    fn index(self) -> usize {
        match self {
            Self::Game => 0,
            Self::Difficulty => 1,
            Self::Timer => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuState {
    pub game: GameKind,
    pub row: MenuRow,
    pub difficulty: Difficulty,
    pub math_timer_secs: u32,
    pub squat_timer_secs: u32,
}

impl MenuState {
    pub fn new(settings: Settings) -> Self {
        Self {
            game: GameKind::Math,
            row: MenuRow::Game,
            difficulty: settings.difficulty,
            math_timer_secs: settings.math_timer_secs,
            squat_timer_secs: settings.squat_timer_secs,
        }
    }

    /// Timer length for the selected game.
    pub fn timer_secs(&self) -> u32 {
        match self.game {
            GameKind::Math => self.math_timer_secs,
            GameKind::Squat => self.squat_timer_secs,
        }
    }

    fn navigate_up(&mut self) {
        let i = self.row.index();
        self.row = MenuRow::ALL[(i + MenuRow::ALL.len() - 1) % MenuRow::ALL.len()];
    }

    fn navigate_down(&mut self) {
        let i = self.row.index();
        self.row = MenuRow::ALL[(i + 1) % MenuRow::ALL.len()];
    }

    fn adjust(&mut self, forward: bool) {
        match self.row {
            MenuRow::Game => self.game = self.game.toggled(),
            MenuRow::Difficulty => {
                self.difficulty = if forward {
                    self.difficulty.next()
                } else {
                    self.difficulty.prev()
                };
            }
            MenuRow::Timer => {
                let secs = match self.game {
                    GameKind::Math => &mut self.math_timer_secs,
                    GameKind::Squat => &mut self.squat_timer_secs,
                };
                *secs = step_timer(*secs, forward);
            }
        }
    }
}

/// Move a timer length one step, snapping to the step grid and staying in bounds.
fn step_timer(secs: u32, forward: bool) -> u32 {
    let snapped = secs - secs % TIMER_STEP_SECS;
    let next = if forward {
        snapped + TIMER_STEP_SECS
    } else if snapped == secs {
        snapped.saturating_sub(TIMER_STEP_SECS)
    } else {
        snapped
    };
    next.clamp(MIN_TIMER_SECS, MAX_TIMER_SECS)
}

/// Input actions for the menu (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Left,
    Right,
    Start,
    Quit,
}

/// Input actions for a math round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathInput {
    Char(char),
    Backspace,
    Submit,
    Leave,
}

/// Input actions for a squat round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquatInput {
    Leave,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Math,
    Squat,
}

#[derive(Debug, Clone)]
pub struct App {
    pub menu: MenuState,
    pub math: MathSession,
    pub squat: SquatSession,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            menu: MenuState::new(settings),
            math: MathSession::new(),
            squat: SquatSession::new(),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.math.is_running() {
            Screen::Math
        } else if self.squat.phase() != SessionPhase::Idle {
            Screen::Squat
        } else {
            Screen::Menu
        }
    }

    /// Feed elapsed time to the active session.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R, clock: &dyn Clock) -> bool {
        match self.screen() {
            Screen::Math => self.math.tick(dt_ms, rng, clock),
            Screen::Squat => self.squat.tick(dt_ms, clock),
            Screen::Menu => false,
        }
    }

    pub fn handle_menu<R: Rng>(&mut self, input: MenuInput, rng: &mut R) {
        match input {
            MenuInput::Up => self.menu.navigate_up(),
            MenuInput::Down => self.menu.navigate_down(),
            MenuInput::Left => self.menu.adjust(false),
            MenuInput::Right => self.menu.adjust(true),
            MenuInput::Start => {
                let difficulty = self.menu.difficulty;
                match self.menu.game {
                    GameKind::Math => self.math.start(difficulty, self.menu.math_timer_secs, rng),
                    GameKind::Squat => self.squat.start(difficulty, self.menu.squat_timer_secs),
                }
            }
            MenuInput::Quit => self.should_quit = true,
        }
    }

    pub fn handle_math<R: Rng>(&mut self, input: MathInput, rng: &mut R, clock: &dyn Clock) {
        match input {
            MathInput::Char(c) => {
                self.math.type_char(c, rng);
            }
            MathInput::Backspace => {
                self.math.backspace(rng);
            }
            MathInput::Submit => self.math.submit(rng),
            MathInput::Leave => {
                self.math.end(clock);
            }
        }
    }

    pub fn handle_squat(&mut self, input: SquatInput, clock: &dyn Clock) {
        match (self.squat.phase(), input) {
            (SessionPhase::Running, SquatInput::Leave) => {
                self.squat.end(clock);
            }
            (SessionPhase::Ended, _) => self.squat.dismiss(),
            _ => {}
        }
    }
}
