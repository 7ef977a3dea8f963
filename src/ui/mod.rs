pub mod game_common;
pub mod math_scene;
pub mod menu_scene;
pub mod squat_scene;

use crate::app::{App, Screen};
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match app.screen() {
        Screen::Menu => menu_scene::render_menu(
            frame,
            area,
            &app.menu,
            app.math.history(),
            app.squat.history(),
        ),
        Screen::Math => math_scene::render_math(frame, area, &app.math),
        Screen::Squat => squat_scene::render_squat(frame, area, &app.squat),
    }
}
