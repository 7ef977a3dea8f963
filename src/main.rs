use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use quickfire::app::App;
use quickfire::build_info;
use quickfire::clock::SystemClock;
use quickfire::config::{self, Command, Settings, USAGE};
use quickfire::constants::{MAX_FRAME_DT_MS, POLL_INTERVAL_MS};
use quickfire::input::handle_key;
use quickfire::logging;
use quickfire::ui::draw_ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

fn main() -> io::Result<()> {
    let settings = match config::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(settings)) => settings,
        Ok(Command::Version) => {
            println!(
                "quickfire {} ({})",
                build_info::BUILD_DATE,
                build_info::BUILD_COMMIT
            );
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'quickfire --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_from_env() {
        eprintln!("Warning: could not open log file: {}", e);
    }
    info!(?settings, "starting quickfire");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, settings);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        warn!(error = %e, "terminal loop failed");
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: Settings,
) -> io::Result<()> {
    let mut app = App::new(settings);
    let mut rng = rand::thread_rng();
    let clock = SystemClock;
    let mut last_frame = Instant::now();

    while !app.should_quit {
        terminal.draw(|f| draw_ui(f, &app))?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                handle_key(&mut app, key_event, &mut rng, &clock);
            }
        }

        // Clamp to keep a suspended terminal from replaying minutes of timers at once
        let now = Instant::now();
        let dt_ms = (now.duration_since(last_frame).as_millis() as u64).min(MAX_FRAME_DT_MS);
        last_frame = now;
        app.tick(dt_ms, &mut rng, &clock);
    }

    info!(
        math_rounds = app.math.history().len(),
        squat_rounds = app.squat.history().len(),
        "quitting"
    );
    Ok(())
}
