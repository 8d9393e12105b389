//! # Crew CLI Entry Point
//!
//! This is the main entry point for the Crew landing page TUI.
//!
//! ## Overview
//!
//! Crew renders a small product landing page in the terminal: a top bar with
//! the brand and a login button, an intro section, and a horizontally
//! scrolling "Meet the team" strip whose cards slide in the first time the
//! section scrolls into view and expand one at a time when selected.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in roster and theme
//! crew
//!
//! # Use a roster file and a different theme
//! crew --team ./team.json --theme Nord
//!
//! # Print the available themes and exit
//! crew --list-themes
//! ```
//!
//! ## Key Bindings
//!
//! - `q` / `Ctrl+c` - Quit
//! - `h` / `l` / `Left` / `Right` - Move focus between team cards
//! - `Enter` / `Space` / click - Expand or collapse the focused card
//! - `j` / `k` / `Down` / `Up` / wheel - Scroll the page
//! - `Shift+wheel` - Scroll the team strip
//! - `L` / click `[ Login ]` - Go to the login page
//! - `Esc` / `Backspace` - Go back
//! - `t` - Cycle colour theme

use crew::logging;
use crew::team::Roster;
use crew::ui;
use crew::ui::config::Config;
use crew::ui::shell::DEFAULT_BRAND;
use crew::ui::theme::Theme;
use crew::ui::App;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Poll timeout while cards are sliding or resizing.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Crew - a terminal landing page with an animated team showcase
#[derive(Parser, Debug)]
#[command(name = "crew")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A terminal landing page with an animated team showcase", long_about = None)]
struct Args {
    /// JSON roster file to show instead of the built-in team
    #[arg(short, long, value_name = "FILE")]
    team: Option<PathBuf>,

    /// Colour theme name (see --list-themes)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Brand label shown in the top bar
    #[arg(short, long, value_name = "TEXT")]
    brand: Option<String>,

    /// Configuration file to read and persist settings to
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of the data directory
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the available themes and exit
    #[arg(long)]
    list_themes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

/// Pick the theme: the CLI flag wins and must name a real theme, a stale
/// config entry only warns.
fn resolve_theme(flag: Option<&str>, config: &Config) -> Result<Theme> {
    if let Some(name) = flag {
        return match Theme::by_name(name) {
            Some(theme) => Ok(theme.clone()),
            None => bail!("Unknown theme: {name} (try --list-themes)"),
        };
    }
    match Theme::by_name(&config.theme) {
        Some(theme) => Ok(theme.clone()),
        None => {
            warn!(theme = %config.theme, "unknown theme in config, using default");
            Ok(Theme::default_theme().clone())
        }
    }
}

/// Load the roster from `team` or fall back to the built-in one.
fn load_roster(team: Option<&Path>) -> Result<Roster> {
    let Some(path) = team else {
        return Ok(Roster::builtin());
    };
    let roster = Roster::load_from(path)?;
    if !roster.skipped().is_empty() {
        eprintln!(
            "Warning: skipped {} invalid team entries in {}",
            roster.skipped().len(),
            path.display()
        );
    }
    Ok(roster)
}

/// Load the config at its default location. A file that cannot be read is
/// reported and never written back, so theme changes cannot clobber it.
fn load_default_config(path: PathBuf) -> (Config, Option<PathBuf>) {
    match Config::load_from(&path) {
        Ok(config) => (config, Some(path)),
        Err(e) => {
            warn!("{e:#}");
            eprintln!("Warning: {e:#}; using defaults and not saving settings");
            (Config::default(), None)
        }
    }
}

async fn run_application(args: Args) -> Result<()> {
    if args.list_themes {
        for theme in Theme::all() {
            println!("{}", theme.name);
        }
        return Ok(());
    }

    let log_path = match args.log_file.clone() {
        Some(path) => Some(path),
        None => logging::default_log_path().ok(),
    };
    if let Some(path) = log_path {
        if let Err(e) = logging::init(&path) {
            eprintln!("Warning: Could not initialize logging: {e:#}");
        }
    }

    let (config, config_path) = match args.config.clone() {
        Some(path) => (Config::load_from(&path)?, Some(path)),
        None => match Config::default_path() {
            Ok(path) => load_default_config(path),
            Err(e) => {
                warn!("{e:#}");
                (Config::default(), None)
            }
        },
    };

    let theme = resolve_theme(args.theme.as_deref(), &config)?;
    let team_file = args.team.clone().or_else(|| config.team_file.clone());
    let roster = load_roster(team_file.as_deref())?;
    let brand = args
        .brand
        .clone()
        .or_else(|| config.brand.clone())
        .unwrap_or_else(|| DEFAULT_BRAND.to_string());

    info!(members = roster.len(), theme = theme.name, "starting");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(roster, &brand, theme);
    app.breakpoint = config.breakpoint;
    app.config = config;
    app.config_path = config_path;

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Wait for at most one event and apply it. Returns `false` on timeout.
fn pump_event(app: &mut App, event_reader: &mut dyn EventReader) -> Result<bool> {
    let timeout = if app.is_animating(Instant::now()) {
        ANIMATION_FRAME
    } else {
        IDLE_POLL
    };

    match event_reader.read_event(timeout)? {
        Some(event) => {
            app.handle_event(&event, Instant::now());
            Ok(true)
        }
        None => Ok(false),
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        let now = Instant::now();
        let size = terminal.size().context("Failed to read terminal size")?;
        app.resize(Rect::new(0, 0, size.width, size.height), now);
        app.advance(now);

        terminal
            .draw(|f| ui::render(f, app, now))
            .context("Failed to draw terminal UI")?;

        pump_event(app, event_reader)?;

        if app.should_quit {
            info!("quitting");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew::team::TeamMember;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::TempDir;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn test_app() -> App {
        let roster = Roster::from_members(vec![
            TeamMember::new(1, "Ada", "Engineer"),
            TeamMember::new(2, "Mateo", "Designer"),
        ]);
        let mut app = App::new(roster, "Acme", Theme::default_theme().clone());
        app.resize(Rect::new(0, 0, 120, 60), Instant::now());
        app
    }

    #[test]
    fn test_mock_event_reader() {
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Char('l')),
            key_event(KeyCode::Enter),
        ]);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('l'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_pump_event_applies_events_in_order() {
        let mut app = test_app();
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Char('l')),
            key_event(KeyCode::Enter),
            key_event(KeyCode::Char('q')),
        ]);

        assert!(pump_event(&mut app, &mut reader).unwrap());
        assert!(pump_event(&mut app, &mut reader).unwrap());
        assert_eq!(app.showcase.expanded(), Some(2));
        assert!(!app.should_quit);

        assert!(pump_event(&mut app, &mut reader).unwrap());
        assert!(app.should_quit);

        assert!(!pump_event(&mut app, &mut reader).unwrap());
    }

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::try_parse_from(["crew"]).unwrap();
        assert!(args.team.is_none());
        assert!(args.theme.is_none());
        assert!(args.brand.is_none());
        assert!(!args.list_themes);
    }

    #[test]
    fn test_args_parsing_with_flags() {
        let args = Args::try_parse_from([
            "crew",
            "--team",
            "/srv/team.json",
            "--theme",
            "Nord",
            "-b",
            "Acme",
            "--log-file",
            "/tmp/crew.log",
        ])
        .unwrap();
        assert_eq!(args.team, Some(PathBuf::from("/srv/team.json")));
        assert_eq!(args.theme.as_deref(), Some("Nord"));
        assert_eq!(args.brand.as_deref(), Some("Acme"));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/crew.log")));
    }

    #[test]
    fn test_resolve_theme_prefers_flag() {
        let config = Config {
            theme: "Dracula".to_string(),
            ..Config::default()
        };
        assert_eq!(resolve_theme(Some("Nord"), &config).unwrap().name, "Nord");
        assert_eq!(resolve_theme(None, &config).unwrap().name, "Dracula");
    }

    #[test]
    fn test_resolve_theme_unknown_flag_is_error() {
        let err = resolve_theme(Some("Neon"), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown theme: Neon"));
    }

    #[test]
    fn test_resolve_theme_unknown_config_falls_back() {
        let config = Config {
            theme: "Neon".to_string(),
            ..Config::default()
        };
        let theme = resolve_theme(None, &config).unwrap();
        assert_eq!(theme.name, Theme::default_theme().name);
    }

    #[test]
    fn test_load_roster_builtin_when_no_file() {
        let roster = load_roster(None).unwrap();
        assert!(!roster.is_empty());
    }

    #[test]
    fn test_load_roster_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("team.json");
        fs::write(
            &path,
            r#"{"members": [{"id": 7, "name": "Kai", "role": "Support"}, {"name": "no id"}]}"#,
        )
        .unwrap();

        let roster = load_roster(Some(&path)).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.skipped().len(), 1);
    }

    #[test]
    fn test_load_roster_missing_file_is_error() {
        let err = load_roster(Some(Path::new("/nonexistent/team.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read team file"));
    }

    #[test]
    fn test_load_default_config_reads_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"theme": "Nord", "brand": "Acme Corp"}"#).unwrap();

        let (config, config_path) = load_default_config(path.clone());
        assert_eq!(config.theme, "Nord");
        assert_eq!(config.brand.as_deref(), Some("Acme Corp"));
        assert_eq!(config_path, Some(path));
    }

    #[test]
    fn test_unreadable_default_config_is_never_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        let original =
            r#"{"theme":"Nord","brand":"Acme Corp","team_file":"/srv/team.json","brakpoint":120}"#;
        fs::write(&path, original).unwrap();

        let (config, config_path) = load_default_config(path.clone());
        assert_eq!(config, Config::default());
        assert!(config_path.is_none());

        let mut app = test_app();
        app.config = config;
        app.config_path = config_path;
        app.handle_event(&key_event(KeyCode::Char('t')), Instant::now());

        assert_ne!(app.theme.name, Theme::default_theme().name);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[tokio::test]
    async fn test_run_application_list_themes() {
        let args = Args::try_parse_from(["crew", "--list-themes"]).unwrap();
        assert!(run_application(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_application_bad_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let args = Args {
            team: None,
            theme: None,
            brand: None,
            config: Some(path),
            log_file: Some(temp_dir.path().join("crew.log")),
            list_themes: false,
        };
        let err = run_application(args).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
