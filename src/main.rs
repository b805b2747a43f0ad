//! Slopeview - a terminal explorer for the linear function y = kx + b.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use slopeview::app::{App, Theme};
use slopeview::config::{parse_pointer, ControlConfig, PlaneConfig};
use slopeview::explain::Language;
use slopeview::plane::{LineParameters, PlaneRenderer};
use slopeview::ui;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "slopeview")]
#[command(about = "An interactive terminal explorer for y = kx + b", long_about = None)]
struct Args {
    /// Initial slope
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    k: f64,

    /// Initial intercept
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    b: f64,

    /// Drawing surface width in pixels
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Drawing surface height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Pixels per unit
    #[arg(long, default_value_t = 40.0)]
    scale: f64,

    /// Explanation language (en, zh)
    #[arg(long, default_value = "en")]
    lang: Language,

    /// Color theme (dark, light)
    #[arg(long, default_value = "dark")]
    theme: Theme,

    /// Seed for the randomize action
    #[arg(long)]
    seed: Option<u64>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the explanation and exit
    #[arg(long, conflicts_with = "dump")]
    explain: bool,

    /// Print the drawing commands and exit
    #[arg(long)]
    dump: bool,

    /// Pointer position in surface pixels for --dump, as <x>,<y>
    #[arg(long, requires = "dump", allow_hyphen_values = true)]
    pointer: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Slopeview");
    }

    let plane_config = PlaneConfig {
        width: args.width,
        height: args.height,
        scale: args.scale,
        ..PlaneConfig::default()
    };
    plane_config.validate()?;

    let control_config = ControlConfig {
        k: args.k,
        b: args.b,
        seed: args.seed,
        ..ControlConfig::default()
    };
    control_config.validate()?;

    if args.explain || args.dump {
        let mut plane = PlaneRenderer::new(
            plane_config,
            LineParameters {
                k: args.k,
                b: args.b,
            },
            args.lang,
        );
        let mut out = io::stdout().lock();
        if args.explain {
            writeln!(out, "{}", plane.explanation())?;
        } else {
            if let Some(raw) = &args.pointer {
                let p = parse_pointer(raw)?;
                plane.set_pointer(p.x, p.y);
            }
            for command in &plane.scene().commands {
                writeln!(out, "{}", command)?;
            }
            writeln!(out, "pointer: {}", plane.pointer_status())?;
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(plane_config, &control_config, args.lang, args.theme);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Slopeview exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    if key.code == KeyCode::Char('c') {
                        return Ok(());
                    }
                    continue;
                }

                match key.code {
                    // Quit
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),

                    // Slope slider
                    KeyCode::Right | KeyCode::Char('l') => app.step_k(true),
                    KeyCode::Left | KeyCode::Char('h') => app.step_k(false),

                    // Intercept slider
                    KeyCode::Up | KeyCode::Char('k') => app.step_b(true),
                    KeyCode::Down | KeyCode::Char('j') => app.step_b(false),

                    // Actions
                    KeyCode::Char('r') => app.reset(),
                    KeyCode::Char(' ') | KeyCode::Char('n') => app.randomize(),

                    // Features
                    KeyCode::Char('L') => app.cycle_language(),
                    KeyCode::Char('T') => app.cycle_theme(),
                    KeyCode::Char('?') => app.show_help(),

                    _ => {}
                }
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    app.pointer_moved(mouse.column, mouse.row);
                },
                _ => {}
            },
            Event::FocusLost => app.pointer_left(),
            _ => {}
        }
    }
}
