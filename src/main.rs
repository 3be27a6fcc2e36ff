use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use hanoi_towers::config::{AppConfig, MAX_PLAYABLE_DEGREE};
use hanoi_towers::game::{PuzzleState, TARGET_COLUMN};
use hanoi_towers::logging::{self, LogTarget};
use hanoi_towers::session::{self, SessionOutcome};
use hanoi_towers::solver;
use hanoi_towers::ui::{App, Menu};

/// Towers of Hanoi in the terminal.
#[derive(Parser)]
#[command(name = "hanoi", about = "Play Towers of Hanoi or watch it solved")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "hanoi.toml")]
    config: PathBuf,

    /// Override the number of disks
    #[arg(long, short)]
    degree: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Move the disks yourself
    Play,
    /// Watch the recursive solver
    Solve {
        /// Override the pause between moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print the move list instead of animating it
        #[arg(long)]
        print: bool,
    },
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Play,
    Watch,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(degree) = cli.degree {
        config.game.degree = degree;
    }
    if let Some(Command::Solve {
        delay_ms: Some(delay_ms),
        ..
    }) = cli.command
    {
        config.auto_solve.step_delay_ms = delay_ms;
    }
    config.validate().context("invalid settings")?;

    let mode = match cli.command {
        Some(Command::Solve { print: true, .. }) => {
            let _guard = logging::init(&config.logging, LogTarget::Stderr)
                .context("setting up logging")?;
            return print_solution(config.game.degree);
        }
        Some(Command::Solve { .. }) => Some(Mode::Watch),
        Some(Command::Play) => Some(Mode::Play),
        None => None,
    };

    let _guard = logging::init(&config.logging, LogTarget::File).with_context(|| {
        format!(
            "creating log directory {}",
            config.logging.directory.display()
        )
    })?;

    if let Some(outcome) = run_tui(mode, &config)? {
        match outcome {
            SessionOutcome::Solved { moves, minimum } => {
                println!("Solved in {moves} moves (minimum {minimum}).");
            }
            SessionOutcome::Abandoned { moves } => {
                println!("Stopped after {moves} moves.");
            }
        }
    }
    Ok(())
}

fn print_solution(degree: u32) -> Result<()> {
    let moves = solver::solve(degree, 0, TARGET_COLUMN)?;
    println!("{degree} disks, {} moves:", moves.len());
    for (step, mv) in moves.iter().enumerate() {
        println!("{:>5}. {mv}", step + 1);
    }
    Ok(())
}

fn run_tui(mode: Option<Mode>, config: &AppConfig) -> Result<Option<SessionOutcome>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut app = App::new(Terminal::new(backend)?);

    let res = run_app(&mut app, mode, config);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(app.terminal_mut().backend_mut(), LeaveAlternateScreen);
    let _ = app.terminal_mut().show_cursor();

    res
}

fn run_app<B: Backend>(
    app: &mut App<B>,
    mode: Option<Mode>,
    config: &AppConfig,
) -> Result<Option<SessionOutcome>> {
    let (mode, degree) = match mode {
        Some(mode) => (mode, config.game.degree),
        None => match front_menu(app)? {
            Some(choice) => choice,
            None => return Ok(None),
        },
    };

    let mut puzzle = PuzzleState::new(degree)?;
    let outcome = match mode {
        Mode::Play => session::play(&mut puzzle, app)?,
        Mode::Watch => session::auto_solve(&mut puzzle, app, config.auto_solve.step_delay())?,
    };
    Ok(Some(outcome))
}

/// Ask for the mode, then the number of disks. `None` if the player quits.
fn front_menu<B: Backend>(app: &mut App<B>) -> Result<Option<(Mode, u32)>> {
    let mut modes = Menu::new(
        vec![
            "Play".to_string(),
            "Watch the solver".to_string(),
            String::new(),
            "Quit".to_string(),
        ],
        Some("Towers of Hanoi".to_string()),
    )?;
    let mode = match app.run_menu(&mut modes)? {
        Some(0) => Mode::Play,
        Some(1) => Mode::Watch,
        _ => return Ok(None),
    };

    let mut degrees = Menu::new(
        (1..=MAX_PLAYABLE_DEGREE)
            .map(|d| match d {
                1 => "1 disk".to_string(),
                d => format!("{d} disks"),
            })
            .collect(),
        Some("How many disks?".to_string()),
    )?;
    Ok(app
        .run_menu(&mut degrees)?
        .map(|choice| (mode, choice as u32 + 1)))
}
