// calcade: arcade-style scientific calculator for the terminal

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use calcade::calculator::Calculator;
use calcade::config::{default_log_path, Config};
use calcade::logging::{self, LogTarget};
use calcade::parser::AngleMode;
use calcade::ui::{theme::theme_for, App};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Evaluate an expression, print the result and exit
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Interpret trigonometric arguments as radians
    #[arg(short, long)]
    radians: bool,

    /// Config file (defaults to <config dir>/calcade/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file for the interactive UI
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let angle_mode = if args.radians {
        AngleMode::Radians
    } else {
        config.calculator.angle_mode
    };
    let calculator =
        Calculator::with_history_capacity(config.calculator.history_size).with_angle_mode(angle_mode);

    match args.eval {
        Some(expression) => {
            logging::init(LogTarget::Stderr, &config.logging.level)
                .context("Failed to initialise logging")?;
            Ok(evaluate_once(calculator, &expression))
        }
        None => {
            let log_path = args.log_file.or_else(default_log_path);
            if let Some(path) = &log_path {
                logging::init(LogTarget::File(path), &config.logging.level)
                    .with_context(|| format!("Failed to open log file {}", path.display()))?;
            }
            run_tui(calculator, &config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn evaluate_once(mut calculator: Calculator, expression: &str) -> ExitCode {
    calculator.toggle_power();
    calculator.insert_text(expression);

    let outcome = calculator.calculate();
    if outcome.success {
        println!("{}", outcome.value);
        ExitCode::SUCCESS
    } else {
        eprintln!("Error: {}", outcome.message);
        ExitCode::FAILURE
    }
}

fn run_tui(mut calculator: Calculator, config: &Config) -> Result<()> {
    if config.calculator.start_powered {
        calculator.toggle_power();
    }
    info!(angle_mode = %calculator.angle_mode(), "Starting calculator UI");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(calculator, theme_for(config.display.theme));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("UI loop failed: {}", err);
        return Err(err.into());
    }

    Ok(())
}
