//! Pikopad - a terminal playground for the Piko interpreter
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing::{error, info};

use pikopad::{build_loader, run_headless, HeadlessEvent, HeadlessInput};
use pikopad_app::config::{init_config_dir, load_settings};
use pikopad_app::Engine;
use pikopad_core::logging;

/// Pikopad - a terminal playground for the Piko interpreter
#[derive(Parser, Debug)]
#[command(name = "pikopad")]
#[command(about = "A terminal playground for the Piko interpreter", long_about = None)]
struct Args {
    /// Program to run in headless mode (stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Project directory containing .pikopad/config.toml
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Interpreter command (overrides vm.command)
    #[arg(long, value_name = "CMD")]
    vm: Option<String>,

    /// Example directory (overrides vm.examples_dir)
    #[arg(long, value_name = "DIR")]
    examples: Option<PathBuf>,

    /// Run once without the TUI and print NDJSON events
    #[arg(long)]
    headless: bool,

    /// Example to run in headless mode
    #[arg(long, value_name = "NAME", requires = "headless", conflicts_with = "file")]
    example: Option<String>,

    /// File whose lines the program reads as input
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write a default .pikopad/config.toml and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    let project_path = args
        .dir
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        init_config_dir(&project_path)?;
        eprintln!(
            "Wrote {}",
            project_path.join(".pikopad/config.toml").display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    // Log to file, since the TUI owns stdout
    logging::init()?;
    info!("Project: {}", project_path.display());

    let mut settings = load_settings(&project_path);
    if let Some(command) = args.vm {
        settings.vm.command = command;
    }
    if let Some(dir) = args.examples {
        settings.vm.examples_dir = Some(dir);
    }
    let loader = build_loader(&settings, &project_path);
    info!("Interpreter: {}", loader.command());

    let program_input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
        None => String::new(),
    };

    if args.headless {
        let input = match (args.example, args.file) {
            (Some(name), _) => HeadlessInput::Example(name),
            (None, Some(path)) => HeadlessInput::Source(
                std::fs::read_to_string(&path)
                    .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
            ),
            (None, None) => HeadlessInput::Source(
                std::io::read_to_string(std::io::stdin()).wrap_err("Failed to read stdin")?,
            ),
        };

        let result = run_headless(
            settings,
            loader,
            input,
            &program_input,
            &mut std::io::stdout(),
        )
        .await;
        return Ok(match result {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                error!("Headless run failed: {}", e);
                HeadlessEvent::from_error(&e).emit();
                ExitCode::FAILURE
            }
        });
    }

    let mut engine = Engine::new(settings, loader);
    engine.state.program_input.set_text(program_input);
    let result = pikopad_tui::run(&mut engine);
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result?;

    if let Ok(path) = logging::get_current_log_file() {
        info!("Log file: {}", path.display());
    }
    info!("Pikopad exiting");
    Ok(ExitCode::SUCCESS)
}
