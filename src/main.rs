use std::fs::{self, File, OpenOptions};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use imageai_cli::{
    Config, GenerationController, Notifier, PlaceholderGenerator, SharingAdapter,
    cli::{Cli, Commands, ConfigCommands},
    core::share::default_clipboard,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.launches_tui());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Set up logging based on verbosity.
///
/// The TUI owns the terminal, so its logs go to a file, or nowhere if the
/// file cannot be opened.
fn init_tracing(verbose: u8, tui: bool) {
    let filter = EnvFilter::new(match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    });

    if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    match open_log_file() {
        Some(file) => tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(filter)
            .init(),
        None => tracing_subscriber::registry().with(filter).init(),
    }
}

fn open_log_file() -> Option<File> {
    let path = Config::log_path().ok()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // No subcommand = launch TUI
    let Some(command) = cli.command else {
        return imageai_cli::tui::run(Config::load()?, None).await;
    };

    match command {
        Commands::Tui { view } => {
            imageai_cli::tui::run(Config::load()?, view.as_deref()).await?;
        }

        Commands::Generate {
            prompt,
            json,
            copy,
            delay_ms,
        } => {
            let mut config = Config::load()?;
            if let Some(ms) = delay_ms {
                config.generation.delay_ms = ms;
            }
            generate(&config, &prompt, json, copy).await?;
        }

        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let config = Config::load()?;
                println!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigCommands::Path => {
                let path = Config::config_path()?;
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

async fn generate(config: &Config, prompt: &str, json: bool, copy: bool) -> anyhow::Result<()> {
    let notifier = Notifier::detached();
    let generator = Arc::new(PlaceholderGenerator::from_config(&config.generation));
    let controller = GenerationController::new(generator, notifier.clone());

    let image = controller.submit(prompt).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&image)?);
    } else {
        println!("{}", image.url());
    }

    if copy {
        let sharing = SharingAdapter::new(None, default_clipboard(), notifier);
        sharing.copy_link(&image);
    }

    Ok(())
}
