//! Binary entrypoint for the campusmud CLI.
//!
//! Commands:
//! - `play [--seed <n>]` - start an interactive session in the campus world
//! - `init` - create a starter `config.toml`
//!
//! See the library crate docs for module-level details: `campusmud::`.
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};

use campusmud::config::Config;
use campusmud::game::GameSession;

#[derive(Parser)]
#[command(name = "campusmud")]
#[command(about = "A single-player text adventure set on a university campus")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game session
    Play {
        /// RNG seed for a reproducible world (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Initialize a new configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            // A missing config file is fine for casual play; defaults apply.
            let mut config = if Path::new(&cli.config).exists() {
                Config::load(&cli.config)?
            } else {
                Config::default()
            };
            init_logging(&config, cli.verbose);
            info!("Starting campusmud v{}", env!("CARGO_PKG_VERSION"));
            if !Path::new(&cli.config).exists() {
                warn!(
                    "config file {} not found, playing with defaults",
                    cli.config
                );
            }
            if seed.is_some() {
                config.game.rng_seed = seed;
            }

            let mut session = GameSession::campus(&config.game)?;
            println!("{}", session.welcome());
            run_repl(&mut session)?;
        }
        Commands::Init => {
            init_logging(&Config::default(), cli.verbose);
            Config::create_default(&cli.config)?;
            println!("Created starter configuration at {}", cli.config);
        }
    }

    Ok(())
}

/// Read commands from stdin until the session finishes or input runs out.
fn run_repl(session: &mut GameSession) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = session.process_command(&line);
        writeln!(stdout, "{}\n", response)?;
        if session.is_finished() {
            break;
        }
    }
    Ok(())
}

fn init_logging(config: &Config, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured base level
    let base_level = match verbosity {
        0 => match config.logging.level.as_str() {
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        },
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Some(ref file) = config.logging.file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                // Always append to the log file, and echo to the console
                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                writeln!(fmt, "{}", line)
            });
        } else {
            builder.format(|fmt, record| {
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
