use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use halfkey_core::{KeyCode, MirrorMap, VirtualKey};
use halfkey_macos::{permissions, EventHandler, Mode};
use log::{info, LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Type with one hand: hold space to mirror the keyboard", long_about = None)]
struct Args {
    /// Increase log output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Intercept the keyboard until interrupted
    Run {
        /// Install the tap only long enough to trigger the accessibility prompt
        #[arg(long)]
        provisional: bool,
    },
    /// Report whether this process may intercept keyboard input
    CheckPermission {
        /// Show the system permission dialog when not yet trusted
        #[arg(long)]
        prompt: bool,
    },
    /// Print the mirror of KEY, or the whole mirror table
    Mirror {
        /// Key name such as `A`, `Semicolon` or `kVK_ANSI_Q`
        key: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    match args.command {
        Command::Run { provisional } => {
            run(if provisional { Mode::Provisional } else { Mode::Active })
        }
        Command::CheckPermission { prompt } => {
            let trusted = permissions::is_process_trusted(prompt);
            if trusted {
                println!("Accessibility permission granted");
                Ok(())
            } else {
                println!("Accessibility permission not granted");
                std::process::exit(1);
            }
        }
        Command::Mirror { key } => {
            for line in mirror_lines(key.as_deref())? {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// RUST_LOG still overrides the verbosity flag
fn setup_logging(verbose: u8) {
    let mut builder = Builder::new();
    builder.filter_level(level_for(verbose));
    builder.parse_env(Env::default());
    builder.init();
}

fn run(mode: Mode) -> Result<()> {
    let mut handler = EventHandler::new();
    handler
        .start(mode)
        .context("Failed to start keyboard interception")?;

    if mode == Mode::Provisional {
        println!("Event tap installed and released");
        return Ok(());
    }

    let (stop_tx, stop_rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .context("Failed to install Ctrl-C handler")?;

    info!("Hold space to type with one hand. Press Ctrl-C to quit.");
    let _ = stop_rx.recv();

    handler.stop();
    Ok(())
}

fn key_label(code: KeyCode) -> String {
    match VirtualKey::from_code(code) {
        Some(key) => key.name().to_string(),
        None => format!("0x{:02x}", code),
    }
}

fn mirror_lines(key: Option<&str>) -> Result<Vec<String>> {
    let map = MirrorMap::standard();
    match key {
        Some(name) => {
            let key = VirtualKey::from_name(name)?;
            let line = match map.lookup(key.code()) {
                Some(mirrored) => format!("{} -> {}", key.name(), key_label(mirrored)),
                None if key.is_modifier() => format!("{} is a modifier and is never mirrored", key.name()),
                None => format!("{} has no mirror", key.name()),
            };
            Ok(vec![line])
        }
        None => Ok(map
            .entries()
            .map(|(from, to)| format!("{:>12} -> {}", key_label(from), key_label(to)))
            .collect()),
    }
}
