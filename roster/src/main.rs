//! Student roster editor.
//!
//! Seeds a session from `roster.toml` (or built-in defaults) and edits it
//! from a line-oriented shell. Nothing is written back when the session ends.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use roster::core::roster::RosterManager;
use roster::exit_codes;
use roster::io::config::{DEFAULT_CONFIG_PATH, RosterConfig, load_config, write_config};
use roster::logging;
use roster::render::render_roster;
use roster::shell::Shell;

#[derive(Parser)]
#[command(name = "roster", version, about = "In-memory student roster editor")]
struct Cli {
    /// Path to the roster config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Check the config and its seed roster (unique ids and emails, valid fields).
    Validate,
    /// Print the seed roster.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive editing session.
    Shell {
        /// Delete without asking for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Validate => cmd_validate(&cli.config),
        Command::List { json } => cmd_list(&cli.config, json),
        Command::Shell { yes } => cmd_shell(&cli.config, yes),
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        info!(path = %path.display(), "config exists, leaving it untouched");
        return Ok(());
    }
    write_config(path, &RosterConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn cmd_validate(path: &Path) -> Result<()> {
    let cfg = load_config(path).context("load config")?;
    println!("ok: {} seed students", cfg.seed.len());
    Ok(())
}

fn cmd_list(path: &Path, json: bool) -> Result<()> {
    let cfg = load_config(path).context("load config")?;
    if json {
        let payload = serde_json::to_string_pretty(&cfg.seed).context("serialize json")?;
        println!("{}", payload);
    } else {
        print!("{}", render_roster(&cfg.seed));
    }
    Ok(())
}

fn cmd_shell(path: &Path, yes: bool) -> Result<()> {
    let cfg = load_config(path).context("load config")?;
    let confirm_deletes = cfg.confirm_deletes && !yes;
    debug!(seed = cfg.seed.len(), confirm_deletes, "starting shell");

    let manager = RosterManager::new(cfg.seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(manager, stdin.lock(), stdout.lock(), confirm_deletes);
    shell.run()?;
    info!(
        students = shell.manager().students().len(),
        "session ended"
    );
    Ok(())
}
