//! DSA Drills - interview-prep array and sorting exercises
//!
//! Main CLI entry point for listing, running, and replaying the drills.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dsa_drills::config::CONFIG_FILE;
use dsa_drills::{
    init_logging, parse_sequence, run_drill, run_samples, sample_inputs, Drill, DrillsConfig,
    Report,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dsa")]
#[command(version)]
#[command(about = "Interview-prep array and sorting drills", long_about = None)]
struct Cli {
    /// Config file (default: nearest dsa.toml at or above the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or create the configuration file
    Config {
        /// Print the path of the config file in use
        #[arg(long)]
        path: bool,

        /// Write a default dsa.toml to the current directory
        #[arg(long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long)]
        force: bool,
    },

    /// List the available drills
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one drill
    Run {
        /// Drill name (see `dsa list`)
        drill: String,

        /// Input sequence, e.g. "29,10,14,37,14" (default: the drill's samples)
        #[arg(short, long, allow_hyphen_values = true)]
        input: Option<String>,

        /// Rotation offset for the rotation drills
        #[arg(short = 'k', long, allow_hyphen_values = true)]
        offset: Option<i64>,

        /// Log intermediate algorithm states (shown even when RUST_LOG is quieter)
        #[arg(long)]
        trace: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay every drill against its sample inputs
    Samples {
        /// Log intermediate algorithm states (shown even when RUST_LOG is quieter)
        #[arg(long)]
        trace: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --init must work before any config file exists
    let config = match cli.command {
        Commands::Config { init: true, .. } => DrillsConfig::default(),
        _ => load_config(cli.config.as_ref())?,
    };
    let trace_requested = matches!(
        cli.command,
        Commands::Run { trace: true, .. } | Commands::Samples { trace: true, .. }
    );
    let verbose = cli.verbose || trace_requested || config.trace.enabled;
    init_logging(&config.logging, verbose)?;

    match cli.command {
        Commands::Config { path, init, force } => cmd_config(cli.config, path, init, force),
        Commands::List { json } => cmd_list(json),
        Commands::Run {
            drill,
            input,
            offset,
            trace,
            json,
        } => cmd_run(&config, &drill, input, offset, trace || config.trace.enabled, json),
        Commands::Samples { trace, json } => {
            cmd_samples(&config, trace || config.trace.enabled, json)
        }
    }
}

fn load_config(explicit: Option<&PathBuf>) -> Result<DrillsConfig> {
    match explicit {
        Some(path) => DrillsConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None => DrillsConfig::load_from_cwd().context("Failed to load dsa.toml"),
    }
}

fn cmd_config(explicit: Option<PathBuf>, path: bool, init: bool, force: bool) -> Result<()> {
    if init {
        let target = explicit.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        if target.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", target.display());
        }
        DrillsConfig::default()
            .save(&target)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        println!("Wrote {}", target.display());
        return Ok(());
    }

    let found = match explicit {
        Some(p) => Some(p),
        None => DrillsConfig::find(&std::env::current_dir()?),
    };

    if path {
        match &found {
            Some(p) => println!("{}", p.display()),
            None => println!("(none, using defaults)"),
        }
        return Ok(());
    }

    let config = match &found {
        Some(p) => DrillsConfig::load(p)?,
        None => DrillsConfig::default(),
    };
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

#[derive(Serialize)]
struct DrillInfo {
    name: &'static str,
    category: dsa_drills::Category,
    description: &'static str,
    takes_offset: bool,
}

fn cmd_list(json: bool) -> Result<()> {
    let infos: Vec<DrillInfo> = Drill::ALL
        .iter()
        .map(|d| DrillInfo {
            name: d.name(),
            category: d.category(),
            description: d.description(),
            takes_offset: d.takes_offset(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for info in &infos {
        let offset = if info.takes_offset { " (needs --offset)" } else { "" };
        println!(
            "{:<22} {:<10} {}{}",
            info.name, info.category, info.description, offset
        );
    }
    Ok(())
}

fn cmd_run(
    config: &DrillsConfig,
    name: &str,
    input: Option<String>,
    offset: Option<i64>,
    trace: bool,
    json: bool,
) -> Result<()> {
    let drill: Drill = name.parse()?;

    let runs = match input {
        Some(text) => vec![(parse_sequence(&text)?, offset)],
        None => sample_inputs(config, drill)
            .into_iter()
            .map(|(values, sample_offset)| (values, offset.or(sample_offset)))
            .collect(),
    };

    let mut reports = Vec::with_capacity(runs.len());
    for (values, offset) in runs {
        reports.push(run_drill(drill, values, offset, trace)?);
    }

    print_reports(&reports, json)
}

fn cmd_samples(config: &DrillsConfig, trace: bool, json: bool) -> Result<()> {
    let mut reports = Vec::new();
    let mut failures = 0;

    for result in run_samples(config, trace) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                tracing::error!(error = %e, "sample failed");
                failures += 1;
            }
        }
    }

    print_reports(&reports, json)?;

    if failures > 0 {
        bail!("{} sample(s) failed", failures);
    }
    Ok(())
}

fn print_reports(reports: &[Report], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        for report in reports {
            println!("{}", report);
        }
    }
    Ok(())
}
