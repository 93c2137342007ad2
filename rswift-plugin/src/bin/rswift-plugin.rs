//! CLI entry point for rswift-plugin.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rswift_plugin::{BuildContext, PluginContext};

/// rswift-plugin — synthesize the R.swift generate command for a target.
#[derive(Parser, Debug)]
#[command(name = "rswift-plugin", version, about)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Package module build, with per-file inputs and rswift.json lookup.
    Generic(Args),
    /// IDE-project build.
    Xcode(Args),
}

#[derive(clap::Args, Debug)]
struct Args {
    /// Path to the target snapshot (.json or .toml).
    snapshot: PathBuf,

    /// Work directory the generated sources are written under.
    #[arg(short, long)]
    work_dir: PathBuf,

    /// Path to the rswift executable (defaults to a PATH lookup).
    #[arg(short, long)]
    tool: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rswift_plugin=info")),
        )
        .init();

    let cli = Cli::parse();
    let (build_context, args) = match cli.mode {
        Mode::Generic(args) => (BuildContext::Generic, args),
        Mode::Xcode(args) => (BuildContext::Xcode, args),
    };

    let mut context = PluginContext::new(args.work_dir);
    if let Some(tool) = args.tool {
        context = context.with_tool("rswift", tool);
    }

    let commands = rswift_plugin::run(build_context, &args.snapshot, &context)?;
    println!("{}", serde_json::to_string_pretty(&commands)?);
    Ok(())
}
