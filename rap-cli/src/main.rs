mod cli;
mod config;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rap_io::{generate_icon, generate_icon_set, InspectionProfile};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{CheckArgs, Cli, Command};
use crate::config::Config;

fn main() -> Result<ExitCode> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let ok = run(cli, &mut io::stdout().lock())?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Execute one command; `false` means a strict check found missing files
fn run<W: Write>(cli: Cli, out: &mut W) -> Result<bool> {
    match cli.command {
        Command::Generate(args) => {
            let config = Config::for_generate(cli.asset_dir, &args);
            let paths = generate_icon_set(&config.icon_set(), &config.asset_dir)
                .with_context(|| format!("generating icons in {}", config.asset_dir.display()))?;
            info!("Wrote {} icons", paths.len());
            Ok(true)
        }
        Command::Render(args) => {
            let config = Config::for_render(cli.asset_dir, &args);
            let spec = config.single_icon(&args.output, args.size, args.transparent);
            std::fs::create_dir_all(&config.asset_dir)
                .with_context(|| format!("creating {}", config.asset_dir.display()))?;
            generate_icon(&spec, &config.asset_dir)
                .with_context(|| format!("rendering {}", spec.output_name))?;
            Ok(true)
        }
        Command::Check(args) => check(&cli.asset_dir, &args, out),
    }
}

fn check<W: Write>(asset_dir: &Path, args: &CheckArgs, out: &mut W) -> Result<bool> {
    let profile = if args.branded {
        InspectionProfile::Branded
    } else {
        InspectionProfile::Standard
    };

    let reports = profile
        .inspect(asset_dir)
        .with_context(|| format!("inspecting {}", asset_dir.display()))?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
    } else {
        for report in &reports {
            writeln!(out, "{}", report.line(profile.shows_format()))?;
        }
    }

    let missing = reports.iter().filter(|r| r.is_missing()).count();
    Ok(!(args.strict && missing > 0))
}
