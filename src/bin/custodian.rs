use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::warn;

use custodian::catalog::{MemoryCatalog, ObjectRecord};
use custodian::config::CostOptimizationConfig;
use custodian::lifecycle::{CostOptimizationAdvisor, LifecycleRunner, TemporaryFileReaper};

#[derive(Parser)]
#[command(name = "custodian")]
#[command(about = "Run the storage lifecycle policy engine over a catalog snapshot")]
struct Cli {
    /// JSON file holding an array of catalog object records
    #[arg(long)]
    catalog: PathBuf,

    /// Engine configuration file (JSON); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the mutated snapshot back to the catalog file after the pass
    #[arg(long)]
    write_back: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply the lifecycle policy and print the run stats
    Run,
    /// Project savings without mutating anything
    Advise,
    /// Delete expired transient objects only
    Reap,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CostOptimizationConfig::default(),
    };

    let raw = fs::read_to_string(&cli.catalog)
        .with_context(|| format!("reading catalog {}", cli.catalog.display()))?;
    let records: Vec<ObjectRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog {}", cli.catalog.display()))?;
    let catalog = MemoryCatalog::from_records(records);

    match cli.command {
        Command::Run => {
            let mut runner = LifecycleRunner::new(catalog, config);
            let stats = runner.run();
            println!("{}", serde_json::to_string_pretty(&stats)?);

            if cli.write_back {
                write_back(&cli.catalog, &runner.into_catalog())?;
            }
            if stats.is_total_failure() {
                bail!("lifecycle pass failed on every object");
            }
            if stats.has_errors() {
                warn!("pass finished with {} errors", stats.error_count);
            }
        }
        Command::Advise => {
            let report = CostOptimizationAdvisor::new(&catalog, &config).recommend()?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Reap => {
            let mut reaper = TemporaryFileReaper::new(catalog, config);
            let deleted = reaper.reap()?;
            println!("{}", serde_json::json!({ "deleted": deleted }));

            if cli.write_back {
                write_back(&cli.catalog, &reaper.into_catalog())?;
            }
        }
    }

    Ok(())
}

fn write_back(path: &PathBuf, catalog: &MemoryCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(&catalog.records())?;
    fs::write(path, json).with_context(|| format!("writing catalog {}", path.display()))?;
    Ok(())
}
