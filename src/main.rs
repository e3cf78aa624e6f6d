// ==============================================================================
// main.rs - PlotSF Entry Point
// ==============================================================================
// Description: Command line driver for ClinVar lollipop figures
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plotsf::parsers::CompletenessPolicy;
use plotsf::processor::LollipopJob;

/// Which converted ClinVar rows are plotted
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Drop rows missing either the coding or the protein position
    AllFields,
    /// Keep rows with a protein position even without a coding position
    ProteinPosition,
}

impl From<Policy> for CompletenessPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::AllFields => CompletenessPolicy::AllFields,
            Policy::ProteinPosition => CompletenessPolicy::ProteinPosition,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ClinVar tabular export (.txt, .tsv, optionally .gz)
    #[arg(short, long, env = "PLOTSF_CLINVAR")]
    clinvar: PathBuf,

    /// Gene model JSON documents, drawn top to bottom in the order given
    #[arg(short, long, env = "PLOTSF_GENES", value_delimiter = ',', num_args = 1.., required = true)]
    genes: Vec<PathBuf>,

    /// SVG figure destination
    #[arg(short, long, default_value = "lollipop.svg")]
    output: PathBuf,

    /// Optional JSON dump of the normalized variant table
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Row completeness policy
    #[arg(long, value_enum, default_value = "all-fields")]
    policy: Policy,

    /// Pixels per figure inch
    #[arg(long, default_value_t = 100.0)]
    dpi: f64,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plotsf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("PlotSF starting...");

    // Parse command line arguments
    let args = Args::parse();

    let dpi = if args.dpi.is_finite() && args.dpi > 0.0 {
        args.dpi
    } else {
        warn!("Invalid dpi '{}', using 100", args.dpi);
        100.0
    };

    let mut job = LollipopJob::new(args.clinvar, args.genes, args.output)
        .with_policy(args.policy.into())
        .with_dpi(dpi);
    if let Some(table) = args.table {
        job = job.with_table_output(table);
    }

    match job.run() {
        Ok(summary) => {
            info!(
                "Plotted {} variant(s) across {} gene(s): {}",
                summary.variants,
                summary.genes.len(),
                summary.genes.join(", ")
            );
            Ok(())
        }
        Err(e) => {
            warn!("Processing failed: {:#}", e);
            Err(e)
        }
    }
}
