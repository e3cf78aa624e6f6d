// ==============================================================================
// processor.rs - Lollipop Plot Pipeline
// ==============================================================================
// Description: Validates inputs, converts ClinVar rows, renders and writes figures
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::models::{GeneModel, VariantTable};
use crate::output::{write_table_json, FigureWriter, OutputFormat};
use crate::parsers::{load_gene_models, ClinvarReader, CompletenessPolicy};
use crate::plot::render;
use crate::validator::InputValidator;

/// Result of a completed job
#[derive(Debug, Clone)]
pub struct JobSummary {
    pub variants: usize,
    pub genes: Vec<String>,
    pub figure_path: PathBuf,
    pub table_path: Option<PathBuf>,
}

pub struct LollipopJob {
    clinvar_path: PathBuf,
    gene_paths: Vec<PathBuf>,
    figure_path: PathBuf,
    table_path: Option<PathBuf>,
    policy: CompletenessPolicy,
    dpi: f64,
}

impl LollipopJob {
    pub fn new(clinvar_path: PathBuf, gene_paths: Vec<PathBuf>, figure_path: PathBuf) -> Self {
        Self {
            clinvar_path,
            gene_paths,
            figure_path,
            table_path: None,
            policy: CompletenessPolicy::default(),
            dpi: 100.0,
        }
    }

    pub fn with_table_output(mut self, table_path: PathBuf) -> Self {
        self.table_path = Some(table_path);
        self
    }

    pub fn with_policy(mut self, policy: CompletenessPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Main processing pipeline
    pub fn run(&self) -> Result<JobSummary> {
        info!("Starting lollipop plot for {:?}", self.clinvar_path);
        info!("Completeness policy: {:?}", self.policy);

        // 1. Check outputs before doing any work
        check_output_extension(&self.figure_path, OutputFormat::Svg)?;
        if let Some(table_path) = &self.table_path {
            check_output_extension(table_path, OutputFormat::Json)?;
        }

        // 2. Validate the ClinVar export
        let validator = InputValidator::new();
        validator.validate_clinvar_file(&self.clinvar_path)?;

        // 3. Convert ClinVar rows
        info!("Converting ClinVar rows");
        let table = ClinvarReader::with_policy(self.policy)
            .read(&self.clinvar_path)
            .with_context(|| format!("Failed to convert {:?}", self.clinvar_path))?;
        if table.is_empty() {
            warn!("No variants survived conversion; figure will contain gene models only");
        }

        // 4. Load gene models
        info!("Loading gene models");
        let genes = self.load_genes(&validator)?;
        log_unplotted_genes(&table, &genes);

        // 5. Render
        info!("Rendering {} panel(s)", genes.len());
        let figure = render(&table, &genes).context("Failed to render figure")?;

        // 6. Write outputs
        FigureWriter::new(self.dpi)
            .write(&figure, &self.figure_path)
            .with_context(|| format!("Failed to write figure to {:?}", self.figure_path))?;
        if let Some(table_path) = &self.table_path {
            write_table_json(&table, table_path)
                .with_context(|| format!("Failed to write table to {:?}", table_path))?;
        }

        info!("Processing complete, result: {:?}", self.figure_path);
        Ok(JobSummary {
            variants: table.len(),
            genes: genes.iter().map(|g| g.name.clone()).collect(),
            figure_path: self.figure_path.clone(),
            table_path: self.table_path.clone(),
        })
    }

    fn load_genes(&self, validator: &InputValidator) -> Result<Vec<GeneModel>> {
        let mut genes = Vec::new();
        for path in &self.gene_paths {
            let loaded = load_gene_models(path)
                .with_context(|| format!("Failed to load gene models from {:?}", path))?;
            for gene in &loaded {
                validator.validate_gene_model(gene)?;
            }
            genes.extend(loaded);
        }
        if genes.is_empty() {
            anyhow::bail!("No gene models provided");
        }
        Ok(genes)
    }
}

fn check_output_extension(path: &Path, expected: OutputFormat) -> Result<()> {
    match OutputFormat::for_path(path) {
        Some(format) if format == expected => Ok(()),
        _ => anyhow::bail!(
            "Output {:?} must have a .{} extension",
            path,
            expected.extension()
        ),
    }
}

/// Warn about variants whose gene has no model in the figure
fn log_unplotted_genes(table: &VariantTable, genes: &[GeneModel]) {
    let unplotted = table
        .iter()
        .filter(|r| !genes.iter().any(|g| g.name == r.gene))
        .count();
    if unplotted > 0 {
        warn!(
            "{} variant(s) belong to genes without a gene model and will not be drawn",
            unplotted
        );
    }
}
