// ==============================================================================
// validator.rs - Input Validation
// ==============================================================================
// Description: Validates ClinVar exports and gene models before processing
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::models::GeneModel;
use crate::parsers::clinvar::{missing_columns, read_header};

const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024; // 500 MB

const GZIP_MAGIC: [u8; 3] = [0x1f, 0x8b, 0x08];

pub struct InputValidator {
    max_file_size: u64,
    allowed_types: HashMap<String, Vec<u8>>,
}

impl InputValidator {
    pub fn new() -> Self {
        let mut allowed_types = HashMap::new();

        // ClinVar "Download results" tab-delimited text
        allowed_types.insert("txt".to_string(), vec![]);
        allowed_types.insert("tsv".to_string(), vec![]);

        // Gzip compressed exports
        allowed_types.insert("txt.gz".to_string(), GZIP_MAGIC.to_vec());
        allowed_types.insert("tsv.gz".to_string(), GZIP_MAGIC.to_vec());

        Self {
            max_file_size: MAX_FILE_SIZE,
            allowed_types,
        }
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Check size, type and header of a ClinVar export
    pub fn validate_clinvar_file(&self, file_path: &Path) -> Result<()> {
        info!("Validating ClinVar export: {:?}", file_path);

        // 1. Size check
        let metadata = std::fs::metadata(file_path)
            .with_context(|| format!("Failed to get file metadata for {:?}", file_path))?;
        let size = metadata.len();

        if size > self.max_file_size {
            anyhow::bail!(
                "File too large: {} bytes (max: {} bytes)",
                size,
                self.max_file_size
            );
        }
        debug!("Size check passed: {} bytes", size);

        // 2. Extension check (allowlist)
        let file_name = file_path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Invalid file path"))?
            .to_string_lossy()
            .to_string();
        let ext = self.get_extension(&file_name)?;
        let expected_magic = self
            .allowed_types
            .get(&ext)
            .ok_or_else(|| anyhow::anyhow!("Invalid file type: {}", ext))?;
        debug!("Extension check passed: {}", ext);

        // 3. Magic number verification
        if !expected_magic.is_empty() {
            let actual_magic = self.read_magic_number(file_path)?;
            if !self.verify_magic_number(expected_magic, &actual_magic) {
                anyhow::bail!("Magic number mismatch for .{} file", ext);
            }
            debug!("Magic number check passed");
        }

        // 4. Header check
        self.validate_header(file_path)?;
        debug!("Header check passed");

        Ok(())
    }

    /// Check that a gene model can be drawn
    ///
    /// End label sides are not checked here; the plotter rejects them when drawing.
    pub fn validate_gene_model(&self, gene: &GeneModel) -> Result<()> {
        if gene.name.trim().is_empty() {
            anyhow::bail!("Gene model name must not be empty");
        }
        if gene.length == 0 {
            anyhow::bail!("Gene model '{}' must have a positive length", gene.name);
        }
        for domain in &gene.domains {
            if domain.start == 0 || domain.start > domain.end {
                anyhow::bail!(
                    "Domain '{}' of '{}' has invalid interval [{}, {}]",
                    domain.name,
                    gene.name,
                    domain.start,
                    domain.end
                );
            }
        }
        debug!(
            "Gene model '{}' passed validation ({} residues, {} domains)",
            gene.name,
            gene.length,
            gene.domains.len()
        );
        Ok(())
    }

    fn get_extension(&self, filename: &str) -> Result<String> {
        // Handle compound extensions like .txt.gz
        let lower = filename.to_lowercase();
        for compound in ["txt.gz", "tsv.gz"] {
            if lower.ends_with(&format!(".{}", compound)) {
                return Ok(compound.to_string());
            }
        }

        // Single extension
        match lower.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => Ok(ext.to_string()),
            _ => anyhow::bail!("No file extension found"),
        }
    }

    fn read_magic_number(&self, path: &Path) -> Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buffer = vec![0u8; 4];
        file.read_exact(&mut buffer)
            .context("File too short to contain a magic number")?;
        Ok(buffer)
    }

    fn verify_magic_number(&self, expected: &[u8], actual: &[u8]) -> bool {
        expected.len() <= actual.len()
            && expected.iter().zip(actual.iter()).all(|(e, a)| e == a)
    }

    fn validate_header(&self, path: &Path) -> Result<()> {
        let headers = read_header(path)
            .with_context(|| format!("Failed to read header of {:?}", path))?;
        if headers.is_empty() {
            anyhow::bail!("File is empty");
        }

        let missing = missing_columns(&headers);
        if !missing.is_empty() {
            anyhow::bail!(
                "Not a ClinVar tabular export: missing column(s) {}",
                missing.join(", ")
            );
        }

        Ok(())
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
