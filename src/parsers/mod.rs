// ==============================================================================
// parsers/mod.rs - Input parser modules
// ==============================================================================
// Description: Parsers for ClinVar exports and gene model documents
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================

pub mod clinvar;
pub mod gene_model;

pub use clinvar::{
    convert_row, drop_incomplete_rows, read_tabular_file, ClinvarParseError, ClinvarReader,
    ClinvarRow, CompletenessPolicy,
};
pub use gene_model::{load_gene_models, parse_gene_models, GeneModelError};
