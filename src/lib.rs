// ==============================================================================
// lib.rs - PlotSF Library
// ==============================================================================
// Description: Library interface for ClinVar conversion and lollipop plotting
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================

pub mod parsers;
pub mod validator;
pub mod models;
pub mod figure;
pub mod plot;
pub mod output;
pub mod processor;

pub use models::{ClinicalSignificance, GeneModel, VariantRecord, VariantTable};
pub use parsers::{convert_row, read_tabular_file};
pub use plot::{draw_gene_body, draw_lollipops, draw_variants, format_axes, render, render_gene};
