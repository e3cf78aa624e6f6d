// ==============================================================================
// models.rs - Variant and Gene Model Data Structures
// ==============================================================================
// Description: Normalized ClinVar variant records and gene schematic models
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinical significance category, stored as its short code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClinicalSignificance {
    /// Conflicting interpretations of pathogenicity
    #[serde(rename = "C")]
    Conflicting,
    /// Benign
    #[serde(rename = "B")]
    Benign,
    /// Likely benign (also "Benign/Likely benign")
    #[serde(rename = "LB")]
    LikelyBenign,
    /// Uncertain significance
    #[serde(rename = "VUS")]
    UncertainSignificance,
    /// Likely pathogenic (also "Pathogenic/Likely pathogenic")
    #[serde(rename = "LP")]
    LikelyPathogenic,
    /// Pathogenic
    #[serde(rename = "P")]
    Pathogenic,
    /// Risk factor
    #[serde(rename = "R")]
    RiskFactor,
}

impl ClinicalSignificance {
    pub fn code(&self) -> &'static str {
        match self {
            ClinicalSignificance::Conflicting => "C",
            ClinicalSignificance::Benign => "B",
            ClinicalSignificance::LikelyBenign => "LB",
            ClinicalSignificance::UncertainSignificance => "VUS",
            ClinicalSignificance::LikelyPathogenic => "LP",
            ClinicalSignificance::Pathogenic => "P",
            ClinicalSignificance::RiskFactor => "R",
        }
    }
}

impl fmt::Display for ClinicalSignificance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Normalized variant record (one converted ClinVar row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRecord {
    /// Gene symbol, verbatim from the "Gene(s)" column
    pub gene: String,
    /// Full ClinVar variant name (e.g., "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)")
    pub hgvs: String,
    /// Coding nucleotide position; negative values are 5' UTR offsets
    pub nt_position: Option<i64>,
    /// Protein residue position
    pub aa_position: Option<i64>,
    /// Significance code
    pub clinsig: ClinicalSignificance,
    /// Review confidence score (0-4)
    pub stars: u8,
}

/// Ordered table of normalized variant records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantTable {
    records: Vec<VariantRecord>,
}

impl VariantTable {
    pub fn new(records: Vec<VariantRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VariantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariantRecord> {
        self.records.iter()
    }

    /// Amino acid positions for `gene` whose significance is one of `codes`
    ///
    /// Rows without a protein position are skipped. Table order is preserved.
    pub fn protein_positions(&self, gene: &str, codes: &[ClinicalSignificance]) -> Vec<i64> {
        self.records
            .iter()
            .filter(|r| r.gene == gene && codes.contains(&r.clinsig))
            .filter_map(|r| r.aa_position)
            .collect()
    }
}

impl From<Vec<VariantRecord>> for VariantTable {
    fn from(records: Vec<VariantRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a VariantTable {
    type Item = &'a VariantRecord;
    type IntoIter = std::slice::Iter<'a, VariantRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// CSS color string (e.g., "#d95f02" or "white")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn black() -> Self {
        Self::new("black")
    }

    pub fn white() -> Self {
        Self::new("white")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Annotated protein domain, a closed interval in residue coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub start: u32,
    pub end: u32,
    pub name: String,
    pub color: Color,
    pub textcolor: Color,
}

impl Domain {
    /// Number of residues covered, both ends inclusive
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }
}

/// Text placed beside one end of the gene body (e.g., "N" / "C")
///
/// `side` is kept as written in the document; only "left" and "right" can be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndLabel {
    pub side: String,
    pub text: String,
    pub textcolor: Color,
}

/// Gene/protein schematic drawn under the lollipops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneModel {
    /// Gene symbol, matched against `VariantRecord::gene`
    pub name: String,
    /// Protein length in residues
    pub length: u32,
    #[serde(default)]
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub endlabels: Vec<EndLabel>,
}

impl GeneModel {
    pub fn new(name: impl Into<String>, length: u32) -> Self {
        Self {
            name: name.into(),
            length,
            domains: Vec::new(),
            endlabels: Vec::new(),
        }
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domains.push(domain);
        self
    }

    pub fn with_endlabel(mut self, endlabel: EndLabel) -> Self {
        self.endlabels.push(endlabel);
        self
    }
}
