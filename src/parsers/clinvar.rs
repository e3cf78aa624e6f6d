// ==============================================================================
// clinvar.rs - ClinVar Tabular Export Parser
// ==============================================================================
// Description: Converts ClinVar tab-delimited search results into variant records
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================
// Format: Tab-delimited text with a header row, optionally gzip-compressed
// Example:
//   Name	Gene(s)	Clinical significance (Last reviewed)	Review status
//   NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)	PTEN	Pathogenic(Last reviewed: Jun 1, 2020)	reviewed by expert panel
// Only the four columns above are read; any other columns are ignored.
// ==============================================================================

use csv::{Reader, ReaderBuilder, StringRecord};
use flate2::read::MultiGzDecoder;
use regex::Regex;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{ClinicalSignificance, VariantRecord, VariantTable};

pub const NAME_COLUMN: &str = "Name";
pub const GENE_COLUMN: &str = "Gene(s)";
pub const SIGNIFICANCE_COLUMN: &str = "Clinical significance (Last reviewed)";
pub const REVIEW_STATUS_COLUMN: &str = "Review status";

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 4] = [
    NAME_COLUMN,
    GENE_COLUMN,
    SIGNIFICANCE_COLUMN,
    REVIEW_STATUS_COLUMN,
];

/// Review status text to confidence stars
pub const REVIEW_STARS: &[(&str, u8)] = &[
    ("no assertion criteria provided", 0),
    ("criteria provided, conflicting interpretations", 0),
    ("criteria provided, single submitter", 1),
    ("criteria provided, multiple submitters, no conflicts", 2),
    ("reviewed by expert panel", 3),
    ("practice guideline", 4),
];

/// Clinical significance text (before any parenthetical) to significance code
pub const SIGNIFICANCE_CODES: &[(&str, ClinicalSignificance)] = &[
    ("Conflicting interpretations of pathogenicity", ClinicalSignificance::Conflicting),
    ("Benign", ClinicalSignificance::Benign),
    ("Likely benign", ClinicalSignificance::LikelyBenign),
    ("Benign/Likely benign", ClinicalSignificance::LikelyBenign),
    ("Uncertain significance", ClinicalSignificance::UncertainSignificance),
    ("Likely pathogenic", ClinicalSignificance::LikelyPathogenic),
    ("Pathogenic/Likely pathogenic", ClinicalSignificance::LikelyPathogenic),
    ("Pathogenic", ClinicalSignificance::Pathogenic),
    ("Risk factor", ClinicalSignificance::RiskFactor),
];

/// Coding DNA substitution, e.g. "c.112C>T" or "c.-9G>A"
static NT_SUBSTITUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"c\.(-?[0-9]+)[ACGT]>[ACGT]").unwrap());

/// Protein substitution with three-letter codes, e.g. "p.Pro38Ser"
static AA_SUBSTITUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"p\.[A-Z][a-z]{2}(-?[0-9]+)[A-Z][a-z]{2}").unwrap());

/// Raw ClinVar row, restricted to the columns the converter reads
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClinvarRow {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Gene(s)")]
    pub genes: String,

    #[serde(rename = "Clinical significance (Last reviewed)")]
    pub clinical_significance: String,

    #[serde(rename = "Review status")]
    pub review_status: String,
}

/// Errors that can occur during ClinVar file conversion
#[derive(Error, Debug)]
pub enum ClinvarParseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Row has no value for column '{column}'{}", describe_line(.line))]
    TruncatedRow {
        column: &'static str,
        line: Option<u64>,
    },

    #[error("Unknown category in column '{column}': '{value}'{}", describe_line(.line))]
    UnknownCategory {
        column: &'static str,
        value: String,
        line: Option<u64>,
    },
}

fn describe_line(line: &Option<u64>) -> String {
    match line {
        Some(line) => format!(" (line {})", line),
        None => String::new(),
    }
}

impl ClinvarParseError {
    fn at_line(self, line: Option<u64>) -> Self {
        match self {
            ClinvarParseError::UnknownCategory { column, value, .. } => {
                ClinvarParseError::UnknownCategory { column, value, line }
            }
            other => other,
        }
    }
}

/// Which converted rows are kept in the final table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletenessPolicy {
    /// Keep only rows with every field present, both positions included
    #[default]
    AllFields,
    /// Keep rows with a protein position even if the nucleotide position is missing
    ProteinPosition,
}

impl CompletenessPolicy {
    pub fn accepts(&self, record: &VariantRecord) -> bool {
        if record.gene.is_empty() || record.hgvs.is_empty() || record.aa_position.is_none() {
            return false;
        }
        match self {
            CompletenessPolicy::AllFields => record.nt_position.is_some(),
            CompletenessPolicy::ProteinPosition => true,
        }
    }
}

/// Parser for ClinVar tabular exports
#[derive(Debug, Clone, Default)]
pub struct ClinvarReader {
    pub policy: CompletenessPolicy,
}

impl ClinvarReader {
    /// Create a reader that drops any row with a missing field
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CompletenessPolicy) -> Self {
        Self { policy }
    }

    /// Read and convert a ClinVar tabular file
    ///
    /// # Arguments
    /// * `path` - Path to the export (".gz" files are decompressed)
    ///
    /// # Returns
    /// * `Ok(VariantTable)` - Converted rows that pass the completeness policy, in file order
    /// * `Err(ClinvarParseError)` - IO/CSV error, missing column, truncated row, or an unmapped
    ///   significance/review status anywhere in the file (no partial table is returned)
    pub fn read(&self, path: impl AsRef<Path>) -> Result<VariantTable, ClinvarParseError> {
        let path = path.as_ref();
        let mut reader = tabular_reader(path)?;

        let headers = reader.headers()?.clone();
        let indices = required_column_indices(&headers)?;
        let required = StringRecord::from(REQUIRED_COLUMNS.to_vec());

        let mut converted = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line());
            let projected = project_required(&record, &indices, line)?;
            let row: ClinvarRow = projected.deserialize(Some(&required))?;
            let variant = convert_row(&row).map_err(|e| e.at_line(line))?;
            converted.push(variant);
        }

        let rows_read = converted.len();
        let kept = drop_incomplete_rows(converted, self.policy);
        info!(
            "Read {} ClinVar rows from {:?}, kept {} ({} dropped by {:?} policy)",
            rows_read,
            path,
            kept.len(),
            rows_read - kept.len(),
            self.policy
        );

        Ok(VariantTable::new(kept))
    }
}

/// Read a ClinVar tabular file, keeping only rows with every field present
pub fn read_tabular_file(path: impl AsRef<Path>) -> Result<VariantTable, ClinvarParseError> {
    ClinvarReader::new().read(path)
}

/// Convert one ClinVar row into a variant record
///
/// Positions that cannot be parsed from the name are left as `None`. Significance and
/// review status must be present in the fixed lookup tables.
pub fn convert_row(row: &ClinvarRow) -> Result<VariantRecord, ClinvarParseError> {
    let hgvs = row.name.clone();
    let nt_position = capture_position(&NT_SUBSTITUTION, &hgvs);
    let aa_position = capture_position(&AA_SUBSTITUTION, &hgvs);
    let clinsig = lookup_significance(&row.clinical_significance)?;
    let stars = lookup_review_stars(&row.review_status)?;

    Ok(VariantRecord {
        gene: row.genes.clone(),
        hgvs,
        nt_position,
        aa_position,
        clinsig,
        stars,
    })
}

/// Keep only the records accepted by `policy`, preserving order
pub fn drop_incomplete_rows(
    records: Vec<VariantRecord>,
    policy: CompletenessPolicy,
) -> Vec<VariantRecord> {
    records
        .into_iter()
        .filter(|record| {
            let keep = policy.accepts(record);
            if !keep {
                debug!("Dropping incomplete row: {}", record.hgvs);
            }
            keep
        })
        .collect()
}

/// Map significance text to its code, ignoring any "(...)" suffix
pub fn lookup_significance(raw: &str) -> Result<ClinicalSignificance, ClinvarParseError> {
    let key = raw.split('(').next().unwrap_or_default().trim_end();
    SIGNIFICANCE_CODES
        .iter()
        .find(|(text, _)| *text == key)
        .map(|(_, code)| *code)
        .ok_or_else(|| ClinvarParseError::UnknownCategory {
            column: SIGNIFICANCE_COLUMN,
            value: raw.to_string(),
            line: None,
        })
}

/// Map review status text to confidence stars
pub fn lookup_review_stars(raw: &str) -> Result<u8, ClinvarParseError> {
    REVIEW_STARS
        .iter()
        .find(|(text, _)| *text == raw)
        .map(|(_, stars)| *stars)
        .ok_or_else(|| ClinvarParseError::UnknownCategory {
            column: REVIEW_STATUS_COLUMN,
            value: raw.to_string(),
            line: None,
        })
}

fn capture_position(pattern: &Regex, hgvs: &str) -> Option<i64> {
    pattern
        .captures(hgvs)
        .and_then(|caps| caps.get(1))
        .and_then(|m| match m.as_str().parse() {
            Ok(position) => Some(position),
            Err(e) => {
                debug!("Position '{}' in {} is out of range: {}", m.as_str(), hgvs, e);
                None
            }
        })
}

/// Read the header row of a ClinVar export, decompressing ".gz" files
pub fn read_header(path: impl AsRef<Path>) -> Result<StringRecord, ClinvarParseError> {
    let mut reader = tabular_reader(path.as_ref())?;
    Ok(reader.headers()?.clone())
}

/// Required columns absent from `headers`, in column order
pub fn missing_columns(headers: &StringRecord) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect()
}

/// Header positions of the required columns, in `REQUIRED_COLUMNS` order
fn required_column_indices(headers: &StringRecord) -> Result<Vec<usize>, ClinvarParseError> {
    REQUIRED_COLUMNS
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|h| h == *column)
                .ok_or_else(|| ClinvarParseError::MissingColumn(column.to_string()))
        })
        .collect()
}

/// Keep only the required fields of a row; a row too short to hold one is an error
fn project_required(
    record: &StringRecord,
    indices: &[usize],
    line: Option<u64>,
) -> Result<StringRecord, ClinvarParseError> {
    REQUIRED_COLUMNS
        .iter()
        .zip(indices)
        .map(|(column, &index)| {
            record.get(index).ok_or_else(|| ClinvarParseError::TruncatedRow {
                column: *column,
                line,
            })
        })
        .collect()
}

/// Rows may be shorter or longer than the header; only the named columns are read
fn tabular_reader(path: &Path) -> Result<Reader<Box<dyn Read>>, ClinvarParseError> {
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(open_input(path)?))
}

/// Whether a path names a gzip-compressed file
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

fn open_input(path: &Path) -> Result<Box<dyn Read>, ClinvarParseError> {
    let file = File::open(path)?;
    if is_gzip_path(path) {
        Ok(Box::new(MultiGzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Name\tGene(s)\tProtein change\tClinical significance (Last reviewed)\tReview status";

    /// Create a temporary test file with the given ClinVar rows
    fn create_test_file(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn row(name: &str, significance: &str, review: &str) -> ClinvarRow {
        ClinvarRow {
            name: name.to_string(),
            genes: "PTEN".to_string(),
            clinical_significance: significance.to_string(),
            review_status: review.to_string(),
        }
    }

    #[test]
    fn test_convert_row_extracts_positions() {
        let record = convert_row(&row(
            "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)",
            "Pathogenic(Last reviewed: Jun 01, 2020)",
            "reviewed by expert panel",
        ))
        .unwrap();

        assert_eq!(record.gene, "PTEN");
        assert_eq!(record.hgvs, "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)");
        assert_eq!(record.nt_position, Some(112));
        assert_eq!(record.aa_position, Some(38));
        assert_eq!(record.clinsig, ClinicalSignificance::Pathogenic);
        assert_eq!(record.stars, 3);
    }

    #[test]
    fn test_convert_row_negative_nucleotide_position() {
        let record = convert_row(&row(
            "NM_000314.8(PTEN):c.-9C>G",
            "Uncertain significance",
            "criteria provided, single submitter",
        ))
        .unwrap();

        assert_eq!(record.nt_position, Some(-9));
        assert_eq!(record.aa_position, None);
        assert_eq!(record.clinsig, ClinicalSignificance::UncertainSignificance);
        assert_eq!(record.stars, 1);
    }

    #[test]
    fn test_convert_row_unmatched_patterns_are_none() {
        let record = convert_row(&row(
            "NM_000314.8(PTEN):c.209+1G>T",
            "Likely pathogenic",
            "no assertion criteria provided",
        ))
        .unwrap();

        assert_eq!(record.nt_position, None);
        assert_eq!(record.aa_position, None);
    }

    #[test]
    fn test_significance_suffix_is_ignored() {
        assert_eq!(
            lookup_significance("Pathogenic (3-star)").unwrap(),
            lookup_significance("Pathogenic").unwrap()
        );
        assert_eq!(
            lookup_significance("Pathogenic (3-star)").unwrap(),
            ClinicalSignificance::Pathogenic
        );
        assert_eq!(
            lookup_significance("Benign/Likely benign(Last reviewed: Mar 3, 2019)").unwrap(),
            ClinicalSignificance::LikelyBenign
        );
        assert_eq!(
            lookup_significance("Risk factor").unwrap(),
            ClinicalSignificance::RiskFactor
        );
    }

    #[test]
    fn test_review_stars_table() {
        assert_eq!(lookup_review_stars("no assertion criteria provided").unwrap(), 0);
        assert_eq!(
            lookup_review_stars("criteria provided, conflicting interpretations").unwrap(),
            0
        );
        assert_eq!(
            lookup_review_stars("criteria provided, multiple submitters, no conflicts").unwrap(),
            2
        );
        assert_eq!(lookup_review_stars("practice guideline").unwrap(), 4);
    }

    #[test]
    fn test_unknown_significance_is_error() {
        let result = convert_row(&row(
            "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)",
            "drug response",
            "reviewed by expert panel",
        ));
        match result.unwrap_err() {
            ClinvarParseError::UnknownCategory { column, value, .. } => {
                assert_eq!(column, SIGNIFICANCE_COLUMN);
                assert_eq!(value, "drug response");
            }
            e => panic!("Expected UnknownCategory error, got {:?}", e),
        }
    }

    #[test]
    fn test_unknown_review_status_is_error() {
        let result = convert_row(&row(
            "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)",
            "Benign",
            "no interpretation for the single variant",
        ));
        match result.unwrap_err() {
            ClinvarParseError::UnknownCategory { column, .. } => {
                assert_eq!(column, REVIEW_STATUS_COLUMN);
            }
            e => panic!("Expected UnknownCategory error, got {:?}", e),
        }
    }

    #[test]
    fn test_read_drops_incomplete_rows() {
        let file = create_test_file(&[
            "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)\tPTEN\tP38S\tPathogenic\treviewed by expert panel",
            "NM_000314.8(PTEN):c.-9C>G\tPTEN\t\tBenign\tcriteria provided, single submitter",
            "NP_000305.3:p.Arg130Gln\tPTEN\tR130Q\tLikely pathogenic\tcriteria provided, single submitter",
            "NM_000314.8(PTEN):c.209+1G>T\tPTEN\t\tPathogenic\tpractice guideline",
            "NM_000314.8(PTEN):c.518G>A (p.Arg173His)\tPTEN\tR173H\tUncertain significance\tno assertion criteria provided",
        ]);

        let table = read_tabular_file(file.path()).unwrap();

        // c.-9 has no protein change, p.Arg130Gln has no coding change, c.209+1 has neither
        assert_eq!(table.len(), 2);
        let records = table.records();
        assert_eq!(records[0].aa_position, Some(38));
        assert_eq!(records[0].nt_position, Some(112));
        assert_eq!(records[1].aa_position, Some(173));
        assert_eq!(records[1].clinsig, ClinicalSignificance::UncertainSignificance);
        assert_eq!(records[1].stars, 0);
        assert!(table
            .iter()
            .all(|r| r.nt_position.is_some() && r.aa_position.is_some()));
    }

    #[test]
    fn test_read_protein_position_policy_keeps_protein_only_rows() {
        let file = create_test_file(&[
            "NP_000305.3:p.Arg130Gln\tPTEN\tR130Q\tLikely pathogenic\tcriteria provided, single submitter",
            "NM_000314.8(PTEN):c.-9C>G\tPTEN\t\tBenign\tcriteria provided, single submitter",
        ]);

        let table = ClinvarReader::with_policy(CompletenessPolicy::ProteinPosition)
            .read(file.path())
            .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].aa_position, Some(130));
        assert_eq!(table.records()[0].nt_position, None);
    }

    #[test]
    fn test_read_unknown_category_aborts_conversion() {
        let file = create_test_file(&[
            "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)\tPTEN\tP38S\tPathogenic\treviewed by expert panel",
            "NM_000314.8(PTEN):c.113C>T (p.Pro38Leu)\tPTEN\tP38L\tprotective\treviewed by expert panel",
        ]);

        let result = read_tabular_file(file.path());
        match result.unwrap_err() {
            ClinvarParseError::UnknownCategory { value, line, .. } => {
                assert_eq!(value, "protective");
                assert_eq!(line, Some(3));
            }
            e => panic!("Expected UnknownCategory error, got {:?}", e),
        }
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let result = read_tabular_file("/nonexistent/clinvar_result.txt");
        assert!(matches!(result, Err(ClinvarParseError::IoError(_))));
    }

    #[test]
    fn test_read_missing_column() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Name\tGene(s)\tReview status").unwrap();
        writeln!(file, "c.1A>G\tPTEN\tpractice guideline").unwrap();
        file.flush().unwrap();

        match read_tabular_file(file.path()).unwrap_err() {
            ClinvarParseError::MissingColumn(column) => assert_eq!(column, SIGNIFICANCE_COLUMN),
            e => panic!("Expected MissingColumn error, got {:?}", e),
        }
    }

    #[test]
    fn test_read_gzip_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinvar_result.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        writeln!(encoder, "{}", HEADER).unwrap();
        writeln!(
            encoder,
            "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)\tPTEN\tP38S\tPathogenic\treviewed by expert panel"
        )
        .unwrap();
        encoder.finish().unwrap();

        let table = read_tabular_file(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].aa_position, Some(38));
    }

    #[test]
    fn test_read_tolerates_short_trailing_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Name\tGene(s)\tClinical significance (Last reviewed)\tReview status\tVariation ID").unwrap();
        writeln!(file, "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)\tPTEN\tPathogenic\tpractice guideline\t7812").unwrap();
        writeln!(file, "NM_000314.8(PTEN):c.389G>A (p.Arg130Gln)\tPTEN\tBenign\tpractice guideline").unwrap();
        file.flush().unwrap();

        let table = read_tabular_file(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].aa_position, Some(130));
        assert_eq!(table.records()[1].clinsig, ClinicalSignificance::Benign);
    }

    #[test]
    fn test_read_row_without_required_field_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Name\tGene(s)\tClinical significance (Last reviewed)\tReview status").unwrap();
        writeln!(file, "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)\tPTEN").unwrap();
        file.flush().unwrap();

        match read_tabular_file(file.path()).unwrap_err() {
            ClinvarParseError::TruncatedRow { column, line } => {
                assert_eq!(column, SIGNIFICANCE_COLUMN);
                assert_eq!(line, Some(2));
            }
            e => panic!("Expected TruncatedRow error, got {:?}", e),
        }
    }

    #[test]
    fn test_read_header_strips_byte_order_mark() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "\u{feff}{}", HEADER).unwrap();
        writeln!(
            file,
            "NM_000314.8(PTEN):c.112C>T (p.Pro38Ser)\tPTEN\tP38S\tPathogenic\treviewed by expert panel"
        )
        .unwrap();
        file.flush().unwrap();

        let headers = read_header(file.path()).unwrap();
        assert!(missing_columns(&headers).is_empty());
        assert_eq!(read_tabular_file(file.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_columns_lists_every_absent_column() {
        let headers = StringRecord::from(vec!["Name", "Gene(s)"]);
        assert_eq!(
            missing_columns(&headers),
            vec![SIGNIFICANCE_COLUMN, REVIEW_STATUS_COLUMN]
        );
    }

    #[test]
    fn test_non_ascii_or_overflowing_positions_are_none() {
        // Arabic-Indic digits
        let record = convert_row(&row(
            "NM_000314.8(PTEN):c.\u{0661}\u{0662}C>T (p.Pro\u{0663}8Ser)",
            "Benign",
            "practice guideline",
        ))
        .unwrap();
        assert_eq!(record.nt_position, None);
        assert_eq!(record.aa_position, None);

        let record = convert_row(&row(
            "NM_000314.8(PTEN):c.99999999999999999999C>T (p.Pro38Ser)",
            "Benign",
            "practice guideline",
        ))
        .unwrap();
        assert_eq!(record.nt_position, None);
        assert_eq!(record.aa_position, Some(38));
    }

    #[test]
    fn test_drop_incomplete_rows_preserves_order() {
        let make = |hgvs: &str, nt: Option<i64>, aa: Option<i64>| VariantRecord {
            gene: "PTEN".to_string(),
            hgvs: hgvs.to_string(),
            nt_position: nt,
            aa_position: aa,
            clinsig: ClinicalSignificance::Benign,
            stars: 2,
        };
        let records = vec![
            make("a", Some(1), Some(1)),
            make("b", None, Some(2)),
            make("c", Some(3), None),
            make("d", Some(4), Some(2)),
        ];

        let kept = drop_incomplete_rows(records.clone(), CompletenessPolicy::AllFields);
        let names: Vec<_> = kept.iter().map(|r| r.hgvs.as_str()).collect();
        assert_eq!(names, vec!["a", "d"]);

        let kept = drop_incomplete_rows(records, CompletenessPolicy::ProteinPosition);
        let names: Vec<_> = kept.iter().map(|r| r.hgvs.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "d"]);
    }
}
