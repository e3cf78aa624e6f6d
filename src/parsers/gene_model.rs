// ==============================================================================
// gene_model.rs - Gene Model Document Loader
// ==============================================================================
// Description: Loads gene schematic definitions (length, domains, end labels)
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================
// Format: JSON, either a single gene object or an array of them
// Example:
//   {
//     "name": "PTEN",
//     "length": 403,
//     "domains": [
//       {"start": 14, "end": 185, "name": "Phosphatase", "color": "#e6ab02", "textcolor": "black"}
//     ],
//     "endlabels": [
//       {"side": "left", "text": "N", "textcolor": "black"}
//     ]
//   }
// ==============================================================================

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::GeneModel;

/// Errors that can occur while loading gene model documents
#[derive(Error, Debug)]
pub enum GeneModelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A gene model document holds one gene or an ordered list of genes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeneModelDocument {
    Single(GeneModel),
    Multiple(Vec<GeneModel>),
}

impl From<GeneModelDocument> for Vec<GeneModel> {
    fn from(document: GeneModelDocument) -> Self {
        match document {
            GeneModelDocument::Single(gene) => vec![gene],
            GeneModelDocument::Multiple(genes) => genes,
        }
    }
}

/// Load gene models from a JSON file, in document order
pub fn load_gene_models(path: impl AsRef<Path>) -> Result<Vec<GeneModel>, GeneModelError> {
    let file = File::open(path.as_ref())?;
    let document: GeneModelDocument = serde_json::from_reader(BufReader::new(file))?;
    let genes: Vec<GeneModel> = document.into();
    debug!("Loaded {} gene model(s) from {:?}", genes.len(), path.as_ref());
    Ok(genes)
}

/// Parse gene models from a JSON string
pub fn parse_gene_models(json: &str) -> Result<Vec<GeneModel>, GeneModelError> {
    let document: GeneModelDocument = serde_json::from_str(json)?;
    Ok(document.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PTEN: &str = r##"{
        "name": "PTEN",
        "length": 403,
        "domains": [
            {"start": 14, "end": 185, "name": "Phosphatase", "color": "#e6ab02", "textcolor": "black"},
            {"start": 190, "end": 350, "name": "C2", "color": "#66a61e", "textcolor": "white"}
        ],
        "endlabels": [
            {"side": "left", "text": "N", "textcolor": "black"},
            {"side": "right", "text": "C", "textcolor": "black"}
        ]
    }"##;

    #[test]
    fn test_parse_single_gene() {
        let genes = parse_gene_models(PTEN).unwrap();
        assert_eq!(genes.len(), 1);

        let gene = &genes[0];
        assert_eq!(gene.name, "PTEN");
        assert_eq!(gene.length, 403);
        assert_eq!(gene.domains.len(), 2);
        assert_eq!(gene.domains[1].name, "C2");
        assert_eq!(gene.domains[1].textcolor.as_str(), "white");
        assert_eq!(gene.endlabels[1].side, "right");
    }

    #[test]
    fn test_parse_gene_list_preserves_order() {
        let json = r#"[{"name": "TP53", "length": 393}, {"name": "PTEN", "length": 403}]"#;
        let genes = parse_gene_models(json).unwrap();
        let names: Vec<_> = genes.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["TP53", "PTEN"]);
    }

    #[test]
    fn test_unknown_side_is_accepted_at_load_time() {
        let json = r#"{"name": "PTEN", "length": 403,
            "endlabels": [{"side": "top", "text": "N", "textcolor": "black"}]}"#;
        let genes = parse_gene_models(json).unwrap();
        assert_eq!(genes[0].endlabels[0].side, "top");
    }

    #[test]
    fn test_missing_length_is_error() {
        let result = parse_gene_models(r#"{"name": "PTEN"}"#);
        assert!(matches!(result, Err(GeneModelError::JsonError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(PTEN.as_bytes()).unwrap();
        file.flush().unwrap();

        let genes = load_gene_models(file.path()).unwrap();
        assert_eq!(genes[0].domains[0].start, 14);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_gene_models("/nonexistent/PTEN.json");
        assert!(matches!(result, Err(GeneModelError::IoError(_))));
    }
}
