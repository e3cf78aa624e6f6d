// ==============================================================================
// lollipop_example.rs - Example of ClinVar Lollipop Plotting
// ==============================================================================
// Description: Converts the bundled PTEN ClinVar export and renders a figure
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================

use plotsf::output::{write_svg, write_table_json};
use plotsf::parsers::{load_gene_models, read_tabular_file};
use plotsf::plot::{render, SIGNIFICANCE_GROUPS};

const CLINVAR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data/PTEN_clinvar.txt");
const GENES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data/PTEN.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Lollipop Example ===\n");

    // Convert the ClinVar export
    let table = read_tabular_file(CLINVAR)?;
    println!("✓ Converted {} variants\n", table.len());

    println!("{:<45} {:>6} {:>6} {:>5} {:>5}", "HGVS", "c.", "p.", "Sig", "Stars");
    println!("{:-<72}", "");
    for record in &table {
        println!(
            "{:<45} {:>6} {:>6} {:>5} {:>5}",
            record.hgvs,
            record.nt_position.map(|p| p.to_string()).unwrap_or_default(),
            record.aa_position.map(|p| p.to_string()).unwrap_or_default(),
            record.clinsig,
            record.stars
        );
    }

    // Group counts per gene
    let genes = load_gene_models(GENES)?;
    for gene in &genes {
        println!("\n--- {} ({} residues) ---", gene.name, gene.length);
        for group in &SIGNIFICANCE_GROUPS {
            let n = table.protein_positions(&gene.name, group.codes).len();
            println!("{:<30} n={}", group.label, n);
        }
    }

    // Render and write
    let figure = render(&table, &genes)?;
    let out_dir = std::env::temp_dir();
    let svg_path = out_dir.join("PTEN_test.svg");
    let json_path = out_dir.join("PTEN_test.json");
    write_svg(&figure, &svg_path)?;
    write_table_json(&table, &json_path)?;

    println!("\n✓ Figure: {:?}", svg_path);
    println!("✓ Table:  {:?}", json_path);

    println!("\n=== Example Complete ===");

    Ok(())
}
