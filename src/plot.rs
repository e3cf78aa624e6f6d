// ==============================================================================
// plot.rs - Gene Model Lollipop Plotting
// ==============================================================================
// Description: Lays out gene schematics and variant lollipops into a Figure
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================
// Layout per panel (data coordinates):
//   y in [-body_height, 0]   gene body and domains
//   y in (0, 1]              lollipop stems and markers
//   x in [1, length + 1]     residue positions
// ==============================================================================

use thiserror::Error;
use tracing::debug;

use crate::figure::{
    Artist, Figure, HAlign, LegendEntry, LollipopStyle, MarkerShape, Panel, Spines, Title, VAlign,
};
use crate::models::{ClinicalSignificance, Color, GeneModel, VariantTable};

/// Figure width in inches
pub const FIGURE_WIDTH: f64 = 10.0;

/// Figure height per gene panel in inches
pub const PANEL_HEIGHT: f64 = 2.0;

/// Height of the gene body below the lollipop baseline
pub const GENE_BODY_HEIGHT: f64 = 0.3;

/// Horizontal gap between the gene body and an end label
pub const END_LABEL_SPACING: f64 = 10.0;

pub const X_AXIS_LABEL: &str = "amino acid position";

/// Errors raised while laying out a figure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("unequal number of lollipop heights ({heights}) and positions ({positions})")]
    HeightCountMismatch { heights: usize, positions: usize },

    #[error("endlabel side must be one of 'left' or 'right' (got '{0}')")]
    InvalidEndLabelSide(String),

    #[error("at least one gene model is required")]
    NoGeneModels,

    #[error("gene model '{0}' has zero length")]
    EmptyGeneModel(String),
}

/// Lollipop heights: one value for every position, or one per position
#[derive(Debug, Clone, PartialEq)]
pub enum Heights {
    Uniform(f64),
    PerPosition(Vec<f64>),
}

impl Heights {
    /// Expand to one height per position
    pub fn resolve(&self, positions: usize) -> Result<Vec<f64>, RenderError> {
        match self {
            Heights::Uniform(height) => Ok(vec![*height; positions]),
            Heights::PerPosition(heights) if heights.len() == positions => Ok(heights.clone()),
            Heights::PerPosition(heights) => Err(RenderError::HeightCountMismatch {
                heights: heights.len(),
                positions,
            }),
        }
    }
}

impl From<f64> for Heights {
    fn from(height: f64) -> Self {
        Heights::Uniform(height)
    }
}

impl From<Vec<f64>> for Heights {
    fn from(heights: Vec<f64>) -> Self {
        Heights::PerPosition(heights)
    }
}

/// Fixed significance grouping used for the lollipop layers
#[derive(Debug, Clone, Copy)]
pub struct SignificanceGroup {
    pub label: &'static str,
    pub codes: &'static [ClinicalSignificance],
    pub color: &'static str,
    pub height: f64,
}

/// Groups in paint order. Risk factor variants belong to no group.
pub const SIGNIFICANCE_GROUPS: [SignificanceGroup; 3] = [
    SignificanceGroup {
        label: "VUS/Conflicting",
        codes: &[
            ClinicalSignificance::Conflicting,
            ClinicalSignificance::UncertainSignificance,
        ],
        color: "#1b9e77",
        height: 0.5,
    },
    SignificanceGroup {
        label: "Pathogenic/Likely pathogenic",
        codes: &[
            ClinicalSignificance::Pathogenic,
            ClinicalSignificance::LikelyPathogenic,
        ],
        color: "#d95f02",
        height: 0.7,
    },
    SignificanceGroup {
        label: "Benign/Likely benign",
        codes: &[ClinicalSignificance::Benign, ClinicalSignificance::LikelyBenign],
        color: "#7570b3",
        height: 0.3,
    },
];

impl SignificanceGroup {
    pub fn style(&self) -> LollipopStyle {
        LollipopStyle {
            label: Some(self.label.to_string()),
            marker: MarkerShape::Circle,
            color: Color::new(self.color),
            edge_color: Color::black(),
            z_order: 2,
            ..LollipopStyle::default()
        }
    }
}

/// Render one panel per gene, stacked top to bottom
///
/// Panels are lettered "A", "B", ... when more than one gene is given. The legend is
/// attached to the first panel and the x-axis label to the last.
pub fn render(table: &VariantTable, genes: &[GeneModel]) -> Result<Figure, RenderError> {
    if genes.is_empty() {
        return Err(RenderError::NoGeneModels);
    }
    if let Some(gene) = genes.iter().find(|g| g.length == 0) {
        return Err(RenderError::EmptyGeneModel(gene.name.clone()));
    }

    let mut figure = Figure::new(FIGURE_WIDTH, PANEL_HEIGHT * genes.len() as f64);
    let last = genes.len() - 1;

    for (i, gene) in genes.iter().enumerate() {
        let mut panel = Panel::new();
        if genes.len() > 1 {
            panel.panel_label = Some(panel_letter(i));
        }

        draw_variants(&mut panel, table, gene)?;

        if i == 0 {
            panel.attach_legend();
        }
        if i == last {
            panel.x_label = Some(X_AXIS_LABEL.to_string());
        }
        figure.panels.push(panel);
    }

    Ok(figure)
}

/// Render a single-gene figure
pub fn render_gene(table: &VariantTable, gene: &GeneModel) -> Result<Figure, RenderError> {
    render(table, std::slice::from_ref(gene))
}

/// Panel letter for the zero-based index: A..Z, then AA, AB, ...
fn panel_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Draw the gene body, its domains and end labels
pub fn draw_gene_body(
    panel: &mut Panel,
    gene: &GeneModel,
    body_height: f64,
    vertical_offset: f64,
) -> Result<(), RenderError> {
    let body_y = -body_height + vertical_offset;
    let center_y = body_y + body_height / 2.0;

    panel.add(Artist::Rectangle {
        x: 1.0,
        y: body_y,
        width: gene.length as f64,
        height: body_height,
        fill: Color::white(),
        edge: Color::black(),
        line_width: 1.0,
        z_order: 1,
    });

    for domain in &gene.domains {
        let width = domain.width() as f64;
        panel.add(Artist::Rectangle {
            x: domain.start as f64,
            y: body_y,
            width,
            height: body_height,
            fill: domain.color.clone(),
            edge: Color::black(),
            line_width: 1.0,
            z_order: 1,
        });
        panel.add(Artist::Text {
            x: domain.start as f64 + width / 2.0,
            y: center_y,
            content: domain.name.clone(),
            color: domain.textcolor.clone(),
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            z_order: 3,
        });
    }

    for endlabel in &gene.endlabels {
        let (x, h_align) = match endlabel.side.as_str() {
            "left" => (-END_LABEL_SPACING, HAlign::Right),
            "right" => (gene.length as f64 + END_LABEL_SPACING, HAlign::Left),
            other => return Err(RenderError::InvalidEndLabelSide(other.to_string())),
        };
        panel.add(Artist::Text {
            x,
            y: center_y,
            content: endlabel.text.clone(),
            color: endlabel.textcolor.clone(),
            h_align,
            v_align: VAlign::Center,
            z_order: 3,
        });
    }

    Ok(())
}

/// Set ranges, title and frame for a gene schematic
pub fn format_axes(panel: &mut Panel, gene: &GeneModel, body_height: f64) {
    panel.x_range = (1.0, gene.length as f64 + 1.0);
    panel.y_range = (-body_height, 1.0);
    panel.title = Some(Title {
        text: gene.name.clone(),
        italic: true,
    });
    panel.y_axis_visible = false;
    panel.spines = Spines::none();
}

/// Draw a stem from y=0 to each height with a styled marker on top
pub fn draw_lollipops(
    panel: &mut Panel,
    positions: &[f64],
    heights: &Heights,
    style: &LollipopStyle,
) -> Result<(), RenderError> {
    let heights = heights.resolve(positions.len())?;

    for (&x, &height) in positions.iter().zip(&heights) {
        panel.add(Artist::Line {
            from: (x, 0.0),
            to: (x, height),
            color: Color::black(),
            line_width: 1.0,
            z_order: 1,
        });
    }
    for (&x, &height) in positions.iter().zip(&heights) {
        panel.add(Artist::Marker {
            x,
            y: height,
            shape: style.marker,
            fill: style.color.clone(),
            edge: style.edge_color.clone(),
            size: style.size,
            z_order: style.z_order,
        });
    }

    if let Some(label) = &style.label {
        panel.labelled_groups.push(LegendEntry {
            label: label.clone(),
            marker: style.marker,
            color: style.color.clone(),
            edge_color: style.edge_color.clone(),
        });
    }

    Ok(())
}

/// Draw one gene with its variants grouped by significance
pub fn draw_variants(
    panel: &mut Panel,
    table: &VariantTable,
    gene: &GeneModel,
) -> Result<(), RenderError> {
    format_axes(panel, gene, GENE_BODY_HEIGHT);
    draw_gene_body(panel, gene, GENE_BODY_HEIGHT, 0.0)?;

    for group in &SIGNIFICANCE_GROUPS {
        let positions: Vec<f64> = table
            .protein_positions(&gene.name, group.codes)
            .into_iter()
            .map(|p| p as f64)
            .collect();
        debug!("{}: {} {} variant(s)", gene.name, positions.len(), group.label);
        draw_lollipops(panel, &positions, &Heights::Uniform(group.height), &group.style())?;
    }

    Ok(())
}
