// ==============================================================================
// output.rs - Figure and Table Export
// ==============================================================================
// Description: Writes rendered figures as SVG and normalized tables as JSON
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================
// SVG layout: each panel owns an equal horizontal band of the figure. Inside the
// band, the plot area is inset by fixed margins (in inches) leaving room for the
// title above, end labels on either side, and x ticks/label below.
// ==============================================================================

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use svg::node::element::{Circle, Group, Line, Polygon, Rectangle, Text};
use svg::Document;
use thiserror::Error;
use tracing::info;

use crate::figure::{Artist, Figure, HAlign, LegendEntry, MarkerShape, Panel, VAlign};
use crate::models::{Color, VariantTable};

const MARGIN_LEFT: f64 = 0.8;
const MARGIN_RIGHT: f64 = 0.8;
const MARGIN_TOP: f64 = 0.4;
const MARGIN_BOTTOM: f64 = 0.5;

const FONT_SIZE: f64 = 10.0;
const TITLE_FONT_SIZE: f64 = 12.0;
const PANEL_LABEL_FONT_SIZE: f64 = 17.28;
const TICK_LENGTH: f64 = 3.5;
const TICK_TARGET: usize = 8;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rendered figure
    Svg,
    /// Normalized variant table
    Json,
}

impl OutputFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "image/svg+xml",
            OutputFormat::Json => "application/json",
        }
    }

    /// Format implied by a path's extension
    pub fn for_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "svg" => Some(OutputFormat::Svg),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Errors that can occur while writing outputs
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Plot area of one panel in pixel space
struct PanelFrame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    band_top: f64,
    band_bottom: f64,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

/// Width of a data range, or 1.0 when the range is empty or not finite
fn span(lo: f64, hi: f64) -> f64 {
    let width = hi - lo;
    if width.is_finite() && width != 0.0 {
        width
    } else {
        1.0
    }
}

impl PanelFrame {
    fn px(&self, x: f64) -> f64 {
        let (x0, x1) = self.x_range;
        self.left + (x - x0) / span(x0, x1) * self.width
    }

    fn py(&self, y: f64) -> f64 {
        let (y0, y1) = self.y_range;
        self.top + (y1 - y) / span(y0, y1) * self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// SVG writer for rendered figures
#[derive(Debug, Clone, Copy)]
pub struct FigureWriter {
    /// Pixels per figure inch
    pub dpi: f64,
}

impl Default for FigureWriter {
    fn default() -> Self {
        Self { dpi: 100.0 }
    }
}

impl FigureWriter {
    pub fn new(dpi: f64) -> Self {
        Self { dpi }
    }

    /// Points to pixels
    fn pt(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }

    /// Build the SVG document for a figure
    pub fn document(&self, figure: &Figure) -> Document {
        let width = figure.width * self.dpi;
        let height = figure.height * self.dpi;

        let mut doc = Document::new()
            .set("viewBox", (0, 0, width, height))
            .set("width", width)
            .set("height", height)
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", "#ffffff"),
            );

        let count = figure.panels.len().max(1) as f64;
        let band_height = height / count;
        for (i, panel) in figure.panels.iter().enumerate() {
            let band_top = i as f64 * band_height;
            let frame = PanelFrame {
                left: MARGIN_LEFT * self.dpi,
                top: band_top + MARGIN_TOP * self.dpi,
                width: (width - (MARGIN_LEFT + MARGIN_RIGHT) * self.dpi).max(1.0),
                height: (band_height - (MARGIN_TOP + MARGIN_BOTTOM) * self.dpi).max(1.0),
                band_top,
                band_bottom: band_top + band_height,
                x_range: panel.x_range,
                y_range: panel.y_range,
            };
            doc = doc.add(self.panel_group(panel, &frame, width));
        }

        doc
    }

    /// Render a figure to an SVG string
    pub fn to_svg_string(&self, figure: &Figure) -> String {
        self.document(figure).to_string()
    }

    /// Write a figure to an SVG file
    pub fn write(&self, figure: &Figure, path: impl AsRef<Path>) -> Result<(), OutputError> {
        let path = path.as_ref();
        svg::save(path, &self.document(figure))?;
        info!(
            "Wrote {} panel figure to {:?} ({})",
            figure.panels.len(),
            path,
            OutputFormat::Svg.mime_type()
        );
        Ok(())
    }

    fn panel_group(&self, panel: &Panel, frame: &PanelFrame, figure_width: f64) -> Group {
        let mut group = Group::new().set("class", "panel");

        group = self.add_spines(group, panel, frame);
        group = self.add_x_axis(group, panel, frame);
        if panel.y_axis_visible {
            group = self.add_y_axis(group, frame);
        }

        for artist in panel.artists_in_paint_order() {
            group = self.add_artist(group, artist, frame);
        }

        if let Some(title) = &panel.title {
            let mut text = Text::new(title.text.clone())
                .set("class", "title")
                .set("x", frame.left + frame.width / 2.0)
                .set("y", frame.top - self.pt(6.0))
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif")
                .set("font-size", self.pt(TITLE_FONT_SIZE));
            if title.italic {
                text = text.set("font-style", "italic");
            }
            group = group.add(text);
        }

        if let Some(label) = &panel.panel_label {
            group = group.add(
                Text::new(label.clone())
                    .set("class", "panel-label")
                    .set("x", frame.left)
                    .set("y", frame.top)
                    .set("font-family", "sans-serif")
                    .set("font-size", self.pt(PANEL_LABEL_FONT_SIZE)),
            );
        }

        if let Some(x_label) = &panel.x_label {
            group = group.add(
                Text::new(x_label.clone())
                    .set("class", "x-label")
                    .set("x", frame.left + frame.width / 2.0)
                    .set("y", frame.band_bottom - self.pt(4.0))
                    .set("text-anchor", "middle")
                    .set("font-family", "sans-serif")
                    .set("font-size", self.pt(FONT_SIZE)),
            );
        }

        if let Some(entries) = &panel.legend {
            group = group.add(self.legend_group(entries, frame, figure_width));
        }

        group
    }

    fn add_spines(&self, mut group: Group, panel: &Panel, frame: &PanelFrame) -> Group {
        let (l, r, t, b) = (frame.left, frame.right(), frame.top, frame.bottom());
        let edges = [
            (panel.spines.top, (l, t, r, t)),
            (panel.spines.right, (r, t, r, b)),
            (panel.spines.bottom, (l, b, r, b)),
            (panel.spines.left, (l, t, l, b)),
        ];
        for (visible, (x1, y1, x2, y2)) in edges {
            if visible {
                group = group.add(
                    Line::new()
                        .set("x1", x1)
                        .set("y1", y1)
                        .set("x2", x2)
                        .set("y2", y2)
                        .set("stroke", "black")
                        .set("stroke-width", self.pt(0.8)),
                );
            }
        }
        group
    }

    fn add_x_axis(&self, mut group: Group, panel: &Panel, frame: &PanelFrame) -> Group {
        let (x0, x1) = panel.x_range;
        for tick in nice_ticks(x0, x1, TICK_TARGET) {
            let x = frame.px(tick);
            group = group
                .add(
                    Line::new()
                        .set("x1", x)
                        .set("y1", frame.bottom())
                        .set("x2", x)
                        .set("y2", frame.bottom() + self.pt(TICK_LENGTH))
                        .set("stroke", "black")
                        .set("stroke-width", self.pt(0.8)),
                )
                .add(
                    Text::new(format_tick(tick))
                        .set("x", x)
                        .set("y", frame.bottom() + self.pt(TICK_LENGTH + FONT_SIZE))
                        .set("text-anchor", "middle")
                        .set("font-family", "sans-serif")
                        .set("font-size", self.pt(FONT_SIZE)),
                );
        }
        group
    }

    fn add_y_axis(&self, mut group: Group, frame: &PanelFrame) -> Group {
        let (y0, y1) = frame.y_range;
        for tick in nice_ticks(y0, y1, TICK_TARGET / 2) {
            let y = frame.py(tick);
            group = group
                .add(
                    Line::new()
                        .set("x1", frame.left - self.pt(TICK_LENGTH))
                        .set("y1", y)
                        .set("x2", frame.left)
                        .set("y2", y)
                        .set("stroke", "black")
                        .set("stroke-width", self.pt(0.8)),
                )
                .add(
                    Text::new(format_tick(tick))
                        .set("x", frame.left - self.pt(TICK_LENGTH + 2.0))
                        .set("y", y)
                        .set("text-anchor", "end")
                        .set("dominant-baseline", "central")
                        .set("font-family", "sans-serif")
                        .set("font-size", self.pt(FONT_SIZE)),
                );
        }
        group
    }

    fn add_artist(&self, group: Group, artist: &Artist, frame: &PanelFrame) -> Group {
        match artist {
            Artist::Rectangle { x, y, width, height, fill, edge, line_width, .. } => {
                let left = frame.px(*x);
                let right = frame.px(x + width);
                let top = frame.py(y + height);
                let bottom = frame.py(*y);
                group.add(
                    Rectangle::new()
                        .set("x", left)
                        .set("y", top)
                        .set("width", right - left)
                        .set("height", bottom - top)
                        .set("fill", fill.as_str())
                        .set("stroke", edge.as_str())
                        .set("stroke-width", self.pt(*line_width)),
                )
            }
            Artist::Text { x, y, content, color, h_align, v_align, .. } => group.add(
                Text::new(content.clone())
                    .set("x", frame.px(*x))
                    .set("y", frame.py(*y))
                    .set("fill", color.as_str())
                    .set("text-anchor", text_anchor(*h_align))
                    .set("dominant-baseline", dominant_baseline(*v_align))
                    .set("font-family", "sans-serif")
                    .set("font-size", self.pt(FONT_SIZE)),
            ),
            Artist::Line { from, to, color, line_width, .. } => group.add(
                Line::new()
                    .set("x1", frame.px(from.0))
                    .set("y1", frame.py(from.1))
                    .set("x2", frame.px(to.0))
                    .set("y2", frame.py(to.1))
                    .set("stroke", color.as_str())
                    .set("stroke-width", self.pt(*line_width)),
            ),
            Artist::Marker { x, y, shape, fill, edge, size, .. } => group.add(self.marker(
                "marker",
                frame.px(*x),
                frame.py(*y),
                *shape,
                fill,
                edge,
                *size,
            )),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn marker(
        &self,
        class: &str,
        cx: f64,
        cy: f64,
        shape: MarkerShape,
        fill: &Color,
        edge: &Color,
        size: f64,
    ) -> Group {
        let r = self.pt(size) / 2.0;
        let group = Group::new()
            .set("class", class)
            .set("fill", fill.as_str())
            .set("stroke", edge.as_str())
            .set("stroke-width", self.pt(0.5));
        match shape {
            MarkerShape::Circle => group.add(Circle::new().set("cx", cx).set("cy", cy).set("r", r)),
            MarkerShape::Square => group.add(
                Rectangle::new()
                    .set("x", cx - r)
                    .set("y", cy - r)
                    .set("width", 2.0 * r)
                    .set("height", 2.0 * r),
            ),
            MarkerShape::Diamond => group.add(Polygon::new().set(
                "points",
                format!(
                    "{},{} {},{} {},{} {},{}",
                    cx,
                    cy - r,
                    cx + r,
                    cy,
                    cx,
                    cy + r,
                    cx - r,
                    cy
                ),
            )),
        }
    }

    fn legend_group(&self, entries: &[LegendEntry], frame: &PanelFrame, figure_width: f64) -> Group {
        let row_height = self.pt(FONT_SIZE * 1.5);
        let box_width = self.pt(190.0);
        let box_height = row_height * entries.len() as f64 + self.pt(6.0);
        let box_left = figure_width - box_width - self.pt(4.0);
        let box_top = frame.band_top + self.pt(4.0);

        let mut group = Group::new().set("class", "legend").add(
            Rectangle::new()
                .set("x", box_left)
                .set("y", box_top)
                .set("width", box_width)
                .set("height", box_height)
                .set("fill", "#ffffff")
                .set("fill-opacity", 0.8)
                .set("stroke", "#cccccc"),
        );

        for (i, entry) in entries.iter().enumerate() {
            let cy = box_top + self.pt(3.0) + row_height * (i as f64 + 0.5);
            let glyph_x = box_left + self.pt(10.0);
            group = group
                .add(self.marker(
                    "legend-marker",
                    glyph_x,
                    cy,
                    entry.marker,
                    &entry.color,
                    &entry.edge_color,
                    6.0,
                ))
                .add(
                    Text::new(entry.label.clone())
                        .set("x", glyph_x + self.pt(10.0))
                        .set("y", cy)
                        .set("dominant-baseline", "central")
                        .set("font-family", "sans-serif")
                        .set("font-size", self.pt(FONT_SIZE)),
                );
        }
        group
    }
}

fn text_anchor(align: HAlign) -> &'static str {
    match align {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    }
}

fn dominant_baseline(align: VAlign) -> &'static str {
    match align {
        VAlign::Top => "hanging",
        VAlign::Center => "central",
        VAlign::Bottom => "auto",
    }
}

/// Evenly spaced tick values at a 1/2/2.5/5 x 10^k step within [lo, hi]
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if target == 0 || !lo.is_finite() || !hi.is_finite() || hi <= lo {
        return Vec::new();
    }

    let raw = (hi - lo) / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Write a figure to an SVG file at 100 dpi
pub fn write_svg(figure: &Figure, path: impl AsRef<Path>) -> Result<(), OutputError> {
    FigureWriter::default().write(figure, path)
}

/// Render a figure to an SVG string at 100 dpi
pub fn to_svg_string(figure: &Figure) -> String {
    FigureWriter::default().to_svg_string(figure)
}

/// Write the normalized variant table as a pretty-printed JSON array
pub fn write_table_json(table: &VariantTable, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, table)?;
    writer.flush()?;
    info!("Wrote {} variant records to {:?}", table.len(), path);
    Ok(())
}
