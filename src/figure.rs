// ==============================================================================
// figure.rs - In-Memory Figure Model
// ==============================================================================
// Description: Panels, drawing primitives and styles produced by the plotter
// Author: Matt Barham
// Created: 2026-10-17
// Modified: 2026-10-17
// Version: 0.1.0
// ==============================================================================
// All artist coordinates are in data units of the panel they belong to.
// Export to a file format lives in output.rs.
// ==============================================================================

use crate::models::Color;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Marker glyph drawn at a lollipop tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Diamond,
}

/// Styling for one group of lollipop markers
#[derive(Debug, Clone, PartialEq)]
pub struct LollipopStyle {
    /// Legend entry for the group
    pub label: Option<String>,
    pub marker: MarkerShape,
    pub color: Color,
    pub edge_color: Color,
    /// Marker diameter in points
    pub size: f64,
    pub z_order: i32,
}

impl Default for LollipopStyle {
    fn default() -> Self {
        Self {
            label: None,
            marker: MarkerShape::Circle,
            color: Color::new("#1f77b4"),
            edge_color: Color::black(),
            size: 6.0,
            z_order: 2,
        }
    }
}

/// Drawing primitive placed on a panel
#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        edge: Color,
        line_width: f64,
        z_order: i32,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        color: Color,
        h_align: HAlign,
        v_align: VAlign,
        z_order: i32,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
        line_width: f64,
        z_order: i32,
    },
    Marker {
        x: f64,
        y: f64,
        shape: MarkerShape,
        fill: Color,
        edge: Color,
        size: f64,
        z_order: i32,
    },
}

impl Artist {
    pub fn z_order(&self) -> i32 {
        match self {
            Artist::Rectangle { z_order, .. }
            | Artist::Text { z_order, .. }
            | Artist::Line { z_order, .. }
            | Artist::Marker { z_order, .. } => *z_order,
        }
    }
}

/// Panel title
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
    pub italic: bool,
}

/// Visibility of the four frame lines around a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spines {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Spines {
    pub fn all() -> Self {
        Self { top: true, right: true, bottom: true, left: true }
    }

    pub fn none() -> Self {
        Self { top: false, right: false, bottom: false, left: false }
    }
}

/// One legend row
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub marker: MarkerShape,
    pub color: Color,
    pub edge_color: Color,
}

/// One drawing surface of a figure (one gene)
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub title: Option<Title>,
    pub y_axis_visible: bool,
    pub spines: Spines,
    pub x_label: Option<String>,
    /// Multi-panel letter ("A", "B", ...) at the top-left corner
    pub panel_label: Option<String>,
    /// Legend drawn with this panel
    pub legend: Option<Vec<LegendEntry>>,
    pub artists: Vec<Artist>,
    /// Labelled marker groups, in draw order
    pub labelled_groups: Vec<LegendEntry>,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            title: None,
            y_axis_visible: true,
            spines: Spines::all(),
            x_label: None,
            panel_label: None,
            legend: None,
            artists: Vec::new(),
            labelled_groups: Vec::new(),
        }
    }
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, artist: Artist) {
        self.artists.push(artist);
    }

    /// Attach a legend built from the labelled groups drawn so far
    pub fn attach_legend(&mut self) {
        self.legend = Some(self.labelled_groups.clone());
    }

    pub fn markers(&self) -> impl Iterator<Item = &Artist> {
        self.artists.iter().filter(|a| matches!(a, Artist::Marker { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &Artist> {
        self.artists.iter().filter(|a| matches!(a, Artist::Line { .. }))
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &Artist> {
        self.artists.iter().filter(|a| matches!(a, Artist::Rectangle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &Artist> {
        self.artists.iter().filter(|a| matches!(a, Artist::Text { .. }))
    }

    /// Artists sorted by z-order, ties kept in insertion order
    pub fn artists_in_paint_order(&self) -> Vec<&Artist> {
        let mut ordered: Vec<&Artist> = self.artists.iter().collect();
        ordered.sort_by_key(|a| a.z_order());
        ordered
    }
}

/// Figure made of vertically stacked panels
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Width in inches
    pub width: f64,
    /// Height in inches
    pub height: f64,
    /// Panels from top to bottom
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, panels: Vec::new() }
    }
}
