//! SVG diagram of a stage-layered graph.
//!
//! Stages run left to right at a fixed gap; nodes within a stage are
//! vertically centered and evenly spaced, first node on top. Base edges are
//! thin black lines with their weight labeled 60% of the way toward the
//! target; highlighted routes are re-drawn on top with a thicker stroke, one
//! palette color per route; nodes are unfilled circles with centered labels.
//!
//! The document is assembled fully in memory and handed to the sink in a
//! single write followed by a flush, so the sink never observes a partial
//! diagram.

use indexmap::IndexMap;
use std::fmt::{self, Write as _};
use std::io;

use crate::graph::StageGraph;
use crate::utils::fmt_number;

/// Stroke colors cycled through for highlighted routes.
pub const HIGHLIGHT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Diagram geometry knobs.
///
/// `node_radius`, `x_gap`, and `y_gap` are in layout units and get multiplied
/// by `scale` into pixels; the stroke widths and font size are pixels as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub node_radius: f64,
    pub x_gap: f64,
    pub y_gap: f64,
    pub line_width: f64,
    pub highlight_width: f64,
    pub font_size: f64,
    pub scale: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            node_radius: 0.16,
            x_gap: 2.0,
            y_gap: 1.2,
            line_width: 1.0,
            highlight_width: 3.0,
            font_size: 10.0,
            scale: 100.0,
        }
    }
}

/// Render the graph with default [`RenderOptions`].
pub fn render_svg<W: io::Write>(
    graph: &StageGraph,
    highlighted_paths: &[Vec<String>],
    out: &mut W,
) -> io::Result<()> {
    render_svg_with(graph, highlighted_paths, &RenderOptions::default(), out)
}

/// Render the graph as an SVG document into `out`.
///
/// `highlighted_paths` normally come straight from
/// [`all_optimal_paths`](crate::all_optimal_paths) or a solution's
/// representative path; segments touching node names the graph does not
/// declare are skipped.
pub fn render_svg_with<W: io::Write>(
    graph: &StageGraph,
    highlighted_paths: &[Vec<String>],
    options: &RenderOptions,
    out: &mut W,
) -> io::Result<()> {
    let mut document = String::new();
    write_document(graph, highlighted_paths, options, &mut document)
        .map_err(|error| io::Error::new(io::ErrorKind::Other, error))?;
    out.write_all(document.as_bytes())?;
    out.flush()
}

/// Pixel position per node, in flattened stage order.
fn node_positions(graph: &StageGraph, options: &RenderOptions) -> IndexMap<String, (f64, f64)> {
    let mut coords = IndexMap::new();
    for (ix, stage) in graph.layers().iter().enumerate() {
        let offset = (stage.len() as f64 - 1.0) / 2.0;
        for (j, node) in stage.iter().enumerate() {
            let x = ix as f64 * options.x_gap * options.scale;
            let y = (j as f64 - offset) * options.y_gap * options.scale;
            coords.insert(node.clone(), (x, y));
        }
    }
    coords
}

fn write_document(
    graph: &StageGraph,
    highlighted_paths: &[Vec<String>],
    o: &RenderOptions,
    svg: &mut String,
) -> fmt::Result {
    let coords = node_positions(graph, o);

    let min_x = -0.6 * o.x_gap * o.scale;
    let max_x = (graph.transitions() as f64 + 0.6) * o.x_gap * o.scale;
    let mut low_y = f64::INFINITY;
    let mut high_y = f64::NEG_INFINITY;
    for &(_, y) in coords.values() {
        low_y = low_y.min(y);
        high_y = high_y.max(y);
    }
    let min_y = low_y - o.y_gap * o.scale;
    let max_y = high_y + o.y_gap * o.scale;
    let width = max_x - min_x;
    let height = max_y - min_y;

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="{min_x} {min_y} {width} {height}">"#
    )?;
    writeln!(
        svg,
        r#"  <rect x="{min_x}" y="{min_y}" width="{width}" height="{height}" fill="white"/>"#
    )?;

    // Base edges with weight labels.
    for (from, neighbors) in graph.edges() {
        let (x0, y0) = match coords.get(from) {
            Some(&position) => position,
            None => continue,
        };
        for (to, &weight) in neighbors {
            let (x1, y1) = match coords.get(to) {
                Some(&position) => position,
                None => continue,
            };
            writeln!(
                svg,
                r#"  <line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}" stroke="black" stroke-width="{}"/>"#,
                o.line_width
            )?;
            let label_x = 0.4 * x0 + 0.6 * x1;
            let label_y = 0.4 * y0 + 0.6 * y1;
            writeln!(
                svg,
                r#"  <text x="{label_x}" y="{label_y}" font-size="{}" text-anchor="middle" dominant-baseline="middle" fill="black">{}</text>"#,
                o.font_size,
                fmt_number(weight)
            )?;
        }
    }

    // Highlighted routes, one palette color each, thicker stroke.
    for (index, path) in highlighted_paths.iter().enumerate() {
        let color = HIGHLIGHT_PALETTE[index % HIGHLIGHT_PALETTE.len()];
        for pair in path.windows(2) {
            let (x0, y0) = match coords.get(&pair[0]) {
                Some(&position) => position,
                None => continue,
            };
            let (x1, y1) = match coords.get(&pair[1]) {
                Some(&position) => position,
                None => continue,
            };
            writeln!(
                svg,
                r#"  <line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y1}" stroke="{color}" stroke-width="{}"/>"#,
                o.highlight_width
            )?;
        }
    }

    // Nodes on top of everything.
    let radius = o.node_radius * o.scale;
    for (node, &(x, y)) in &coords {
        writeln!(
            svg,
            r#"  <circle cx="{x}" cy="{y}" r="{radius}" fill="none" stroke="black" stroke-width="{}"/>"#,
            o.line_width
        )?;
        writeln!(
            svg,
            r#"  <text x="{x}" y="{y}" font-size="{}" text-anchor="middle" dominant-baseline="middle" fill="black">{}</text>"#,
            o.font_size,
            xml_escape(node)
        )?;
    }

    writeln!(svg, "</svg>")
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
