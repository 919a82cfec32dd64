//! A module for rendering captured trees in the Graphviz DOT format.
//!
//! The DOT format is understood by [Graphviz](https://graphviz.org/) and most graph
//! visualization frontends; only basic functionality is used here, labeled and colored nodes
//! with optional pinned positions, plus directed edges.

use std::io::{self, Write};

use itertools::Itertools;

use crate::{capture::TreeCapture, style::EdgeStyle};

/// A configurable writer rendering a [`TreeCapture`] to DOT.
///
/// # Examples
///
/// ```
/// use mediant::dot::DotWriter;
/// use mediant::tree::MediantTree;
///
/// let capture = MediantTree::new(2).capture(1);
/// let mut out = Vec::new();
///
/// DotWriter::new().write(&capture, &mut out).unwrap();
///
/// let rendered = String::from_utf8(out).unwrap();
/// assert!(rendered.starts_with("digraph mediant {"));
/// ```
#[derive(Clone, Debug)]
pub struct DotWriter {
    /// Name of the rendered digraph.
    graph_name: String,
    /// Whether to pin nodes to their captured positions.
    include_positions: bool,
    /// Style applied to every edge.
    edge_style: EdgeStyle,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            graph_name: "mediant".to_string(),
            include_positions: true,
            edge_style: EdgeStyle::default(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the rendered digraph (`mediant` by default).
    pub fn graph_name<S: Into<String>>(mut self, graph_name: S) -> Self {
        self.graph_name = graph_name.into();
        self
    }

    /// If *false*, nodes are left to the renderer's own layout instead of being pinned to their
    /// captured positions.
    pub fn include_positions(mut self, include_positions: bool) -> Self {
        self.include_positions = include_positions;
        self
    }

    /// Sets the style applied to every edge.
    pub fn edge_style(mut self, edge_style: EdgeStyle) -> Self {
        self.edge_style = edge_style;
        self
    }

    /// Renders the capture to the writer.
    pub fn write<W: Write>(&self, capture: &TreeCapture, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "digraph {} {{", self.graph_name)?;

        for node in capture.nodes() {
            let style = node.style();
            let mut attributes = Vec::new();

            if let Some(label) = &style.label {
                attributes.push(format!("label=\"{}\"", escape(label)));
            }
            if let Some(hover_text) = &style.hover_text {
                attributes.push(format!("tooltip=\"{}\"", escape(hover_text)));
            }
            if self.include_positions {
                if let Some(position) = style.position {
                    attributes.push(format!("pos=\"{},{}!\"", position.x, position.y));
                }
            }
            if let Some(color) = style.color {
                attributes.push(format!("style=filled, fillcolor={color}"));
            }
            if let Some(size) = style.size {
                attributes.push(format!("width={size}"));
            }

            writeln!(writer, "    n{}[{}];", node.id(), attributes.iter().join(", "))?;
        }

        let edge_attributes = self.edge_attributes();

        // Sort for deterministic output, the edge set is unordered.
        let edges = capture
            .graph()
            .edges()
            .iter()
            .sorted_by_key(|edge| (*edge.source(), *edge.target()));

        for edge in edges {
            writeln!(
                writer,
                "    n{}->n{}{edge_attributes};",
                edge.source(),
                edge.target()
            )?;
        }

        writeln!(writer, "}}")
    }

    /// Formats the configured edge style as a DOT attribute list, empty when nothing is set.
    fn edge_attributes(&self) -> String {
        let mut attributes = Vec::new();

        if let Some(color) = self.edge_style.color {
            attributes.push(format!("color={color}"));
        }
        if let Some(width) = self.edge_style.width {
            attributes.push(format!("penwidth={width}"));
        }

        if attributes.is_empty() {
            String::new()
        } else {
            format!("[{}]", attributes.iter().join(", "))
        }
    }
}

//
// Helpers
//

/// Escapes a string for use inside a double-quoted DOT attribute.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        style::{Color, EdgeStyle},
        tree::MediantTree,
    };

    fn render(writer: &DotWriter, capture: &TreeCapture) -> String {
        let mut out = Vec::new();
        writer.write(capture, &mut out).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_a_digraph() {
        let capture = MediantTree::new(2).capture(1);
        let rendered = render(&DotWriter::new(), &capture);

        assert!(rendered.starts_with("digraph mediant {\n"));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn renders_every_node_and_edge() {
        let capture = MediantTree::new(2).capture(2);
        let rendered = render(&DotWriter::new(), &capture);

        assert_eq!(rendered.matches("label=").count(), 7);
        assert_eq!(rendered.matches("->").count(), 6);
    }

    #[test]
    fn edges_are_sorted() {
        let capture = MediantTree::new(2).capture(1);
        let rendered = render(&DotWriter::new(), &capture);

        let first = rendered.find("n0->n1").unwrap();
        let second = rendered.find("n0->n2").unwrap();

        assert!(first < second);
    }

    #[test]
    fn labels_are_fractions() {
        let capture = MediantTree::new(2).capture(1);
        let rendered = render(&DotWriter::new(), &capture);

        assert!(rendered.contains("label=\"1/1\""));
        assert!(rendered.contains("label=\"1/2\""));
        assert!(rendered.contains("label=\"2/1\""));
    }

    #[test]
    fn positions_can_be_omitted() {
        let capture = MediantTree::new(2).capture(1);

        let pinned = render(&DotWriter::new(), &capture);
        let unpinned = render(&DotWriter::new().include_positions(false), &capture);

        assert!(pinned.contains("pos=\"0,0!\""));
        assert!(!unpinned.contains("pos="));
    }

    #[test]
    fn edge_style_is_applied() {
        let capture = MediantTree::new(2).capture(1);
        let writer =
            DotWriter::new().edge_style(EdgeStyle::new().with_color(Color::Gray).with_width(0.5));

        let rendered = render(&writer, &capture);

        assert!(rendered.contains("[color=gray, penwidth=0.5]"));
    }

    #[test]
    fn graph_name_is_configurable() {
        let capture = MediantTree::new(2).capture(0);
        let rendered = render(&DotWriter::new().graph_name("stern_brocot"), &capture);

        assert!(rendered.starts_with("digraph stern_brocot {"));
    }

    #[test]
    fn newlines_in_hover_text_are_escaped() {
        let capture = MediantTree::new(2).capture(0);
        let rendered = render(&DotWriter::new(), &capture);

        assert!(rendered.contains("tooltip=\"depth 0\\n[1 0]\\n[0 1]\\n\""));
    }
}
