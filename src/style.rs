//! Typed display attributes for nodes, edges and graphs.
//!
//! A visualization collaborator consumes these instead of free-form key-value dictionaries: each
//! entity kind has an explicit set of recognized keys, so unsupported attributes can't be
//! attached by accident.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D or 3D display position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    /// Only set for 3D layouts.
    pub z: Option<f64>,
}

impl Position {
    /// Creates a 2D position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Adds a third coordinate, turning the position into a 3D one.
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }
}

/// A small palette of SVG color names recognized by common renderers.
///
/// The `Display` implementation lowercases the variant name, matching the SVG scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Black,
    Blue,
    Crimson,
    DarkGreen,
    Gold,
    Gray,
    LightBlue,
    LightGreen,
    Orange,
    Purple,
    Red,
    SteelBlue,
    White,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Display attributes recognized for a node.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeStyle {
    /// Text drawn on the node.
    pub label: Option<String>,
    /// Text shown when hovering over the node.
    pub hover_text: Option<String>,
    /// Layout position.
    pub position: Option<Position>,
    /// Fill color.
    pub color: Option<Color>,
    /// Marker size.
    pub size: Option<f64>,
}

impl NodeStyle {
    /// Creates an empty style; a renderer applies its defaults for unset attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the hover text.
    pub fn with_hover_text<S: Into<String>>(mut self, hover_text: S) -> Self {
        self.hover_text = Some(hover_text.into());
        self
    }

    /// Sets the position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the marker size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }
}

/// Display attributes recognized for an edge.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeStyle {
    /// Stroke color.
    pub color: Option<Color>,
    /// Stroke width.
    pub width: Option<f64>,
}

impl EdgeStyle {
    /// Creates an empty style; a renderer applies its defaults for unset attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the stroke width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

/// The dimensionality of a layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dimensions {
    #[default]
    Two,
    Three,
}

/// Display attributes recognized for a whole graph.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphStyle {
    /// Title drawn above the rendering.
    pub title: Option<String>,
    /// Whether the layout is 2D or 3D.
    pub dimensions: Dimensions,
}

impl GraphStyle {
    /// Creates an empty style; a renderer applies its defaults for unset attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the dimensionality.
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_style_builders() {
        let style = NodeStyle::new()
            .with_label("1/2")
            .with_hover_text("depth 1")
            .with_position(Position::new(-1.0, -1.0))
            .with_color(Color::SteelBlue)
            .with_size(12.0);

        assert_eq!(style.label.as_deref(), Some("1/2"));
        assert_eq!(style.hover_text.as_deref(), Some("depth 1"));
        assert_eq!(style.position, Some(Position::new(-1.0, -1.0)));
        assert_eq!(style.color, Some(Color::SteelBlue));
        assert_eq!(style.size, Some(12.0));
    }

    #[test]
    fn edge_style_builders() {
        let style = EdgeStyle::new().with_color(Color::Gray).with_width(0.5);

        assert_eq!(style.color, Some(Color::Gray));
        assert_eq!(style.width, Some(0.5));
    }

    #[test]
    fn graph_style_builders() {
        let style = GraphStyle::new()
            .with_title("Stern-Brocot tree")
            .with_dimensions(Dimensions::Three);

        assert_eq!(style.title.as_deref(), Some("Stern-Brocot tree"));
        assert_eq!(style.dimensions, Dimensions::Three);
    }

    #[test]
    fn position_with_z() {
        let position = Position::new(0.0, 1.0).with_z(2.0);

        assert_eq!(position.z, Some(2.0));
    }

    #[test]
    fn color_display_is_lowercase() {
        assert_eq!(Color::SteelBlue.to_string(), "steelblue");
        assert_eq!(Color::LightGreen.to_string(), "lightgreen");
        assert_eq!(Color::Red.to_string(), "red");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn node_style_serializes() {
        let style = NodeStyle::new()
            .with_label("1/2")
            .with_color(Color::Gold)
            .with_position(Position::new(0.0, -1.0));

        let json = serde_json::to_string(&style).unwrap();
        let back: NodeStyle = serde_json::from_str(&json).unwrap();

        assert_eq!(style, back);
    }
}
