use plane_types::Point;

/// What a node depicts. Lets callers and tests pick out one part of the
/// drawing without parsing markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Grid,
    Axis,
    TickLabel,
    Solution,
    Original,
    Student,
    Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Stroke settings for lines and paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub dash: Option<String>,
    pub opacity: Option<f64>,
}

impl Stroke {
    pub fn solid(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            dash: None,
            opacity: None,
        }
    }

    pub fn dashed(mut self, pattern: &str) -> Self {
        self.dash = Some(pattern.to_string());
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// A drawable primitive in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: Stroke,
    },
    /// Open polyline through the given vertices.
    Path {
        vertices: Vec<(f64, f64)>,
        stroke: Stroke,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        fill: String,
        opacity: Option<f64>,
    },
    Text {
        at: (f64, f64),
        anchor: Option<TextAnchor>,
        style: String,
        content: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub layer: Layer,
    pub shape: Shape,
}

/// A complete drawing, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub style: String,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(id: &str, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            width,
            height,
            style: String::new(),
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: Layer, shape: Shape) {
        self.nodes.push(Node { layer, shape });
    }

    /// Nodes belonging to one layer, in paint order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Shape> + '_ {
        self.nodes
            .iter()
            .filter(move |n| n.layer == layer)
            .map(|n| &n.shape)
    }

    /// Centers of the circle markers on a layer.
    pub fn markers(&self, layer: Layer) -> Vec<(f64, f64)> {
        self.layer(layer)
            .filter_map(|s| match s {
                Shape::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// Text content of the text nodes on a layer.
    pub fn texts(&self, layer: Layer) -> Vec<&str> {
        self.layer(layer)
            .filter_map(|s| match s {
                Shape::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Index of the first node on a layer, for paint-order checks.
    pub fn first_index(&self, layer: Layer) -> Option<usize> {
        self.nodes.iter().position(|n| n.layer == layer)
    }
}

/// Map graph points to pixel vertices.
pub fn to_vertices(points: &[Point], map: impl Fn(Point) -> (f64, f64)) -> Vec<(f64, f64)> {
    points.iter().map(|p| map(*p)).collect()
}
