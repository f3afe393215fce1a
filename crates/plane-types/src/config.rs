use crate::grid::GridBounds;
use crate::point::Point;
use crate::transform::TransformSpec;

/// Header title used when a config has none.
pub const UNTITLED_ACTIVITY: &str = "Untitled activity";

/// Prompt used when a config has neither a prompt nor a title.
pub const DEFAULT_PROMPT: &str = "Complete the transformation";

/// A validated activity description.
///
/// Built by `activity-config` from the JSON document; immutable for the
/// lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityConfig {
    pub title: Option<String>,
    pub prompt: Option<String>,
    /// Instructions HTML supplied by the author.
    pub howto: Option<String>,
    pub grid: GridBounds,
    pub original: OriginalShape,
    pub transform: Option<TransformSpec>,
}

impl ActivityConfig {
    pub fn new(grid: GridBounds, points: Vec<Point>) -> Self {
        Self {
            title: None,
            prompt: None,
            howto: None,
            grid,
            original: OriginalShape::connected(points),
            transform: None,
        }
    }

    pub fn with_transform(mut self, transform: TransformSpec) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title shown in the page header.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_ACTIVITY)
    }

    /// Prompt shown above the graph: the prompt, else the title, else a
    /// generic instruction.
    pub fn display_prompt(&self) -> &str {
        self.prompt
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(DEFAULT_PROMPT)
    }

    /// The transform, if one with a recognized type is present.
    pub fn active_transform(&self) -> Option<&TransformSpec> {
        self.transform.as_ref().filter(|t| !t.is_identity())
    }

    /// The transform, if the config declared any `type` for it.
    pub fn declared_transform(&self) -> Option<&TransformSpec> {
        self.transform.as_ref().filter(|t| t.declares_type())
    }
}

/// The shape the learner transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginalShape {
    pub points: Vec<Point>,
    /// Whether consecutive points are joined by line segments.
    pub connect_lines: bool,
}

impl OriginalShape {
    pub fn connected(points: Vec<Point>) -> Self {
        Self {
            points,
            connect_lines: true,
        }
    }
}
