//! SVG rendering of the coordinate-plane activity.
//!
//! Drawing is split in two: [`build_graph_scene`] produces a [`Scene`] of
//! layered shapes, and [`Scene::to_svg`] serializes it. Tests assert on the
//! scene; hosts only need [`render_graph_svg`].

pub mod escape;
pub mod graph;
pub mod mapping;
pub mod panels;
pub mod scene;
pub mod svg;

pub use escape::escape_html;
pub use graph::{build_graph_scene, render_graph_svg, RenderOptions};
pub use mapping::{GraphMapping, CANVAS_SIZE};
pub use scene::{Layer, Node, Scene, Shape, Stroke, TextAnchor};
