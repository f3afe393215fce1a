use plane_types::{ActivityConfig, Point};
use tracing::instrument;
use transform_engine::compute_expected_points;

use crate::mapping::GraphMapping;
use crate::scene::{to_vertices, Layer, Scene, Shape, Stroke, TextAnchor};

pub const GRAPH_ELEMENT_ID: &str = "graphSvg";

const GRID_COLOR: &str = "#eee";
const AXIS_COLOR: &str = "#000";
const ORIGINAL_COLOR: &str = "#2563eb";
const SOLUTION_COLOR: &str = "#166534";
const STUDENT_COLOR: &str = "#ea580c";

const MARKER_RADIUS: f64 = 5.0;
const SOLUTION_DASH: &str = "7 5";
const SOLUTION_OPACITY: f64 = 0.9;

const CANVAS_STYLE: &str = "border:1px solid #ccc; background:white;";
const TICK_LABEL_STYLE: &str = "font-family: Arial, sans-serif; font-size: 12px; fill: #666; user-select: none; pointer-events: none;";
const FUNCTION_LABEL_STYLE: &str = "font-family: Arial, sans-serif; font-size: 16px; fill: #2563eb; font-weight: 600; pointer-events: none;";
const FUNCTION_LABEL: &str = "y = f(x)";

/// UI state that affects the drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Overlay the expected points as a dashed shape.
    pub show_solution: bool,
    /// Points the learner has plotted so far.
    pub student_points: Vec<Point>,
}

impl RenderOptions {
    pub fn with_solution(show_solution: bool) -> Self {
        Self {
            show_solution,
            student_points: Vec::new(),
        }
    }
}

/// Render the activity graph as SVG markup.
pub fn render_graph_svg(config: &ActivityConfig, options: &RenderOptions) -> String {
    build_graph_scene(config, options).to_svg()
}

/// Build the layered scene for an activity.
///
/// Paint order: grid, axes, tick labels, solution overlay, original shape,
/// learner points, function label.
#[instrument(level = "debug", skip_all, fields(show_solution = options.show_solution))]
pub fn build_graph_scene(config: &ActivityConfig, options: &RenderOptions) -> Scene {
    let mapping = GraphMapping::new(config.grid);
    let mut scene = Scene::new(GRAPH_ELEMENT_ID, mapping.width, mapping.height);
    scene.style = CANVAS_STYLE.to_string();

    draw_grid(&mut scene, &mapping);
    draw_tick_labels(&mut scene, &mapping);

    let connect = config.original.connect_lines;
    let to_px = |p: Point| mapping.to_pixel(p);

    if options.show_solution {
        if let Some(transform) = config.declared_transform() {
            let expected = compute_expected_points(&config.original.points, Some(transform));
            let vertices = to_vertices(&expected, to_px);
            if connect {
                scene.push(
                    Layer::Solution,
                    Shape::Path {
                        vertices: vertices.clone(),
                        stroke: Stroke::solid(SOLUTION_COLOR, 3.0)
                            .dashed(SOLUTION_DASH)
                            .with_opacity(SOLUTION_OPACITY),
                    },
                );
            }
            draw_markers(&mut scene, Layer::Solution, &vertices, SOLUTION_COLOR, Some(SOLUTION_OPACITY));
        }
    }

    let original = to_vertices(&config.original.points, to_px);
    if connect {
        scene.push(
            Layer::Original,
            Shape::Path {
                vertices: original.clone(),
                stroke: Stroke::solid(ORIGINAL_COLOR, 2.5),
            },
        );
    }
    draw_markers(&mut scene, Layer::Original, &original, ORIGINAL_COLOR, None);

    if !options.student_points.is_empty() {
        let student = to_vertices(&options.student_points, to_px);
        if connect && student.len() > 1 {
            scene.push(
                Layer::Student,
                Shape::Path {
                    vertices: student.clone(),
                    stroke: Stroke::solid(STUDENT_COLOR, 2.5),
                },
            );
        }
        draw_markers(&mut scene, Layer::Student, &student, STUDENT_COLOR, None);
    }

    // Pinned in pixel space so it stays visible for any grid.
    scene.push(
        Layer::Label,
        Shape::Text {
            at: (mapping.width - 110.0, 28.0),
            anchor: None,
            style: FUNCTION_LABEL_STYLE.to_string(),
            content: FUNCTION_LABEL.to_string(),
        },
    );

    scene
}

fn draw_grid(scene: &mut Scene, mapping: &GraphMapping) {
    for x in mapping.grid.x_ticks() {
        let sx = mapping.pixel_x(x);
        let (layer, stroke) = grid_stroke(x);
        scene.push(
            layer,
            Shape::Line {
                from: (sx, 0.0),
                to: (sx, mapping.height),
                stroke,
            },
        );
    }

    for y in mapping.grid.y_ticks() {
        let sy = mapping.pixel_y(y);
        let (layer, stroke) = grid_stroke(y);
        scene.push(
            layer,
            Shape::Line {
                from: (0.0, sy),
                to: (mapping.width, sy),
                stroke,
            },
        );
    }
}

/// Zero lines are the axes and draw darker than the rest of the grid.
fn grid_stroke(value: f64) -> (Layer, Stroke) {
    if value == 0.0 {
        (Layer::Axis, Stroke::solid(AXIS_COLOR, 1.5))
    } else {
        (Layer::Grid, Stroke::solid(GRID_COLOR, 1.0))
    }
}

fn draw_tick_labels(scene: &mut Scene, mapping: &GraphMapping) {
    let axis_y = mapping.pixel_y(0.0);
    for x in mapping.grid.x_ticks().into_iter().filter(|v| *v != 0.0) {
        scene.push(
            Layer::TickLabel,
            Shape::Text {
                at: (mapping.pixel_x(x), axis_y + 18.0),
                anchor: Some(TextAnchor::Middle),
                style: TICK_LABEL_STYLE.to_string(),
                content: format_tick(x),
            },
        );
    }

    let axis_x = mapping.pixel_x(0.0);
    for y in mapping.grid.y_ticks().into_iter().filter(|v| *v != 0.0) {
        scene.push(
            Layer::TickLabel,
            Shape::Text {
                at: (axis_x - 10.0, mapping.pixel_y(y) + 4.0),
                anchor: Some(TextAnchor::End),
                style: TICK_LABEL_STYLE.to_string(),
                content: format_tick(y),
            },
        );
    }
}

fn draw_markers(
    scene: &mut Scene,
    layer: Layer,
    vertices: &[(f64, f64)],
    color: &str,
    opacity: Option<f64>,
) {
    for center in vertices {
        scene.push(
            layer,
            Shape::Circle {
                center: *center,
                radius: MARKER_RADIUS,
                fill: color.to_string(),
                opacity,
            },
        );
    }
}

fn format_tick(value: f64) -> String {
    format!("{}", value)
}
