//! Serializes a [`Scene`] to SVG markup.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::scene::{Scene, Shape, Stroke};

impl Scene {
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg id="{id}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}""#,
            id = escape_html(&self.id),
            w = self.width,
            h = self.height,
        );
        if !self.style.is_empty() {
            let _ = write!(out, r#" style="{}""#, escape_html(&self.style));
        }
        out.push('>');

        for node in &self.nodes {
            write_shape(&mut out, &node.shape);
        }

        out.push_str("</svg>");
        out
    }
}

fn write_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Line { from, to, stroke } => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                from.0, from.1, to.0, to.1
            );
            write_stroke(out, stroke);
            out.push_str("/>");
        }
        Shape::Path { vertices, stroke } => {
            if vertices.is_empty() {
                return;
            }
            let _ = write!(out, r#"<path d="{}" fill="none""#, path_data(vertices));
            write_stroke(out, stroke);
            out.push_str("/>");
        }
        Shape::Circle {
            center,
            radius,
            fill,
            opacity,
        } => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                center.0,
                center.1,
                radius,
                escape_html(fill)
            );
            if let Some(o) = opacity {
                let _ = write!(out, r#" opacity="{}""#, o);
            }
            out.push_str("/>");
        }
        Shape::Text {
            at,
            anchor,
            style,
            content,
        } => {
            let _ = write!(out, r#"<text x="{}" y="{}""#, at.0, at.1);
            if let Some(anchor) = anchor {
                let _ = write!(out, r#" text-anchor="{}""#, anchor.as_str());
            }
            let _ = write!(
                out,
                r#" style="{}">{}</text>"#,
                escape_html(style),
                escape_html(content)
            );
        }
    }
}

fn write_stroke(out: &mut String, stroke: &Stroke) {
    let _ = write!(
        out,
        r#" stroke="{}" stroke-width="{}""#,
        escape_html(&stroke.color),
        stroke.width
    );
    if let Some(dash) = &stroke.dash {
        let _ = write!(out, r#" stroke-dasharray="{}""#, escape_html(dash));
    }
    if let Some(o) = stroke.opacity {
        let _ = write!(out, r#" opacity="{}""#, o);
    }
}

/// `M x y L x y ...` path data for an open polyline.
pub fn path_data(vertices: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in vertices.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{} {} {}", cmd, x, y);
    }
    d
}
