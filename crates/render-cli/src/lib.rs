//! Render an activity config to SVG from the command line, optionally
//! grading a set of plotted points.

use std::path::{Path, PathBuf};
use std::time::Duration;

use activity_config::{parse_config, LoadError};
use activity_engine::{ActivityState, MAX_STUDENT_POINTS};
use anyhow::{Context, Result};
use clap::Parser;
use grading::{order_student_points, validate_submission, Verdict};
use graph_render::{render_graph_svg, RenderOptions};
use plane_types::Point;
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "render_activity")]
#[command(about = "Render a coordinate-plane activity to SVG", long_about = None)]
#[command(version)]
pub struct Args {
    /// Config file path or http(s) URL
    pub source: String,

    /// Overlay the expected answer
    #[arg(long)]
    pub solution: bool,

    /// Plotted point as X,Y; repeat for each point. Points are graded
    #[arg(long = "point", value_name = "X,Y", value_parser = parse_point)]
    pub points: Vec<Point>,

    /// Write the SVG here instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// What a run produced.
#[derive(Debug)]
pub struct Rendered {
    pub svg: String,
    /// Present when points were supplied.
    pub verdict: Option<Verdict>,
}

/// Parse `X,Y` into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {:?}", s))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| format!("not a number: {:?}", v.trim()))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read config text from a URL or a local file.
pub fn fetch_source(source: &str) -> Result<String, LoadError> {
    if is_remote(source) {
        fetch_url(source)
    } else {
        let path = Path::new(source);
        std::fs::read_to_string(path).map_err(|e| LoadError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

fn fetch_url(url: &str) -> Result<String, LoadError> {
    let network = |e: reqwest::Error| LoadError::Network {
        url: url.to_string(),
        reason: e.to_string(),
    };

    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(network)?;
    debug!(url, "fetching config");
    let response = client
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .map_err(network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().map_err(network)
}

/// Load, render and optionally grade.
pub fn run(args: &Args) -> Result<Rendered> {
    let json = fetch_source(&args.source)?;
    let config = parse_config(&json)
        .map_err(LoadError::from)
        .with_context(|| format!("invalid config in {}", args.source))?;
    let state = ActivityState::new(config, args.source.as_str());

    let mut points: Vec<Point> = args.points.iter().map(Point::snapped).collect();
    if points.len() > MAX_STUDENT_POINTS {
        warn!(
            given = points.len(),
            kept = MAX_STUDENT_POINTS,
            "too many points; extra points dropped"
        );
        points.truncate(MAX_STUDENT_POINTS);
    }
    let points = order_student_points(state.expected_points(), &points);

    let verdict = if args.points.is_empty() {
        None
    } else {
        let verdict = validate_submission(state.expected_points(), &points);
        info!(correct = verdict.correct, "points graded");
        Some(verdict)
    };

    let options = RenderOptions {
        show_solution: args.solution,
        student_points: points,
    };
    Ok(Rendered {
        svg: render_graph_svg(state.config(), &options),
        verdict,
    })
}
