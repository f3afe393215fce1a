use plane_types::{GridBounds, Point};

/// Side length of the square drawing canvas, in pixels.
pub const CANVAS_SIZE: f64 = 640.0;

/// Linear map between graph coordinates and canvas pixels.
///
/// Pixel y grows downward, so graph `ymax` sits at pixel row 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphMapping {
    pub grid: GridBounds,
    pub width: f64,
    pub height: f64,
}

impl GraphMapping {
    pub fn new(grid: GridBounds) -> Self {
        Self::with_canvas(grid, CANVAS_SIZE, CANVAS_SIZE)
    }

    pub fn with_canvas(grid: GridBounds, width: f64, height: f64) -> Self {
        Self {
            grid,
            width,
            height,
        }
    }

    fn x_scale(&self) -> f64 {
        self.width / self.grid.width()
    }

    fn y_scale(&self) -> f64 {
        self.height / self.grid.height()
    }

    pub fn pixel_x(&self, x: f64) -> f64 {
        (x - self.grid.xmin) * self.x_scale()
    }

    pub fn pixel_y(&self, y: f64) -> f64 {
        self.height - (y - self.grid.ymin) * self.y_scale()
    }

    pub fn to_pixel(&self, p: Point) -> (f64, f64) {
        (self.pixel_x(p.x), self.pixel_y(p.y))
    }

    /// Inverse of [`Self::to_pixel`].
    pub fn to_graph(&self, px: f64, py: f64) -> Point {
        Point::new(
            self.grid.xmin + px / self.x_scale(),
            self.grid.ymin + (self.height - py) / self.y_scale(),
        )
    }

    pub fn contains_pixel(&self, px: f64, py: f64) -> bool {
        (0.0..=self.width).contains(&px) && (0.0..=self.height).contains(&py)
    }

    /// Graph point under a pixel, rounded to the nearest integer
    /// coordinates. `None` when the pixel lies outside the canvas.
    pub fn snap_pixel(&self, px: f64, py: f64) -> Option<Point> {
        if !self.contains_pixel(px, py) {
            return None;
        }
        Some(self.to_graph(px, py).snapped())
    }
}
