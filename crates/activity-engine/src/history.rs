use plane_types::Point;

/// Plotted points in the order they were placed.
///
/// The student list is reordered after every insert, so its tail is not
/// necessarily the latest click; undo consults this instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotHistory {
    plotted: Vec<Point>,
}

impl PlotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.plotted.push(point);
    }

    /// Remove and return the most recently plotted point.
    pub fn pop_last(&mut self) -> Option<Point> {
        self.plotted.pop()
    }

    pub fn clear(&mut self) {
        self.plotted.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.plotted.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plotted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plotted.is_empty()
    }
}
