//! OcclusionGrid: solid/empty cells on the ground plane.

use vigil_core::config::Rect;
use vigil_core::types::Position;

/// Row-major grid of solid cells. Walls are treated as infinitely tall, so
/// only the x/y coordinates of a query matter.
#[derive(Debug, Clone)]
pub struct OcclusionGrid {
    /// West edge (m).
    pub origin_x: f64,
    /// South edge (m).
    pub origin_y: f64,
    /// Edge length of one cell (m).
    pub cell_size: f64,
    /// Number of columns (west to east).
    pub width: usize,
    /// Number of rows (south to north).
    pub height: usize,
    solid: Vec<bool>,
}

impl OcclusionGrid {
    /// Create an empty grid.
    pub fn new(origin_x: f64, origin_y: f64, cell_size: f64, width: usize, height: usize) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size,
            width,
            height,
            solid: vec![false; width * height],
        }
    }

    /// A grid with no blocking cells. Every line of sight is clear.
    pub fn open(cell_size: f64) -> Self {
        Self::new(0.0, 0.0, cell_size, 0, 0)
    }

    /// Build a grid just large enough to hold `rects`, with every cell they
    /// overlap marked solid.
    pub fn from_rects(rects: &[Rect], cell_size: f64) -> Self {
        if rects.is_empty() {
            return Self::open(cell_size);
        }

        let min_x = rects.iter().map(|r| r.min_x).fold(f64::INFINITY, f64::min);
        let min_y = rects.iter().map(|r| r.min_y).fold(f64::INFINITY, f64::min);
        let max_x = rects.iter().map(|r| r.max_x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = rects.iter().map(|r| r.max_y).fold(f64::NEG_INFINITY, f64::max);

        let width = ((max_x - min_x) / cell_size).floor() as usize + 1;
        let height = ((max_y - min_y) / cell_size).floor() as usize + 1;

        let mut grid = Self::new(min_x, min_y, cell_size, width, height);
        for rect in rects {
            grid.fill_rect(rect);
        }
        grid
    }

    /// Mark every cell overlapping `rect` as solid. Parts outside the grid
    /// are ignored.
    pub fn fill_rect(&mut self, rect: &Rect) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let col_lo = self.col_of(rect.min_x).max(0) as usize;
        let row_lo = self.row_of(rect.min_y).max(0) as usize;
        let col_hi = self.col_of(rect.max_x).min(self.width as i64 - 1);
        let row_hi = self.row_of(rect.max_y).min(self.height as i64 - 1);
        if col_hi < 0 || row_hi < 0 {
            return;
        }

        for row in row_lo..=row_hi as usize {
            for col in col_lo..=col_hi as usize {
                self.solid[row * self.width + col] = true;
            }
        }
    }

    /// Whether the cell containing `pos` is solid. Outside the grid is open.
    pub fn is_blocked_at(&self, pos: &Position) -> bool {
        self.cell_at(pos.x, pos.y)
            .map(|(row, col)| self.solid[row * self.width + col])
            .unwrap_or(false)
    }

    /// Number of solid cells.
    pub fn solid_count(&self) -> usize {
        self.solid.iter().filter(|s| **s).count()
    }

    /// (row, col) for a ground-plane point, or None if outside the grid.
    fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let col = self.col_of(x);
        let row = self.row_of(y);
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    fn col_of(&self, x: f64) -> i64 {
        ((x - self.origin_x) / self.cell_size).floor() as i64
    }

    fn row_of(&self, y: f64) -> i64 {
        ((y - self.origin_y) / self.cell_size).floor() as i64
    }
}
