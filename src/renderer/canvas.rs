//! Character-cell canvas
//!
//! Maps board coordinates (origin bottom-left, y up) onto a grid of cells
//! (origin top-left, rows down).

use glam::DVec2;

use super::Tint;
use crate::sim::Aabb;

/// What occupies a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Filled box
    Solid(Tint),
    /// Trajectory sample
    Trail,
}

impl Cell {
    pub fn glyph(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Solid(Tint::Blue) => '1',
            Cell::Solid(Tint::Red) => '2',
            Cell::Solid(Tint::Black) => '#',
            Cell::Trail => '*',
        }
    }
}

/// Fixed-size grid covering a square board of side `extent`
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    extent: f64,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, extent: f64) -> Self {
        Self {
            width,
            height,
            extent,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    fn set(&mut self, col: usize, row: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Cell holding `p`, or `None` when `p` is off the board
    pub fn cell_of(&self, p: DVec2) -> Option<(usize, usize)> {
        if !(0.0..=self.extent).contains(&p.x) || !(0.0..=self.extent).contains(&p.y) {
            return None;
        }
        let col = ((p.x / self.extent) * self.width as f64) as usize;
        let row_up = ((p.y / self.extent) * self.height as f64) as usize;
        let col = col.min(self.width - 1);
        let row = self.height - 1 - row_up.min(self.height - 1);
        Some((col, row))
    }

    /// Fill every cell whose centre lies in the box (clipped to the board)
    pub fn fill_box(&mut self, bbox: &Aabb, tint: Tint) {
        let cell_w = self.extent / self.width as f64;
        let cell_h = self.extent / self.height as f64;
        for row in 0..self.height {
            let y = self.extent - (row as f64 + 0.5) * cell_h;
            if y < bbox.bottom() || y > bbox.top() {
                continue;
            }
            for col in 0..self.width {
                let x = (col as f64 + 0.5) * cell_w;
                if x >= bbox.left() && x <= bbox.right() {
                    self.set(col, row, Cell::Solid(tint));
                }
            }
        }
    }

    /// Mark the cells visited by a sampled path; boxes are not overdrawn
    pub fn plot_path(&mut self, points: impl IntoIterator<Item = DVec2>) {
        for p in points {
            if let Some((col, row)) = self.cell_of(p) {
                if self.get(col, row) == Cell::Empty {
                    self.set(col, row, Cell::Trail);
                }
            }
        }
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_mapping_corners() {
        let canvas = Canvas::new(10, 10, 100.0);
        assert_eq!(canvas.cell_of(DVec2::new(0.0, 0.0)), Some((0, 9)));
        assert_eq!(canvas.cell_of(DVec2::new(100.0, 100.0)), Some((9, 0)));
        assert_eq!(canvas.cell_of(DVec2::new(55.0, 15.0)), Some((5, 8)));
        assert_eq!(canvas.cell_of(DVec2::new(-0.1, 5.0)), None);
        assert_eq!(canvas.cell_of(DVec2::new(5.0, 100.1)), None);
    }

    #[test]
    fn test_fill_box() {
        let mut canvas = Canvas::new(10, 10, 100.0);
        canvas.fill_box(&Aabb::new(40.0, 60.0, 0.0, 50.0).unwrap(), Tint::Black);
        // Columns 4 and 5 (centres 45, 55), rows 5..=9 (centres 45 down to 5)
        let filled: usize = canvas
            .rows()
            .map(|r| r.iter().filter(|c| **c == Cell::Solid(Tint::Black)).count())
            .sum();
        assert_eq!(filled, 10);
        assert_eq!(canvas.get(4, 9), Cell::Solid(Tint::Black));
        assert_eq!(canvas.get(5, 5), Cell::Solid(Tint::Black));
        assert_eq!(canvas.get(5, 4), Cell::Empty);
        assert_eq!(canvas.get(3, 9), Cell::Empty);
    }

    #[test]
    fn test_path_does_not_overdraw_boxes() {
        let mut canvas = Canvas::new(10, 10, 100.0);
        canvas.fill_box(&Aabb::new(0.0, 10.0, 0.0, 10.0).unwrap(), Tint::Blue);
        canvas.plot_path([DVec2::new(5.0, 5.0), DVec2::new(25.0, 35.0), DVec2::new(250.0, 5.0)]);
        assert_eq!(canvas.get(0, 9), Cell::Solid(Tint::Blue));
        assert_eq!(canvas.get(2, 6), Cell::Trail);

        canvas.clear();
        assert!(canvas.rows().flatten().all(|c| *c == Cell::Empty));
    }
}
