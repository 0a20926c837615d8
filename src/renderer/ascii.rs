//! Terminal renderer
//!
//! Draws the board as a framed character plot on any writer. Tanks are drawn
//! with their player number, the obstacle with `#`, trajectories with `*`.

use std::io::{self, Write};

use super::canvas::{Canvas, Cell};
use super::{Render, Scene};
use crate::round_tenths;
use crate::sim::Trajectory;

const ANSI_RESET: &str = "\x1b[0m";

pub struct AsciiRenderer<W> {
    out: W,
    canvas: Canvas,
    scene: Option<Scene>,
    color: bool,
}

impl AsciiRenderer<io::Stdout> {
    pub fn stdout(width: usize, height: usize, extent: f64, color: bool) -> Self {
        Self::new(io::stdout(), width, height, extent, color)
    }
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W, width: usize, height: usize, extent: f64, color: bool) -> Self {
        Self {
            out,
            canvas: Canvas::new(width, height, extent),
            scene: None,
            color,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn present(&mut self) -> io::Result<()> {
        if let Some(scene) = &self.scene {
            writeln!(self.out)?;
            writeln!(self.out, "{:^width$}", scene.title, width = self.canvas.width() + 2)?;
        }

        let border = "-".repeat(self.canvas.width());
        writeln!(self.out, "+{border}+")?;
        for row in self.canvas.rows() {
            let mut line = String::with_capacity(row.len() + 2);
            line.push('|');
            for cell in row {
                match (self.color, cell) {
                    (true, Cell::Solid(tint)) => {
                        line.push_str(tint.ansi());
                        line.push(cell.glyph());
                        line.push_str(ANSI_RESET);
                    }
                    _ => line.push(cell.glyph()),
                }
            }
            line.push('|');
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "+{border}+")?;

        if let Some(wind) = self.scene.as_ref().and_then(|s| s.wind) {
            writeln!(self.out, "WIND = {}", round_tenths(wind))?;
        }
        self.out.flush()
    }
}

impl<W: Write> Render for AsciiRenderer<W> {
    fn draw_board(&mut self, scene: &Scene) -> io::Result<()> {
        self.canvas.clear();
        for (bbox, tint) in &scene.boxes {
            self.canvas.fill_box(bbox, *tint);
        }
        self.scene = Some(scene.clone());
        self.present()
    }

    fn draw_trajectory(&mut self, path: &Trajectory) -> io::Result<()> {
        self.canvas.plot_path(path.iter());
        self.present()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}
