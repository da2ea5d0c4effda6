//! ASCII overlay of a path on its grid.

use mazepath_core::{Coord, Grid};

/// Marker characters used by [`PathRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    /// First cell of the path.
    pub start: char,
    /// Last cell of the path.
    pub end: char,
    /// Intermediate step followed by a change of row.
    pub vertical: char,
    /// Intermediate step followed by a move along the row.
    pub horizontal: char,
    /// Settled cells that are not on the path. `None` leaves them as is.
    pub explored: Option<char>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            start: '\u{2606}',
            end: '\u{2605}',
            vertical: '|',
            horizontal: '_',
            explored: None,
        }
    }
}

/// Renders grids with a path drawn over them.
#[derive(Debug, Clone, Default)]
pub struct PathRenderer {
    pub style: RenderStyle,
}

impl PathRenderer {
    /// Create a renderer with the given style.
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Render `grid` with `path` overlaid. Each cell prints as its integer
    /// value; cells are separated by one space, one row per line.
    pub fn render(&self, grid: &Grid, path: &[Coord]) -> String {
        self.render_explored(grid, path, &[])
    }

    /// Like [`render`](Self::render), additionally marking `explored` cells
    /// with [`RenderStyle::explored`] when set.
    pub fn render_explored(&self, grid: &Grid, path: &[Coord], explored: &[Coord]) -> String {
        let cols = grid.cols().max(0) as usize;
        let mut labels: Vec<String> = grid.iter().map(|(_, cell)| cell.value().to_string()).collect();
        let mut mark = |c: Coord, ch: char| {
            if grid.contains(c) {
                labels[c.row as usize * cols + c.col as usize] = ch.to_string();
            }
        };

        if let Some(ch) = self.style.explored {
            for &c in explored {
                mark(c, ch);
            }
        }
        if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
            mark(first, self.style.start);
            for step in path.windows(2).skip(1) {
                let ch = if step[1].row != step[0].row {
                    self.style.vertical
                } else {
                    self.style.horizontal
                };
                mark(step[0], ch);
            }
            mark(last, self.style.end);
        }

        labels
            .chunks(cols.max(1))
            .map(|row| row.join(" ") + "\n")
            .collect()
    }
}
