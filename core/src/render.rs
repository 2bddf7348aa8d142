use crate::*;

pub const DEFAULT_ALIVE_GLYPH: char = '#';
pub const DEFAULT_DEAD_GLYPH: char = ' ';

/// Formats a board as rows of glyphs, columns separated by a single space.
/// Clearing and printing the screen is the caller's concern.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextRenderer {
    pub alive_glyph: char,
    pub dead_glyph: char,
}

impl TextRenderer {
    pub const fn new(alive_glyph: char, dead_glyph: char) -> Self {
        Self {
            alive_glyph,
            dead_glyph,
        }
    }

    pub const fn glyph(&self, state: CellState) -> char {
        if state.is_alive() {
            self.alive_glyph
        } else {
            self.dead_glyph
        }
    }

    /// One string per board row, top to bottom.
    pub fn render_lines(&self, grid: &Grid) -> Vec<String> {
        let (cols, rows) = grid.size();

        (0..rows)
            .map(|y| {
                let mut line = String::with_capacity(cols * 2);
                for x in 0..cols {
                    if x > 0 {
                        line.push(' ');
                    }
                    line.push(self.glyph(grid[(x, y)]));
                }
                line
            })
            .collect()
    }

    pub fn render(&self, grid: &Grid) -> String {
        self.render_lines(grid).join("\n")
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_ALIVE_GLYPH, DEFAULT_DEAD_GLYPH)
    }
}
