//! Text rendering of a [`Board`] through crossterm.

use std::collections::HashMap;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use wayfind_core::{Cell, Point};

use crate::board::Board;

/// How a visited walkable cell is drawn.
const OPTIMAL: (char, Color) = ('*', Color::Green);
const EXPLORED: (char, Color) = ('o', Color::DarkYellow);

fn cell_style(cell: Cell) -> Color {
    match cell {
        Cell::Walkable => Color::Grey,
        Cell::Obstacle => Color::DarkGrey,
        Cell::Start => Color::Blue,
        Cell::End => Color::Red,
    }
}

/// Draw the grid row by row followed by the status line.
///
/// Start, end and obstacle cells always show their own glyph; visited
/// walkable cells show whether they are on the optimal path.
pub fn render<W: Write>(out: &mut W, board: &Board, color: bool) -> io::Result<()> {
    let grid = board.grid();
    let marks: HashMap<Point, bool> = board
        .trace()
        .iter()
        .map(|pp| (pp.pos, pp.is_optimal))
        .collect();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let cell = grid.at(p).unwrap_or_default();
            let (ch, fg) = match (cell, marks.get(&p).copied()) {
                (Cell::Walkable, Some(true)) => OPTIMAL,
                (Cell::Walkable, Some(false)) => EXPLORED,
                _ => (cell.glyph(), cell_style(cell)),
            };
            if color {
                queue!(out, SetForegroundColor(fg), Print(ch), ResetColor)?;
            } else {
                queue!(out, Print(ch))?;
            }
        }
        queue!(out, Print('\n'))?;
    }
    queue!(out, Print(board.status()), Print('\n'))?;
    out.flush()
}
