use std::fmt;

use crate::grid::GridMap;
use crate::registry::OccupantRegistry;
use crate::session::GameSession;

const FLOOR: char = '.';
const WALL: char = '#';
const UNNAMED: char = '@';

/// Draw the board as text, one row per line.
///
/// Passable cells are `.`, obstacles `#`, and each occupant is drawn over
/// the terrain with the first character of its identifier (`@` if the
/// identifier is empty). Where occupants share a cell, the one with the
/// greatest identifier is shown.
pub(crate) fn render_board(grid: &GridMap, occupants: &OccupantRegistry) -> String {
    let bounds = grid.bounds();
    let mut glyphs: Vec<char> = bounds
        .iter()
        .map(|c| if grid.walkable(c) { FLOOR } else { WALL })
        .collect();
    for (id, c) in occupants.iter() {
        if let Some(i) = bounds.index_of(c) {
            glyphs[i] = id.chars().next().unwrap_or(UNNAMED);
        }
    }

    let width = bounds.width() as usize;
    let mut out = String::with_capacity(glyphs.len() + bounds.height() as usize);
    for row in glyphs.chunks(width) {
        out.extend(row);
        out.push('\n');
    }
    out
}

impl fmt::Display for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
