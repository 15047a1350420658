use crate::convex_hull::Point;
use crate::silhouette::Silhouette;

pub const FILLED: char = '#';
pub const EMPTY: char = '.';

/// Renders the grid with the top row first, one character per column.
pub fn render_grid(silhouette: &Silhouette) -> String {
    let mut grid = String::with_capacity((silhouette.columns() + 1) * silhouette.rows());
    for y in (0..silhouette.rows()).rev() {
        for x in 0..silhouette.columns() {
            grid.push(if silhouette.is_filled(x, y) { FILLED } else { EMPTY });
        }
        grid.push('\n');
    }
    grid
}

/// One `(x, y)` line per extracted candidate.
pub fn render_candidates(candidates: &[Point]) -> String {
    candidates
        .iter()
        .map(|point| format!("{}\n", point))
        .collect()
}

/// One `x y` line per chain point.
pub fn render_chain(chain: &[Point]) -> String {
    chain
        .iter()
        .map(|point| format!("{} {}\n", point.x, point.y))
        .collect()
}
