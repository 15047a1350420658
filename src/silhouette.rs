use std::fs;
use std::path::Path;
use rand::Rng;
use crate::convex_hull::Point;
use crate::error::HullError;

/// A histogram-shaped binary grid: every column is filled from row 0 up to its height.
/// Indexed as `columns[x][y]`, with row 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Silhouette {
    columns: Vec<Vec<bool>>,
    rows: usize,
}

impl Silhouette {
    /// Builds the grid for the given heights. Heights above `capacity` are truncated to it.
    pub fn from_heights(heights: &[usize], capacity: usize) -> Result<Self, HullError> {
        if capacity == 0 {
            return Err(HullError::ZeroCapacity);
        }

        let columns = heights
            .iter()
            .enumerate()
            .map(|(x, &height)| {
                if height > capacity {
                    log::warn!("Column {} has height {} which exceeds the capacity of {} rows, truncating", x, height, capacity);
                }
                (0..capacity).map(|y| y < height).collect()
            })
            .collect();
        log::debug!("Built a silhouette of {} columns and {} rows", heights.len(), capacity);

        Ok(Self { columns, rows: capacity })
    }

    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Out of range cells are reported as empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.columns
            .get(x)
            .and_then(|column| column.get(y))
            .copied()
            .unwrap_or(false)
    }

    /// The chain's fixed starting point: column 0 on the top row, whether or not that cell is filled.
    pub fn anchor(&self) -> Point {
        Point::new(0, self.rows as i64 - 1)
    }

    /// Scans column `x` from the top row down and returns the first filled row.
    pub fn top_filled_row(&self, x: usize) -> Option<usize> {
        let column = self.columns.get(x)?;
        (0..column.len()).rev().find(|&y| column[y])
    }

    /// One point per non-empty column, in increasing x order.
    pub fn candidates(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.columns.len()).filter_map(move |x| {
            self.top_filled_row(x)
                .map(|y| Point::new(x as i64, y as i64))
        })
    }

    /// Height of every column as rediscovered from the grid.
    pub fn heights(&self) -> Vec<usize> {
        (0..self.columns.len())
            .map(|x| self.top_filled_row(x).map_or(0, |y| y + 1))
            .collect()
    }
}

/// Parses heights separated by commas and/or whitespace.
pub fn parse_heights(text: &str) -> Result<Vec<usize>, HullError> {
    text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<usize>().map_err(|_| HullError::InvalidHeight(token.to_string())))
        .collect()
}

pub fn read_heights<P: AsRef<Path>>(path: P) -> Result<Vec<usize>, HullError> {
    let text = fs::read_to_string(path.as_ref())?;
    log::info!("Read heights from {:?}", path.as_ref());
    parse_heights(&text)
}

/// Draws `columns` heights uniformly from `0..=capacity`.
pub fn random_heights<R: Rng>(rng: &mut R, columns: usize, capacity: usize) -> Vec<usize> {
    (0..columns).map(|_| rng.gen_range(0..=capacity)).collect()
}

/// The smallest capacity holding every height, never less than one row.
pub fn minimum_capacity(heights: &[usize]) -> usize {
    heights.iter().copied().max().unwrap_or(0).max(1)
}
