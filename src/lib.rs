use std::fmt;
use std::path::Path;
use crate::convex_hull::{is_convex, trace_upper_hull, Point};
use crate::error::HullError;
use crate::render::{render_candidates, render_chain, render_grid};
use crate::silhouette::Silhouette;

pub mod convex_hull;
pub mod error;
pub mod silhouette;
pub mod render;
pub mod plot;

/// The outcome of tracing one silhouette.
#[derive(Debug, Clone)]
pub struct HullReport {
    pub silhouette: Silhouette,
    pub candidates: Vec<Point>,
    pub chain: Vec<Point>,
    /// Whether the grid is included when the report is displayed.
    pub show_grid: bool,
}

impl HullReport {
    pub fn is_convex(&self) -> bool {
        is_convex(&self.chain)
    }

    /// Writes the hull chart for this report.
    pub fn draw_plot<P: AsRef<Path>>(&self, path: P) -> Result<(), HullError> {
        plot::draw_hull_plot(&self.silhouette, &self.chain, path)
    }
}

impl fmt::Display for HullReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.show_grid {
            writeln!(f, "Silhouette ({} columns, {} rows):", self.silhouette.columns(), self.silhouette.rows())?;
            write!(f, "{}", render_grid(&self.silhouette))?;
        }
        writeln!(f, "Candidates:")?;
        write!(f, "{}", render_candidates(&self.candidates))?;
        writeln!(f, "Upper hull:")?;
        write!(f, "{}", render_chain(&self.chain))
    }
}

/// Builds the silhouette for the given heights and traces its upper hull.
pub fn process_silhouette(heights: &[usize], capacity: usize) -> Result<HullReport, HullError> {
    log::info!("Processing {} columns with a capacity of {} rows", heights.len(), capacity);
    let silhouette = Silhouette::from_heights(heights, capacity)?;
    let candidates: Vec<_> = silhouette.candidates().collect();
    log::debug!("Extracted candidates: {:?}", candidates);

    let chain = trace_upper_hull(&silhouette)?;
    log::info!("Upper hull has {} points ({} candidates)", chain.len(), candidates.len());

    Ok(HullReport { silhouette, candidates, chain, show_grid: true })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use crate::convex_hull::Point;
    use crate::error::HullError;
    use crate::process_silhouette;

    #[test]
    fn report_lists_grid_candidates_and_chain() {
        let _ = env_logger::try_init();
        let report = process_silhouette(&[2, 1, 0], 2).unwrap();
        assert_eq!(report.candidates, vec![Point::new(0, 1), Point::new(1, 0)]);
        assert_eq!(report.chain, vec![Point::new(0, 1), Point::new(0, 1), Point::new(1, 0)]);
        assert!(report.is_convex());
        assert_eq!(
            report.to_string(),
            "Silhouette (3 columns, 2 rows):\n#..\n##.\nCandidates:\n(0, 1)\n(1, 0)\nUpper hull:\n0 1\n0 1\n1 0\n");
    }

    #[test]
    fn report_without_grid() {
        let mut report = process_silhouette(&[1], 1).unwrap();
        report.show_grid = false;
        assert_eq!(report.to_string(), "Candidates:\n(0, 0)\nUpper hull:\n0 0\n0 0\n");
    }

    #[test]
    fn report_draws_its_plot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.html");
        let report = process_silhouette(&[1, 2, 3, 4, 5], 5).unwrap();
        report.draw_plot(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn zero_capacity_fails() {
        assert!(matches!(process_silhouette(&[], 0), Err(HullError::ZeroCapacity)));
    }
}
