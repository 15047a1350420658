use std::fs;
use std::path::Path;
use plotly::{Bar, Layout, Plot, Scatter};
use plotly::common::{Mode, Title};
use plotly::layout::{Axis, Legend};
use crate::convex_hull::Point;
use crate::error::HullError;
use crate::silhouette::Silhouette;

/// Builds a chart with the top filled row of every non-empty column as bars and the hull chain drawn over them.
pub fn hull_plot(silhouette: &Silhouette, chain: &[Point]) -> Plot {
    let mut plot = Plot::new();
    plot.set_layout(Layout::new()
        .title(Title::new(&*format!("Upper hull of a silhouette with {} columns and {} rows", silhouette.columns(), silhouette.rows())))
        .x_axis(Axis::new().title(Title::new("Column")).dtick(1.))
        .y_axis(Axis::new().title(Title::new("Row")).dtick(1.))
        .legend(Legend::new()));

    let (columns, top_rows): (Vec<_>, Vec<_>) = silhouette
        .candidates()
        .map(|point| (point.x, point.y))
        .unzip();
    let trace = Bar::new(columns, top_rows)
        .name("Top filled row");
    plot.add_trace(trace);

    let trace = Scatter::new(
        chain.iter().map(|point| point.x).collect(),
        chain.iter().map(|point| point.y).collect())
        .mode(Mode::LinesMarkers)
        .name("Upper hull")
        .text_array(chain.iter().map(|point| point.to_string()).collect());
    plot.add_trace(trace);

    plot
}

/// Writes the hull chart as a standalone HTML page.
pub fn draw_hull_plot<P: AsRef<Path>>(silhouette: &Silhouette, chain: &[Point], path: P) -> Result<(), HullError> {
    let plot = hull_plot(silhouette, chain);
    fs::write(path.as_ref(), plot.to_html())?;
    log::info!("Hull plot written to {:?}", path.as_ref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::tempdir;
    use crate::convex_hull::trace_upper_hull;
    use crate::plot::draw_hull_plot;
    use crate::silhouette::Silhouette;

    #[test]
    fn writes_an_html_page() {
        let _ = env_logger::try_init();
        let dir = tempdir().unwrap();
        let path = dir.path().join("hull.html");
        let silhouette = Silhouette::from_heights(&[5, 2, 2, 2, 1, 1, 3, 3, 3, 2, 2, 1, 1, 1, 0, 0], 5).unwrap();
        let chain = trace_upper_hull(&silhouette).unwrap();

        draw_hull_plot(&silhouette, &chain, &path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("Upper hull"));
        assert!(html.contains("Top filled row"));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("hull.html");
        let silhouette = Silhouette::from_heights(&[1], 1).unwrap();
        assert!(draw_hull_plot(&silhouette, &[], &path).is_err());
    }
}
