use std::fmt;
use crate::error::HullError;
use crate::silhouette::Silhouette;

/// A column/row coordinate on the silhouette grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Slope of the segment going from `from` to `to`.
pub fn slope(from: Point, to: Point) -> Result<f64, HullError> {
    if from.x == to.x {
        return Err(HullError::VerticalSegment { from, to });
    }
    Ok((to.y - from.y) as f64 / (to.x - from.x) as f64)
}

// The anchor and a column 0 candidate share x. Their slope is what an IEEE division by zero yields:
// a drop below the anchor is -inf (popped by the next candidate), a point on the anchor row is NaN
// (never popped, since every comparison against NaN is false).
fn anchor_slope(anchor: Point, first: Point) -> f64 {
    (first.y - anchor.y) as f64 / 0.
}

/// Whether the top of the chain bends upwards relative to `curr` and has to be removed.
fn should_pop(chain: &[Point], curr: Point) -> Result<bool, HullError> {
    match chain {
        // Only the anchor is left: its slope counts as +inf, so the candidate is always accepted.
        [] | [_] => Ok(false),
        [.., before, top] => {
            let prev_slope = if chain.len() == 2 && before.x == top.x {
                anchor_slope(*before, *top)
            } else {
                slope(*before, *top)?
            };
            let next_slope = slope(*top, curr)?;
            // Strict comparison: collinear points stay on the chain.
            Ok(prev_slope < next_slope)
        }
    }
}

/// Folds candidates, given in strictly increasing x order, into a convex upper chain starting at `anchor`.
///
/// The first candidate may share the anchor's column (column 0 always does). The anchor is never removed.
pub fn upper_chain<I>(anchor: Point, candidates: I) -> Result<Vec<Point>, HullError>
    where
        I: IntoIterator<Item = Point>,
{
    let mut chain = vec![anchor];
    let mut previous_candidate: Option<Point> = None;

    for curr in candidates {
        match previous_candidate {
            Some(previous) if curr.x <= previous.x => {
                return Err(HullError::NonIncreasingX { previous, current: curr });
            }
            None if curr.x < anchor.x => {
                return Err(HullError::NonIncreasingX { previous: anchor, current: curr });
            }
            _ => {}
        }
        previous_candidate = Some(curr);

        while should_pop(&chain, curr)? {
            if let Some(popped) = chain.pop() {
                log::debug!("Popped {} while inserting {}", popped, curr);
            }
        }
        chain.push(curr);
        log::debug!("Pushed {}, chain is now {:?}", curr, chain);
    }

    Ok(chain)
}

/// Traces the upper hull of a silhouette: one candidate per non-empty column, folded from the top-left anchor.
pub fn trace_upper_hull(silhouette: &Silhouette) -> Result<Vec<Point>, HullError> {
    let anchor = silhouette.anchor();
    log::debug!("Tracing upper hull of a {}x{} silhouette from anchor {}", silhouette.columns(), silhouette.rows(), anchor);
    upper_chain(anchor, silhouette.candidates())
}

/// Checks that slopes never increase along the chain.
/// Segments leaving the anchor vertically carry no slope and are not checked.
pub fn is_convex(chain: &[Point]) -> bool {
    chain
        .windows(3)
        .all(|triple| match (slope(triple[0], triple[1]), slope(triple[1], triple[2])) {
            (Ok(left), Ok(right)) => left >= right,
            _ => true,
        })
}
