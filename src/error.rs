use std::error::Error;
use std::fmt;
use std::io;
use crate::convex_hull::Point;

/// Everything that can go wrong while building a silhouette or tracing its hull.
#[derive(Debug)]
pub enum HullError {
    /// A silhouette needs at least one row, otherwise the anchor row does not exist.
    ZeroCapacity,
    /// The slope between two points sharing the same column was requested.
    VerticalSegment { from: Point, to: Point },
    /// Candidates must arrive in strictly increasing column order.
    NonIncreasingX { previous: Point, current: Point },
    InvalidHeight(String),
    Io(io::Error),
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::ZeroCapacity => write!(f, "A silhouette requires a row capacity of at least 1."),
            HullError::VerticalSegment { from, to } => {
                write!(f, "Cannot compute the slope of vertical segment {} -> {}", from, to)
            }
            HullError::NonIncreasingX { previous, current } => {
                write!(f, "Candidate {} does not come after {} (columns must strictly increase)", current, previous)
            }
            HullError::InvalidHeight(token) => write!(f, "Could not parse height \"{}\" as a non-negative integer.", token),
            HullError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for HullError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HullError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HullError {
    fn from(err: io::Error) -> Self {
        HullError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;
    use crate::convex_hull::Point;
    use crate::error::HullError;

    #[test]
    fn messages_name_the_offending_points() {
        let err = HullError::NonIncreasingX { previous: Point::new(3, 1), current: Point::new(2, 0) };
        let message = err.to_string();
        assert!(message.contains("(2, 0)"));
        assert!(message.contains("(3, 1)"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err: HullError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(HullError::ZeroCapacity.source().is_none());
    }
}
