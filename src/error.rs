use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised while setting up or drawing a pull.
#[derive(Debug)]
pub enum PullError {
    /// The total size was zero, negative, or not finite.
    InvalidTotal(f64),
    /// The increment range would never reach the total.
    InvalidIncrement { low: f64, high: f64 },
    /// Writing to the output failed.
    Io(io::Error),
}

impl fmt::Display for PullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PullError::InvalidTotal(total) => {
                write!(f, "total size must be a positive number of MB, got {}", total)
            }
            PullError::InvalidIncrement { low, high } => write!(
                f,
                "increment range must satisfy 0 < low <= high, got {}..={}",
                low, high
            ),
            PullError::Io(err) => write!(f, "failed to draw progress: {}", err),
        }
    }
}

impl Error for PullError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PullError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PullError {
    fn from(err: io::Error) -> Self {
        PullError::Io(err)
    }
}
