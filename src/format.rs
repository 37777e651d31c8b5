use std::fmt;

/// Formats a size in megabytes with one decimal place, e.g. `723.4MB`.
#[derive(Debug, Clone, Copy)]
pub struct Megabytes(pub f64);

/// Formats a `current / total` pair of megabyte sizes.
#[derive(Debug, Clone, Copy)]
pub struct SizeProgress {
    pub current: f64,
    pub total: f64,
}

impl fmt::Display for Megabytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}MB", self.0)
    }
}

impl fmt::Display for SizeProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", Megabytes(self.current), Megabytes(self.total))
    }
}
