/// Whether a pull is still transferring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Done,
}

/// The amount pulled so far, in megabytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressState {
    current: f64,
    total: f64,
}

impl ProgressState {
    /// Starts at zero out of `total` megabytes.
    pub fn new(total: f64) -> ProgressState {
        ProgressState {
            current: 0.0,
            total,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn status(&self) -> Status {
        if self.current < self.total {
            Status::Running
        } else {
            Status::Done
        }
    }

    /// Indicates that the pull reached its total.
    pub fn is_finished(&self) -> bool {
        self.status() == Status::Done
    }

    /// Adds `delta` megabytes, never going past the total.
    pub fn advance(&mut self, delta: f64) {
        self.current = (self.current + delta).min(self.total);
    }

    /// Returns the completion as a floating-point number between 0 and 1.
    pub fn fraction(&self) -> f64 {
        fraction(self.current, self.total)
    }
}

/// `current / total` clamped into `[0, 1]`.
///
/// A total that is not a positive finite number counts as complete.
pub(crate) fn fraction(current: f64, total: f64) -> f64 {
    if !(total > 0.0) || !total.is_finite() {
        return 1.0;
    }
    (current / total).clamp(0.0, 1.0)
}
