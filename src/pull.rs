use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::draw_target::LineTarget;
use crate::error::PullError;
use crate::format::Megabytes;
use crate::state::ProgressState;
use crate::style::PullStyle;

/// Pause between two animation frames.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(80);
/// Smallest simulated chunk, in megabytes.
pub const DEFAULT_MIN_INCREMENT: f64 = 5.0;
/// Largest simulated chunk, in megabytes.
pub const DEFAULT_MAX_INCREMENT: f64 = 12.0;

/// A simulated image pull.
///
/// Each step adds a random chunk to the pulled amount until the total is
/// reached. [`Pull::run`] draws every step as an overwriting status line.
///
/// ```rust,no_run
/// use brailpull::{LineTarget, Pull};
///
/// let summary = Pull::new("elasticsearch", 723.4)?.run(&LineTarget::stdout())?;
/// println!("{} steps", summary.steps);
/// # Ok::<(), brailpull::PullError>(())
/// ```
#[derive(Debug)]
pub struct Pull<R = ThreadRng> {
    name: String,
    state: ProgressState,
    frame: u64,
    style: PullStyle,
    delay: Duration,
    increment: (f64, f64),
    rng: R,
}

/// What a finished pull reports back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullSummary {
    /// Number of increments it took to reach the total.
    pub steps: u64,
    /// The total size in megabytes.
    pub total: f64,
    /// Wall time spent drawing, delays included.
    pub elapsed: Duration,
}

impl Pull<ThreadRng> {
    /// Creates a pull of `total` megabytes using the thread-local RNG.
    pub fn new(name: impl Into<String>, total: f64) -> Result<Pull<ThreadRng>, PullError> {
        if !(total > 0.0) || !total.is_finite() {
            return Err(PullError::InvalidTotal(total));
        }
        Ok(Pull {
            name: name.into(),
            state: ProgressState::new(total),
            frame: 0,
            style: PullStyle::default(),
            delay: DEFAULT_DELAY,
            increment: (DEFAULT_MIN_INCREMENT, DEFAULT_MAX_INCREMENT),
            rng: rand::rng(),
        })
    }
}

impl<R: Rng> Pull<R> {
    /// Replaces the source of chunk sizes.
    pub fn with_rng<R2: Rng>(self, rng: R2) -> Pull<R2> {
        Pull {
            name: self.name,
            state: self.state,
            frame: self.frame,
            style: self.style,
            delay: self.delay,
            increment: self.increment,
            rng,
        }
    }

    /// Sets the style every line is rendered with.
    pub fn with_style(mut self, style: PullStyle) -> Pull<R> {
        self.style = style;
        self
    }

    /// Sets the pause between frames. Zero disables sleeping.
    pub fn with_delay(mut self, delay: Duration) -> Pull<R> {
        self.delay = delay;
        self
    }

    /// Sets the inclusive range chunk sizes are drawn from.
    pub fn with_increment(mut self, low: f64, high: f64) -> Result<Pull<R>, PullError> {
        if !(low > 0.0) || !(low <= high) || !high.is_finite() {
            return Err(PullError::InvalidIncrement { low, high });
        }
        self.increment = (low, high);
        Ok(self)
    }

    /// The name shown next to the bar.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Index of the spinner frame the next line is drawn with.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Adds one random chunk without drawing anything.
    ///
    /// Returns the new amount, or `None` once the total was reached.
    pub fn step(&mut self) -> Option<f64> {
        if self.state.is_finished() {
            return None;
        }
        let (low, high) = self.increment;
        let delta = if low < high {
            self.rng.random_range(low..=high)
        } else {
            low
        };
        self.state.advance(delta);
        Some(self.state.current())
    }

    /// Renders the status line for the current state and frame.
    pub fn render(&self) -> String {
        self.style.format_line(
            &self.name,
            self.state.current(),
            self.state.total(),
            self.frame,
        )
    }

    /// Steps until done, redrawing `target` after every step, then leaves
    /// the completed line behind.
    pub fn run(mut self, target: &LineTarget) -> Result<PullSummary, PullError> {
        let started = Instant::now();
        let mut steps = 0;

        while let Some(current) = self.step() {
            steps += 1;
            debug!(
                "{}: {} of {}",
                self.name,
                Megabytes(current),
                Megabytes(self.state.total())
            );
            target.draw(&self.render())?;
            self.frame += 1;
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
        target.finish(&self.render())?;

        let summary = PullSummary {
            steps,
            total: self.state.total(),
            elapsed: started.elapsed(),
        };
        info!(
            "pulled {} ({}) in {} steps",
            self.name,
            Megabytes(summary.total),
            summary.steps
        );
        Ok(summary)
    }
}

/// Simulates pulling `name` of `total_mb` megabytes, drawing to stdout.
pub fn simulate_pull(name: &str, total_mb: f64) -> Result<PullSummary, PullError> {
    Pull::new(name, total_mb)?.run(&LineTarget::stdout())
}
