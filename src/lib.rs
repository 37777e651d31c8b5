//! A Braille-bar progress line for simulated image pulls.
//!
//! A [`Pull`] advances a fake download by random chunks and redraws a single
//! status line after every chunk:
//!
//! ```text
//! ⠙ elasticsearch   [⣿⣿⣿⡇⠀⠀⠀⠀⠀⠀] 253.1MB / 723.4MB Pulling
//! ✓ elasticsearch   [⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿] 723.4MB / 723.4MB Done
//! ```
//!
//! Each bar glyph is an 8-dot Braille cell, so a ten-glyph bar resolves
//! eighty levels of progress. The dots are raised in a [`FillOrder`] that
//! fills the left column bottom to top, then the right one.
//!
//! Rendering is split from drawing: [`PullStyle::format_bar`] and
//! [`PullStyle::format_line`] are pure, while [`Pull::run`] writes to a
//! [`LineTarget`], which wraps a real [`console::Term`] or anything else
//! implementing [`TermLike`].

mod braille;
mod draw_target;
mod error;
mod format;
#[cfg(feature = "in_memory")]
mod in_memory;
mod logging;
mod pull;
mod state;
mod style;
mod term_like;

pub use crate::braille::{
    braille_cells, braille_char, filled_subcells, FillOrder, EMPTY, FULL, SUBCELLS_PER_CELL,
};
pub use crate::draw_target::LineTarget;
pub use crate::error::PullError;
pub use crate::format::{Megabytes, SizeProgress};
#[cfg(feature = "in_memory")]
pub use crate::in_memory::InMemoryTerm;
pub use crate::logging::LogWrapper;
pub use crate::pull::{
    simulate_pull, Pull, PullSummary, DEFAULT_DELAY, DEFAULT_MAX_INCREMENT, DEFAULT_MIN_INCREMENT,
};
pub use crate::state::{ProgressState, Status};
pub use crate::style::{braille_bar, PullStyle};
pub use crate::term_like::TermLike;
