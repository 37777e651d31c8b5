use std::io;
use std::sync::Mutex;

use console::{measure_text_width, Term};

use crate::TermLike;

/// Target for draw operations
///
/// Owns the output device of a pull and remembers the line currently shown
/// on it, so other writers can step around the animation with
/// [`LineTarget::suspend`].
#[derive(Debug)]
pub struct LineTarget {
    term: Box<dyn TermLike>,
    state: Mutex<LiveLine>,
}

/// The line currently on screen and how many terminal rows it wrapped onto.
#[derive(Debug, Default)]
struct LiveLine {
    text: Option<String>,
    rows: usize,
}

impl LineTarget {
    /// Draw to a buffered stdout terminal.
    pub fn stdout() -> LineTarget {
        LineTarget::term_like(Box::new(Term::buffered_stdout()))
    }

    /// Draw to anything implementing [`TermLike`].
    pub fn term_like(term_like: Box<dyn TermLike>) -> LineTarget {
        LineTarget {
            term: term_like,
            state: Mutex::new(LiveLine::default()),
        }
    }

    /// Overwrites the current line with `line`.
    pub fn draw(&self, line: &str) -> io::Result<()> {
        let mut live = self.live();
        self.clear_rows(live.rows)?;
        self.term.write_str(line)?;
        self.term.flush()?;
        live.rows = self.rows_for(line);
        live.text = Some(line.to_owned());
        Ok(())
    }

    /// Overwrites the current line with `line` and moves past it.
    pub fn finish(&self, line: &str) -> io::Result<()> {
        let mut live = self.live();
        self.clear_rows(live.rows)?;
        self.term.write_line(line)?;
        self.term.flush()?;
        *live = LiveLine::default();
        Ok(())
    }

    /// Hides the live line, runs `f`, and draws the line again.
    ///
    /// Useful for writing output that would otherwise be smeared into the
    /// animation, such as log records.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        let live = self.live();
        if live.text.is_some() {
            let _ = self.clear_rows(live.rows);
            let _ = self.term.flush();
        }
        let ret = f();
        if let Some(line) = live.text.as_deref() {
            let _ = self.term.write_str(line);
            let _ = self.term.flush();
        }
        ret
    }

    /// Number of terminal rows `line` occupies once the terminal wraps it.
    fn rows_for(&self, line: &str) -> usize {
        let width = usize::from(self.term.width());
        if width == 0 {
            return 1;
        }
        let line_width = measure_text_width(line);
        usize::max(line_width.div_ceil(width), 1)
    }

    /// Clears the `rows` rows ending at the cursor and leaves the cursor at
    /// the start of the first one.
    fn clear_rows(&self, rows: usize) -> io::Result<()> {
        // the cursor sits on the last row a wrapped line was written to
        let n = rows.max(1);
        self.term.move_cursor_up(n - 1)?;
        for i in 0..n {
            self.term.clear_line()?;
            if i + 1 != n {
                self.term.move_cursor_down(1)?;
            }
        }
        self.term.move_cursor_up(n - 1)
    }

    fn live(&self) -> std::sync::MutexGuard<'_, LiveLine> {
        // a panic while drawing leaves nothing worth protecting
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
