use std::fmt::{Debug, Formatter};
use std::io::Write;
use std::sync::{Arc, Mutex};

use vt100::Parser;

use crate::TermLike;

/// A thin wrapper around [`vt100::Parser`].
///
/// This is just an [`Arc`] around its internal state, so it can be freely cloned.
#[derive(Debug, Clone)]
pub struct InMemoryTerm {
    state: Arc<Mutex<InMemoryTermState>>,
}

impl InMemoryTerm {
    pub fn new(rows: u16, cols: u16) -> InMemoryTerm {
        assert!(rows > 0, "rows must be > 0");
        assert!(cols > 0, "cols must be > 0");
        InMemoryTerm {
            state: Arc::new(Mutex::new(InMemoryTermState::new(rows, cols))),
        }
    }

    /// The visible screen, one `\n`-joined row per line, trailing blank rows dropped.
    pub fn contents(&self) -> String {
        let state = self.state.lock().unwrap();

        // `Screen::contents` joins wrapped rows without newlines, so walk the rows instead.
        let mut rows = state
            .parser
            .screen()
            .rows(0, state.width)
            .collect::<Vec<_>>();

        while rows.last().map_or(false, |row| row.is_empty()) {
            rows.pop();
        }
        rows.join("\n")
    }

    /// The `(row, col)` of the cursor.
    pub fn cursor_position(&self) -> (u16, u16) {
        self.state.lock().unwrap().parser.screen().cursor_position()
    }

    /// Every byte written so far, escapes included.
    pub fn raw_output(&self) -> Vec<u8> {
        self.state.lock().unwrap().raw.clone()
    }
}

impl TermLike for InMemoryTerm {
    fn width(&self) -> u16 {
        self.state.lock().unwrap().width
    }

    fn move_cursor_up(&self, n: usize) -> std::io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        self.state
            .lock()
            .unwrap()
            .write_str(&format!("\x1b[{}A", n))
    }

    fn move_cursor_down(&self, n: usize) -> std::io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        self.state
            .lock()
            .unwrap()
            .write_str(&format!("\x1b[{}B", n))
    }

    fn write_line(&self, s: &str) -> std::io::Result<()> {
        let mut state = self.state.lock().unwrap();

        debug_assert!(
            s.lines().count() <= 1,
            "calling write_line with embedded newlines is not allowed"
        );

        // vt100 needs the full \r\n sequence to jump to the next line and reset the cursor
        state.write_str(s)?;
        state.write_str("\r\n")
    }

    fn write_str(&self, s: &str) -> std::io::Result<()> {
        self.state.lock().unwrap().write_str(s)
    }

    fn clear_line(&self) -> std::io::Result<()> {
        self.state.lock().unwrap().write_str("\r\x1b[2K")
    }

    fn flush(&self) -> std::io::Result<()> {
        self.state.lock().unwrap().parser.flush()
    }
}

struct InMemoryTermState {
    width: u16,
    parser: vt100::Parser,
    raw: Vec<u8>,
}

impl InMemoryTermState {
    pub(crate) fn new(rows: u16, cols: u16) -> InMemoryTermState {
        InMemoryTermState {
            width: cols,
            parser: Parser::new(rows, cols, 0),
            raw: Vec::new(),
        }
    }

    pub(crate) fn write_str(&mut self, s: &str) -> std::io::Result<()> {
        self.raw.extend_from_slice(s.as_bytes());
        self.parser.write_all(s.as_bytes())
    }
}

impl Debug for InMemoryTermState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTermState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{LineTarget, PullStyle};

    #[test]
    fn write_line() {
        let in_mem = InMemoryTerm::new(10, 5);
        assert_eq!(in_mem.cursor_position(), (0, 0));

        in_mem.write_line("A").unwrap();
        assert_eq!(in_mem.contents(), "A");
        assert_eq!(in_mem.cursor_position(), (1, 0));

        in_mem.write_line("Longer").unwrap();
        assert_eq!(in_mem.contents(), "A\nLonge\nr");
    }

    #[test]
    fn clear_line_overwrites() {
        let in_mem = InMemoryTerm::new(10, 40);
        in_mem.write_str("⠋ first frame").unwrap();
        in_mem.clear_line().unwrap();
        in_mem.write_str("⠙ second").unwrap();
        assert_eq!(in_mem.contents(), "⠙ second");
        assert_eq!(in_mem.cursor_position(), (0, 8));
    }

    #[test]
    fn target_redraws_in_place() {
        let in_mem = InMemoryTerm::new(10, 80);
        let target = LineTarget::term_like(Box::new(in_mem.clone()));
        let style = PullStyle::new().plain();

        target.draw(&style.format_line("nginx", 10.0, 30.0, 0)).unwrap();
        target.draw(&style.format_line("nginx", 20.0, 30.0, 1)).unwrap();
        assert!(in_mem.contents().starts_with("⠙ nginx"));
        assert_eq!(in_mem.contents().lines().count(), 1);

        target.finish(&style.format_line("nginx", 30.0, 30.0, 2)).unwrap();
        assert!(in_mem.contents().ends_with("30.0MB / 30.0MB Done"));
        assert_eq!(in_mem.cursor_position(), (1, 0));
    }
}
