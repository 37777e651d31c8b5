use console::{pad_str, Alignment, Style};

use crate::braille::{braille_cells, FillOrder};
use crate::format::SizeProgress;
use crate::state::fraction;

/// Controls the rendering style of a pull line.
#[derive(Clone, Debug)]
pub struct PullStyle {
    spinner_frames: Vec<Box<str>>,
    done_glyph: Box<str>,
    bar_style: Style,
    done_style: Style,
    fill_order: FillOrder,
    cells: usize,
    name_width: usize,
    running_label: Box<str>,
    done_label: Box<str>,
}

impl Default for PullStyle {
    fn default() -> PullStyle {
        PullStyle {
            spinner_frames: "⠋⠙⠸⠴⠦⠇".chars().map(|c| c.to_string().into()).collect(),
            done_glyph: "✓".into(),
            bar_style: Style::new().yellow().bright().force_styling(true),
            done_style: Style::new().green().bright().force_styling(true),
            fill_order: FillOrder::BOTTOM_UP,
            cells: 10,
            name_width: 15,
            running_label: "Pulling".into(),
            done_label: "Done".into(),
        }
    }
}

impl PullStyle {
    /// Returns the default pull style.
    pub fn new() -> PullStyle {
        PullStyle::default()
    }

    /// Sets the spinner character sequence.
    ///
    /// An empty string keeps the current frames.
    pub fn spinner_chars(mut self, s: &str) -> PullStyle {
        if !s.is_empty() {
            self.spinner_frames = s.chars().map(|c| c.to_string().into()).collect();
        }
        self
    }

    /// Sets the glyph shown in place of the spinner once done.
    pub fn done_glyph(mut self, s: &str) -> PullStyle {
        self.done_glyph = s.into();
        self
    }

    /// Sets the style wrapped around the bar glyphs.
    pub fn bar_style(mut self, style: Style) -> PullStyle {
        self.bar_style = style;
        self
    }

    /// Sets the style of the completion glyph.
    pub fn done_style(mut self, style: Style) -> PullStyle {
        self.done_style = style;
        self
    }

    /// Drops all color escapes.
    pub fn plain(self) -> PullStyle {
        self.bar_style(Style::new()).done_style(Style::new())
    }

    /// Sets the order in which the dots of a bar glyph are raised.
    pub fn fill_order(mut self, order: FillOrder) -> PullStyle {
        self.fill_order = order;
        self
    }

    /// Sets the number of bar glyphs. Zero is raised to one.
    pub fn cells(mut self, cells: usize) -> PullStyle {
        self.cells = cells.max(1);
        self
    }

    /// Sets the column width the name is padded or truncated to.
    pub fn name_width(mut self, width: usize) -> PullStyle {
        self.name_width = width;
        self
    }

    /// Returns the number of bar glyphs.
    pub fn get_cells(&self) -> usize {
        self.cells
    }

    /// Returns the spinner string for a given frame.
    pub fn get_spinner_str(&self, frame: u64) -> &str {
        &self.spinner_frames[(frame % self.spinner_frames.len() as u64) as usize]
    }

    /// Returns the styled completion glyph.
    pub fn get_done_str(&self) -> String {
        self.done_style.apply_to(&*self.done_glyph).to_string()
    }

    /// Renders the Braille bar for `ratio`, wrapped in the bar style.
    pub fn format_bar(&self, ratio: f64) -> String {
        let cells = braille_cells(ratio, self.cells, &self.fill_order);
        self.bar_style.apply_to(cells).to_string()
    }

    /// Renders one status line.
    ///
    /// While `current < total` the line leads with the spinner frame for
    /// `frame`, afterwards with the completion glyph.
    pub fn format_line(&self, name: &str, current: f64, total: f64, frame: u64) -> String {
        let bar = self.format_bar(fraction(current, total));
        let name = pad_str(name, self.name_width, Alignment::Left, Some(""));
        let size = SizeProgress { current, total };

        if current < total {
            format!(
                "{} {} [{}] {} {}",
                self.get_spinner_str(frame),
                name,
                bar,
                size,
                self.running_label
            )
        } else {
            format!(
                "{} {} [{}] {} {}",
                self.get_done_str(),
                name,
                bar,
                size,
                self.done_label
            )
        }
    }
}

/// Renders a bar of `cells` glyphs for `ratio` with the default colors.
pub fn braille_bar(ratio: f64, cells: usize) -> String {
    PullStyle::default().cells(cells).format_bar(ratio)
}
