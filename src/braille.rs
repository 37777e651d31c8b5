//! Braille glyph arithmetic for sub-cell progress bars.
//!
//! Every Braille pattern in the `U+2800..=U+28FF` block is an 8-dot cell.
//! Dot `n` (numbered 1 to 8 as in the Unicode charts) maps to mask bit
//! `1 << (n - 1)`, so one glyph can show eight distinct levels of fill.

/// Number of sub-units a single bar glyph can show.
pub const SUBCELLS_PER_CELL: usize = 8;

const BRAILLE_BASE: u32 = 0x2800;

/// A blank Braille cell.
pub const EMPTY: char = '\u{2800}';
/// A Braille cell with all eight dots raised.
pub const FULL: char = '\u{28FF}';

/// The order in which the dots of a cell are raised as progress grows.
///
/// Holds a permutation of the dot numbers `1..=8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillOrder([u8; SUBCELLS_PER_CELL]);

impl FillOrder {
    /// Bottom to top in the left column, then bottom to top in the right.
    pub const BOTTOM_UP: FillOrder = FillOrder([7, 3, 2, 1, 8, 6, 5, 4]);

    /// Creates a fill order from dot numbers.
    ///
    /// Returns `None` unless `dots` is a permutation of `1..=8`.
    pub fn new(dots: [u8; SUBCELLS_PER_CELL]) -> Option<FillOrder> {
        let mut seen = 0u8;
        for dot in dots {
            if !(1..=8).contains(&dot) {
                return None;
            }
            seen |= dot_mask(dot);
        }
        if seen == 0xFF {
            Some(FillOrder(dots))
        } else {
            None
        }
    }

    /// Returns the dot numbers in fill order.
    pub fn dots(&self) -> [u8; SUBCELLS_PER_CELL] {
        self.0
    }
}

impl Default for FillOrder {
    fn default() -> FillOrder {
        FillOrder::BOTTOM_UP
    }
}

#[inline]
fn dot_mask(dot: u8) -> u8 {
    1 << (dot - 1)
}

/// Builds a cell with `filled` sub-units raised according to `order`.
///
/// Values outside `0..=8` saturate to an empty or a full cell.
pub fn braille_char(filled: usize, order: &FillOrder) -> char {
    if filled == 0 {
        return EMPTY;
    }
    if filled >= SUBCELLS_PER_CELL {
        return FULL;
    }
    let mask = order.0[..filled]
        .iter()
        .fold(0u8, |acc, &dot| acc | dot_mask(dot));
    // the whole block is assigned, so every mask is a valid scalar value
    char::from_u32(BRAILLE_BASE | u32::from(mask)).unwrap_or(EMPTY)
}

/// Number of sub-units raised for `ratio` across `cells` glyphs.
///
/// The ratio is clamped into `[0, 1]` and NaN counts as zero.
pub fn filled_subcells(ratio: f64, cells: usize) -> usize {
    let total = cells * SUBCELLS_PER_CELL;
    let ratio = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    };
    ((ratio * total as f64).floor() as usize).min(total)
}

/// Lays out exactly `cells` glyphs for `ratio` without any styling.
pub fn braille_cells(ratio: f64, cells: usize, order: &FillOrder) -> String {
    let filled = filled_subcells(ratio, cells);
    let full = filled / SUBCELLS_PER_CELL;
    let partial = filled % SUBCELLS_PER_CELL;

    let mut rv = String::with_capacity(cells * FULL.len_utf8());
    rv.extend(std::iter::repeat(FULL).take(full));
    if full < cells {
        rv.push(braille_char(partial, order));
    }
    let drawn = rv.chars().count();
    rv.extend(std::iter::repeat(EMPTY).take(cells - drawn));
    rv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_dots(c: char) -> u32 {
        (c as u32 - BRAILLE_BASE).count_ones()
    }

    #[test]
    fn char_levels() {
        let order = FillOrder::default();
        assert_eq!(braille_char(0, &order), EMPTY);
        assert_eq!(braille_char(8, &order), FULL);
        assert_eq!(braille_char(42, &order), FULL);
        // dot 7 alone
        assert_eq!(braille_char(1, &order), '\u{2840}');
        // dots 7, 3, 2, 1: the whole left column
        assert_eq!(braille_char(4, &order), '\u{2847}');
        for n in 0..=8 {
            assert_eq!(count_dots(braille_char(n, &order)), n as u32);
        }
    }

    #[test]
    fn fill_order_must_be_permutation() {
        assert!(FillOrder::new([1, 2, 3, 4, 5, 6, 7, 8]).is_some());
        assert!(FillOrder::new([1, 1, 3, 4, 5, 6, 7, 8]).is_none());
        assert!(FillOrder::new([0, 2, 3, 4, 5, 6, 7, 8]).is_none());
        assert!(FillOrder::new([9, 2, 3, 4, 5, 6, 7, 8]).is_none());
    }

    #[test]
    fn half_bar() {
        let order = FillOrder::default();
        let bar = braille_cells(0.5, 10, &order);
        let expected: String = std::iter::repeat(FULL)
            .take(5)
            .chain(std::iter::repeat(EMPTY).take(5))
            .collect();
        assert_eq!(bar, expected);
    }

    #[test]
    fn bounds() {
        let order = FillOrder::default();
        assert!(braille_cells(0.0, 10, &order).chars().all(|c| c == EMPTY));
        assert!(braille_cells(-3.0, 10, &order).chars().all(|c| c == EMPTY));
        assert!(braille_cells(f64::NAN, 10, &order).chars().all(|c| c == EMPTY));
        assert!(braille_cells(1.0, 10, &order).chars().all(|c| c == FULL));
        assert!(braille_cells(7.5, 10, &order).chars().all(|c| c == FULL));
    }

    #[test]
    fn glyph_count_is_fixed() {
        let order = FillOrder::default();
        for cells in 1..=24 {
            for step in 0..=200 {
                let ratio = step as f64 / 200.0;
                assert_eq!(braille_cells(ratio, cells, &order).chars().count(), cells);
            }
        }
    }

    #[test]
    fn fill_is_monotonic() {
        let order = FillOrder::default();
        let mut last = 0;
        for step in 0..=1000 {
            let ratio = step as f64 / 1000.0;
            let dots: u32 = braille_cells(ratio, 10, &order)
                .chars()
                .map(count_dots)
                .sum();
            assert_eq!(dots as usize, filled_subcells(ratio, 10));
            assert!(dots >= last, "fill went backwards at {}", ratio);
            last = dots;
        }
        assert_eq!(last, 80);
    }

    #[test]
    fn partial_cell() {
        let order = FillOrder::default();
        // 0.25 * 80 = 20 sub-units: 2 full cells and 4 dots in the third
        let bar: Vec<char> = braille_cells(0.25, 10, &order).chars().collect();
        assert_eq!(&bar[..2], &[FULL; 2]);
        assert_eq!(bar[2], '\u{2847}');
        assert_eq!(bar[3], EMPTY);
        // 27.5 sub-units round down to 3 full cells and 3 dots in the fourth
        let bar: Vec<char> = braille_cells(0.34375, 10, &order).chars().collect();
        assert_eq!(bar[3], braille_char(3, &order));
        assert_eq!(count_dots(bar[3]), 3);
    }
}
