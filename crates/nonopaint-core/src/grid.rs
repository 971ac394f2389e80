//! The cell matrix painted by the user.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    str::FromStr,
};

/// Character used for a filled cell in the text form of a [`CellGrid`].
pub const FILLED_CHAR: char = '#';
/// Character used for an empty cell in the text form of a [`CellGrid`].
pub const EMPTY_CHAR: char = '.';

/// A rectangular matrix of filled/empty cells.
///
/// Cells are addressed as `(x, y)` where `x` is the column (`0..width`) and `y`
/// is the row (`0..height`). Storage is column-major, so all cells of column 0
/// come first, then column 1, and so on. This is the same order the share
/// codec writes bits in.
///
/// Accessors never fail on out-of-range coordinates: reads return `None` and
/// writes are ignored. Painting routinely drifts past the grid edges, so this
/// is normal input rather than an error.
///
/// # Examples
///
/// ```
/// use nonopaint_core::CellGrid;
///
/// let mut grid = CellGrid::new(4, 3);
/// assert!(grid.toggle(1, 2));
/// assert_eq!(grid.get(1, 2), Some(true));
///
/// // Out of range: ignored.
/// assert!(!grid.toggle(4, 0));
/// assert_eq!(grid.get(4, 0), None);
///
/// grid.resize(2, 2);
/// assert_eq!(grid.filled_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE)
    }
}

impl CellGrid {
    /// Width and height of a freshly started puzzle.
    pub const DEFAULT_SIZE: usize = 8;

    /// Creates an all-empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    ///
    /// ```should_panic
    /// use nonopaint_core::CellGrid;
    ///
    /// let _ = CellGrid::new(0, 4);
    /// ```
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "Invalid grid size: {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Builds a grid from column-major cell values.
    pub(crate) fn from_column_major(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `(x, y)` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        self.contains(x, y).then(|| x * self.height + y)
    }

    /// Returns the cell at `(x, y)`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Returns `true` if the cell at `(x, y)` exists and is filled.
    #[must_use]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// Returns `true` if the cell existed and its value changed.
    pub fn set(&mut self, x: usize, y: usize, filled: bool) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        let changed = self.cells[i] != filled;
        self.cells[i] = filled;
        changed
    }

    /// Flips the cell at `(x, y)`.
    ///
    /// Returns `false` without touching anything if `(x, y)` is out of range.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        self.cells[i] = !self.cells[i];
        true
    }

    /// Empties every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Changes the dimensions, keeping cells that are inside both the old and
    /// the new bounds.
    ///
    /// Newly introduced cells are empty. Cells that fall outside the new bounds
    /// are dropped. Does nothing if the dimensions are unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn resize(&mut self, width: usize, height: usize) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        let mut resized = Self::new(width, height);
        let keep_height = usize::min(self.height, height);
        for x in 0..usize::min(self.width, width) {
            let src = x * self.height;
            let dst = x * height;
            resized.cells[dst..dst + keep_height]
                .copy_from_slice(&self.cells[src..src + keep_height]);
        }
        *self = resized;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Returns all cells in column-major order.
    #[must_use]
    pub fn column_major(&self) -> &[bool] {
        &self.cells
    }

    /// Returns the number of cells on `line`.
    #[must_use]
    pub fn line_len(&self, line: Line) -> usize {
        match line {
            Line::Row { .. } => self.width,
            Line::Column { .. } => self.height,
        }
    }

    /// Iterates over the cells of a row (left to right) or column (top to
    /// bottom).
    ///
    /// A line outside the grid yields nothing.
    #[must_use]
    pub fn line_cells(&self, line: Line) -> LineCells<'_> {
        let in_range = match line {
            Line::Row { y } => y < self.height,
            Line::Column { x } => x < self.width,
        };
        let len = if in_range { self.line_len(line) } else { 0 };
        LineCells {
            grid: self,
            line,
            front: 0,
            back: len,
        }
    }

    /// Returns every row, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Line> + use<> {
        (0..self.height).map(|y| Line::Row { y })
    }

    /// Returns every column, left to right.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = Line> + use<> {
        (0..self.width).map(|x| Line::Column { x })
    }
}

/// A single row or column of a [`CellGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row identified by its y coordinate.
    Row {
        /// Row index.
        y: usize,
    },
    /// A column identified by its x coordinate.
    Column {
        /// Column index.
        x: usize,
    },
}

impl Line {
    /// Converts an index along the line into an absolute `(x, y)` position.
    #[must_use]
    #[inline]
    pub fn position(self, i: usize) -> (usize, usize) {
        match self {
            Line::Row { y } => (i, y),
            Line::Column { x } => (x, i),
        }
    }
}

/// Iterator over the cells of one [`Line`].
#[derive(Debug, Clone)]
pub struct LineCells<'a> {
    grid: &'a CellGrid,
    line: Line,
    front: usize,
    back: usize,
}

impl Iterator for LineCells<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let (x, y) = self.line.position(self.front);
        self.front += 1;
        Some(self.grid.is_filled(x, y))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for LineCells<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let (x, y) = self.line.position(self.back);
        Some(self.grid.is_filled(x, y))
    }
}

impl FusedIterator for LineCells<'_> {}
impl ExactSizeIterator for LineCells<'_> {}

impl Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for filled in self.line_cells(row) {
                let ch = if filled { FILLED_CHAR } else { EMPTY_CHAR };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors returned when parsing the text form of a [`CellGrid`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input contained no rows.
    #[display("grid text is empty")]
    Empty,
    /// A row had a different number of cells than the first row.
    #[display("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of this row.
        actual: usize,
    },
    /// A character other than the filled/empty markers was found.
    #[display("invalid cell character {ch:?} at row {row}, column {column}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
    },
}

impl FromStr for CellGrid {
    type Err = ParseGridError;

    /// Parses one text line per row, `#` for filled and `.` for empty.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .enumerate()
                    .map(|(column, ch)| match ch {
                        FILLED_CHAR => Ok(true),
                        EMPTY_CHAR => Ok(false),
                        _ => Err((ch, column)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .enumerate()
            .map(|(row, cells)| {
                cells.map_err(|(ch, column)| ParseGridError::InvalidChar { ch, row, column })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let Some(width) = rows.first().map(Vec::len) else {
            return Err(ParseGridError::Empty);
        };
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ParseGridError::RaggedRow {
                row,
                expected: width,
                actual: cells.len(),
            });
        }

        let mut grid = Self::new(width, rows.len());
        for (y, cells) in rows.iter().enumerate() {
            for (x, &filled) in cells.iter().enumerate() {
                grid.set(x, y, filled);
            }
        }
        Ok(grid)
    }
}
