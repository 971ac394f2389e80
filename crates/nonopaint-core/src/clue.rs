//! Nonogram clue derivation.
//!
//! A clue lists the lengths of the runs of consecutive filled cells along one
//! row or column, in scan order. A line without any filled cell has the clue
//! `0`.

use std::fmt::{self, Display};

use crate::{CellGrid, Line};

/// The clue for one row or column.
///
/// The runs are never empty: a blank line is represented by the single run
/// `[0]`.
///
/// # Examples
///
/// ```
/// use nonopaint_core::Clue;
///
/// let clue = Clue::from_cells([true, true, false, false, true]);
/// assert_eq!(clue.runs(), &[2, 1]);
/// assert_eq!(clue.to_string(), "2 1");
///
/// let blank = Clue::from_cells([false, false]);
/// assert_eq!(blank.runs(), &[0]);
/// assert!(blank.is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    runs: Vec<usize>,
}

impl Clue {
    /// Derives the clue for a sequence of cells given in scan order.
    #[must_use]
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut runs = Vec::new();
        let mut count = 0;
        for filled in cells {
            if filled {
                count += 1;
            } else if count > 0 {
                runs.push(count);
                count = 0;
            }
        }
        if count > 0 {
            runs.push(count);
        }
        if runs.is_empty() {
            runs.push(0);
        }
        Self { runs }
    }

    /// Derives the clue for one line of `grid`.
    #[must_use]
    pub fn for_line(grid: &CellGrid, line: Line) -> Self {
        Self::from_cells(grid.line_cells(line))
    }

    /// Returns the run lengths in scan order (`[0]` for a blank line).
    #[must_use]
    pub fn runs(&self) -> &[usize] {
        &self.runs
    }

    /// Returns `true` if the line has no filled cell.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.runs == [0]
    }

    /// Returns the total number of filled cells described by this clue.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.runs.iter().sum()
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(run, f)?;
        }
        Ok(())
    }
}

/// Derives one clue per row, top to bottom. Each row is scanned left to right.
#[must_use]
pub fn row_clues(grid: &CellGrid) -> Vec<Clue> {
    grid.rows().map(|line| Clue::for_line(grid, line)).collect()
}

/// Derives one clue per column, left to right. Each column is scanned top to
/// bottom.
#[must_use]
pub fn column_clues(grid: &CellGrid) -> Vec<Clue> {
    grid.columns()
        .map(|line| Clue::for_line(grid, line))
        .collect()
}

/// Row and column clues of a grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridClues {
    /// One clue per row (`height` entries).
    pub rows: Vec<Clue>,
    /// One clue per column (`width` entries).
    pub columns: Vec<Clue>,
}

impl GridClues {
    /// Derives all clues of `grid`.
    #[must_use]
    pub fn new(grid: &CellGrid) -> Self {
        Self {
            rows: row_clues(grid),
            columns: column_clues(grid),
        }
    }
}
