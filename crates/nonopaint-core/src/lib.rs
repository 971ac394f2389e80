//! Core data structures for nonogram painting.
//!
//! This crate holds everything that carries real logic in the editor and has no
//! dependency on a UI toolkit.
//!
//! # Overview
//!
//! - [`grid`]: The [`CellGrid`] cell matrix, its resize semantics, and [`Line`]
//!   addressing for rows and columns.
//! - [`clue`]: Run-length [`Clue`] derivation for every row and column.
//! - [`stroke`]: The per-gesture [`PaintStroke`] mask that keeps a drag from
//!   toggling the same cell twice.
//! - [`codec`]: The bit-packed share format and its base64 text form.
//!
//! # Examples
//!
//! ```
//! use nonopaint_core::{CellGrid, GridClues, codec};
//!
//! let mut grid = CellGrid::new(3, 2);
//! grid.toggle(0, 0);
//! grid.toggle(1, 0);
//! grid.toggle(1, 1);
//!
//! let clues = GridClues::new(&grid);
//! assert_eq!(clues.columns[1].runs(), &[2]);
//! assert_eq!(clues.columns[2].runs(), &[0]);
//!
//! let text = codec::encode_grid(&grid).unwrap();
//! assert_eq!(codec::decode_grid(&text).unwrap(), grid);
//! ```

pub mod clue;
pub mod codec;
pub mod grid;
pub mod stroke;

pub use self::{
    clue::{Clue, GridClues, column_clues, row_clues},
    codec::{DecodeError, EncodeError},
    grid::{CellGrid, Line, ParseGridError},
    stroke::PaintStroke,
};
