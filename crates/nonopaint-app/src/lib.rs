//! Nonopaint app crate: an egui canvas for painting nonogram pictures.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::num::NonZero;

pub const DEFAULT_MAX_HISTORY_LENGTH: NonZero<usize> = match NonZero::new(200) {
    Some(len) => len,
    None => unreachable!(),
};

pub use self::app::NonopaintApp;

mod action;
mod app;
mod persistence;
mod state;
mod ui;
mod undo_redo_stack;
pub mod version;
mod view_model_builder;
mod viewport;
