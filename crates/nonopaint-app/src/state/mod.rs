pub(crate) use self::{app_state::*, gesture::*, history::*, settings::*, ui_state::*};

mod app_state;
mod gesture;
mod history;
mod settings;
mod ui_state;
