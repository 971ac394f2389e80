//! Saving and restoring [`AppState`] through eframe storage.
//!
//! The grid is stored as its share text so the persisted format matches the
//! interchange format. Settings and viewport are stored as plain fields.

use eframe::{Storage, egui::Vec2};
use nonopaint_core::{CellGrid, codec};
use serde::{Deserialize, Serialize};

use crate::{
    state::{AppState, PuzzleSize, Settings},
    viewport::Viewport,
};

const STORAGE_KEY: &str = "nonopaint_state";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PersistedState {
    share_text: Option<String>,
    settings: Settings,
    viewport: ViewportDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct ViewportDto {
    offset_x: f32,
    offset_y: f32,
    zoom: f32,
}

impl From<&Viewport> for ViewportDto {
    fn from(viewport: &Viewport) -> Self {
        let offset = viewport.offset();
        Self {
            offset_x: offset.x,
            offset_y: offset.y,
            zoom: viewport.zoom(),
        }
    }
}

impl From<ViewportDto> for Viewport {
    fn from(dto: ViewportDto) -> Self {
        let ViewportDto {
            offset_x,
            offset_y,
            zoom,
        } = dto;
        if [offset_x, offset_y, zoom].iter().all(|v| v.is_finite()) {
            Viewport::new(Vec2::new(offset_x, offset_y), zoom)
        } else {
            log::warn!("ignoring non-finite persisted viewport {dto:?}");
            Viewport::default()
        }
    }
}

impl PersistedState {
    fn from_app_state(app_state: &AppState) -> Self {
        let share_text = codec::encode_grid(&app_state.grid)
            .inspect_err(|err| log::warn!("grid is not persisted: {err}"))
            .ok();
        Self {
            share_text,
            settings: app_state.settings.clone(),
            viewport: ViewportDto::from(&app_state.viewport),
        }
    }

    fn into_app_state(self) -> AppState {
        let Self {
            share_text,
            mut settings,
            viewport,
        } = self;
        settings.display = settings.display.clamped();
        let grid = share_text
            .and_then(|text| {
                codec::decode_grid(&text)
                    .inspect_err(|err| log::warn!("discarding persisted grid: {err}"))
                    .ok()
            })
            .unwrap_or_else(|| {
                let PuzzleSize { width, height } = settings.puzzle.clamped();
                CellGrid::new(width, height)
            });
        AppState::new(grid, settings, viewport.into())
    }
}

/// Restores the saved state, or `None` on first run or unreadable data.
pub(crate) fn load_state(storage: &dyn Storage) -> Option<AppState> {
    if storage.get_string(STORAGE_KEY).is_none() {
        log::debug!("no saved state found");
        return None;
    }
    let Some(persisted) = eframe::get_value::<PersistedState>(storage, STORAGE_KEY) else {
        log::warn!("saved state could not be read; starting from defaults");
        return None;
    };
    Some(persisted.into_app_state())
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    eframe::set_value(
        storage,
        STORAGE_KEY,
        &PersistedState::from_app_state(app_state),
    );
}

#[cfg(test)]
mod tests {
    use eframe::egui::Vec2;
    use nonopaint_core::CellGrid;

    use super::{PersistedState, ViewportDto};
    use crate::{
        state::{AppState, PuzzleSize, Settings},
        viewport::Viewport,
    };

    #[test]
    fn state_survives_persisting() {
        let mut grid = CellGrid::new(5, 7);
        grid.toggle(4, 6);
        grid.toggle(0, 3);
        let mut settings = Settings::default();
        settings.hide_answer = true;
        settings.display.cell_size = 24.0;
        let viewport = Viewport::new(Vec2::new(-30.0, 12.5), 2.0);
        let app_state = AppState::new(grid.clone(), settings, viewport);

        let restored = PersistedState::from_app_state(&app_state).into_app_state();

        assert_eq!(restored.grid, grid);
        assert_eq!(restored.settings, app_state.settings);
        assert_eq!(restored.viewport, viewport);
        assert!(!restored.is_dirty());
    }

    #[test]
    fn corrupt_share_text_falls_back_to_blank_grid() {
        let mut settings = Settings::default();
        settings.puzzle = PuzzleSize {
            width: 3,
            height: 4,
        };
        let persisted = PersistedState {
            share_text: Some("!!".to_owned()),
            settings,
            viewport: ViewportDto::from(&Viewport::default()),
        };

        let restored = persisted.into_app_state();

        assert_eq!(restored.grid, CellGrid::new(3, 4));
    }

    #[test]
    fn restored_display_settings_are_clamped() {
        let mut settings = Settings::default();
        settings.display.cell_size = 0.0;
        settings.display.zoom_speed = f32::NAN;
        let persisted = PersistedState {
            share_text: None,
            settings,
            viewport: ViewportDto::from(&Viewport::default()),
        };

        let restored = persisted.into_app_state();

        assert!((restored.settings.display.cell_size - 4.0).abs() < f32::EPSILON);
        assert!((restored.settings.display.zoom_speed - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn non_finite_viewport_is_reset() {
        let dto = ViewportDto {
            offset_x: f32::NAN,
            offset_y: 0.0,
            zoom: 1.0,
        };
        assert_eq!(Viewport::from(dto), Viewport::default());
    }
}
