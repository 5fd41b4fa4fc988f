//! Zoom arithmetic and per-screen persistence.

use crate::settings::ZoomSettings;
use crate::state::ScreenState;
use crate::store::{ConfigError, ConfigStore};

/// Default multiplicative zoom step: the fourth root of two, so four steps
/// double or halve the factor as precisely as possible.
pub const DEFAULT_ZOOM_STEP: f32 = 1.189_207_1;

/// The zoomable content view of the main window.
///
/// The factor is the raw content scale, independent of the window system's
/// display scale; implementations must not fold DPI compensation into it.
pub trait ContentView {
    fn zoom_factor(&self) -> f32;
    fn set_zoom_factor(&mut self, factor: f32);
}

/// Owns the zoom settings and applies zoom changes to the view.
///
/// Every mutation is flushed through the [`ConfigStore`] synchronously before
/// the view is updated; there is no batching. The factor is never clamped,
/// the view renders whatever it is given.
pub struct ZoomController<S> {
    settings: ZoomSettings,
    store: S,
    step: f32,
}

impl<S: ConfigStore> ZoomController<S> {
    /// Loads settings from the store, falling back to defaults when nothing
    /// has been saved yet. A malformed settings file is an error.
    pub fn new(store: S) -> Result<Self, ConfigError> {
        let settings = store.load()?.unwrap_or_default();
        Ok(Self::with_settings(store, settings))
    }

    /// Builds a controller around already-loaded settings.
    pub fn with_settings(store: S, settings: ZoomSettings) -> Self {
        Self {
            settings,
            store,
            step: DEFAULT_ZOOM_STEP,
        }
    }

    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    /// Multiplies the view's factor by the default step.
    pub fn zoom_in(
        &mut self,
        state: ScreenState,
        view: &mut impl ContentView,
    ) -> Result<(), ConfigError> {
        self.zoom_in_by(state, view, self.step)
    }

    /// Divides the view's factor by the default step.
    pub fn zoom_out(
        &mut self,
        state: ScreenState,
        view: &mut impl ContentView,
    ) -> Result<(), ConfigError> {
        self.zoom_out_by(state, view, self.step)
    }

    pub fn zoom_in_by(
        &mut self,
        state: ScreenState,
        view: &mut impl ContentView,
        step: f32,
    ) -> Result<(), ConfigError> {
        let new_factor = view.zoom_factor() * step;
        self.change_zoom(state, view, new_factor)
    }

    pub fn zoom_out_by(
        &mut self,
        state: ScreenState,
        view: &mut impl ContentView,
        step: f32,
    ) -> Result<(), ConfigError> {
        let new_factor = view.zoom_factor() / step;
        self.change_zoom(state, view, new_factor)
    }

    /// Records `new_factor` as the current zoom for the state's category,
    /// persists the settings, and applies the factor to the view.
    ///
    /// Screens without a zoom category skip the settings update; the persist
    /// and the view update still happen.
    pub fn change_zoom(
        &mut self,
        state: ScreenState,
        view: &mut impl ContentView,
        new_factor: f32,
    ) -> Result<(), ConfigError> {
        if let Some(category) = state.zoom_category() {
            self.settings.set_current(category, new_factor);
        }
        self.store.save(&self.settings)?;
        view.set_zoom_factor(new_factor);
        log::debug!("zoom factor {:.3} on {}", new_factor, state.label());
        Ok(())
    }

    /// Applies the persisted zoom for the state's category to the view.
    ///
    /// Called on every screen-state transition. Does not persist anything;
    /// a no-op for uncategorized screens.
    pub fn apply_zoom(&self, state: ScreenState, view: &mut impl ContentView) {
        if let Some(category) = state.zoom_category() {
            view.set_zoom_factor(self.settings.current(category));
        }
    }

    /// Restores the persisted default for the state's category, re-persisting
    /// it as the current zoom. A no-op for uncategorized screens.
    pub fn reset_zoom(
        &mut self,
        state: ScreenState,
        view: &mut impl ContentView,
    ) -> Result<(), ConfigError> {
        match state.zoom_category() {
            Some(category) => {
                let factor = self.settings.default_for(category);
                self.change_zoom(state, view, factor)
            }
            None => Ok(()),
        }
    }
}
