//! The persisted zoom settings blob.

use crate::state::ZoomCategory;
use serde::{Deserialize, Serialize};

/// Zoom levels persisted per zoom category.
///
/// Each category has a "current" entry, rewritten on every zoom change, and a
/// "default" entry that `reset` restores. Serialized as a flat JSON object
/// with exactly these four keys; a file missing any key fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomSettings {
    pub overview_zoom: f32,
    pub overview_zoom_default: f32,
    pub review_zoom: f32,
    pub review_zoom_default: f32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            overview_zoom: 1.0,
            overview_zoom_default: 1.0,
            review_zoom: 1.0,
            review_zoom_default: 1.0,
        }
    }
}

impl ZoomSettings {
    /// The current zoom factor for a category.
    pub fn current(&self, category: ZoomCategory) -> f32 {
        match category {
            ZoomCategory::Overview => self.overview_zoom,
            ZoomCategory::Review => self.review_zoom,
        }
    }

    /// Overwrites the current zoom factor for a category.
    pub fn set_current(&mut self, category: ZoomCategory, factor: f32) {
        match category {
            ZoomCategory::Overview => self.overview_zoom = factor,
            ZoomCategory::Review => self.review_zoom = factor,
        }
    }

    /// The default zoom factor for a category, restored by reset.
    pub fn default_for(&self, category: ZoomCategory) -> f32 {
        match category {
            ZoomCategory::Overview => self.overview_zoom_default,
            ZoomCategory::Review => self.review_zoom_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_independent() {
        let mut settings = ZoomSettings::default();
        settings.set_current(ZoomCategory::Review, 1.5);
        assert_eq!(settings.current(ZoomCategory::Review), 1.5);
        assert_eq!(settings.current(ZoomCategory::Overview), 1.0);
    }

    #[test]
    fn serializes_with_the_exact_key_set() {
        let json = serde_json::to_value(ZoomSettings::default()).unwrap();
        let object = json.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "overview_zoom",
                "overview_zoom_default",
                "review_zoom",
                "review_zoom_default",
            ]
        );
    }

    #[test]
    fn missing_keys_fail_to_load() {
        let result: Result<ZoomSettings, _> =
            serde_json::from_str(r#"{ "overview_zoom": 1.0, "review_zoom": 1.0 }"#);
        assert!(result.is_err());
    }
}
