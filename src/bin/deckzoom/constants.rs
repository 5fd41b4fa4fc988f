/// Initial window size in points.
pub const WINDOW_SIZE: [f32; 2] = [960.0, 640.0];

/// Card content text size at zoom factor 1.0.
pub const BASE_CARD_TEXT_SIZE: f32 = 26.0;

/// Deck list and overview text size at zoom factor 1.0.
pub const BASE_LIST_TEXT_SIZE: f32 = 16.0;
