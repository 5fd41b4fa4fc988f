//! Screen-state model for the review window.

/// Which screen the main window is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenState {
    /// The window is still starting up; no content screen yet.
    Startup,
    /// The list of decks.
    DeckBrowser,
    /// The per-deck overview shown before studying.
    Overview,
    /// A card being reviewed.
    Review,
    /// The profile chooser.
    ProfileManager,
}

/// The two zoom categories a screen can belong to.
///
/// The deck browser and the deck overview share one zoom level; reviewing has
/// its own. Screens outside these categories are never zoomed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomCategory {
    Overview,
    Review,
}

impl ScreenState {
    /// Maps a screen to its zoom category, or `None` for screens that are
    /// never zoomed.
    pub fn zoom_category(self) -> Option<ZoomCategory> {
        match self {
            ScreenState::DeckBrowser | ScreenState::Overview => Some(ZoomCategory::Overview),
            ScreenState::Review => Some(ZoomCategory::Review),
            ScreenState::Startup | ScreenState::ProfileManager => None,
        }
    }

    /// Human-readable name, used by the status bar and logs.
    pub fn label(self) -> &'static str {
        match self {
            ScreenState::Startup => "Startup",
            ScreenState::DeckBrowser => "Decks",
            ScreenState::Overview => "Overview",
            ScreenState::Review => "Review",
            ScreenState::ProfileManager => "Profiles",
        }
    }
}
