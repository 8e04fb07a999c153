//! Playback UI state store

use dioxus::prelude::*;
pub use venu_common::PlaybackStatus;

/// UI state for the now-playing card, mirrored from the playback controller
#[derive(Clone, Debug, PartialEq, Store)]
pub struct PlaybackUiState {
    /// Current playback state (drives the play/pause icon)
    pub status: PlaybackStatus,
    /// Volume in `[0, 1]`
    pub volume: f64,
    /// Elapsed time in seconds
    pub current_time_secs: f64,
    /// Duration in seconds (0 if unknown or live)
    pub duration_secs: f64,
    /// Why the last resume attempt failed, shown next to the controls
    pub unavailable: Option<String>,
}

impl Default for PlaybackUiState {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Paused,
            volume: 1.0,
            current_time_secs: 0.0,
            duration_secs: 0.0,
            unavailable: None,
        }
    }
}
