//! Now playing footer
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<PlaybackUiState>` and reads fields via lenses, so the
//! time readouts re-render on `timeupdate` without touching the toggle.

use crate::components::icons::{LoaderIcon, PauseIcon, PlayIcon, Volume2Icon};
use crate::stores::playback::{PlaybackStatus, PlaybackUiState, PlaybackUiStateStoreExt};
use dioxus::prelude::*;
use venu_common::{format_clock, progress_percent};

/// Now playing bar view (pure, props-based)
/// All callbacks are required - pass noops if not needed.
#[component]
pub fn NowPlayingBarView(
    playback: ReadStore<PlaybackUiState>,
    /// e.g. "Skrillex — Taka Taka"
    now_playing: String,
    on_toggle: EventHandler<()>,
    on_volume_change: EventHandler<f64>,
) -> Element {
    rsx! {
        div { class: "venu-now-playing",
            div { class: "venu-now-playing-label",
                span { class: "venu-caption", "NOW PLAYING:" }
                span { class: "venu-now-playing-title", "{now_playing}" }
                UnavailableNotice { playback }
            }
            div { class: "venu-controls",
                ToggleButton { playback, on_toggle }
                ProgressView { playback }
                VolumeView { playback, on_volume_change }
            }
        }
    }
}

#[component]
fn ToggleButton(playback: ReadStore<PlaybackUiState>, on_toggle: EventHandler<()>) -> Element {
    let status = *playback.status().read();
    let label = match status {
        PlaybackStatus::Playing => "Pause",
        PlaybackStatus::Loading => "Cancel",
        PlaybackStatus::Paused => "Play",
    };

    rsx! {
        button {
            class: "venu-toggle",
            aria_label: label,
            onclick: move |_| on_toggle.call(()),
            {
                match status {
                    PlaybackStatus::Playing => rsx! {
                        PauseIcon {}
                    },
                    PlaybackStatus::Loading => rsx! {
                        LoaderIcon { class: "icon-20 animate-spin" }
                    },
                    PlaybackStatus::Paused => rsx! {
                        PlayIcon {}
                    },
                }
            }
        }
    }
}

#[component]
fn ProgressView(playback: ReadStore<PlaybackUiState>) -> Element {
    let current = *playback.current_time_secs().read();
    let duration = *playback.duration_secs().read();
    let percent = progress_percent(current, duration);

    rsx! {
        div { class: "venu-progress-track",
            div { class: "venu-progress-fill", style: "width: {percent}%;" }
        }
        span { class: "venu-caption", "{format_clock(current)}" }
        span { class: "venu-caption", "{format_clock(duration)}" }
    }
}

#[component]
fn VolumeView(playback: ReadStore<PlaybackUiState>, on_volume_change: EventHandler<f64>) -> Element {
    let volume = *playback.volume().read();

    rsx! {
        div { class: "venu-volume",
            Volume2Icon {}
            input {
                r#type: "range",
                class: "venu-volume-slider",
                min: "0",
                max: "1",
                step: "0.1",
                value: "{volume}",
                oninput: move |evt| {
                    if let Ok(value) = evt.value().parse::<f64>() {
                        on_volume_change.call(value);
                    }
                },
            }
        }
    }
}

#[component]
fn UnavailableNotice(playback: ReadStore<PlaybackUiState>) -> Element {
    let unavailable = playback.unavailable().read().clone();

    rsx! {
        if let Some(message) = unavailable {
            span { class: "venu-unavailable", role: "status", "{message}" }
        }
    }
}
