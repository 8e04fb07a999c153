//! "Current rotation" grid

use dioxus::prelude::*;
use venu_common::Track;

#[component]
pub fn CurrentRotationView(tracks: Vec<Track>) -> Element {
    rsx! {
        h2 { class: "venu-section-title", "CURRENT ROTATION" }
        div { class: "venu-rotation-grid",
            for (index , track) in tracks.into_iter().enumerate() {
                RotationEntry { key: "{index}", track }
            }
        }
    }
}

#[component]
fn RotationEntry(track: Track) -> Element {
    let alt = track.alt_text();

    rsx! {
        div { class: "venu-rotation-entry",
            div { class: "venu-artwork",
                img {
                    src: "{track.image}",
                    alt: "{alt}",
                    width: "96",
                    height: "96",
                }
            }
            div { class: "venu-rotation-text",
                h3 { class: "venu-track-title", "{track.title}" }
                p { class: "venu-track-artist", "{track.artist}" }
            }
        }
    }
}
