use crate::api::TwitchClient;
use crate::config::StreamServiceConfig;
use crate::playback::WebStreamPlayer;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};
use venu_common::{FrameCoalescer, PointerPosition, CURRENT_ROTATION};
use venu_ui::stores::{GradientUiState, GradientUiStateStoreExt, PlaybackUiState};
use venu_ui::wasm_utils::{viewport_size, AnimationFrame, EventListener};
use venu_ui::{CurrentRotationView, FloatingGradientView, NowPlayingBarView};
use wasm_bindgen_x::JsCast;

/// Window `mousemove` tracking, coalesced to one store write per frame
fn use_pointer_gradient() -> Store<GradientUiState> {
    let gradient = use_store(GradientUiState::default);
    let mut pointer_listener: Signal<Option<EventListener>> = use_signal(|| None);
    let mut frame: Signal<Option<AnimationFrame>> = use_signal(|| None);

    use_hook(move || {
        let Some(window) = web_sys_x::window() else {
            return;
        };
        let coalescer = Rc::new(RefCell::new(FrameCoalescer::new()));

        let listener = EventListener::new(&window, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<web_sys_x::MouseEvent>() else {
                return;
            };
            let Some((width, height)) = viewport_size() else {
                return;
            };
            let position = PointerPosition::from_client(
                mouse.client_x() as f64,
                mouse.client_y() as f64,
                width,
                height,
            );

            if !coalescer.borrow_mut().push(position) {
                return;
            }

            let next = AnimationFrame::request({
                let coalescer = coalescer.clone();
                move |_| {
                    if let Some(position) = coalescer.borrow_mut().take() {
                        gradient.position().set(position);
                    }
                }
            });
            if next.is_none() {
                coalescer.borrow_mut().reset();
            }
            frame.set(next);
        });

        pointer_listener.set(Some(listener));
    });

    use_drop(move || {
        if let Ok(mut listener) = pointer_listener.try_write() {
            listener.take();
        }
        if let Ok(mut pending) = frame.try_write() {
            pending.take();
        }
    });

    gradient
}

/// The Venu Jams page: pointer-reactive gradient, rotation grid and the
/// live-stream now playing card.
#[component]
pub fn VenuJamsFloatingGradient() -> Element {
    let gradient = use_pointer_gradient();
    let playback = use_store(PlaybackUiState::default);
    let mut player: Signal<Option<WebStreamPlayer>> = use_signal(|| None);

    let config = use_hook(StreamServiceConfig::from_env);
    let client = use_hook({
        let config = config.clone();
        move || {
            if !config.has_credentials() {
                warn!("Twitch credentials are not configured, lookups will fail");
            }
            TwitchClient::new(&config)
        }
    });

    use_hook(move || match WebStreamPlayer::new(playback) {
        Ok(p) => {
            player.set(Some(p));
            WebStreamPlayer::bind_events(player);
        }
        Err(e) => warn!("Playback disabled: {}", e),
    });

    use_drop(move || {
        let Ok(mut slot) = player.try_write() else {
            return;
        };
        if let Some(mut p) = slot.take() {
            p.teardown();
            info!("Audio element released");
        }
    });

    let position = *gradient.position().read();
    let now_playing = CURRENT_ROTATION[0].now_playing_label();

    rsx! {
        div { class: "venu-root",
            FloatingGradientView { position }

            div { class: "venu-content",
                main { class: "venu-main",
                    CurrentRotationView { tracks: CURRENT_ROTATION.to_vec() }
                }

                footer { class: "venu-footer",
                    h1 { class: "venu-wordmark", "VENU JAMS" }
                    div { class: "venu-footer-rule",
                        NowPlayingBarView {
                            playback,
                            now_playing,
                            on_toggle: move |_| {
                                info!("Toggling play/pause");
                                WebStreamPlayer::toggle(
                                    player,
                                    client.clone(),
                                    config.channel.clone(),
                                );
                            },
                            on_volume_change: move |volume: f64| {
                                if let Some(p) = player.write().as_mut() {
                                    p.set_volume(volume);
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
