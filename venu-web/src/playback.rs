use crate::api::TwitchClient;
use dioxus::prelude::*;
use tracing::info;
use venu_common::{
    PlaybackController, PlaybackHandle, ResumeTicket, StreamInfo, StreamLookupError, Toggle,
};
use venu_ui::stores::playback::{PlaybackUiState, PlaybackUiStateStoreExt};
use venu_ui::wasm_utils::EventListener;
use wasm_bindgen_futures_x::JsFuture;

/// `PlaybackHandle` backed by a detached HTML `<audio>` element
pub struct AudioHandle {
    audio: web_sys_x::HtmlAudioElement,
}

impl AudioHandle {
    pub fn new() -> Result<Self, String> {
        let audio = web_sys_x::HtmlAudioElement::new()
            .map_err(|e| format!("Failed to create audio element: {e:?}"))?;
        Ok(Self { audio })
    }

    pub fn element(&self) -> &web_sys_x::HtmlAudioElement {
        &self.audio
    }

    /// Kick off playback. The returned future settles once the browser has
    /// actually started (or refused) playing.
    fn play(&self) -> Result<JsFuture, String> {
        self.audio
            .play()
            .map(JsFuture::from)
            .map_err(|e| format!("{e:?}"))
    }
}

impl PlaybackHandle for AudioHandle {
    fn load_source(&mut self, url: &str) {
        self.audio.set_src(url);
    }

    fn pause(&mut self) {
        let _ = self.audio.pause();
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume);
    }

    fn release(&mut self) {
        let _ = self.audio.pause();
        self.audio.set_src("");
    }
}

/// Web playback service: owns the audio element and mirrors the
/// controller's state into the playback store after every transition.
pub struct WebStreamPlayer {
    controller: PlaybackController<AudioHandle>,
    store: Store<PlaybackUiState>,
    listeners: Vec<EventListener>,
}

impl WebStreamPlayer {
    pub fn new(store: Store<PlaybackUiState>) -> Result<Self, String> {
        let handle = AudioHandle::new()?;
        info!("Audio element created");
        let player = Self {
            controller: PlaybackController::new(handle),
            store,
            listeners: Vec::new(),
        };
        player.sync_status();
        player.store.volume().set(player.controller.volume());
        Ok(player)
    }

    /// Wire `timeupdate`, `loadedmetadata`, `play` and `pause` from the audio element
    /// back into the player held by `player`. Listeners live as long as the
    /// player does.
    pub fn bind_events(mut player: Signal<Option<WebStreamPlayer>>) {
        let Some(audio) = player
            .peek()
            .as_ref()
            .map(|p| p.controller.handle().element().clone())
        else {
            return;
        };

        let listeners = vec![
            EventListener::new(&audio, "timeupdate", {
                let audio = audio.clone();
                move |_| {
                    if let Some(p) = player.write().as_mut() {
                        p.on_time_update(audio.current_time());
                    }
                }
            }),
            EventListener::new(&audio, "loadedmetadata", {
                let audio = audio.clone();
                move |_| {
                    if let Some(p) = player.write().as_mut() {
                        p.on_loaded_metadata(audio.duration());
                    }
                }
            }),
            EventListener::new(&audio, "play", {
                let audio = audio.clone();
                move |_| {
                    // A queued `play` can land after a cancel already paused
                    if audio.paused() {
                        return;
                    }
                    if let Some(p) = player.write().as_mut() {
                        p.on_play_event();
                    }
                }
            }),
            EventListener::new(&audio, "pause", move |_| {
                if let Some(p) = player.write().as_mut() {
                    p.on_pause_event();
                }
            }),
        ];

        if let Some(p) = player.write().as_mut() {
            p.listeners = listeners;
        }
    }

    /// Run the toggle flow for the player in `player`: pause synchronously,
    /// or look the channel up and start playback in a scope-bound task.
    pub fn toggle(
        mut player: Signal<Option<WebStreamPlayer>>,
        client: TwitchClient,
        channel: String,
    ) {
        let toggled = player.write().as_mut().map(|p| p.toggle_controller());
        let Some(Toggle::Lookup(ticket)) = toggled else {
            return;
        };

        spawn(async move {
            Self::resume(player, client, channel, ticket).await;
        });
    }

    async fn resume(
        mut player: Signal<Option<WebStreamPlayer>>,
        client: TwitchClient,
        channel: String,
        ticket: ResumeTicket,
    ) {
        let result = client.stream_info(&channel).await;

        let start = player
            .write()
            .as_mut()
            .and_then(|p| p.complete_lookup(ticket, result));
        let Some(start) = start else {
            return;
        };

        let play = player
            .peek()
            .as_ref()
            .map(|p| p.controller.handle().play());
        let outcome = match play {
            Some(Ok(fut)) => fut.await.map(|_| ()).map_err(|e| format!("{e:?}")),
            Some(Err(e)) => Err(e),
            None => return,
        };

        if let Some(p) = player.write().as_mut() {
            p.complete_start(start, outcome);
        }
    }

    fn toggle_controller(&mut self) -> Toggle {
        let toggled = self.controller.toggle();
        self.sync_status();
        toggled
    }

    fn complete_lookup(
        &mut self,
        ticket: ResumeTicket,
        result: Result<Option<StreamInfo>, StreamLookupError>,
    ) -> Option<ResumeTicket> {
        let start = self.controller.complete_lookup(ticket, result);
        self.sync_status();
        start
    }

    fn complete_start(&mut self, ticket: ResumeTicket, result: Result<(), String>) {
        self.controller.complete_start(ticket, result);
        self.sync_status();
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.controller.set_volume(volume);
        self.store.volume().set(self.controller.volume());
    }

    fn on_time_update(&mut self, current_time: f64) {
        self.controller.on_time_update(current_time);
        self.store
            .current_time_secs()
            .set(self.controller.current_time());
    }

    fn on_loaded_metadata(&mut self, duration: f64) {
        self.controller.on_loaded_metadata(duration);
        self.store.duration_secs().set(self.controller.duration());
    }

    fn on_play_event(&mut self) {
        self.controller.on_play_event();
        self.sync_status();
    }

    fn on_pause_event(&mut self) {
        self.controller.on_pause_event();
        self.sync_status();
    }

    /// Stop playback, clear the source and detach all listeners.
    pub fn teardown(&mut self) {
        self.listeners.clear();
        self.controller.teardown();
    }

    fn sync_status(&self) {
        let status = self.controller.status();
        if *self.store.status().peek() != status {
            self.store.status().set(status);
        }
        let unavailable = self.controller.unavailable().map(|u| u.message());
        if *self.store.unavailable().peek() != unavailable {
            self.store.unavailable().set(unavailable);
        }
    }
}

impl Drop for WebStreamPlayer {
    fn drop(&mut self) {
        self.teardown();
    }
}
