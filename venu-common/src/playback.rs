//! Live-stream playback state machine
//!
//! `PlaybackController` owns the audio handle and decides what happens on
//! each user toggle. Network lookups and the (asynchronous) start of
//! playback happen outside; the caller feeds their results back in with the
//! `ResumeTicket` it was handed. Tickets from superseded attempts are
//! ignored, so overlapping toggles or a teardown mid-lookup can never touch
//! the handle.

use crate::clock::{format_clock, progress_percent};
use crate::stream::{StreamInfo, StreamLookupError};
use tracing::{debug, info, warn};

/// Playback status shown by the toggle control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Paused,
    /// A resume attempt is in flight (lookup or start)
    Loading,
    Playing,
}

/// Why the last resume attempt did not start playback
#[derive(Clone, Debug, PartialEq)]
pub enum Unavailable {
    /// Lookup succeeded but the channel is offline or unknown
    NotLive,
    /// Lookup itself failed (network, auth, parse)
    LookupFailed(String),
    /// The audio element refused to play the source
    PlaybackRejected(String),
}

impl Unavailable {
    pub fn message(&self) -> String {
        match self {
            Unavailable::NotLive => "Stream is offline".to_string(),
            Unavailable::LookupFailed(_) => "Stream unavailable".to_string(),
            Unavailable::PlaybackRejected(_) => "Playback failed".to_string(),
        }
    }
}

/// The owned audio-output resource.
pub trait PlaybackHandle {
    fn load_source(&mut self, url: &str);
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f64);
    /// Stop playback and clear the source.
    fn release(&mut self);
}

/// Identifies one resume attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResumeTicket(u64);

/// Result of a toggle
#[derive(Debug, PartialEq, Eq)]
pub enum Toggle {
    /// Playback paused (or a pending attempt cancelled); nothing to do
    Paused,
    /// Caller must look up the stream and report back with this ticket
    Lookup(ResumeTicket),
    /// Controller has been torn down
    Ignored,
}

pub struct PlaybackController<H: PlaybackHandle> {
    handle: H,
    status: PlaybackStatus,
    unavailable: Option<Unavailable>,
    /// Bumped whenever the in-flight attempt is superseded
    generation: u64,
    volume: f64,
    current_time: f64,
    duration: f64,
    source: Option<String>,
    released: bool,
}

impl<H: PlaybackHandle> PlaybackController<H> {
    pub fn new(mut handle: H) -> Self {
        let volume = 1.0;
        handle.set_volume(volume);
        Self {
            handle,
            status: PlaybackStatus::Paused,
            unavailable: None,
            generation: 0,
            volume,
            current_time: 0.0,
            duration: 0.0,
            source: None,
            released: false,
        }
    }

    /// User pressed play/pause.
    pub fn toggle(&mut self) -> Toggle {
        if self.released {
            return Toggle::Ignored;
        }

        match self.status {
            PlaybackStatus::Playing => {
                self.pause();
                Toggle::Paused
            }
            PlaybackStatus::Loading => {
                debug!("Cancelling pending resume attempt");
                // The source may already be loaded with play() in flight
                self.pause();
                Toggle::Paused
            }
            PlaybackStatus::Paused => {
                self.generation += 1;
                self.status = PlaybackStatus::Loading;
                self.unavailable = None;
                Toggle::Lookup(ResumeTicket(self.generation))
            }
        }
    }

    /// Feed back the stream lookup. Returns the ticket again when the
    /// caller should now start playback of the loaded source.
    pub fn complete_lookup(
        &mut self,
        ticket: ResumeTicket,
        result: Result<Option<StreamInfo>, StreamLookupError>,
    ) -> Option<ResumeTicket> {
        if !self.is_current(ticket) {
            debug!("Ignoring stale stream lookup result");
            return None;
        }

        match result {
            Ok(Some(info)) if info.is_live() => {
                info!("Stream is live, loading {}", info.source());
                self.handle.load_source(info.source());
                self.source = Some(info.source().to_string());
                Some(ticket)
            }
            Ok(_) => {
                warn!("Stream is not live or not found");
                self.fail(Unavailable::NotLive);
                None
            }
            Err(e) => {
                warn!("Error fetching stream info: {}", e);
                self.fail(Unavailable::LookupFailed(e.to_string()));
                None
            }
        }
    }

    /// Feed back the outcome of starting playback.
    pub fn complete_start(&mut self, ticket: ResumeTicket, result: Result<(), String>) {
        if !self.is_current(ticket) {
            debug!("Ignoring stale playback start");
            return;
        }

        match result {
            Ok(()) => {
                info!("Playback started");
                self.status = PlaybackStatus::Playing;
            }
            Err(e) => {
                warn!("Playback was rejected: {}", e);
                self.fail(Unavailable::PlaybackRejected(e));
            }
        }
    }

    /// Pause immediately. Also cancels any pending attempt.
    pub fn pause(&mut self) {
        if self.released {
            return;
        }
        if self.status == PlaybackStatus::Loading {
            self.generation += 1;
        }
        self.handle.pause();
        self.status = PlaybackStatus::Paused;
    }

    /// The element paused on its own (media keys, stream ended). Only
    /// meaningful while playing; a pending attempt is left alone.
    pub fn on_pause_event(&mut self) {
        if self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Paused;
        }
    }

    /// The element started playing outside the toggle flow (media keys,
    /// Media Session). Ignored while an attempt is pending or nothing is
    /// loaded.
    pub fn on_play_event(&mut self) {
        if self.released || self.source.is_none() {
            return;
        }
        if self.status == PlaybackStatus::Paused {
            self.status = PlaybackStatus::Playing;
            self.unavailable = None;
        }
    }

    pub fn set_volume(&mut self, volume: f64) {
        let volume = volume.clamp(0.0, 1.0);
        self.handle.set_volume(volume);
        self.volume = volume;
    }

    pub fn on_time_update(&mut self, current_time: f64) {
        if current_time.is_finite() {
            self.current_time = current_time;
        }
    }

    pub fn on_loaded_metadata(&mut self, duration: f64) {
        if duration.is_finite() {
            self.duration = duration;
        }
    }

    /// Release the handle. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.released {
            return;
        }
        self.generation += 1;
        self.handle.release();
        self.source = None;
        self.status = PlaybackStatus::Paused;
        self.released = true;
        debug!("Playback controller torn down");
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn unavailable(&self) -> Option<&Unavailable> {
        self.unavailable.as_ref()
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current_time, self.duration)
    }

    pub fn elapsed_label(&self) -> String {
        format_clock(self.current_time)
    }

    pub fn duration_label(&self) -> String {
        format_clock(self.duration)
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    #[cfg(test)]
    pub(crate) fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    fn is_current(&self, ticket: ResumeTicket) -> bool {
        !self.released && self.status == PlaybackStatus::Loading && ticket.0 == self.generation
    }

    fn fail(&mut self, reason: Unavailable) {
        self.status = PlaybackStatus::Paused;
        self.unavailable = Some(reason);
    }
}
