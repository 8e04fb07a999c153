//! venu-common - Pure widget logic shared by the UI and web crates
//!
//! Nothing in here touches the DOM or the network, so it is all testable
//! on the host.

pub mod clock;
pub mod gradient;
pub mod playback;
pub mod stream;
pub mod tracks;

pub use clock::{format_clock, progress_percent};
pub use gradient::{radial_gradient_css, FrameCoalescer, PointerPosition};
pub use playback::{
    PlaybackController, PlaybackHandle, PlaybackStatus, ResumeTicket, Toggle, Unavailable,
};
pub use stream::{AppAccessToken, StreamInfo, StreamLookupError, StreamType, StreamsResponse};
pub use tracks::{Track, CURRENT_ROTATION};
