//! Widget view components

pub mod current_rotation;
pub mod floating_gradient;
pub mod icons;
pub mod now_playing_bar;

pub use current_rotation::CurrentRotationView;
pub use floating_gradient::FloatingGradientView;
pub use icons::{LoaderIcon, PauseIcon, PlayIcon, Volume2Icon};
pub use now_playing_bar::NowPlayingBarView;
