//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod gradient;
pub mod playback;

pub use gradient::*;
pub use playback::*;
