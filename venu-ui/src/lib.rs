//! venu-ui - Stores and pure view components for the Venu Jams widget
//!
//! Views are props-based and never fetch anything; the web crate owns the
//! audio element and the network client and feeds state in through stores.

pub mod components;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
