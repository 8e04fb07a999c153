//! Gradient focal point store

use dioxus::prelude::*;
use venu_common::PointerPosition;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct GradientUiState {
    /// Last coalesced pointer position
    pub position: PointerPosition,
}
