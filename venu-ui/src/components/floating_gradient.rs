//! Floating gradient backdrop
//!
//! Pure view: the focal point comes in as a prop, pointer tracking lives in
//! the web crate.

use dioxus::prelude::*;
use venu_common::{radial_gradient_css, PointerPosition};

/// Blurred radial gradient orb plus the two frosted glass layers above it
#[component]
pub fn FloatingGradientView(position: PointerPosition) -> Element {
    let background = radial_gradient_css(position);

    rsx! {
        div { class: "venu-gradient-anchor",
            div {
                class: "venu-gradient animate-float",
                style: "background: {background}; filter: blur(40px);",
            }
        }
        div { class: "venu-frost venu-frost-light" }
        div { class: "venu-frost venu-frost-dark" }
    }
}
