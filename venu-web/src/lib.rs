pub mod api;
pub mod config;
pub mod pages;
pub mod playback;

use dioxus::prelude::*;
use pages::VenuJamsFloatingGradient;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;500;600;800&display=swap",
        }
        VenuJamsFloatingGradient {}
    }
}
