fn main() {
    dioxus::launch(venu_web::App);
}
