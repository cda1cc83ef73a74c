use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Account, Admin, Auth, Chat, Home, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/auth")]
    Auth {},
    #[route("/signup")]
    Signup {},
    #[route("/account")]
    Account {},
    #[route("/chat")]
    Chat {},
    #[route("/admin")]
    Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        AuthProvider {
            Router::<Route> {}
        }
    }
}
