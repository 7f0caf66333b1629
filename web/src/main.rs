use client::{Session, api::HttpPostService, config::ClientConfig};
use dioxus::{
    logger::tracing::{Level, debug},
    prelude::*,
};
use shared::routes::AppRoute;
use ui::{Navbar, use_auth, use_auth_provider};
use views::{CreatePost, Home, Login, NotFound, Posts, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(WebNavbar)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/posts")]
        Posts {},
        #[route("/createpost")]
        CreatePost {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Home => Self::Home {},
            AppRoute::Login => Self::Login {},
            AppRoute::Signup => Self::Signup {},
            AppRoute::Posts => Self::Posts {},
            AppRoute::CreatePost => Self::CreatePost {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const LOGO: Asset = asset!("/assets/logo.svg");

fn main() {
    #[cfg(debug_assertions)]
    let level = Level::DEBUG;
    #[cfg(not(debug_assertions))]
    let level = Level::INFO;

    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logger: {err:?}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_auth_provider(Session::default);
    use_context_provider(|| HttpPostService::new(ClientConfig::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Acebook" }
        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `Navbar` which lets it drive the
/// web `Route` enum. Every route change re-reads the stored token here.
#[component]
fn WebNavbar() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    use_effect(use_reactive((&route,), move |(route,)| {
        debug!("Entered {route}");
        auth.refresh();
    }));

    let nav = navigator();
    rsx! {
        Navbar {
            logo_src: LOGO.to_string(),
            on_navigate: move |target: AppRoute| {
                nav.push(Route::from(target));
            },
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
