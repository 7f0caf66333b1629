use dioxus::prelude::*;

use crate::Route;

/// Entry point of the account service's login flow, which writes the token
/// this app reads.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "account-page",
            h2 { "Log in" }
            p { "Sign in with your Acebook account to see and share posts." }
            Link { to: Route::Signup {}, "No account yet? Sign up" }
        }
    }
}
