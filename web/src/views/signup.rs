use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Signup() -> Element {
    rsx! {
        div {
            class: "account-page",
            h2 { "Sign up" }
            p { "Create an Acebook account to start sharing posts with pals." }
            Link { to: Route::Login {}, "Already have an account? Log in" }
        }
    }
}
