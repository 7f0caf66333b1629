use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Posts() -> Element {
    rsx! {
        div {
            class: "posts-page",
            h2 { "Posts" }
            Link { to: Route::CreatePost {}, "Write a post" }
        }
    }
}
