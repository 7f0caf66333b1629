use dioxus::prelude::*;
use shared::routes::AppRoute;
use ui::PostComposer;

use crate::Route;

#[component]
pub fn CreatePost() -> Element {
    let nav = navigator();
    rsx! {
        PostComposer {
            on_navigate: move |target: AppRoute| {
                nav.push(Route::from(target));
            },
        }
    }
}
