use dioxus::prelude::*;
use shared::routes::AppRoute;
use ui::Landing;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = navigator();
    rsx! {
        Landing {
            on_navigate: move |target: AppRoute| {
                nav.push(Route::from(target));
            },
        }
    }
}
