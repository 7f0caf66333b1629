use std::{collections::BTreeSet, rc::Rc};

use client::{Session, api::HttpPostService, storage::MemoryStorage};
use dioxus::prelude::*;
use shared::routes::AppRoute;

use crate::{Landing, Navbar, PostComposer, use_auth_provider};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum View {
    Navbar,
    Landing,
    PostComposer,
}

#[derive(Props, Clone, PartialEq)]
struct HarnessProps {
    view: View,
    token: Option<&'static str>,
}

pub(crate) fn session_with(token: Option<&str>) -> Session {
    let storage = match token {
        Some(token) => MemoryStorage::with_entry(Session::TOKEN_KEY, token),
        None => MemoryStorage::default(),
    };
    Session::new(Rc::new(storage))
}

fn harness(props: HarnessProps) -> Element {
    use_auth_provider(|| session_with(props.token));
    use_context_provider(HttpPostService::default);

    match props.view {
        View::Navbar => rsx! {
            Navbar { logo_src: "/assets/logo.svg", on_navigate: move |_: AppRoute| {} }
        },
        View::Landing => rsx! {
            Landing { on_navigate: move |_: AppRoute| {} }
        },
        View::PostComposer => rsx! {
            PostComposer { on_navigate: move |_: AppRoute| {} }
        },
    }
}

/// Renders `view` to HTML with `token` already in storage.
pub(crate) fn render(view: View, token: Option<&'static str>) -> String {
    let mut dom = VirtualDom::new_with_props(harness, HarnessProps { view, token });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Every `role` attribute value in `html`.
pub(crate) fn roles_in(html: &str) -> BTreeSet<String> {
    html.split("role=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_owned)
        .collect()
}
