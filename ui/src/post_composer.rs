use client::{
    AuthState,
    api::{HttpPostService, PostService},
    error::NetworkError,
    notice::blocking_notice,
    packet_sender::PacketState,
};
use dioxus::{
    logger::tracing::{error, info},
    prelude::*,
};
use shared::{
    draft::{Clamped, Draft, limit_notice},
    roles,
    routes::AppRoute,
};

use crate::use_auth;

/// What the composer does once a submit settles.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Redirect(AppRoute),
    /// The post was not created; the user stays on the form.
    Failed(NetworkError),
}

/// Clamps `raw`, hands the result to `store`, and only then calls `notify`
/// if the input was over the limit.
pub fn handle_input(raw: &str, store: impl FnOnce(Draft), notify: impl FnOnce(&str)) {
    let Clamped { draft, overflowed } = Draft::clamp(raw);
    store(draft);
    if overflowed {
        notify(&limit_notice());
    }
}

pub async fn submit_draft<S: PostService>(
    auth: &AuthState,
    draft: &Draft,
    service: &S,
) -> SubmitOutcome {
    let Some(token) = auth.token() else {
        info!("Post submitted without a session, redirecting to login");
        return SubmitOutcome::Redirect(AppRoute::Login);
    };
    match service.create_post(draft.as_str(), token).await {
        Ok(()) => SubmitOutcome::Redirect(AppRoute::Posts),
        Err(err) => {
            error!("Error while trying to create a post: {err}");
            SubmitOutcome::Failed(err)
        }
    }
}

#[component]
pub fn PostComposer(on_navigate: EventHandler<AppRoute>) -> Element {
    let auth = use_auth();
    let service = use_context::<HttpPostService>();
    let mut draft = use_signal(Draft::default);
    let mut submission = use_signal(|| PacketState::<()>::NotStarted);

    let waiting = submission.read().is_waiting();
    let failure = match submission() {
        PacketState::Failed(err) => Some(err.to_string()),
        _ => None,
    };

    rsx! {
        form {
            class: "create-post",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                let auth_state = auth.state();
                let current = draft.read().clone();
                let service = service.clone();
                async move {
                    submission.set(PacketState::Waiting);
                    match submit_draft(&auth_state, &current, &service).await {
                        SubmitOutcome::Redirect(route) => {
                            submission.set(PacketState::Response(()));
                            on_navigate.call(route);
                        }
                        SubmitOutcome::Failed(err) => submission.set(PacketState::Failed(err)),
                    }
                }
            },

            label { r#for: "message", "Enter your message:" }
            input {
                id: "message",
                r#type: "text",
                value: "{draft}",
                oninput: move |event| {
                    handle_input(&event.value(), |clamped| draft.set(clamped), blocking_notice);
                },
            }
            button {
                role: roles::SUBMIT_BUTTON,
                r#type: "submit",
                id: "submit",
                disabled: waiting,
                if waiting { "Submitting..." } else { "Submit" }
            }
            {failure.map(|message| rsx! {
                p {
                    role: roles::SUBMIT_ERROR,
                    class: "submit-error",
                    "Could not create your post: {message}"
                }
            })}
        }
    }
}
