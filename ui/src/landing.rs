use client::AuthState;
use dioxus::prelude::*;
use shared::{roles, routes::AppRoute};

use crate::use_auth;

/// Logged-in users skip the login form.
pub fn login_destination(auth: &AuthState) -> AppRoute {
    if auth.is_authenticated() {
        AppRoute::Posts
    } else {
        AppRoute::Login
    }
}

pub fn signup_destination() -> AppRoute {
    AppRoute::Signup
}

#[component]
pub fn Landing(on_navigate: EventHandler<AppRoute>) -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "home",

            h1 { role: roles::HEADING, "Welcome to Acebook!" }
            h4 {
                role: roles::SUBHEADING,
                em { "Acebook is the fastest growing app for sharing posts with pals." }
            }
            div {
                class: "homepage-buttons",

                button {
                    role: roles::LOGIN_BUTTON,
                    onclick: move |_| on_navigate.call(login_destination(&auth.state())),
                    "Login"
                }
                button {
                    role: roles::SIGNUP_BUTTON,
                    onclick: move |_| on_navigate.call(signup_destination()),
                    "Signup"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use client::AuthState;
    use shared::{roles, routes::AppRoute};

    use super::*;
    use crate::testing::{View, render, roles_in, session_with};

    #[test]
    fn login_goes_to_posts_when_logged_in() {
        let auth = session_with(Some("testToken")).auth_state();
        assert_eq!(login_destination(&auth), AppRoute::Posts);
    }

    #[test]
    fn login_goes_to_login_form_when_logged_out() {
        assert_eq!(login_destination(&AuthState::Anonymous), AppRoute::Login);
        let auth = session_with(None).auth_state();
        assert_eq!(login_destination(&auth), AppRoute::Login);
    }

    #[test]
    fn signup_ignores_session() {
        assert_eq!(signup_destination(), AppRoute::Signup);
    }

    #[test]
    fn landing_renders_both_buttons_regardless_of_session() {
        for token in [None, Some("testToken")] {
            let found = roles_in(&render(View::Landing, token));
            for role in [
                roles::HEADING,
                roles::SUBHEADING,
                roles::LOGIN_BUTTON,
                roles::SIGNUP_BUTTON,
            ] {
                assert!(found.contains(role), "{role} missing");
            }
        }
    }

    #[test]
    fn landing_renders_the_same_roles_twice() {
        assert_eq!(
            roles_in(&render(View::Landing, Some("testToken"))),
            roles_in(&render(View::Landing, Some("testToken"))),
        );
    }
}
