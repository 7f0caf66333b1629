use dioxus::prelude::*;
use shared::{roles, routes::AppRoute};

use crate::use_auth;

/// Site header. Links beyond the logo only exist while logged in.
#[component]
pub fn Navbar(logo_src: String, on_navigate: EventHandler<AppRoute>) -> Element {
    let auth = use_auth();
    let logged_in = auth.state().is_authenticated();

    rsx! {
        nav {
            class: "navbar",

            div {
                class: "navbar-brand",
                img {
                    role: roles::LOGO_IMG,
                    class: "navbar-logo",
                    src: logo_src,
                    alt: "Acebook logo",
                }
                span {
                    role: roles::LOGO_TEXT,
                    class: "navbar-title",
                    "Acebook"
                }
            }
            if logged_in {
                div {
                    class: "navbar-links",

                    NavLink {
                        role: roles::POSTS_BUTTON,
                        route: AppRoute::Posts,
                        label: "Posts",
                        on_navigate,
                    }
                    NavLink {
                        role: roles::CREATE_POST_BUTTON,
                        route: AppRoute::CreatePost,
                        label: "Create post",
                        on_navigate,
                    }
                    button {
                        role: roles::LOGOUT_BUTTON,
                        class: "navbar-logout",
                        onclick: move |_| {
                            let route = auth.logout();
                            on_navigate.call(route);
                        },
                        "Logout"
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(
    role: &'static str,
    route: AppRoute,
    label: &'static str,
    on_navigate: EventHandler<AppRoute>,
) -> Element {
    rsx! {
        a {
            role,
            class: "navbar-link",
            href: route.path(),
            onclick: move |event: MouseEvent| {
                event.prevent_default();
                on_navigate.call(route);
            },
            {label}
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::roles;

    use crate::testing::{View, render, roles_in};

    const LOGGED_IN_ONLY: [&str; 3] = [
        roles::POSTS_BUTTON,
        roles::CREATE_POST_BUTTON,
        roles::LOGOUT_BUTTON,
    ];

    #[test]
    fn logged_out_navbar_shows_only_the_logo() {
        let found = roles_in(&render(View::Navbar, None));

        assert!(found.contains(roles::LOGO_IMG));
        assert!(found.contains(roles::LOGO_TEXT));
        for role in LOGGED_IN_ONLY {
            assert!(!found.contains(role), "{role} rendered while logged out");
        }
    }

    #[test]
    fn logged_in_navbar_shows_all_links() {
        let found = roles_in(&render(View::Navbar, Some("testToken")));

        assert!(found.contains(roles::LOGO_IMG));
        assert!(found.contains(roles::LOGO_TEXT));
        for role in LOGGED_IN_ONLY {
            assert!(found.contains(role), "{role} missing while logged in");
        }
    }

    #[test]
    fn links_point_at_their_routes() {
        let html = render(View::Navbar, Some("testToken"));
        assert!(html.contains(r#"href="/posts""#));
        assert!(html.contains(r#"href="/createpost""#));
    }

    #[test]
    fn empty_token_counts_as_logged_out() {
        let found = roles_in(&render(View::Navbar, Some("")));
        assert!(!found.contains(roles::LOGOUT_BUTTON));
    }

    #[test]
    fn rendering_twice_gives_the_same_roles() {
        for token in [None, Some("testToken")] {
            assert_eq!(
                roles_in(&render(View::Navbar, token)),
                roles_in(&render(View::Navbar, token)),
            );
        }
    }
}
