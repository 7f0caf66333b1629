use client::{AuthState, Session};
use dioxus::{logger::tracing::debug, prelude::*};
use shared::routes::AppRoute;

/// Session plus the auth state every view renders from.
///
/// Provided once at the root. The state only changes through
/// [`refresh`](Self::refresh) and [`logout`](Self::logout).
#[derive(Clone)]
pub struct AuthContext {
    session: Session,
    state: Signal<AuthState>,
}

impl AuthContext {
    /// Must be called while a component is rendering.
    pub fn new(session: Session) -> Self {
        let state = Signal::new(session.auth_state());
        Self { session, state }
    }

    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Re-reads the store, picking up tokens written by the login flow.
    pub fn refresh(&self) {
        let fresh = self.session.auth_state();
        let mut state = self.state;
        if *state.peek() != fresh {
            debug!("Auth state changed: {fresh:?}");
            state.set(fresh);
        }
    }

    /// Drops the token, then returns where to send the user.
    pub fn logout(&self) -> AppRoute {
        let route = self.session.logout();
        let mut state = self.state;
        state.set(AuthState::Anonymous);
        route
    }
}

pub fn use_auth_provider(init: impl FnOnce() -> Session) -> AuthContext {
    use_context_provider(|| AuthContext::new(init()))
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use client::AuthState;
    use dioxus::prelude::*;
    use shared::routes::AppRoute;

    use super::{AuthContext, use_auth_provider};
    use crate::testing::session_with;

    thread_local! {
        static PROVIDED: RefCell<Option<AuthContext>> = const { RefCell::new(None) };
    }

    fn provide_logged_in() -> Element {
        let auth = use_auth_provider(|| session_with(Some("testToken")));
        PROVIDED.with(|slot| *slot.borrow_mut() = Some(auth));
        rsx! {}
    }

    #[test]
    fn logout_then_refresh_follows_storage() {
        let mut dom = VirtualDom::new(provide_logged_in);
        dom.rebuild_in_place();
        let auth = PROVIDED
            .with(|slot| slot.borrow_mut().take())
            .expect("context provided during render");

        dom.in_runtime(|| {
            assert!(auth.state().is_authenticated());

            assert_eq!(auth.logout(), AppRoute::Login);
            assert_eq!(auth.session().load_token(), None);
            assert_eq!(auth.state(), AuthState::Anonymous);

            assert!(auth.session().store_token("freshToken"));
            auth.refresh();
            assert!(auth.state().is_authenticated());
            assert_eq!(
                auth.state().token().map(client::Token::as_str),
                Some("freshToken")
            );
        });
    }

    #[test]
    fn refresh_without_storage_change_keeps_state() {
        let mut dom = VirtualDom::new(provide_logged_in);
        dom.rebuild_in_place();
        let auth = PROVIDED
            .with(|slot| slot.borrow_mut().take())
            .expect("context provided during render");

        dom.in_runtime(|| {
            let before = auth.state();
            auth.refresh();
            assert_eq!(auth.state(), before);
            assert_eq!(
                auth.session().load_token().as_deref(),
                Some("testToken")
            );
        });
    }
}
