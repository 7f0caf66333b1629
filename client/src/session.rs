use std::rc::Rc;

use dioxus::logger::tracing::{info, warn};
use shared::routes::AppRoute;

use crate::{
    auth::AuthState,
    storage::{GeneralStorage, MemoryStorage},
};

/// Handle to the persistent store that holds the credential token.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn GeneralStorage>,
}

macro_rules! storage_key {
    ($vis:vis [ $store_fn:ident, $load_fn:ident, $remove_fn:ident $(,)? ], $key:literal $(,)?) => {
        pub const TOKEN_KEY: &str = $key;

        $vis fn $store_fn(&self, value: &str) -> bool {
            self.storage.store(Self::TOKEN_KEY, value)
        }

        $vis fn $load_fn(&self) -> Option<String> {
            self.storage.load(Self::TOKEN_KEY)
        }

        $vis fn $remove_fn(&self) -> bool {
            self.storage.remove(Self::TOKEN_KEY)
        }
    };
}

impl Session {
    storage_key!(
        pub [
            store_token,
            load_token,
            remove_token,
        ],
        "token",
    );

    pub fn new(storage: Rc<dyn GeneralStorage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    /// Reads the store and derives the current state from it.
    pub fn auth_state(&self) -> AuthState {
        AuthState::from_stored(self.load_token())
    }

    /// Forgets the token. The returned route is where the user goes next;
    /// by the time it is returned the token is already gone.
    pub fn logout(&self) -> AppRoute {
        if self.remove_token() {
            info!("Session token removed");
        } else {
            warn!("Session token could not be removed from storage");
        }
        AppRoute::Login
    }
}

impl Default for Session {
    #[cfg(target_arch = "wasm32")]
    fn default() -> Self {
        Self::new(Rc::new(crate::storage::BrowserStorage))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn default() -> Self {
        Self::in_memory()
    }
}
