//! Views shared by every platform build.
//!
//! Nothing here knows about a concrete router: views report where the user
//! should go through an `on_navigate` handler and the platform crate maps
//! [`AppRoute`](shared::routes::AppRoute) onto its own routes.

mod auth;
mod landing;
mod navbar;
mod post_composer;
#[cfg(test)]
mod testing;

pub use auth::{AuthContext, use_auth, use_auth_provider};
pub use landing::{Landing, login_destination, signup_destination};
pub use navbar::Navbar;
pub use post_composer::{PostComposer, SubmitOutcome, handle_input, submit_draft};
