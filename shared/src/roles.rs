//! Stable `role` attribute values attached to rendered elements.
//!
//! Tests and browser automation query elements by these identifiers, so
//! they must not change with styling.

pub const LOGO_IMG: &str = "logoImg";
pub const LOGO_TEXT: &str = "logoText";
pub const POSTS_BUTTON: &str = "postsButton";
pub const CREATE_POST_BUTTON: &str = "createPostButton";
pub const LOGOUT_BUTTON: &str = "logoutButton";

pub const LOGIN_BUTTON: &str = "loginButton";
pub const SIGNUP_BUTTON: &str = "signupButton";
pub const HEADING: &str = "heading";
pub const SUBHEADING: &str = "subheading";

pub const SUBMIT_BUTTON: &str = "submit-button";
pub const SUBMIT_ERROR: &str = "submitError";
