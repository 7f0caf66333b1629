use std::fmt::Display;

/// Every place a view can send the user to.
///
/// Views only ever produce one of these; the platform crate maps them onto
/// its own router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Signup,
    Posts,
    CreatePost,
}

impl AppRoute {
    pub const ALL: [AppRoute; 5] = [
        Self::Home,
        Self::Login,
        Self::Signup,
        Self::Posts,
        Self::CreatePost,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Posts => "/posts",
            Self::CreatePost => "/createpost",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
