mod create_post;
mod home;
mod login;
mod not_found;
mod posts;
mod signup;

pub use create_post::CreatePost;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use posts::Posts;
pub use signup::Signup;
