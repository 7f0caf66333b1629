pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod notice;
pub mod packet_sender;
pub mod session;
pub mod storage;
mod time;

pub use auth::{AuthState, Token};
pub use session::Session;
