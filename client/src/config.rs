use std::time::Duration;

use crate::packet_sender::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_INTERVAL, DEFAULT_WAIT_TIMEOUT, PacketSender,
};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the posts API lives and how patiently to talk to it.
///
/// The base URL is baked in at build time through `ACEBOOK_API_URL`,
/// since a browser bundle has no process environment to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub wait_timeout: Duration,
    pub retry_interval: Duration,
    pub max_attempts: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("ACEBOOK_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_owned(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            retry_interval: DEFAULT_RETRY_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ClientConfig {
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn packet_sender(&self) -> PacketSender {
        PacketSender {
            wait_timeout: self.wait_timeout,
            retry_interval: self.retry_interval,
            max_attempts: self.max_attempts,
        }
    }
}
