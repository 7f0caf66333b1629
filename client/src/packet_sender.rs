use std::{pin::pin, time::Duration};

use dioxus::logger::tracing::warn;
use futures::future::{Either, select};

use crate::{error::NetworkError, time};

/// Progress of a request as seen by a view.
#[derive(Debug, Clone, PartialEq)]
pub enum PacketState<T> {
    Response(T),
    Waiting,
    Failed(NetworkError),
    NotStarted,
}

impl<T> PacketState<T> {
    pub fn is_waiting(&self) -> bool {
        matches!(self, Self::Waiting)
    }
}

pub struct PacketSender {
    pub wait_timeout: Duration,
    pub retry_interval: Duration,
    pub max_attempts: u32,
}

impl Default for PacketSender {
    fn default() -> Self {
        Self {
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            retry_interval: DEFAULT_RETRY_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(3);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1;

impl PacketSender {
    /// Awaits `func`, giving up after `wait_timeout`.
    pub async fn send<T, F>(&self, func: F) -> Result<T, NetworkError>
    where
        F: Future<Output = Result<T, NetworkError>>,
    {
        let request = pin!(func);
        let timer = pin!(time::sleep(self.wait_timeout));
        match select(request, timer).await {
            Either::Left((value, _)) => value,
            Either::Right(((), _)) => {
                warn!("Request timed out after {:?}", self.wait_timeout);
                Err(NetworkError::Timeout(self.wait_timeout))
            }
        }
    }

    /// Sends up to `max_attempts` times, sleeping `retry_interval` between
    /// attempts. Only retryable errors start another attempt.
    pub async fn retry_loop<T, F>(&self, mut func: impl FnMut() -> F) -> Result<T, NetworkError>
    where
        F: Future<Output = Result<T, NetworkError>>,
    {
        let mut attempt: u32 = 1;
        loop {
            match self.send(func()).await {
                Err(err) if err.is_retryable() && attempt < self.max_attempts => {
                    warn!("Attempt {attempt}/{} failed: {err}", self.max_attempts);
                    attempt += 1;
                    time::sleep(self.retry_interval).await;
                }
                result => return result,
            }
        }
    }
}
