use dioxus::logger::tracing::{debug, info};
use shared::types::NewPost;

use crate::{auth::Token, config::ClientConfig, error::NetworkError};

pub const POSTS_ENDPOINT: &str = "/posts";

/// The posts API as far as the composer is concerned.
pub trait PostService {
    fn create_post(
        &self,
        text: &str,
        token: &Token,
    ) -> impl Future<Output = Result<(), NetworkError>>;
}

/// [`PostService`] backed by the HTTP posts API.
#[derive(Clone)]
pub struct HttpPostService {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpPostService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl Default for HttpPostService {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl PostService for HttpPostService {
    async fn create_post(&self, text: &str, token: &Token) -> Result<(), NetworkError> {
        let url = self.config.endpoint(POSTS_ENDPOINT);
        let body = NewPost {
            message: text.to_owned(),
        };
        debug!("Creating post via {url}");

        self.config
            .packet_sender()
            .retry_loop(|| {
                let request = self
                    .client
                    .post(&url)
                    .bearer_auth(token.as_str())
                    .json(&body);
                async move {
                    let status = request.send().await?.status();
                    if status.is_success() {
                        Ok(())
                    } else {
                        Err(NetworkError::Status(status.as_u16()))
                    }
                }
            })
            .await?;

        info!("Post created");
        Ok(())
    }
}
