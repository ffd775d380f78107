use reqwest::{Client, Response, Url};
use serde_json::json;

use crate::infra::error::AppError;

/// HTTP client for the chat server endpoints.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    base_url: Url,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url).map_err(|source| AppError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: source.to_string(),
        })?;

        let http = Client::builder()
            .build()
            .map_err(AppError::HttpClientInit)?;
        Ok(Self { http, base_url })
    }

    /// Opens a streaming reply for one user message.
    ///
    /// Sends `{"message": <text>}` as JSON to `POST /chat`. The handshake
    /// fails on transport errors and on non-2xx status; the body is left for
    /// the caller to consume incrementally.
    pub async fn open_reply(&self, message: &str) -> Result<Response, reqwest::Error> {
        self.http
            .post(self.endpoint("chat"))
            .json(&json!({ "message": message }))
            .send()
            .await?
            .error_for_status()
    }

    /// Performs the logout navigation: `GET /logout`, no body.
    pub async fn logout(&self) -> Result<(), reqwest::Error> {
        self.http
            .get(self.endpoint("logout"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/{path}")
    }
}
