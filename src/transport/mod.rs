use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{ChatReply, ChatRequest, ChatResponseBody};

/// Exchanges one user message for the chat service's reply.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, message: &str) -> Result<ChatReply, AppError>;
}

/// [`ChatTransport`] that talks to the chat service over HTTP.
#[derive(Clone)]
pub struct HttpChatTransport {
    client: Client,
    chat_url: String,
}

impl HttpChatTransport {
    pub fn new(config: &Config) -> Self {
        Self { client: Client::new(), chat_url: config.chat_url() }
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    /// POSTs `{ "message": ... }` to `/api/chat`.
    ///
    /// A non-2xx status fails with a generic description; the body is not read.
    async fn send(&self, message: &str) -> Result<ChatReply, AppError> {
        let body = ChatRequest { message: message.to_string() };

        let resp = self
            .client
            .post(&self.chat_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Chat request to {} failed: {e}", self.chat_url);
                AppError::request_failed(&self.chat_url, e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            error!("Chat service answered with status {status}");
            return Err(AppError::ResponseNotOk { status: status.as_u16() });
        }

        let payload = resp.json::<ChatResponseBody>().await.map_err(|e| {
            error!("Failed to decode chat reply: {e}");
            AppError::InvalidReply { message: e.to_string() }
        })?;

        let reply = payload.into_reply().ok_or_else(|| AppError::InvalidReply {
            message: "body has neither 'response' nor 'error'".to_string(),
        })?;
        debug!("Chat service replied ({status})");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_to_chat_endpoint_of_configured_base() {
        let config = Config::new("http://127.0.0.1:9999/").unwrap();
        let transport = HttpChatTransport::new(&config);
        assert_eq!(transport.chat_url(), "http://127.0.0.1:9999/api/chat");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let config = Config::new(&format!("http://{addr}")).unwrap();
        let err = HttpChatTransport::new(&config).send("Hello").await.unwrap_err();
        assert!(err.is_transport());
        assert!(matches!(err, AppError::RequestFailed { .. }));
    }
}
