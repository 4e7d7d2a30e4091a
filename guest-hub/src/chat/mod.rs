//! Chat-reply collaborator client
//!
//! Free-text guest questions go to an external canned-response service.
//! The guest hub only forwards the question with a little hotel context
//! and routes any staff message the service prepares.

use std::time::Duration;

use async_trait::async_trait;
use shared::hotel::{ChatHotelContext, ChatQuestion, ChatReply, HotelConfiguration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat service answered with HTTP {0}")]
    Status(u16),
}

#[async_trait]
pub trait ChatReplyService: Send + Sync {
    async fn ask(&self, question: &ChatQuestion) -> Result<ChatReply, ChatError>;
}

pub struct HttpChatReplyClient {
    client: reqwest::Client,
    url: String,
}

impl HttpChatReplyClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ChatReplyService for HttpChatReplyClient {
    async fn ask(&self, question: &ChatQuestion) -> Result<ChatReply, ChatError> {
        let response = self.client.post(&self.url).json(question).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        Ok(response.json::<ChatReply>().await?)
    }
}

/// Question payload with the hotel context the service expects
pub fn chat_question(config: &HotelConfiguration, question: &str) -> ChatQuestion {
    ChatQuestion {
        question: question.trim().to_string(),
        hotel: ChatHotelContext {
            hotel_name: config.name.clone(),
            location_query: config.location_query.clone(),
            wifi: config.wifi.clone(),
            department_hours: config.department_hours.clone(),
        },
    }
}
