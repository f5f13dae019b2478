//! Chat resource

use crate::http::ApiClient;
use crate::models::{ChatMessage, Conversation, Paginated, SendMessageRequest, UnreadCount};
use crate::utils::errors::Result;
use crate::utils::helpers::list_query;

/// Conversations, messages and unread totals under `/api/chat`.
#[derive(Debug, Clone)]
pub struct ChatService {
    client: ApiClient,
}

impl ChatService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn conversations(&self, page: u32) -> Result<Paginated<Conversation>> {
        self.client
            .get("/api/chat/conversations", &list_query(page, None))
            .await
    }

    pub async fn messages(
        &self,
        conversation_id: i64,
        page: u32,
    ) -> Result<Paginated<ChatMessage>> {
        self.client
            .get(
                &format!("/api/chat/conversations/{conversation_id}/messages"),
                &list_query(page, None),
            )
            .await
    }

    pub async fn send(&self, conversation_id: i64, body: impl Into<String>) -> Result<ChatMessage> {
        let request = SendMessageRequest { body: body.into() };
        self.client
            .post(
                &format!("/api/chat/conversations/{conversation_id}/messages"),
                &request,
            )
            .await
    }

    /// Unread totals for the current account, shown as a badge in the UI.
    pub async fn unread_count(&self) -> Result<UnreadCount> {
        self.client.get("/api/chat/unread-count", &[]).await
    }
}
