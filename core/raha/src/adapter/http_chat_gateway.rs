//! HTTP 経由のチャット送信アダプタ
//!
//! `{ message, context }` を POST し、レスポンスボディを JSON のまま返す。
//! context はレコードのスナップショットで、配信元と同じアラビア語キーで
//! 直列化される。

use crate::domain::Record;
use crate::ports::outbound::ChatGateway;
use common::error::Error;
use common::webhook::WebhookClient;
use serde_json::{json, Value};

/// チャット Webhook へ送信する標準実装
pub struct HttpChatGateway {
    client: WebhookClient,
    url: String,
}

impl HttpChatGateway {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: WebhookClient::new(),
            url: url.into(),
        }
    }
}

impl ChatGateway for HttpChatGateway {
    fn send(&self, message: &str, context: &[Record]) -> Result<Value, Error> {
        let body = json!({
            "message": message,
            "context": context,
        });
        self.client.post_json(&self.url, &body)
    }
}
