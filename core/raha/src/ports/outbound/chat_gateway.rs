//! チャット Webhook の Outbound ポート

use crate::domain::Record;
use common::error::Error;
use serde_json::Value;

/// メッセージと文脈スライスを送信し、レスポンスボディをそのまま返す。
/// 応答フィールドの選択（response → message → 固定文言）は usecase 側の責務。
pub trait ChatGateway: Send + Sync {
    fn send(&self, message: &str, context: &[Record]) -> Result<Value, Error>;
}
