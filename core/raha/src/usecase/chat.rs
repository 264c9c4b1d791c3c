//! チャットユースケース
//!
//! 送信ガード付きの状態機械。応答待ちの間は新しい送信を受け付けない。
//! 文脈はストアのスナップショット（コピー）を受け取り、送信中の
//! リフレッシュと干渉しない。

use crate::domain::transcript::Transcript;
use crate::domain::Record;
use crate::ports::outbound::ChatGateway;
use chrono::{DateTime, Utc};
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 応答本文が取り出せなかったときの定型文
pub const FALLBACK_REPLY: &str = "عذراً، لم أتمكن من فهم طلبك. حاول مرة أخرى.";
/// 送信自体が失敗したときの定型文
pub const CONNECTIVITY_ERROR: &str =
    "عذراً، حدث خطأ في الاتصال. تأكد من اتصالك بالإنترنت وحاول مرة أخرى.";

/// チャットの送信状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Idle,
    AwaitingReply,
}

/// submit の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 受理され、応答待ちに入った
    Accepted,
    /// 空文字列（trim 後）だったため無視
    IgnoredEmpty,
    /// 応答待ち中だったため無視
    IgnoredBusy,
}

/// ゲートウェイ越しに 1 問 1 答を進めるユースケース
pub struct ChatUseCase {
    gateway: Box<dyn ChatGateway>,
    log: Arc<dyn Log>,
    state: ChatState,
    pending: Option<String>,
}

impl ChatUseCase {
    pub fn new(gateway: Box<dyn ChatGateway>, log: Arc<dyn Log>) -> Self {
        Self {
            gateway,
            log,
            state: ChatState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    /// ユーザー入力を受理する。受理した場合のみ user メッセージが追記され、
    /// 応答待ち状態になる。空入力と応答待ち中の入力は黙って無視する。
    pub fn submit(
        &mut self,
        transcript: &mut Transcript,
        message: &str,
        now: DateTime<Utc>,
    ) -> SubmitOutcome {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::IgnoredEmpty;
        }
        if self.state == ChatState::AwaitingReply {
            return SubmitOutcome::IgnoredBusy;
        }
        transcript.push_user(trimmed, now);
        self.pending = Some(trimmed.to_string());
        self.state = ChatState::AwaitingReply;
        SubmitOutcome::Accepted
    }

    /// 応答待ちの送信を実際に行い、結果を bot メッセージとして追記する。
    /// 成否にかかわらずちょうど 1 件の bot メッセージが追記され、Idle に戻る。
    pub fn resolve(&mut self, transcript: &mut Transcript, context: &[Record], now: DateTime<Utc>) {
        let Some(message) = self.pending.take() else {
            return;
        };
        let reply = match self.gateway.send(&message, context) {
            Ok(body) => {
                let reply = extract_reply(&body);
                self.log_turn(LogLevel::Info, "chat turn finished", &message, context.len());
                reply
            }
            Err(e) => {
                self.log_turn(LogLevel::Error, &format!("chat send failed: {}", e), &message, context.len());
                CONNECTIVITY_ERROR.to_string()
            }
        };
        transcript.push_bot(reply, now);
        self.state = ChatState::Idle;
    }

    /// submit と resolve をまとめた同期版（CLI の 1 問 1 答用）
    pub fn ask(
        &mut self,
        transcript: &mut Transcript,
        message: &str,
        context: &[Record],
        now: DateTime<Utc>,
    ) -> SubmitOutcome {
        let outcome = self.submit(transcript, message, now);
        if outcome == SubmitOutcome::Accepted {
            self.resolve(transcript, context, now);
        }
        outcome
    }

    fn log_turn(&self, level: LogLevel, message: &str, user_message: &str, context_len: usize) {
        let mut fields = BTreeMap::new();
        fields.insert(
            "message_len".to_string(),
            serde_json::json!(user_message.chars().count()),
        );
        fields.insert("context_len".to_string(), serde_json::json!(context_len));
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level,
            message: message.to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("chat".to_string()),
            fields: Some(fields),
        });
    }
}

/// 応答ボディから表示文字列を取り出す。
/// `response` → `message` の順に非空文字列を探し、どちらも無ければ定型文。
fn extract_reply(body: &Value) -> String {
    for key in ["response", "message"] {
        if let Some(s) = body.get(key).and_then(Value::as_str) {
            if !s.is_empty() {
                return s.to_string();
            }
        }
    }
    FALLBACK_REPLY.to_string()
}
