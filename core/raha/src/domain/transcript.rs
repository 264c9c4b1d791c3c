//! チャットトランスクリプト（会話の追記専用リスト）
//!
//! user/bot のメッセージ列を保持する不変条件付き型。メッセージは追記のみで、
//! 変更・削除はしない。プロセス生存中のみ保持する（永続化しない）。
//! ID は作成順に単調増加し、辞書順ソートが作成順に一致する。

use chrono::{DateTime, Utc};

/// 起動時にトランスクリプトへ挿入される bot の挨拶
pub const GREETING: &str =
    "مرحباً! يمكنني مساعدتك في البحث عن الاستراحات والاستعلام عنها. اسأل عن أي استراحة تريد معرفة معلومات عنها.";

/// メッセージの送り手
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// チャットメッセージ 1 件
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// 追記専用のトランスクリプト
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_seq: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// 挨拶メッセージ入りで作成する（元ダッシュボードの初期状態）
    pub fn with_greeting(now: DateTime<Utc>) -> Self {
        let mut t = Self::new();
        t.push_bot(GREETING, now);
        t
    }

    fn next_id(&mut self) -> String {
        self.next_seq += 1;
        // 固定幅ゼロ埋め: 辞書順＝作成順
        format!("{:08}", self.next_seq)
    }

    pub fn push_user(&mut self, content: impl Into<String>, now: DateTime<Utc>) {
        let id = self.next_id();
        self.messages.push(ChatMessage {
            id,
            role: Role::User,
            content: content.into(),
            timestamp: now,
        });
    }

    pub fn push_bot(&mut self, content: impl Into<String>, now: DateTime<Utc>) {
        let id = self.next_id();
        self.messages.push(ChatMessage {
            id,
            role: Role::Bot,
            content: content.into(),
            timestamp: now,
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// 最後のメッセージ（表示用）
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
