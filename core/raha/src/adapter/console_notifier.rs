//! stderr への一時通知（トースト相当）
//!
//! 通知は stderr、一覧表示は stdout、構造化ログはファイルと
//! チャネルを分ける。タイトルは元ダッシュボードのアラビア語文言を使う。

use crate::ports::outbound::Notifier;

/// stderr へ 1 行で出力する Notifier 実装
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, title: &str, detail: &str) {
        eprintln!("raha: {}: {}", title, detail);
    }

    fn error(&self, title: &str, detail: &str) {
        eprintln!("raha: {}: {}", title, detail);
    }
}
