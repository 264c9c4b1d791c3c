//! 一時通知（トースト相当）の Outbound ポート
//!
//! フェッチとクリップボードの成否をユーザーへ知らせる。チャットのエラーは
//! 通知ではなくトランスクリプトの bot メッセージとして扱う。

/// 一時通知の送出先
///
/// 実装は `adapter::ConsoleNotifier`（stderr）やテスト用の記録版など。
pub trait Notifier: Send + Sync {
    fn success(&self, title: &str, detail: &str);
    fn error(&self, title: &str, detail: &str);
}
