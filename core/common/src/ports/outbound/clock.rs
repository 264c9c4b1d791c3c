//! 時刻取得の Outbound ポート
//!
//! usecase はこの trait 経由で「現在時刻」を取得する。
//! 読み込み時間の計測と last_updated の記録を決定的にテストするための継ぎ目。

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在時刻をミリ秒（Unix epoch）で返す
    fn now_ms(&self) -> u64;
}
