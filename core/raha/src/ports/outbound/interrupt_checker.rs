//! 割り込み（Ctrl+C）検知の Outbound ポート
//!
//! watch ループはこのフラグを見て周期リフレッシュを打ち切る。

/// 割り込みが要求されたかを返す
pub trait InterruptChecker: Send + Sync {
    fn is_interrupted(&self) -> bool;
}
