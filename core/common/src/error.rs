//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。sysexits 互換の終了コードを持ち、
//! main はこのコードでプロセスを終了する。
//! フェッチ・チャット・クリップボードのエラーは発生箇所で回復し、
//! プロセスを落とすのは引数エラー等の usage 系のみ。

use thiserror::Error;

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// 引数・コマンドの誤り（exit 64）
    #[error("{0}")]
    InvalidArgument(String),

    /// 内部エラー（exit 70）
    #[error("{0}")]
    System(String),

    /// I/O エラー（exit 74)
    #[error("{0}")]
    Io(String),

    /// リクエストが完了しなかった（DNS・接続・タイムアウト等。exit 74）
    #[error("network error: {0}")]
    Network(String),

    /// 非 2xx の HTTP ステータス（exit 74）
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// クリップボードへの書き込み失敗（exit 74）
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// JSON の直列化・解析失敗（exit 76）
    #[error("JSON error: {0}")]
    Json(String),

    /// レスポンスの形が契約と異なる（success フラグ欠落等。exit 76）
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network(msg.into())
    }

    pub fn clipboard(msg: impl Into<String>) -> Self {
        Error::Clipboard(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn unexpected_shape(msg: impl Into<String>) -> Self {
        Error::UnexpectedShape(msg.into())
    }

    /// sysexits 互換の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::System(_) => 70,
            Error::Io(_) | Error::Network(_) | Error::HttpStatus(_) | Error::Clipboard(_) => 74,
            Error::Json(_) | Error::UnexpectedShape(_) => 76,
        }
    }

    /// usage 行を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::invalid_argument("bad flag").exit_code(), 64);
        assert_eq!(Error::system("boom").exit_code(), 70);
        assert_eq!(Error::network("refused").exit_code(), 74);
        assert_eq!(Error::HttpStatus(502).exit_code(), 74);
        assert_eq!(Error::unexpected_shape("no ok flag").exit_code(), 76);
        assert_eq!(Error::json("trailing garbage").exit_code(), 76);
    }

    #[test]
    fn test_is_usage_only_for_invalid_argument() {
        assert!(Error::invalid_argument("x").is_usage());
        assert!(!Error::network("x").is_usage());
        assert!(!Error::HttpStatus(500).is_usage());
    }

    #[test]
    fn test_display_http_status() {
        let e = Error::HttpStatus(404);
        assert_eq!(e.to_string(), "HTTP 404");
    }
}
