//! クリップボードの Outbound ポート

use common::error::Error;

/// システムクリップボードへ文字列を書き込む
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), Error>;
}
