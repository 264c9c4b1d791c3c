//! ファイルシステム Outbound ポート
//!
//! ログ出力が必要とする最小限の操作のみを抽象化する。

use crate::error::Error;
use std::path::Path;

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` など。
pub trait FileSystem: Send + Sync {
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
}
