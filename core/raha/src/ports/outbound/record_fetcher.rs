//! レコード取得の Outbound ポート

use crate::domain::Record;
use common::error::Error;

/// データ Webhook からレコード一覧を取得する
///
/// 実装は `adapter::HttpRecordFetcher`（HTTP GET + 封筒検証）や
/// テスト用の Stub など。
pub trait RecordFetcher: Send + Sync {
    fn fetch(&self) -> Result<Vec<Record>, Error>;
}
