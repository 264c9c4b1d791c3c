//! HTTP 経由のレコード取得アダプタ
//!
//! データ Webhook へ GET し、封筒 `{ ok: bool, data: [...] }` を検証して
//! レコード列に落とす。`data` が配列でない場合はエラーにせず空リストに
//! 落とす（寛容に劣化させる方針）。

use crate::domain::Record;
use crate::ports::outbound::RecordFetcher;
use common::error::Error;
use common::webhook::WebhookClient;

/// データ Webhook から取得する標準実装
pub struct HttpRecordFetcher {
    client: WebhookClient,
    url: String,
}

impl HttpRecordFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: WebhookClient::new(),
            url: url.into(),
        }
    }
}

impl RecordFetcher for HttpRecordFetcher {
    fn fetch(&self) -> Result<Vec<Record>, Error> {
        let body = self.client.get_json(&self.url)?;
        parse_envelope(&body)
    }
}

/// 封筒を検証してレコード列を取り出す
pub(crate) fn parse_envelope(body: &serde_json::Value) -> Result<Vec<Record>, Error> {
    if body.get("ok").and_then(|v| v.as_bool()) != Some(true) {
        return Err(Error::unexpected_shape(
            "server did not report success (ok != true)",
        ));
    }

    let rows = match body.get("data").and_then(|v| v.as_array()) {
        Some(rows) => rows,
        // 配列以外の data は空リスト扱い
        None => return Ok(Vec::new()),
    };

    Ok(rows
        .iter()
        .map(|v| serde_json::from_value(v.clone()).unwrap_or_default())
        .collect())
}
