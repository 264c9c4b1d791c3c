//! Webhook クライアント（JSON 固定の GET / POST）
//!
//! reqwest::blocking を薄く包み、エラーを共通エラー型に正規化する。
//! タイムアウトは transport のデフォルトに委譲する（明示設定しない）。

use crate::error::Error;
use serde_json::Value;

/// JSON を返す Webhook への同期クライアント
pub struct WebhookClient {
    client: reqwest::blocking::Client,
}

impl WebhookClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// GET して JSON ボディを返す。非 2xx は Error::HttpStatus。
    pub fn get_json(&self, url: &str) -> Result<Value, Error> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .send()
            .map_err(|e| Error::network(e.to_string()))?;

        Self::json_body(response)
    }

    /// JSON ボディを POST し、JSON レスポンスを返す。非 2xx は Error::HttpStatus。
    pub fn post_json(&self, url: &str, body: &Value) -> Result<Value, Error> {
        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .map_err(|e| Error::network(e.to_string()))?;

        Self::json_body(response)
    }

    fn json_body(response: reqwest::blocking::Response) -> Result<Value, Error> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus(status.as_u16()));
        }
        let text = response
            .text()
            .map_err(|e| Error::network(format!("Failed to read response body: {}", e)))?;
        serde_json::from_str(&text)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))
    }
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}
