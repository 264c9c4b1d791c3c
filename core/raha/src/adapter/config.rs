//! エンドポイント・間隔・ログ出力先の解決
//!
//! 既定値はビルド時定数。環境変数（RAHA_DATA_URL / RAHA_CHAT_URL /
//! RAHA_INTERVAL_MS）と CLI フラグで上書きできる。優先順位は
//! CLI フラグ > 環境変数 > 既定値。

use std::env;
use std::path::PathBuf;

/// データ Webhook（GET）の既定 URL
pub const DEFAULT_DATA_URL: &str = "https://n8n.m0usa.ly/webhook/webhook/excel-sync";
/// チャット Webhook（POST）の既定 URL
pub const DEFAULT_CHAT_URL: &str =
    "https://n8n.m0usa.ly/webhook/e808fb64-846f-409a-a8d3-727d65634651";
/// 周期リフレッシュの既定間隔
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 30_000;
/// チャット文脈として送るレコード数の上限
pub const CONTEXT_SLICE_LEN: usize = 10;

/// 解決済みのエンドポイント設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub data_url: String,
    pub chat_url: String,
    pub interval_ms: u64,
}

/// CLI フラグと環境変数からエンドポイント設定を解決する
pub fn resolve_endpoints(
    cli_url: Option<&str>,
    cli_chat_url: Option<&str>,
    cli_interval_secs: Option<u64>,
) -> Endpoints {
    let data_url = cli_url
        .map(|s| s.to_string())
        .or_else(|| env_non_empty("RAHA_DATA_URL"))
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string());
    let chat_url = cli_chat_url
        .map(|s| s.to_string())
        .or_else(|| env_non_empty("RAHA_CHAT_URL"))
        .unwrap_or_else(|| DEFAULT_CHAT_URL.to_string());
    let interval_ms = cli_interval_secs
        .map(|s| s.saturating_mul(1000))
        .or_else(|| env_non_empty("RAHA_INTERVAL_MS").and_then(|s| s.parse().ok()))
        .unwrap_or(DEFAULT_REFRESH_INTERVAL_MS);

    Endpoints {
        data_url,
        chat_url,
        interval_ms,
    }
}

/// ログファイルのパスを解決する。
/// RAHA_HOME > XDG_STATE_HOME/raha > ~/.local/state/raha。どれも無ければ None。
pub fn resolve_log_path() -> Option<PathBuf> {
    let base = env_non_empty("RAHA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            env_non_empty("XDG_STATE_HOME").map(|s| PathBuf::from(s).join("raha"))
        })
        .or_else(|| {
            env_non_empty("HOME").map(|h| PathBuf::from(h).join(".local").join("state").join("raha"))
        })?;
    Some(base.join("log").join("raha.jsonl"))
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}
