//! raha 共通ライブラリ
//!
//! アプリ本体（`raha`）から使う横断的な機能を提供します。
//! エラー型・構造化ログ・時刻・ファイルシステム抽象・Webhook クライアント。

/// エラーハンドリング
pub mod error;

/// Outbound ポート（Clock / FileSystem / Log）
pub mod ports;

/// 標準アダプター実装
pub mod adapter;

/// Webhook クライアント（JSON 固定の GET / POST）
pub mod webhook;
