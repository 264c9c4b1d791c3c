//! リフレッシュユースケース
//!
//! フェッチャーから一覧を取得し、世代番号で守られたストアに適用する。
//! 取得失敗時はストアに触れず、通知とログだけを出す（前回の内容を保持）。

use crate::domain::store::RecordStore;
use crate::ports::outbound::{Notifier, RecordFetcher};
use common::ports::outbound::{now_iso8601, Clock, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 成功通知のタイトル（元ダッシュボードのトースト文言）
const SUCCESS_TITLE: &str = "تم التحديث بنجاح";
/// 失敗通知のタイトル
const ERROR_TITLE: &str = "خطأ في التحميل";

/// 取得と適用を 1 サイクルとして実行するユースケース
pub struct RefreshUseCase {
    fetcher: Box<dyn RecordFetcher>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    log: Arc<dyn Log>,
}

impl RefreshUseCase {
    pub fn new(
        fetcher: Box<dyn RecordFetcher>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            fetcher,
            clock,
            notifier,
            log,
        }
    }

    /// 1 回のリフレッシュを実行する。ストアに適用されたら true。
    /// 取得失敗・世代落ちのときは false を返し、ストアは変更されない。
    pub fn refresh(&self, store: &mut RecordStore) -> bool {
        let generation = store.begin_refresh();
        let started = self.clock.now_ms();
        // debug レコードは verbose 時のみファイルに残る（LevelFilterLog）
        self.log_cycle(LogLevel::Debug, "refresh started", generation, |_| {});

        match self.fetcher.fetch() {
            Ok(records) => {
                let load_ms = self.clock.now_ms().saturating_sub(started);
                let count = records.len();
                let applied = store.apply(generation, records, chrono::Utc::now(), load_ms);
                if applied {
                    self.notifier
                        .success(SUCCESS_TITLE, &format!("تم تحميل {} عنصر", count));
                }
                self.log_cycle(LogLevel::Info, "refresh finished", generation, |m| {
                    m.insert("count".to_string(), serde_json::json!(count));
                    m.insert("load_ms".to_string(), serde_json::json!(load_ms));
                    m.insert("applied".to_string(), serde_json::json!(applied));
                });
                applied
            }
            Err(e) => {
                self.notifier.error(ERROR_TITLE, &e.to_string());
                self.log_cycle(LogLevel::Error, "refresh failed", generation, |m| {
                    m.insert("error".to_string(), serde_json::json!(e.to_string()));
                });
                false
            }
        }
    }

    fn log_cycle<F>(&self, level: LogLevel, message: &str, generation: u64, fill: F)
    where
        F: FnOnce(&mut BTreeMap<String, serde_json::Value>),
    {
        let mut fields = BTreeMap::new();
        fields.insert("generation".to_string(), serde_json::json!(generation));
        fill(&mut fields);
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level,
            message: message.to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("refresh".to_string()),
            fields: Some(fields),
        });
    }
}
