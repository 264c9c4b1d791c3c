//! レコードストア（所有される唯一の保持場所）
//!
//! 最後に取得したレコード一覧と統計を保持する。更新は常に全置換で、
//! 部分マージはしない。取得失敗時は前回の内容を保持する（stale-but-available）。
//!
//! 更新には世代番号を使う: 各リフレッシュは開始時に世代を受け取り、
//! より新しい世代が既に適用済みなら結果を破棄する。遅れて完了した
//! リクエストが新しい結果を上書きすることはない。

use super::record::Record;
use chrono::{DateTime, Utc};

/// 取得統計（フェッチごとに上書き）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    pub total: usize,
    pub load_ms: u64,
}

/// 現在のレコード一覧・統計・世代を持つストア
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    last_updated: Option<DateTime<Utc>>,
    stats: FetchStats,
    /// 適用済みの最新世代
    applied_generation: u64,
    /// 払い出し済みの最新世代
    issued_generation: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// リフレッシュ開始時に世代番号を払い出す
    pub fn begin_refresh(&mut self) -> u64 {
        self.issued_generation += 1;
        self.issued_generation
    }

    /// 取得結果を適用する。自分より新しい世代が適用済みなら破棄して false を返す。
    pub fn apply(
        &mut self,
        generation: u64,
        records: Vec<Record>,
        now: DateTime<Utc>,
        load_ms: u64,
    ) -> bool {
        if generation <= self.applied_generation {
            return false;
        }
        self.applied_generation = generation;
        self.stats = FetchStats {
            total: records.len(),
            load_ms,
        };
        self.records = records;
        self.last_updated = Some(now);
        true
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn stats(&self) -> FetchStats {
        self.stats
    }

    /// チャット文脈用のスナップショット（先頭 n 件のコピー）。
    /// 生参照ではなくコピーを返すことで、以後のリフレッシュと干渉しない。
    pub fn context_slice(&self, n: usize) -> Vec<Record> {
        self.records.iter().take(n).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rec(name: &str) -> Record {
        Record {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_apply_replaces_wholesale() {
        let mut store = RecordStore::new();
        let g1 = store.begin_refresh();
        assert!(store.apply(g1, vec![rec("أ"), rec("ب")], t0(), 120));
        assert_eq!(store.len(), 2);
        assert_eq!(store.stats().total, 2);
        assert_eq!(store.stats().load_ms, 120);
        assert_eq!(store.last_updated(), Some(t0()));

        let g2 = store.begin_refresh();
        assert!(store.apply(g2, vec![rec("ج")], t0(), 80));
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].name, "ج");
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut store = RecordStore::new();
        let g1 = store.begin_refresh();
        let g2 = store.begin_refresh();
        // 後に始まった g2 が先に完了する
        assert!(store.apply(g2, vec![rec("جديد")], t0(), 50));
        // 遅れて完了した g1 は破棄される
        assert!(!store.apply(g1, vec![rec("قديم")], t0(), 500));
        assert_eq!(store.records()[0].name, "جديد");
        assert_eq!(store.stats().load_ms, 50);
    }

    #[test]
    fn test_same_generation_applies_once() {
        let mut store = RecordStore::new();
        let g = store.begin_refresh();
        assert!(store.apply(g, vec![rec("أ")], t0(), 10));
        assert!(!store.apply(g, vec![rec("ب")], t0(), 10));
        assert_eq!(store.records()[0].name, "أ");
    }

    #[test]
    fn test_context_slice_is_a_copy() {
        let mut store = RecordStore::new();
        let g = store.begin_refresh();
        let rows: Vec<Record> = (0..15).map(|i| rec(&format!("استراحة {}", i))).collect();
        store.apply(g, rows, t0(), 10);

        let ctx = store.context_slice(10);
        assert_eq!(ctx.len(), 10);

        // スナップショット後の全置換はスライスに影響しない
        let g = store.begin_refresh();
        store.apply(g, vec![rec("آخر")], t0(), 10);
        assert_eq!(ctx[0].name, "استراحة 0");
    }

    #[test]
    fn test_context_slice_shorter_than_n() {
        let mut store = RecordStore::new();
        let g = store.begin_refresh();
        store.apply(g, vec![rec("أ")], t0(), 10);
        assert_eq!(store.context_slice(10).len(), 1);
    }
}
