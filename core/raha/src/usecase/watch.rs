//! 監視ループ（周期リフレッシュ）
//!
//! 起動直後に 1 回、その後は一定間隔でリフレッシュを回す。
//! 割り込み（Ctrl+C）は 200ms 刻みのスリープ境界で検知する。

use crate::domain::store::RecordStore;
use crate::ports::outbound::InterruptChecker;
use crate::usecase::RefreshUseCase;
use std::thread;
use std::time::Duration;

const SLEEP_CHUNK_MS: u64 = 200;

/// リフレッシュを周期実行するループ
pub struct WatchLoop<'a> {
    pub refresh: &'a RefreshUseCase,
    pub interrupt: &'a dyn InterruptChecker,
    pub interval_ms: u64,
}

impl WatchLoop<'_> {
    /// 割り込みまでリフレッシュを繰り返す。適用されたサイクルごとに
    /// on_update を呼ぶ。正常終了は常に 0。
    pub fn run<F>(&self, store: &mut RecordStore, mut on_update: F) -> i32
    where
        F: FnMut(&RecordStore),
    {
        loop {
            if self.interrupt.is_interrupted() {
                return 0;
            }
            if self.refresh.refresh(store) {
                on_update(store);
            }
            if self.wait() {
                return 0;
            }
        }
    }

    /// interval_ms だけ待つ。途中で割り込みを検知したら true。
    fn wait(&self) -> bool {
        let mut remaining = self.interval_ms;
        while remaining > 0 {
            if self.interrupt.is_interrupted() {
                return true;
            }
            let chunk = remaining.min(SLEEP_CHUNK_MS);
            thread::sleep(Duration::from_millis(chunk));
            remaining -= chunk;
        }
        self.interrupt.is_interrupted()
    }
}
