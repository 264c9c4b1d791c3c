//! ログレベルで間引く Log デコレータ
//!
//! debug レベルのレコードは冗長モードのときだけ下流へ渡す。
//! それ以外のレベルは常に素通しする。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

/// verbose フラグで debug レコードの通過を切り替える Log 実装
pub struct LevelFilterLog {
    inner: Arc<dyn Log>,
    allow_debug: bool,
}

impl LevelFilterLog {
    pub fn new(inner: Arc<dyn Log>, allow_debug: bool) -> Self {
        Self { inner, allow_debug }
    }
}

impl Log for LevelFilterLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if record.level == LogLevel::Debug && !self.allow_debug {
            return Ok(());
        }
        self.inner.log(record)
    }
}
