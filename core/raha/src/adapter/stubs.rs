//! テスト用のスタブアダプタ群
//!
//! ユースケースのテストから外部 I/O を切り離すための実装。
//! 返す結果をあらかじめ積んでおき、呼び出しを記録する。

use crate::domain::Record;
use crate::ports::outbound::{ChatGateway, Clipboard, Notifier, RecordFetcher};
use common::error::Error;
use common::ports::outbound::{Log, LogRecord};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// 積んだ結果を順に返す RecordFetcher スタブ
#[derive(Default)]
pub struct StubFetcher {
    results: Mutex<VecDeque<Result<Vec<Record>, Error>>>,
    calls: Mutex<usize>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, records: Vec<Record>) {
        self.results.lock().unwrap().push_back(Ok(records));
    }

    pub fn push_err(&self, err: Error) {
        self.results.lock().unwrap().push_back(Err(err));
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl RecordFetcher for StubFetcher {
    fn fetch(&self) -> Result<Vec<Record>, Error> {
        *self.calls.lock().unwrap() += 1;
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

// Arc 経由でも使えるようにしておく（テスト側で記録を覗くため）
impl RecordFetcher for Arc<StubFetcher> {
    fn fetch(&self) -> Result<Vec<Record>, Error> {
        self.as_ref().fetch()
    }
}

/// 呼び出しを記録し、積んだ応答を返す ChatGateway スタブ
#[derive(Default)]
pub struct StubChatGateway {
    replies: Mutex<VecDeque<Result<Value, Error>>>,
    calls: Mutex<Vec<(String, usize)>>,
}

impl StubChatGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, reply: Result<Value, Error>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// (message, context 件数) の履歴
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChatGateway for StubChatGateway {
    fn send(&self, message: &str, context: &[Record]) -> Result<Value, Error> {
        self.calls
            .lock()
            .unwrap()
            .push((message.to_string(), context.len()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Value::Null))
    }
}

impl ChatGateway for Arc<StubChatGateway> {
    fn send(&self, message: &str, context: &[Record]) -> Result<Value, Error> {
        self.as_ref().send(message, context)
    }
}

/// 通知を蓄積する Notifier スタブ
#[derive(Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<(bool, String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// (成功か, タイトル, 詳細) の履歴
    pub fn entries(&self) -> Vec<(bool, String, String)> {
        self.entries.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, title: &str, detail: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((true, title.to_string(), detail.to_string()));
    }

    fn error(&self, title: &str, detail: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((false, title.to_string(), detail.to_string()));
    }
}

/// 書き込みを記録する Clipboard スタブ
#[derive(Default)]
pub struct StubClipboard {
    writes: Mutex<Vec<String>>,
    fail: bool,
}

impl StubClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl Clipboard for StubClipboard {
    fn write_text(&self, text: &str) -> Result<(), Error> {
        if self.fail {
            return Err(Error::clipboard("stub clipboard failure".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

impl Clipboard for Arc<StubClipboard> {
    fn write_text(&self, text: &str) -> Result<(), Error> {
        self.as_ref().write_text(text)
    }
}

/// レコードを蓄積する Log スタブ
#[derive(Default)]
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Log for MemoryLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
