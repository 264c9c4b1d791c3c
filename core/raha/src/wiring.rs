//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, LevelFilterLog, NoopLog, StdClock, StdFileSystem};
use common::ports::outbound::{Clock, FileSystem, Log};

use crate::adapter::config::{resolve_endpoints, resolve_log_path, Endpoints};
use crate::adapter::{
    ConsoleNotifier, HttpChatGateway, HttpRecordFetcher, NoopInterruptChecker, OsClipboard,
    SigintChecker,
};
use crate::cli::Config;
use crate::domain::{ArabicCollator, Collator, RecordStore, Transcript};
use crate::ports::outbound::{Clipboard, InterruptChecker, Notifier};
use crate::usecase::{ChatUseCase, RefreshUseCase};

/// 組み立て済みのアプリケーション一式
pub struct App {
    pub store: RecordStore,
    pub transcript: Transcript,
    pub refresh: RefreshUseCase,
    pub chat: ChatUseCase,
    pub clipboard: Box<dyn Clipboard>,
    pub notifier: Arc<dyn Notifier>,
    pub collator: Arc<dyn Collator>,
    pub interrupt: Box<dyn InterruptChecker>,
    pub logger: Arc<dyn Log>,
    pub endpoints: Endpoints,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_raha(config: &Config) -> App {
    let endpoints = resolve_endpoints(
        config.url.as_deref(),
        config.chat_url.as_deref(),
        config.interval_secs,
    );

    // ログ先が解決できない環境では黙って NoopLog に落とす。
    // debug レコードは -v / --verbose のときだけ書き出す。
    let sink: Arc<dyn Log> = match resolve_log_path() {
        Some(path) => {
            let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
            Arc::new(FileJsonLog::new(fs, path))
        }
        None => Arc::new(NoopLog),
    };
    let logger: Arc<dyn Log> = Arc::new(LevelFilterLog::new(sink, config.verbose));

    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    let refresh = RefreshUseCase::new(
        Box::new(HttpRecordFetcher::new(endpoints.data_url.clone())),
        Arc::clone(&clock),
        Arc::clone(&notifier),
        Arc::clone(&logger),
    );
    let chat = ChatUseCase::new(
        Box::new(HttpChatGateway::new(endpoints.chat_url.clone())),
        Arc::clone(&logger),
    );

    // SIGINT ハンドラの登録に失敗しても起動は続ける（割り込み無しで動作）
    let interrupt: Box<dyn InterruptChecker> = match SigintChecker::new() {
        Ok(checker) => Box::new(checker),
        Err(_) => Box::new(NoopInterruptChecker),
    };

    App {
        store: RecordStore::new(),
        transcript: Transcript::new(),
        refresh,
        chat,
        clipboard: Box::new(OsClipboard),
        notifier,
        collator: Arc::new(ArabicCollator),
        interrupt,
        logger,
        endpoints,
    }
}
