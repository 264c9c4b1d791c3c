pub mod config;
pub mod render;

mod console_notifier;
mod http_chat_gateway;
mod http_record_fetcher;
mod os_clipboard;
mod sigint_checker;
#[cfg(test)]
mod stubs;

pub use console_notifier::ConsoleNotifier;
pub use http_chat_gateway::HttpChatGateway;
pub use http_record_fetcher::HttpRecordFetcher;
pub use os_clipboard::OsClipboard;
pub use sigint_checker::{NoopInterruptChecker, SigintChecker};
#[cfg(test)]
pub use stubs::{MemoryLog, RecordingNotifier, StubChatGateway, StubClipboard, StubFetcher};
