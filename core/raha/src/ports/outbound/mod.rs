mod chat_gateway;
mod clipboard;
mod interrupt_checker;
mod notifier;
mod record_fetcher;

pub use chat_gateway::ChatGateway;
pub use clipboard::Clipboard;
pub use interrupt_checker::InterruptChecker;
pub use notifier::Notifier;
pub use record_fetcher::RecordFetcher;
