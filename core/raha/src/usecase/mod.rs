//! ユースケース層
//!
//! ドメインとポートを束ねる手続き。外部 I/O はすべて Outbound ポート経由。

pub mod chat;
pub mod refresh;
pub mod watch;

pub use chat::{ChatState, ChatUseCase, SubmitOutcome, CONNECTIVITY_ERROR, FALLBACK_REPLY};
pub use refresh::RefreshUseCase;
pub use watch::WatchLoop;
