pub mod collate;
pub mod command;
pub mod highlight;
pub mod query;
pub mod record;
pub mod sort_key;
pub mod store;
pub mod transcript;

pub use collate::{ArabicCollator, Collator};
pub use command::RahaCommand;
pub use highlight::{highlight, Segment};
pub use query::derive_view;
pub use record::{Record, PLACEHOLDER};
pub use sort_key::SortKey;
pub use store::{FetchStats, RecordStore};
pub use transcript::{ChatMessage, Role, Transcript, GREETING};
