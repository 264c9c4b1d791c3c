mod clock;
mod fs;
mod log;

pub use clock::Clock;
pub use fs::FileSystem;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
