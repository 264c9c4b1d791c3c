mod file_json_log;
mod level_filter_log;
mod std_clock;
mod std_fs;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use level_filter_log::LevelFilterLog;
pub use std_clock::StdClock;
pub use std_fs::StdFileSystem;
