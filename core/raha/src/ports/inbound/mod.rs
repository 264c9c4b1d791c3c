//! Inbound ポート（CLI から usecase への入口）

use crate::cli::Config;
use common::error::Error;

/// 解析済み Config を受けてコマンドを実行する
pub trait UseCaseRunner {
    fn run(&mut self, config: Config) -> Result<i32, Error>;
}
