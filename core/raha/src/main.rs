mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};
use std::process;

use adapter::config::CONTEXT_SLICE_LEN;
use adapter::render;
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};
use domain::{derive_view, RahaCommand, Record, SortKey, Transcript, GREETING};
use ports::inbound::UseCaseRunner;
use usecase::WatchLoop;
use wiring::{wire_raha, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&mut self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config)?;
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                Some(m)
            },
        });

        let query = config.query.clone().unwrap_or_default();
        let sort_key = SortKey::parse(config.sort.as_deref().unwrap_or(""));
        let color = !config.no_color;

        let result = match cmd {
            RahaCommand::Help => {
                print_help();
                Ok(0)
            }
            RahaCommand::Watch => {
                let watch = WatchLoop {
                    refresh: &self.app.refresh,
                    interrupt: self.app.interrupt.as_ref(),
                    interval_ms: self.app.endpoints.interval_ms,
                };
                let collator = &*self.app.collator;
                let code = watch.run(&mut self.app.store, |store| {
                    let view = derive_view(store.records(), &query, sort_key, collator);
                    print!("{}", render::render_view(&view, &query, color));
                    println!("{}", render::stats_line(store));
                });
                Ok(code)
            }
            RahaCommand::List => {
                self.app.refresh.refresh(&mut self.app.store);
                let view = derive_view(
                    self.app.store.records(),
                    &query,
                    sort_key,
                    &*self.app.collator,
                );
                print!("{}", render::render_view(&view, &query, color));
                println!("{}", render::stats_line(&self.app.store));
                Ok(0)
            }
            RahaCommand::Chat { message } => match message {
                Some(message) => self.chat_once(&message),
                None => self.chat_repl(),
            },
            // 早期 return しない: どの経路でも後段の lifecycle ログを通す
            RahaCommand::Copy { index } => {
                self.app.refresh.refresh(&mut self.app.store);
                self.view_record(&query, sort_key, index).map(|record| {
                    if record.phone.is_empty() {
                        self.app.notifier.error("خطأ في النسخ", "لم يتم نسخ الرقم");
                        return 0;
                    }
                    match self.app.clipboard.write_text(&record.phone) {
                        Ok(()) => {
                            self.app
                                .notifier
                                .success("تم النسخ", "تم نسخ الرقم إلى الحافظة");
                        }
                        Err(e) => {
                            self.app.notifier.error("خطأ في النسخ", &e.to_string());
                        }
                    }
                    0
                })
            }
            RahaCommand::Tel { index } => {
                self.app.refresh.refresh(&mut self.app.store);
                self.view_record(&query, sort_key, index).map(|record| {
                    match record.tel_link() {
                        Some(link) => println!("{}", link),
                        None => self.app.notifier.error("خطأ في النسخ", "لم يتم نسخ الرقم"),
                    }
                    0
                })
            }
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

impl Runner {
    /// 導出済みの並びから 1 始まりの index でレコードを取り出す
    fn view_record(&self, query: &str, sort_key: SortKey, index: usize) -> Result<Record, Error> {
        let view = derive_view(
            self.app.store.records(),
            query,
            sort_key,
            &*self.app.collator,
        );
        view.get(index - 1).cloned().ok_or_else(|| {
            Error::invalid_argument(format!(
                "index {} out of range ({} records in view)",
                index,
                view.len()
            ))
        })
    }

    /// 1 問 1 答のチャット。送信前にリフレッシュして文脈を取る。
    fn chat_once(&mut self, message: &str) -> Result<i32, Error> {
        self.app.refresh.refresh(&mut self.app.store);
        let context = self.app.store.context_slice(CONTEXT_SLICE_LEN);
        self.app
            .chat
            .ask(&mut self.app.transcript, message, &context, chrono::Utc::now());
        if let Some(last) = self.app.transcript.last() {
            println!("{}", last.content);
        }
        Ok(0)
    }

    /// 対話チャット。EOF または exit で終了する。
    fn chat_repl(&mut self) -> Result<i32, Error> {
        self.app.refresh.refresh(&mut self.app.store);
        self.app.transcript = Transcript::with_greeting(chrono::Utc::now());
        println!("{}", GREETING);

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            if self.app.interrupt.is_interrupted() {
                return Ok(0);
            }
            print!("> ");
            io::stdout().flush().map_err(|e| Error::io_msg(e.to_string()))?;
            let Some(line) = lines.next() else {
                return Ok(0);
            };
            let line = line.map_err(|e| Error::io_msg(e.to_string()))?;
            if line.trim() == "exit" {
                return Ok(0);
            }
            let context = self.app.store.context_slice(CONTEXT_SLICE_LEN);
            self.app
                .chat
                .ask(&mut self.app.transcript, &line, &context, chrono::Utc::now());
            if let Some(last) = self.app.transcript.last() {
                println!("{}", render::render_chat_message(last));
            }
        }
    }
}

fn cmd_name_for_log(cmd: &RahaCommand) -> &'static str {
    match cmd {
        RahaCommand::Help => "help",
        RahaCommand::Watch => "watch",
        RahaCommand::List => "list",
        RahaCommand::Chat { .. } => "chat",
        RahaCommand::Copy { .. } => "copy",
        RahaCommand::Tel { .. } => "tel",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("raha: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_raha(&config);
    let mut runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: raha [options] [watch|list|chat|copy|tel] [args...]");
}

fn print_help() {
    println!("Usage: raha [options] [command] [args...]");
    println!("Commands:");
    println!("  watch                 Refresh periodically and render after each update (default)");
    println!("  list                  Fetch once and render the current records");
    println!("  chat [message...]     Ask the assistant; without a message, start an interactive session (exit or Ctrl-D quits)");
    println!("  copy <index>          Copy the phone number of record #index (of the current view) to the clipboard");
    println!("  tel <index>           Print the tel: link of record #index");
    println!("Options:");
    println!("  -h, --help            Show this help message");
    println!("  -q, --query <text>    Filter records by substring (matches name, phone, address, link, notes, row number)");
    println!("  -s, --sort <key>      Sort key: name (default), address, row_number. Arabic key names are accepted.");
    println!("  --url <url>           Data webhook URL (default: built-in endpoint)");
    println!("  --chat-url <url>      Chat webhook URL (default: built-in endpoint)");
    println!("  --interval <secs>     Refresh interval for watch, in seconds (default 30)");
    println!("  --no-color            Disable ANSI highlighting of query matches");
    println!("  -v, --verbose         Emit verbose debug logs (for troubleshooting)");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  RAHA_DATA_URL       Override the data webhook URL");
    println!("  RAHA_CHAT_URL       Override the chat webhook URL");
    println!("  RAHA_INTERVAL_MS    Override the refresh interval in milliseconds");
    println!("  RAHA_HOME           Log directory root ($RAHA_HOME/log/raha.jsonl);");
    println!("                      falls back to $XDG_STATE_HOME/raha, then ~/.local/state/raha");
    println!();
    println!("Description:");
    println!("  Terminal client for the rest-area records webhook. Fetches the list,");
    println!("  filters and sorts it locally, and can relay questions to the chat webhook");
    println!("  with the first {} records as context.", CONTEXT_SLICE_LEN);
    println!();
    println!("Examples:");
    println!("  raha list -q نجد");
    println!("  raha --interval 10 watch");
    println!("  raha chat أين أقرب استراحة؟");
    println!("  raha copy 1");
}
