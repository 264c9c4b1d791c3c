use crate::domain::RahaCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: 不具合調査用の冗長ログ
    pub verbose: bool,
    /// --no-color: ハイライトの ANSI 装飾を無効化する
    pub no_color: bool,
    /// -q / --query: フィルタ文字列（trim 後に空なら全件）
    pub query: Option<String>,
    /// -s / --sort: ソートキー（name / address / row_number、アラビア語キーも可）
    pub sort: Option<String>,
    /// --url: データ Webhook の上書き
    pub url: Option<String>,
    /// --chat-url: チャット Webhook の上書き
    pub chat_url: Option<String>,
    /// --interval: リフレッシュ間隔（秒）
    pub interval_secs: Option<u64>,
    /// 先頭の位置引数（コマンド名）。省略時は watch
    pub command: Option<String>,
    pub command_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("raha")
        .about("Rest-area records client: watch, list, chat, copy, tel")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-color")
                .long("no-color")
                .help("Disable ANSI highlighting of query matches")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("query")
                .short('q')
                .long("query")
                .value_name("text")
                .help("Filter records by substring (name, phone, address, link, notes, row number)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("sort")
                .short('s')
                .long("sort")
                .value_name("key")
                .help("Sort key: name (default), address, row_number")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("url")
                .long("url")
                .value_name("url")
                .help("Override the data webhook URL (also RAHA_DATA_URL)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("chat-url")
                .long("chat-url")
                .value_name("url")
                .help("Override the chat webhook URL (also RAHA_CHAT_URL)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("interval")
                .long("interval")
                .value_name("secs")
                .help("Refresh interval for watch, in seconds (default 30)")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .help("Command (watch, list, chat, copy, tel) then its arguments")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let positional: Vec<String> = matches
        .get_many::<String>("positional")
        .map(|i| i.cloned().collect())
        .unwrap_or_default();
    let (command, command_args) = match positional.split_first() {
        Some((first, rest)) => (Some(first.clone()), rest.to_vec()),
        None => (None, vec![]),
    };

    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        no_color: matches.get_flag("no-color"),
        query: matches.get_one::<String>("query").cloned(),
        sort: matches.get_one::<String>("sort").cloned(),
        url: matches.get_one::<String>("url").cloned(),
        chat_url: matches.get_one::<String>("chat-url").cloned(),
        interval_secs: matches.get_one::<u64>("interval").copied(),
        command,
        command_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    emit_fallback_completion(shell);
}

fn emit_fallback_completion(shell: Shell) {
    let opts = "-h --help -v --verbose --no-color -q --query -s --sort --url --chat-url --interval --generate";
    let commands = "watch list chat copy tel";
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for raha
_raha() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{commands} {opts}" -- "$cur"))
}}
complete -F _raha raha
"#,
                commands = commands,
                opts = opts
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for raha
#compdef raha
local -a reply
reply=({commands} {opts})
_describe 'raha' reply
"#,
                commands = commands,
                opts = opts
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for raha
complete -c raha -l help -s h -d "Show help"
complete -c raha -l verbose -s v -d "Verbose logs"
complete -c raha -l no-color -d "Disable highlighting"
complete -c raha -l query -s q -d "Filter text" -r
complete -c raha -l sort -s s -d "Sort key" -r -a "name address row_number"
complete -c raha -l url -d "Data webhook URL" -r
complete -c raha -l chat-url -d "Chat webhook URL" -r
complete -c raha -l interval -d "Refresh interval (secs)" -r
complete -c raha -l generate -d "Generate completion script" -r -a "bash zsh fish"
complete -c raha -a "watch list chat copy tel"
"#
            );
        }
        _ => {}
    }
}

/// Config を RahaCommand に変換する
pub fn config_to_command(config: &Config) -> Result<RahaCommand, Error> {
    if config.help {
        return Ok(RahaCommand::Help);
    }

    match config.command.as_deref() {
        None | Some("watch") => Ok(RahaCommand::Watch),
        Some("list") => Ok(RahaCommand::List),
        Some("chat") => {
            let message = if config.command_args.is_empty() {
                None
            } else {
                Some(config.command_args.join(" "))
            };
            Ok(RahaCommand::Chat { message })
        }
        Some("copy") => Ok(RahaCommand::Copy {
            index: parse_index(&config.command_args)?,
        }),
        Some("tel") => Ok(RahaCommand::Tel {
            index: parse_index(&config.command_args)?,
        }),
        Some(other) => Err(Error::invalid_argument(format!(
            "unknown command: {}",
            other
        ))),
    }
}

/// copy / tel の 1 始まりインデックスを解析する
fn parse_index(args: &[String]) -> Result<usize, Error> {
    let raw = args
        .first()
        .ok_or_else(|| Error::invalid_argument("an index is required (1-based)"))?;
    let index: usize = raw
        .parse()
        .map_err(|_| Error::invalid_argument(format!("invalid index: {}", raw)))?;
    if index == 0 {
        return Err(Error::invalid_argument("index starts at 1"));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, Error> {
        let mut argv = vec!["raha".to_string()];
        argv.extend(args.iter().map(|s| s.to_string()));
        parse_args_from(&argv)
    }

    #[test]
    fn test_no_args_defaults_to_watch() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.command, None);
        assert_eq!(config_to_command(&config).unwrap(), RahaCommand::Watch);
    }

    #[test]
    fn test_help_flags() {
        assert!(parse(&["-h"]).unwrap().help);
        assert!(parse(&["--help"]).unwrap().help);
        let config = parse(&["-h", "list"]).unwrap();
        assert_eq!(config_to_command(&config).unwrap(), RahaCommand::Help);
    }

    #[test]
    fn test_unknown_option_is_usage_error() {
        let err = parse(&["--unknown"]).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_list_with_query_and_sort() {
        let config = parse(&["-q", "نجد", "--sort", "العنوان", "list"]).unwrap();
        assert_eq!(config.query.as_deref(), Some("نجد"));
        assert_eq!(config.sort.as_deref(), Some("العنوان"));
        assert_eq!(config_to_command(&config).unwrap(), RahaCommand::List);
    }

    #[test]
    fn test_chat_one_shot_joins_words() {
        let config = parse(&["chat", "أين", "استراحة", "النجد؟"]).unwrap();
        assert_eq!(
            config_to_command(&config).unwrap(),
            RahaCommand::Chat {
                message: Some("أين استراحة النجد؟".to_string())
            }
        );
    }

    #[test]
    fn test_chat_without_message_is_interactive() {
        let config = parse(&["chat"]).unwrap();
        assert_eq!(
            config_to_command(&config).unwrap(),
            RahaCommand::Chat { message: None }
        );
    }

    #[test]
    fn test_copy_parses_one_based_index() {
        let config = parse(&["copy", "3"]).unwrap();
        assert_eq!(
            config_to_command(&config).unwrap(),
            RahaCommand::Copy { index: 3 }
        );
    }

    #[test]
    fn test_copy_rejects_zero_and_garbage() {
        let zero = parse(&["copy", "0"]).unwrap();
        assert_eq!(config_to_command(&zero).unwrap_err().exit_code(), 64);
        let garbage = parse(&["tel", "abc"]).unwrap();
        assert_eq!(config_to_command(&garbage).unwrap_err().exit_code(), 64);
        let missing = parse(&["tel"]).unwrap();
        assert!(config_to_command(&missing).unwrap_err().is_usage());
    }

    #[test]
    fn test_unknown_command_rejected() {
        let config = parse(&["frobnicate"]).unwrap();
        let err = config_to_command(&config).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn test_interval_and_urls() {
        let config = parse(&[
            "--interval",
            "5",
            "--url",
            "http://localhost:1/d",
            "--chat-url",
            "http://localhost:1/c",
        ])
        .unwrap();
        assert_eq!(config.interval_secs, Some(5));
        assert_eq!(config.url.as_deref(), Some("http://localhost:1/d"));
        assert_eq!(config.chat_url.as_deref(), Some("http://localhost:1/c"));
    }

    #[test]
    fn test_interval_rejects_non_numeric() {
        let err = parse(&["--interval", "soon"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_no_color_flag() {
        assert!(parse(&["--no-color", "list"]).unwrap().no_color);
    }
}
