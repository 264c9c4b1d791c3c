//! OS クリップボードへの書き込みアダプタ
//!
//! 利用可能なクリップボードコマンド（pbcopy / wl-copy / xclip / xsel）を
//! 順に試し、stdin 経由でテキストを渡す。どれも使えない環境では
//! Error::Clipboard を返す（呼び出し側は通知に落とすだけで致命にしない）。

use crate::ports::outbound::Clipboard;
use common::error::Error;
use std::io::Write;
use std::process::{Command, Stdio};

/// クリップボードコマンドの候補（先勝ち）
const CANDIDATES: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// 外部コマンドに委譲する Clipboard 実装
#[derive(Debug, Clone, Default)]
pub struct OsClipboard;

impl Clipboard for OsClipboard {
    fn write_text(&self, text: &str) -> Result<(), Error> {
        let mut last_err = None;
        for (cmd, args) in CANDIDATES {
            match pipe_to(cmd, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err
            .unwrap_or_else(|| Error::clipboard("no clipboard command available".to_string())))
    }
}

fn pipe_to(cmd: &str, args: &[&str], text: &str) -> Result<(), Error> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::clipboard(format!("failed to spawn {}: {}", cmd, e)))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| Error::clipboard(format!("failed to write to {}: {}", cmd, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| Error::clipboard(format!("failed to wait for {}: {}", cmd, e)))?;
    if !status.success() {
        return Err(Error::clipboard(format!(
            "{} exited with status {}",
            cmd, status
        )));
    }
    Ok(())
}
