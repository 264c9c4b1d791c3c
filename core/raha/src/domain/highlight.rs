//! 検索語のハイライト分割
//!
//! 表示文字列を {通常 | 一致} のセグメント列に分割する。検索語は
//! 正規表現のメタ文字をエスケープした上でリテラルとして（大文字小文字を
//! 無視して）照合する。

use regex::RegexBuilder;

/// ハイライト済みセグメント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

/// 文字列を検索語の出現で分割する。検索語が空白のみなら全体を Plain 1 つで返す。
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.trim().is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    let re = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        // エスケープ済みリテラルは常にコンパイルできるが、保険として素通しにする
        Err(_) => return vec![Segment::Plain(text.to_string())],
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Plain(text[last..m.start()].to_string()));
        }
        segments.push(Segment::Match(m.as_str().to_string()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }
    if segments.is_empty() {
        segments.push(Segment::Plain(text.to_string()));
    }
    segments
}
