//! 照合戦略（明示的に注入される比較・正規化）
//!
//! プラットフォーム既定の文字列比較に頼らず、決定的な比較器を注入する。
//! 既定実装はダッシュボードの作業言語（アラビア語）向け:
//! 大文字小文字を無視し、数字の連続は数値として比較する（"2" が "10" より前）。
//! アラビア・インド数字（٠-٩ / ۰-۹）も数字として扱う。

use std::cmp::Ordering;

/// 比較・正規化の注入ポイント
pub trait Collator: Send + Sync {
    /// 照合キー（フィルタの部分一致にも使う正規化形）
    fn fold(&self, s: &str) -> String;

    /// 自然順比較（fold 済みとみなさず、内部で fold する）
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// 既定のアラビア語向け照合器
#[derive(Debug, Clone, Default)]
pub struct ArabicCollator;

impl Collator for ArabicCollator {
    fn fold(&self, s: &str) -> String {
        s.to_lowercase()
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        natural_cmp(&self.fold(a), &self.fold(b))
    }
}

/// 数字の連続を数値として比較する自然順比較
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if digit_value(x).is_some() && digit_value(y).is_some() {
                    let run_a = take_digit_run(&mut ca);
                    let run_b = take_digit_run(&mut cb);
                    match cmp_digit_runs(&run_a, &run_b) {
                        Ordering::Equal => continue,
                        other => return other,
                    }
                }
                if x != y {
                    return x.cmp(&y);
                }
                ca.next();
                cb.next();
            }
        }
    }
}

/// 10進の数字1文字分の値。ASCII に加えアラビア・インド数字も対応
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    match c {
        '\u{0660}'..='\u{0669}' => Some(c as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - 0x06F0),
        _ => None,
    }
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Vec<u32> {
    let mut run = Vec::new();
    while let Some(&c) = chars.peek() {
        match digit_value(c) {
            Some(d) => {
                run.push(d);
                chars.next();
            }
            None => break,
        }
    }
    run
}

/// 先頭ゼロを無視した桁数優先の比較（任意長なのでオーバーフローしない）
fn cmp_digit_runs(a: &[u32], b: &[u32]) -> Ordering {
    let sa = a.iter().position(|&d| d != 0).unwrap_or(a.len());
    let sb = b.iter().position(|&d| d != 0).unwrap_or(b.len());
    let ta = &a[sa..];
    let tb = &b[sb..];
    match ta.len().cmp(&tb.len()) {
        Ordering::Equal => ta.cmp(tb),
        other => other,
    }
}
